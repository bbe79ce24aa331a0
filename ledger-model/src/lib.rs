//! Row model for ledger console tables
//!
//! Dynamic records as returned by the console's REST endpoints, and the
//! [`Value`] type that table columns extract from any row.

pub mod error;
mod money;
mod record;
mod value;

pub use error::FieldError;
pub use money::*;
pub use record::*;
pub use value::*;
