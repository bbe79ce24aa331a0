//! Stable, non-mutating row ordering.
//!
//! Each row's sort key is extracted once and rows are ordered by position
//! with a bottom-up merge sort. The input position is the final tie-break,
//! so rows with equal keys keep their input order in both directions.
//! Mixed-type columns can make comparisons inconsistent (a date string, an
//! unparseable string and a timestamp may form a cycle); the merge sort
//! still terminates with every row present exactly once.

use std::cmp::Ordering;

use ledger_model::Value;

use crate::compare::{CompareOptions, SortKey};
use crate::{Column, Direction};

/// Returns the positions of `rows` in sorted order.
///
/// The input slice is not touched; an empty slice yields an empty vector.
pub fn sort_indices_by<T, F>(
    rows: &[T],
    direction: Direction,
    options: &CompareOptions,
    key: F,
) -> Vec<usize>
where
    F: Fn(&T) -> Value,
{
    let keys: Vec<SortKey> = rows
        .iter()
        .map(|row| SortKey::new(&key(row), options))
        .collect();

    let order = merge_sort_by((0..keys.len()).collect(), |a, b| {
        keys[a]
            .compare(&keys[b], direction)
            .then_with(|| a.cmp(&b))
    });

    log::trace!("sorted {} rows {}", order.len(), direction);
    order
}

/// Bottom-up merge sort of positions, taking from the left run on ties.
fn merge_sort_by<F>(positions: Vec<usize>, mut compare: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    let len = positions.len();
    let mut src = positions;
    let mut dst = vec![0; len];

    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);
            for slot in &mut dst[start..end] {
                let take_left = left < mid
                    && (right >= end || compare(src[left], src[right]) != Ordering::Greater);
                if take_left {
                    *slot = src[left];
                    left += 1;
                } else {
                    *slot = src[right];
                    right += 1;
                }
            }
            start = end;
        }
        std::mem::swap(&mut src, &mut dst);
        width *= 2;
    }
    src
}

/// Returns references to `rows` in sorted order by `key`.
pub fn sort_by<'a, T, F>(rows: &'a [T], direction: Direction, key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> Value,
{
    sort_indices_by(rows, direction, &CompareOptions::default(), key)
        .into_iter()
        .map(|index| &rows[index])
        .collect()
}

/// Returns references to `rows` in sorted order by `column`.
///
/// # Example
///
/// ```
/// use ledger_model::Record;
/// use ledger_table::{Column, Direction, sort::sort};
///
/// let rows = vec![
///     Record::new().set("id", 1).set("v", 5),
///     Record::new().set("id", 2).set("v", 5),
///     Record::new().set("id", 3).set("v", 1),
/// ];
/// let ids: Vec<_> = sort(&rows, Direction::Ascending, &Column::field("v", "V"))
///     .iter()
///     .map(|r| r.value("id").to_string())
///     .collect();
/// assert_eq!(ids, ["3", "1", "2"]);
/// ```
pub fn sort<'a, T>(rows: &'a [T], direction: Direction, column: &Column<T>) -> Vec<&'a T> {
    sort_by(rows, direction, |row| column.value(row))
}
