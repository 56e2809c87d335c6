use tracing::trace;

use crate::empty::IsEmpty;

/// Copies the non-empty elements of `items`, preserving order.
///
/// ```
/// assert_eq!(emptykit::compact(&[0, 1, 0, 2, 0, 3]), vec![1, 2, 3]);
/// assert!(emptykit::compact(&["", "", ""]).is_empty());
/// ```
pub fn compact<T: IsEmpty + Clone>(items: &[T]) -> Vec<T> {
    let kept: Vec<T> = items.iter().filter(|item| !T::is_empty(item)).cloned().collect();
    log_summary(items.len(), kept.len());
    kept
}

/// In-place variant of [`compact`] for owned input.
pub fn compact_owned<T: IsEmpty>(mut items: Vec<T>) -> Vec<T> {
    let before = items.len();
    items.retain(|item| !T::is_empty(item));
    log_summary(before, items.len());
    items
}

fn log_summary(before: usize, after: usize) {
    trace!(
        target: "emptykit::seq",
        before,
        after,
        dropped = before - after,
        "Compacted sequence"
    );
}
