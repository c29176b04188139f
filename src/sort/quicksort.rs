//! Quicksort with Hoare partitioning.

use super::ElementStore;
use crate::common::Result;

/// Sort `store` ascending with in-place quicksort.
///
/// Middle element as pivot, Hoare-style crossing pointers. Partitions are
/// kept on an explicit stack: the larger side is pushed and the smaller is
/// processed next, so at most O(log n) ranges are pending however skewed
/// the splits are.
pub fn quicksort<S: ElementStore + ?Sized>(store: &mut S) -> Result<()> {
    let n = store.len();
    if n < 2 {
        return Ok(());
    }

    let mut pending: Vec<(usize, usize)> = vec![(0, n - 1)];
    while let Some((mut low, mut high)) = pending.pop() {
        while low < high {
            let (left_end, right_start) = partition(store, low, high)?;

            // Sides with fewer than two elements are already in place.
            let left = (left_end > low + 1).then(|| (low, left_end - 1));
            let right = (right_start < high).then_some((right_start, high));

            let (smaller, larger) = if span(left) < span(right) {
                (left, right)
            } else {
                (right, left)
            };
            if let Some(range) = larger {
                pending.push(range);
            }
            match smaller {
                Some((l, h)) => {
                    low = l;
                    high = h;
                }
                None => break,
            }
        }
    }
    Ok(())
}

#[inline]
fn span(range: Option<(usize, usize)>) -> usize {
    range.map_or(0, |(low, high)| high - low + 1)
}

/// Hoare partition of `[low, high]` around the middle element.
///
/// Returns `(left_end, right_start)` once the pointers cross: everything in
/// `[low, left_end)` is `<= pivot` and everything in `[right_start, high]`
/// is `>= pivot`. Both sides are strictly smaller than the input range.
fn partition<S: ElementStore + ?Sized>(
    store: &mut S,
    low: usize,
    high: usize,
) -> Result<(usize, usize)> {
    let pivot = store.get(low + (high - low) / 2)?;
    let mut i = low;
    // Exclusive upper pointer: the element under scrutiny is `j - 1`.
    let mut j = high + 1;

    while i < j {
        while store.get(i)? < pivot {
            i += 1;
        }
        while store.get(j - 1)? > pivot {
            j -= 1;
        }
        if i < j {
            store.swap(i, j - 1)?;
            i += 1;
            j -= 1;
        }
    }

    Ok((j, i))
}
