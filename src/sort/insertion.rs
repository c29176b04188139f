//! Insertion sort.

use super::ElementStore;
use crate::common::Result;

/// Sort `store` ascending by shifting each element left into place.
///
/// Stable. O(n²) worst case, O(n) on nearly sorted input, and it only ever
/// touches a sliding window of neighbouring elements, which keeps page
/// faults low.
pub fn insertion_sort<S: ElementStore + ?Sized>(store: &mut S) -> Result<()> {
    let n = store.len();
    for i in 1..n {
        let key = store.get(i)?;
        let mut j = i;
        while j > 0 {
            let prev = store.get(j - 1)?;
            if prev <= key {
                break;
            }
            store.set(j, prev)?;
            j -= 1;
        }
        if j != i {
            store.set(j, key)?;
        }
    }
    Ok(())
}
