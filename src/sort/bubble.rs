//! Bubble sort.

use super::ElementStore;
use crate::common::Result;

/// Sort `store` ascending with full adjacent-swap passes.
///
/// Always O(n²) comparisons: there is no early exit on a pass without
/// swaps. Each pass sweeps the whole unsorted prefix, so with more pages
/// than cache slots it faults on nearly every page every pass.
pub fn bubble_sort<S: ElementStore + ?Sized>(store: &mut S) -> Result<()> {
    let n = store.len();
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - pass - 1 {
            let a = store.get(j)?;
            let b = store.get(j + 1)?;
            if a > b {
                store.set(j, b)?;
                store.set(j + 1, a)?;
            }
        }
    }
    Ok(())
}
