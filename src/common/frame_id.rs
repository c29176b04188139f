//! Cache slot identifier.

use std::fmt;

/// One of the `cache_capacity` slots a [`PagedArray`](crate::PagedArray)
/// allocates up front (4 by default), each holding at most one resident page.
///
/// Ids run `0..cache_capacity` and index straight into the frame pool. A
/// slot keeps its id for the array's lifetime while the page it holds
/// changes on every eviction; the page table maps `PageId → FrameId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub usize);

impl FrameId {
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
