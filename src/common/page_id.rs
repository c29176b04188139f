//! Page identifier type.

use std::fmt;

/// Identifies a page of the logical array: `element_index / page_size`.
///
/// # Example
/// ```
/// use pagesort::PageId;
///
/// let page_id = PageId::containing(2500, 1024);
/// assert_eq!(page_id, PageId::new(2));
/// assert_eq!(page_id.byte_offset(1024), 2 * 4096);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub usize);

impl PageId {
    #[inline]
    pub fn new(id: usize) -> Self {
        PageId(id)
    }

    /// Page holding the element at logical `index`.
    #[inline]
    pub fn containing(index: usize, page_size: usize) -> Self {
        PageId(index / page_size)
    }

    /// First logical element index of this page.
    #[inline]
    pub fn first_element(&self, page_size: usize) -> usize {
        self.0 * page_size
    }

    /// File offset of this page's first byte.
    #[inline]
    pub fn byte_offset(&self, page_size: usize) -> u64 {
        (self.first_element(page_size) as u64) * (super::config::ELEMENT_SIZE as u64)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
