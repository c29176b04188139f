//! Frame - a slot in a paged array's cache.
//!
//! A [`Frame`] holds a [`Page`] plus the metadata needed for write-back:
//! - Which page is loaded (if any)
//! - Dirty flag

use crate::common::PageId;
use crate::storage::page::Page;

/// A cache slot. The array allocates `cache_capacity` of these up front and
/// reuses their page buffers for every load.
#[derive(Debug)]
pub struct Frame {
    page: Page,

    /// Which page is currently loaded, or None if the frame is free.
    page_id: Option<PageId>,

    /// Whether the page has been modified since it was loaded or last written.
    is_dirty: bool,
}

impl Frame {
    /// Create an empty frame with room for `page_size` elements.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: Page::new(page_size),
            page_id: None,
            is_dirty: false,
        }
    }

    #[inline]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[inline]
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    #[inline]
    pub fn page_id(&self) -> Option<PageId> {
        self.page_id
    }

    #[inline]
    pub fn set_page_id(&mut self, page_id: Option<PageId>) {
        self.page_id = page_id;
    }

    #[inline]
    pub fn mark_dirty(&mut self) {
        self.is_dirty = true;
    }

    #[inline]
    pub fn clear_dirty(&mut self) {
        self.is_dirty = false;
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Return the frame to its empty state. The page buffer is kept.
    pub fn reset(&mut self) {
        self.page_id = None;
        self.is_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_new() {
        let frame = Frame::new(16);
        assert_eq!(frame.page().len(), 16);
        assert!(frame.page_id().is_none());
        assert!(!frame.is_dirty());
    }

    #[test]
    fn test_frame_dirty_flag() {
        let mut frame = Frame::new(4);
        frame.mark_dirty();
        assert!(frame.is_dirty());
        frame.clear_dirty();
        assert!(!frame.is_dirty());
    }

    #[test]
    fn test_frame_reset() {
        let mut frame = Frame::new(4);
        frame.set_page_id(Some(PageId::new(3)));
        frame.mark_dirty();
        frame.page_mut().as_mut_slice()[0] = 11;

        frame.reset();
        assert!(frame.page_id().is_none());
        assert!(!frame.is_dirty());
        assert_eq!(frame.page().len(), 4);
    }
}
