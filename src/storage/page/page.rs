//! Page - the unit of transfer between a backing file and the cache.
//!
//! A [`Page`] holds up to `page_size` elements. Every page of an array is
//! full except possibly the last one, which only covers the elements that
//! actually exist in the file.

use crate::common::{Element, ELEMENT_SIZE};

/// A resident block of elements.
///
/// The buffer is allocated once per frame at `page_size` capacity and reused
/// across loads; [`Page::resize`] only adjusts the valid length.
///
/// # Example
/// ```
/// use pagesort::storage::page::Page;
///
/// let mut page = Page::new(4);
/// page.as_mut_slice()[0] = 7;
/// assert_eq!(page.as_slice(), &[7, 0, 0, 0]);
///
/// page.resize(2);
/// assert_eq!(page.len(), 2);
/// ```
#[derive(Debug)]
pub struct Page {
    data: Vec<Element>,
}

impl Page {
    /// Create a zeroed page holding `len` elements.
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![0; len],
        }
    }

    /// Build a page from existing contents.
    pub fn from_vec(data: Vec<Element>) -> Self {
        Self { data }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Element] {
        &mut self.data
    }

    /// Number of valid elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Set the valid length, zero-filling any growth.
    pub fn resize(&mut self, len: usize) {
        self.data.resize(len, 0);
    }

    /// Encode into `buf` as native-endian bytes, replacing its contents.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        buf.clear();
        buf.reserve(self.data.len() * ELEMENT_SIZE);
        for value in &self.data {
            buf.extend_from_slice(&value.to_ne_bytes());
        }
    }

    /// Decode native-endian bytes into this page.
    ///
    /// `bytes` must hold exactly `len() * ELEMENT_SIZE` bytes.
    pub fn decode_from(&mut self, bytes: &[u8]) {
        debug_assert_eq!(bytes.len(), self.data.len() * ELEMENT_SIZE);
        for (slot, chunk) in self.data.iter_mut().zip(bytes.chunks_exact(ELEMENT_SIZE)) {
            *slot = Element::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
    }
}
