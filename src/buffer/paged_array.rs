//! Paged Array - an indexable integer array backed by files.
//!
//! The [`PagedArray`] provides:
//! - Array-style indexed reads and writes over a file of any size
//! - A bounded page cache (4 pages by default)
//! - Pluggable eviction (LRU by default)
//! - Dirty-page write-back to the sink on eviction and teardown

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::{debug, error, info};

use crate::buffer::replacer::{self, Replacer};
use crate::buffer::{CacheStats, Frame};
use crate::common::{Element, Error, FrameId, PageId, PagedArrayConfig, Result};
use crate::storage::page::Page;
use crate::storage::DiskManager;

/// An array of `i32`s that lives in a file and is paged through a small cache.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────────────┐
/// │                         PagedArray                           │
/// │  ┌──────────────┐  ┌────────────────────────────────────┐    │
/// │  │ page_table   │  │  frames: Vec<Frame> (capacity = 4) │    │
/// │  │PageId → Fid  │─▶│  [Frame0] [Frame1] [Frame2] [F3]   │    │
/// │  └──────────────┘  └────────────────────────────────────┘    │
/// │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐    │
/// │  │  free_list   │  │   replacer   │  │ source ─▶ sink   │    │
/// │  │ Vec<FrameId> │  │ LRU | FIFO   │  │  DiskManager × 2 │    │
/// │  └──────────────┘  └──────────────┘  └──────────────────┘    │
/// └──────────────────────────────────────────────────────────────┘
/// ```
///
/// # Where a page's current contents live
/// A page is first loaded from the read source. Once it has been written to
/// the sink (on eviction or flush), the sink holds its latest values and all
/// later loads read the sink. When source and sink are the same file the
/// array runs in place over one handle and every load reads that file.
///
/// # Partial final page
/// [`len`](Self::len) is the exact number of elements in the source. The
/// last page may be short; it is read and written at its true length, never
/// padded on disk. [`capacity`](Self::capacity) reports the padded
/// `page_count × page_size`.
///
/// # Teardown
/// [`close`](Self::close) writes every dirty page, copies every page the
/// sink has never seen, and reports errors. Dropping an array that was not
/// closed does the same on a best-effort basis and logs failures.
///
/// # Usage
/// ```no_run
/// use pagesort::PagedArray;
///
/// let mut array = PagedArray::open("input.bin", "output.bin", 1024)?;
/// let first = array.get(0)?;
/// array.set(0, first + 1)?;
/// array.close()?;
/// # Ok::<(), pagesort::Error>(())
/// ```
pub struct PagedArray {
    /// Fixed pool of frames allocated at construction.
    frames: Vec<Frame>,

    /// Maps resident page IDs to frame IDs.
    page_table: HashMap<PageId, FrameId>,

    /// Frames not holding a page.
    free_list: Vec<FrameId>,

    /// Eviction policy for selecting victim frames.
    replacer: Box<dyn Replacer>,

    /// Read source. `None` when running in place over `sink`.
    source: Option<DiskManager>,

    /// Write sink.
    sink: DiskManager,

    /// Pages whose latest contents have been written to the sink.
    written: HashSet<PageId>,

    config: PagedArrayConfig,

    /// Exact element count.
    len: usize,

    page_count: usize,

    stats: CacheStats,

    /// Set by `close()` so `Drop` does not flush twice.
    closed: bool,
}

impl PagedArray {
    /// Open `source` for reading and create `sink` for writing, with the
    /// default cache capacity and policy.
    ///
    /// # Errors
    /// - I/O errors if either file cannot be opened
    /// - `Error::MisalignedFile` if the source is not a whole number of elements
    /// - `Error::InvalidConfig` if `page_size` is 0
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(
        source: P,
        sink: Q,
        page_size: usize,
    ) -> Result<Self> {
        let config = PagedArrayConfig::default().with_page_size(page_size);
        Self::with_config(source, sink, config)
    }

    /// Open with an explicit configuration.
    ///
    /// If `source` and `sink` name the same file the array runs in place and
    /// the file is not truncated.
    pub fn with_config<P: AsRef<Path>, Q: AsRef<Path>>(
        source: P,
        sink: Q,
        config: PagedArrayConfig,
    ) -> Result<Self> {
        config.validate()?;
        let (source, sink) = (source.as_ref(), sink.as_ref());

        if same_file(source, sink)? {
            return Self::open_in_place(source, config);
        }

        let source_dm = DiskManager::open_source(source)?;
        let sink_dm = DiskManager::create_sink(sink)?;
        info!(
            source = %source.display(),
            sink = %sink.display(),
            elements = source_dm.element_count(),
            page_size = config.page_size,
            page_bytes = config.page_bytes(),
            "opened paged array"
        );

        Ok(Self::build(Some(source_dm), sink_dm, config))
    }

    /// Sort-in-place mode: one file is both read source and write sink.
    pub fn open_in_place<P: AsRef<Path>>(path: P, config: PagedArrayConfig) -> Result<Self> {
        config.validate()?;
        let dm = DiskManager::open_in_place(path.as_ref())?;
        info!(
            path = %path.as_ref().display(),
            elements = dm.element_count(),
            page_size = config.page_size,
            page_bytes = config.page_bytes(),
            "opened paged array in place"
        );

        Ok(Self::build(None, dm, config))
    }

    fn build(source: Option<DiskManager>, sink: DiskManager, config: PagedArrayConfig) -> Self {
        let len = source.as_ref().unwrap_or(&sink).element_count() as usize;
        let page_count = len.div_ceil(config.page_size);

        let frames = (0..config.cache_capacity)
            .map(|_| Frame::new(config.page_size))
            .collect();

        // Popped from the back, so frame 0 is handed out first.
        let free_list = (0..config.cache_capacity).rev().map(FrameId::new).collect();

        Self {
            frames,
            page_table: HashMap::with_capacity(config.cache_capacity),
            free_list,
            replacer: replacer::for_policy(config.policy),
            source,
            sink,
            written: HashSet::new(),
            config,
            len,
            page_count,
            stats: CacheStats::default(),
            closed: false,
        }
    }

    // ========================================================================
    // Public API: Element access
    // ========================================================================

    /// Read the element at `index`.
    ///
    /// # Errors
    /// - `Error::IndexOutOfBounds` if `index >= len()`
    /// - I/O errors from loading the page or evicting another
    pub fn get(&mut self, index: usize) -> Result<Element> {
        let (frame_id, offset) = self.locate(index)?;
        Ok(self.frames[frame_id.0].page().as_slice()[offset])
    }

    /// Overwrite the element at `index`.
    pub fn set(&mut self, index: usize, value: Element) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Mutable handle to the element at `index`.
    ///
    /// The page is marked dirty up front; writes through the handle stay in
    /// memory until the page is evicted or flushed.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Element> {
        let (frame_id, offset) = self.locate(index)?;
        let frame = &mut self.frames[frame_id.0];
        frame.mark_dirty();
        Ok(&mut frame.page_mut().as_mut_slice()[offset])
    }

    /// Exchange the elements at `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        if a == b {
            // Still a touch, and still bounds-checked.
            self.get(a)?;
            return Ok(());
        }
        let x = self.get(a)?;
        let y = self.get(b)?;
        self.set(a, y)?;
        self.set(b, x)
    }

    // ========================================================================
    // Public API: Flush and teardown
    // ========================================================================

    /// Make the sink hold the full current array.
    ///
    /// Writes every dirty resident page, then copies from the source every
    /// page the sink has never received, then syncs the sink. Pages stay
    /// resident.
    pub fn flush_all(&mut self) -> Result<()> {
        let resident: Vec<(PageId, FrameId)> =
            self.page_table.iter().map(|(&pid, &fid)| (pid, fid)).collect();

        for (page_id, frame_id) in resident {
            if self.frames[frame_id.0].is_dirty() || !self.in_sink(page_id) {
                self.write_frame(frame_id, page_id)?;
            }
        }

        self.copy_unwritten_pages()?;
        self.sink.sync()?;
        Ok(())
    }

    /// Flush everything and release the files.
    ///
    /// Prefer this over letting the array drop: errors are only reported here.
    pub fn close(mut self) -> Result<()> {
        let result = self.flush_all();
        self.closed = true;
        info!(stats = %self.stats, ok = result.is_ok(), "closed paged array");
        result
    }

    // ========================================================================
    // Public API: Info
    // ========================================================================

    /// Number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Logical capacity: `page_count × page_size`.
    ///
    /// Exceeds [`len`](Self::len) when the final page is partial.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.page_count * self.config.page_size
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Maximum number of resident pages.
    #[inline]
    pub fn cache_capacity(&self) -> usize {
        self.frames.len()
    }

    /// Whether source and sink are the same file.
    #[inline]
    pub fn is_in_place(&self) -> bool {
        self.source.is_none()
    }

    /// Resident pages, least recently touched (next victim) first.
    pub fn resident_pages(&self) -> Vec<PageId> {
        self.replacer
            .eviction_order()
            .into_iter()
            .filter_map(|frame_id| self.frames[frame_id.0].page_id())
            .collect()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    // ========================================================================
    // Internal: Core fetch logic
    // ========================================================================

    /// Bounds-check `index` and make its page resident.
    fn locate(&mut self, index: usize) -> Result<(FrameId, usize)> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        let page_size = self.config.page_size;
        let frame_id = self.fetch_page(PageId::containing(index, page_size))?;
        Ok((frame_id, index % page_size))
    }

    /// Bring `page_id` into a frame and mark it most recently touched.
    fn fetch_page(&mut self, page_id: PageId) -> Result<FrameId> {
        if let Some(&frame_id) = self.page_table.get(&page_id) {
            self.stats.hits += 1;
            self.replacer.record_access(frame_id);
            return Ok(frame_id);
        }

        self.stats.misses += 1;
        let frame_id = self.get_free_frame()?;

        if let Err(e) = self.load_page(page_id, frame_id) {
            self.frames[frame_id.0].reset();
            self.free_list.push(frame_id);
            return Err(e);
        }

        self.page_table.insert(page_id, frame_id);
        self.replacer.record_access(frame_id);
        Ok(frame_id)
    }

    /// Read `page_id` into `frame_id` from wherever its latest copy lives.
    fn load_page(&mut self, page_id: PageId, frame_id: FrameId) -> Result<()> {
        let page_size = self.config.page_size;
        let elements = page_len(self.len, page_size, page_id);
        let from_sink = self.in_sink(page_id);

        let frame = &mut self.frames[frame_id.0];
        frame.page_mut().resize(elements);

        let disk = match self.source.as_mut() {
            Some(source) if !from_sink => source,
            _ => &mut self.sink,
        };
        disk.read_page(page_id, page_size, frame.page_mut())?;

        frame.set_page_id(Some(page_id));
        frame.clear_dirty();
        self.stats.pages_read += 1;
        Ok(())
    }

    // ========================================================================
    // Internal: Frame allocation and eviction
    // ========================================================================

    /// Get a free frame, evicting if necessary.
    fn get_free_frame(&mut self) -> Result<FrameId> {
        if let Some(frame_id) = self.free_list.pop() {
            return Ok(frame_id);
        }
        self.evict_page()
    }

    /// Evict the replacer's victim, writing it back if dirty.
    fn evict_page(&mut self) -> Result<FrameId> {
        let frame_id = self.replacer.evict().ok_or(Error::NoFreeFrames)?;

        if let Some(page_id) = self.frames[frame_id.0].page_id() {
            if self.frames[frame_id.0].is_dirty() {
                if let Err(e) = self.write_frame(frame_id, page_id) {
                    // Still resident, and still the next victim.
                    self.replacer.restore(frame_id);
                    return Err(e);
                }
            }
            self.page_table.remove(&page_id);
            debug!(%page_id, %frame_id, "evicted page");
        }

        self.frames[frame_id.0].reset();
        self.stats.evictions += 1;
        Ok(frame_id)
    }

    /// Write a frame's page to the sink and record that the sink has it.
    fn write_frame(&mut self, frame_id: FrameId, page_id: PageId) -> Result<()> {
        let frame = &mut self.frames[frame_id.0];
        self.sink.write_page(page_id, self.config.page_size, frame.page())?;
        frame.clear_dirty();

        self.written.insert(page_id);
        self.stats.pages_written += 1;
        debug!(%page_id, %frame_id, "wrote back page");
        Ok(())
    }

    /// Copy source pages the sink has never received.
    ///
    /// Only meaningful with a separate source; resident pages must already
    /// have been written.
    fn copy_unwritten_pages(&mut self) -> Result<()> {
        let source = match self.source.as_mut() {
            Some(source) => source,
            None => return Ok(()),
        };

        let page_size = self.config.page_size;
        let mut scratch = Page::new(page_size);
        for page_id in (0..self.page_count).map(PageId::new) {
            if self.written.contains(&page_id) {
                continue;
            }
            scratch.resize(page_len(self.len, page_size, page_id));
            source.read_page(page_id, page_size, &mut scratch)?;
            self.sink.write_page(page_id, page_size, &scratch)?;

            self.written.insert(page_id);
            self.stats.pages_read += 1;
            self.stats.pages_written += 1;
        }
        Ok(())
    }

    #[inline]
    fn in_sink(&self, page_id: PageId) -> bool {
        self.source.is_none() || self.written.contains(&page_id)
    }
}

impl Drop for PagedArray {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.flush_all() {
            error!(error = %e, "failed to flush paged array on drop");
        }
    }
}

/// Elements actually present in `page_id` for an array of `len` elements.
#[inline]
fn page_len(len: usize, page_size: usize, page_id: PageId) -> usize {
    len.saturating_sub(page_id.first_element(page_size)).min(page_size)
}

/// Whether two paths name the same existing file.
fn same_file(a: &Path, b: &Path) -> Result<bool> {
    if !b.exists() {
        return Ok(false);
    }
    Ok(std::fs::canonicalize(a)? == std::fs::canonicalize(b)?)
}
