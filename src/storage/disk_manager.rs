//! Disk Manager - page-granular I/O on a raw integer file.
//!
//! The [`DiskManager`] handles all direct file operations for one backing
//! file of a paged array:
//! - Opening the read source, the write sink, or a single in-place file
//! - Reading and writing pages at their byte offsets
//! - Deriving the element count from the file length

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::trace;

use crate::common::{Element, Error, PageId, Result, ELEMENT_SIZE};
use crate::storage::page::Page;

/// Manages I/O for a single headerless file of native-endian `i32`s.
///
/// # File Layout
/// ```text
/// ┌───────────────┬───────────────┬─────┬──────────────┐
/// │    Page 0     │    Page 1     │ ... │  Page N-1    │
/// │ page_size × 4 │ page_size × 4 │     │ (may be short)│
/// └───────────────┴───────────────┴─────┴──────────────┘
/// Offset: 0    page_size×4    2×page_size×4
/// ```
///
/// Page N starts at byte `N × page_size × 4`. The page size is owned by the
/// caller; the file itself carries no header.
pub struct DiskManager {
    file: File,
    /// Elements present in the file when it was opened.
    element_count: u64,
    /// Scratch buffer for byte conversion, reused across calls.
    buf: Vec<u8>,
}

impl DiskManager {
    /// Open an existing file as a read-only source.
    ///
    /// # Errors
    /// - I/O errors if the file cannot be opened
    /// - `Error::MisalignedFile` if its length is not a whole number of elements
    pub fn open_source<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().read(true).open(path)?;
        Self::from_file(file)
    }

    /// Create (or truncate) a write sink.
    pub fn create_sink<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            file,
            element_count: 0,
            buf: Vec::new(),
        })
    }

    /// Open an existing file for reading and writing without truncating it.
    ///
    /// Used when source and sink are the same file.
    pub fn open_in_place<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        Self::from_file(file)
    }

    fn from_file(file: File) -> Result<Self> {
        let len = file.metadata()?.len();
        if len % ELEMENT_SIZE as u64 != 0 {
            return Err(Error::MisalignedFile { len });
        }

        Ok(Self {
            file,
            element_count: len / ELEMENT_SIZE as u64,
            buf: Vec::new(),
        })
    }

    /// Fill `page` with the elements of `page_id`.
    ///
    /// Reads exactly `page.len()` elements; the caller sizes the page to the
    /// elements that exist, so the final partial page is an ordinary short
    /// page rather than a failed read.
    ///
    /// # Errors
    /// `UnexpectedEof` if the file holds fewer bytes than requested.
    pub fn read_page(&mut self, page_id: PageId, page_size: usize, page: &mut Page) -> Result<()> {
        let offset = page_id.byte_offset(page_size);
        self.file.seek(SeekFrom::Start(offset))?;

        self.buf.resize(page.len() * ELEMENT_SIZE, 0);
        self.file.read_exact(&mut self.buf)?;
        page.decode_from(&self.buf);

        trace!(%page_id, offset, elements = page.len(), "read page");
        Ok(())
    }

    /// Write `page` at the offset of `page_id`.
    pub fn write_page(&mut self, page_id: PageId, page_size: usize, page: &Page) -> Result<()> {
        let offset = page_id.byte_offset(page_size);
        self.file.seek(SeekFrom::Start(offset))?;

        page.encode_into(&mut self.buf);
        self.file.write_all(&self.buf)?;

        trace!(%page_id, offset, elements = page.len(), "wrote page");
        Ok(())
    }

    /// Read every element of the file.
    pub fn read_all(&mut self) -> Result<Vec<Element>> {
        self.file.seek(SeekFrom::Start(0))?;
        let mut bytes = Vec::new();
        self.file.read_to_end(&mut bytes)?;
        if bytes.len() % ELEMENT_SIZE != 0 {
            return Err(Error::MisalignedFile {
                len: bytes.len() as u64,
            });
        }

        let mut page = Page::new(bytes.len() / ELEMENT_SIZE);
        page.decode_from(&bytes);
        Ok(page.as_slice().to_vec())
    }

    /// Flush file contents to the device.
    pub fn sync(&mut self) -> Result<()> {
        self.file.flush()?;
        self.file.sync_all()?;
        Ok(())
    }

    /// Number of elements present when the file was opened.
    #[inline]
    pub fn element_count(&self) -> u64 {
        self.element_count
    }
}

/// Write `values` to `path` as a raw element file, replacing it.
pub fn write_elements<P: AsRef<Path>>(path: P, values: &[Element]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for value in values {
        out.write_all(&value.to_ne_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Read every element of a raw element file.
pub fn read_elements<P: AsRef<Path>>(path: P) -> Result<Vec<Element>> {
    DiskManager::open_source(path)?.read_all()
}
