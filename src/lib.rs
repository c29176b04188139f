//! pagesort - out-of-core sorting over a paged integer array.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           pagesort                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │               Binaries (src/bin/)                        │   │
//! │  │     generate: random input   sort: select + time         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │               Sort Layer (sort/)                         │   │
//! │  │   quicksort | insertion_sort | bubble_sort               │   │
//! │  │        over any ElementStore (get / set / swap)          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │               Paged Array (buffer/)                      │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │     Eviction Policies: LRU (default) | FIFO     │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │     PagedArray + Frame + CacheStats (4 resident pages)   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │               Storage Layer (storage/)                   │   │
//! │  │   DiskManager (source / sink / in place) + Page          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`buffer`] - The paged array, its page cache and eviction policies
//! - [`storage`] - Raw integer file I/O and pages
//! - [`sort`] - Sorting algorithms over indexed stores
//! - [`generator`] - Random input files
//!
//! # Quick Start
//! ```no_run
//! use pagesort::{Algorithm, PagedArray};
//!
//! let mut array = PagedArray::open("input.bin", "output.bin", 1024)?;
//! Algorithm::QuickSort.run(&mut array)?;
//! println!("{}", array.stats());
//! array.close()?;
//! # Ok::<(), pagesort::Error>(())
//! ```

pub mod buffer;
pub mod common;
pub mod generator;
pub mod sort;
pub mod storage;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_CACHE_CAPACITY, DEFAULT_PAGE_SIZE};
pub use common::{
    Element, Error, EvictionPolicy, FrameId, PageId, PagedArrayConfig, Result, ELEMENT_SIZE,
};

pub use buffer::{CacheStats, PagedArray, SharedPagedArray};
pub use generator::SizeClass;
pub use sort::{Algorithm, ElementStore};
pub use storage::page::Page;
pub use storage::DiskManager;
