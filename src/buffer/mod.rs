//! Paged array and page cache management.
//!
//! The paged array is an in-memory cache over a file of integers. It keeps
//! a fixed pool of frames, each holding one page.
//!
//! # Components
//! - [`PagedArray`] - Indexable array over a read source and write sink
//! - [`Frame`] - A cache slot holding a page + metadata
//! - [`SharedPagedArray`] - Single-lock handle for use across threads
//! - [`CacheStats`] - Hit, fault and write-back counters
//! - [`replacer`] - Eviction policy implementations

mod frame;
mod paged_array;
pub mod replacer;
mod shared;
mod stats;

pub use frame::Frame;
pub use paged_array::PagedArray;
pub use shared::SharedPagedArray;
pub use stats::CacheStats;
