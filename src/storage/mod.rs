//! Storage layer - raw integer files and pages.
//!
//! - [`DiskManager`] - Page-granular I/O on one backing file
//! - [`page`] - The in-memory page buffer

mod disk_manager;
pub mod page;

pub use disk_manager::{read_elements, write_elements, DiskManager};
