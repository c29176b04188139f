//! Common types and utilities shared across pagesort.
//!
//! - Configuration constants and [`PagedArrayConfig`](config::PagedArrayConfig)
//! - Error types
//! - Identifiers (PageId, FrameId)

pub mod config;
pub mod error;
mod frame_id;
mod page_id;

pub use config::{Element, EvictionPolicy, PagedArrayConfig, ELEMENT_SIZE};
pub use error::{Error, Result};
pub use frame_id::FrameId;
pub use page_id::PageId;
