//! Page types.

#[allow(clippy::module_inception)]
mod page;

pub use page::Page;
