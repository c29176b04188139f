//! Configuration constants and the [`PagedArrayConfig`] builder.

use crate::common::{Error, Result};

/// Element type stored in the backing files.
pub type Element = i32;

/// Width of one element on disk in bytes.
///
/// Files are raw, headerless sequences of native-endian `i32`s, so the
/// element count of a file is simply `len / ELEMENT_SIZE`.
pub const ELEMENT_SIZE: usize = std::mem::size_of::<Element>();

/// Default page size in elements (4KB pages).
pub const DEFAULT_PAGE_SIZE: usize = 1024;

/// Default number of pages resident at once.
pub const DEFAULT_CACHE_CAPACITY: usize = 4;

/// Which replacer picks the eviction victim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvictionPolicy {
    /// Least recently touched page goes first. Every access promotes.
    #[default]
    Lru,
    /// Oldest loaded page goes first. Re-accessing does not reorder.
    Fifo,
}

impl std::str::FromStr for EvictionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lru" => Ok(EvictionPolicy::Lru),
            "fifo" => Ok(EvictionPolicy::Fifo),
            other => Err(Error::InvalidArgument(format!(
                "unknown eviction policy '{}' (expected lru or fifo)",
                other
            ))),
        }
    }
}

/// Tunables for a [`PagedArray`](crate::buffer::PagedArray).
///
/// # Example
/// ```
/// use pagesort::common::config::{EvictionPolicy, PagedArrayConfig};
///
/// let config = PagedArrayConfig::default()
///     .with_page_size(256)
///     .with_policy(EvictionPolicy::Fifo);
/// assert_eq!(config.page_size, 256);
/// assert_eq!(config.cache_capacity, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagedArrayConfig {
    /// Elements per page. Constant for the array's lifetime.
    pub page_size: usize,
    /// Maximum number of resident pages.
    pub cache_capacity: usize,
    /// Eviction policy.
    pub policy: EvictionPolicy,
}

impl PagedArrayConfig {
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_cache_capacity(mut self, cache_capacity: usize) -> Self {
        self.cache_capacity = cache_capacity;
        self
    }

    pub fn with_policy(mut self, policy: EvictionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Reject configurations the array cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidConfig("page size must be > 0".into()));
        }
        if self.cache_capacity == 0 {
            return Err(Error::InvalidConfig("cache capacity must be > 0".into()));
        }
        Ok(())
    }

    /// Bytes occupied by one full page on disk.
    #[inline]
    pub fn page_bytes(&self) -> u64 {
        (self.page_size * ELEMENT_SIZE) as u64
    }
}

impl Default for PagedArrayConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            policy: EvictionPolicy::Lru,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_size() {
        assert_eq!(ELEMENT_SIZE, 4);
    }

    #[test]
    fn test_default_config() {
        let config = PagedArrayConfig::default();
        assert_eq!(config.page_size, 1024);
        assert_eq!(config.cache_capacity, 4);
        assert_eq!(config.policy, EvictionPolicy::Lru);
        assert_eq!(config.page_bytes(), 4096);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        let config = PagedArrayConfig::default().with_page_size(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = PagedArrayConfig::default().with_cache_capacity(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("lru".parse::<EvictionPolicy>().unwrap(), EvictionPolicy::Lru);
        assert_eq!("FIFO".parse::<EvictionPolicy>().unwrap(), EvictionPolicy::Fifo);
        assert!("clock".parse::<EvictionPolicy>().is_err());
    }
}
