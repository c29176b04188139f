//! Page cache statistics.

use std::fmt;

/// Counters kept by a [`PagedArray`](super::PagedArray).
///
/// The array is single-owner, so these are plain integers copied out by
/// [`PagedArray::stats`](super::PagedArray::stats).
///
/// # Example
/// ```
/// use pagesort::CacheStats;
///
/// let stats = CacheStats { hits: 3, misses: 1, ..CacheStats::default() };
/// assert_eq!(stats.hit_rate(), 0.75);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Accesses that found their page resident.
    pub hits: u64,

    /// Accesses that had to load their page (page faults).
    pub misses: u64,

    /// Pages dropped to make room for another.
    pub evictions: u64,

    /// Pages read from the source or sink.
    pub pages_read: u64,

    /// Pages written to the sink.
    pub pages_written: u64,
}

impl CacheStats {
    /// Cache hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Total indexed accesses.
    pub fn accesses(&self) -> u64 {
        self.hits + self.misses
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, written: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.misses,
            self.evictions,
            self.pages_written,
            self.hit_rate() * 100.0
        )
    }
}
