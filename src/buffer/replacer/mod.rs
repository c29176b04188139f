//! Eviction policy implementations (replacers).
//!
//! - [`LruReplacer`] - Least recently touched first (default)
//! - [`FifoReplacer`] - Load order, ignores re-access
//!
//! A replacer only tracks which resident frames exist and in what order;
//! the paged array owns the frames and does the write-back.

mod fifo;
mod lru;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;

use crate::common::{EvictionPolicy, FrameId};

/// Chooses which resident frame to give up when the cache is full.
pub trait Replacer: Send {
    /// Record that a frame was touched (read or write).
    fn record_access(&mut self, frame_id: FrameId);

    /// Pick and forget a victim, or `None` if nothing is tracked.
    fn evict(&mut self) -> Option<FrameId>;

    /// Put back a frame just returned by [`evict`](Self::evict) whose
    /// write-back failed. It becomes the next victim again under every policy.
    fn restore(&mut self, frame_id: FrameId);

    /// Stop tracking a frame.
    fn remove(&mut self, frame_id: FrameId);

    /// Number of tracked frames.
    fn size(&self) -> usize;

    /// Tracked frames, next victim first.
    fn eviction_order(&self) -> Vec<FrameId>;
}

/// Build the replacer for `policy`.
pub fn for_policy(policy: EvictionPolicy) -> Box<dyn Replacer> {
    match policy {
        EvictionPolicy::Lru => Box::new(LruReplacer::new()),
        EvictionPolicy::Fifo => Box::new(FifoReplacer::new()),
    }
}
