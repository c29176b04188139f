//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use super::Replacer;
use crate::common::FrameId;

/// Evicts frames in the order they were first recorded.
///
/// Re-accessing a resident frame does not reorder it, which makes this the
/// baseline against which [`LruReplacer`](super::LruReplacer) is compared.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Frame IDs in insertion order (front = oldest).
    queue: VecDeque<FrameId>,

    /// Set for O(1) membership check.
    in_queue: HashSet<FrameId>,
}

impl FifoReplacer {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            in_queue: HashSet::new(),
        }
    }
}

impl Replacer for FifoReplacer {
    /// Only enqueues frames not already tracked.
    fn record_access(&mut self, frame_id: FrameId) {
        if self.in_queue.insert(frame_id) {
            self.queue.push_back(frame_id);
        }
    }

    fn evict(&mut self) -> Option<FrameId> {
        let frame_id = self.queue.pop_front()?;
        self.in_queue.remove(&frame_id);
        Some(frame_id)
    }

    fn restore(&mut self, frame_id: FrameId) {
        if self.in_queue.insert(frame_id) {
            self.queue.push_front(frame_id);
        }
    }

    fn remove(&mut self, frame_id: FrameId) {
        if self.in_queue.remove(&frame_id) {
            self.queue.retain(|&f| f != frame_id);
        }
    }

    fn size(&self) -> usize {
        self.in_queue.len()
    }

    fn eviction_order(&self) -> Vec<FrameId> {
        self.queue.iter().copied().collect()
    }
}
