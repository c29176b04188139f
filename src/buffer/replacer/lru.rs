//! LRU (Least Recently Used) replacement policy.

use std::collections::VecDeque;

use super::Replacer;
use crate::common::FrameId;

/// Recency-ordered eviction.
///
/// The queue holds every tracked frame exactly once, oldest touch at the
/// front. Touching a frame moves it to the back, so the front is always
/// the least recently touched frame.
#[derive(Debug, Default)]
pub struct LruReplacer {
    queue: VecDeque<FrameId>,
}

impl LruReplacer {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl Replacer for LruReplacer {
    fn record_access(&mut self, frame_id: FrameId) {
        // Already most recent: nothing to move.
        if self.queue.back() == Some(&frame_id) {
            return;
        }
        if let Some(pos) = self.queue.iter().position(|&f| f == frame_id) {
            self.queue.remove(pos);
        }
        self.queue.push_back(frame_id);
    }

    fn evict(&mut self) -> Option<FrameId> {
        self.queue.pop_front()
    }

    fn restore(&mut self, frame_id: FrameId) {
        self.remove(frame_id);
        self.queue.push_front(frame_id);
    }

    fn remove(&mut self, frame_id: FrameId) {
        if let Some(pos) = self.queue.iter().position(|&f| f == frame_id) {
            self.queue.remove(pos);
        }
    }

    fn size(&self) -> usize {
        self.queue.len()
    }

    fn eviction_order(&self) -> Vec<FrameId> {
        self.queue.iter().copied().collect()
    }
}
