//! Bounded deque for diagnostics buffering
//!
//! A fixed-capacity deque that evicts the oldest entry when full.

use std::collections::VecDeque;

/// A bounded deque with FIFO eviction policy
#[derive(Clone, Debug)]
pub struct BoundedDeque<T> {
    cap: usize,
    buf: VecDeque<T>,
}

impl<T> BoundedDeque<T> {
    /// Create a new bounded deque with the specified capacity
    ///
    /// A capacity of 0 turns `push` into a no-op.
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            buf: VecDeque::with_capacity(cap.min(256)),
        }
    }

    pub fn push(&mut self, value: T) {
        if self.cap == 0 {
            return;
        }
        if self.buf.len() == self.cap {
            self.buf.pop_front();
        }
        self.buf.push_back(value);
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    /// Newest to oldest
    pub fn iter_rev(&self) -> impl Iterator<Item = &T> {
        self.buf.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn last(&self) -> Option<&T> {
        self.buf.back()
    }
}
