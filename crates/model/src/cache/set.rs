//! A single associative set and its resident lines.
//!
//! Each set owns its lines by value in a deque ordered strictly from least
//! recently used (front) to most recently used (back). Eviction pops the
//! front; insertion and hit-reordering append at the back, so recency is the
//! sequence order itself and never needs timestamps.

use std::collections::VecDeque;

/// One resident block: the identifying tag plus the dirty flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CacheLine {
    /// Upper address bits identifying the cached block.
    pub tag: u64,
    /// True once the block has been written since it was loaded.
    pub dirty: bool,
}

/// An ordered set of at most `associativity` lines.
///
/// Tags within a set are pairwise distinct; the engine only inserts a tag
/// after a lookup for it has failed.
#[derive(Debug, Default)]
pub(crate) struct CacheSet {
    lines: VecDeque<CacheLine>,
}

impl CacheSet {
    /// Creates an empty set sized for `ways` resident lines.
    pub fn with_capacity(ways: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(ways),
        }
    }

    /// Number of resident lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when no line is resident.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True when a line with `tag` is resident. Does not disturb recency.
    pub fn contains(&self, tag: u64) -> bool {
        self.lines.iter().any(|line| line.tag == tag)
    }

    /// Moves the line with `tag` to the most-recently-used end and returns a
    /// handle to it, or `None` when the tag is not resident.
    pub fn touch(&mut self, tag: u64) -> Option<&mut CacheLine> {
        let pos = self.lines.iter().position(|line| line.tag == tag)?;
        let line = self.lines.remove(pos)?;
        self.lines.push_back(line);
        self.lines.back_mut()
    }

    /// Appends a line at the most-recently-used end. The caller maintains the
    /// at-most-`associativity` bound by evicting first when the set is full.
    pub fn insert(&mut self, line: CacheLine) {
        self.lines.push_back(line);
    }

    /// Removes and returns the least-recently-used line.
    pub fn evict_lru(&mut self) -> Option<CacheLine> {
        self.lines.pop_front()
    }
}
