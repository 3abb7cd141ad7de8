use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A window `[start, start + length)` of a sequence.
///
/// Windows handed to the search loop come from validation. A window built
/// or deserialized by a caller is not checked; its end saturates at
/// `usize::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchRange {
    pub start: usize,
    pub length: usize,
}

impl SearchRange {
    pub(crate) fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// One past the last index of the window.
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.length)
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end()).contains(&index)
    }
}

impl From<SearchRange> for Range<usize> {
    fn from(range: SearchRange) -> Self {
        range.start..range.end()
    }
}
