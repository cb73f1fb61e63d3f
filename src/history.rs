use std::collections::VecDeque;

use crate::curve::Curve;

/// Default number of snapshots kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Bounded linear undo/redo over full copies of the committed curve list.
///
/// Every entry owns its curves outright, so edits to the live drawing never
/// reach back into history. The cursor points at the entry matching the
/// live state; entries after it form the redo branch, which the next `save`
/// throws away.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    entries: VecDeque<Vec<Curve>>,
    cursor: usize,
    capacity: usize,
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl SnapshotHistory {
    /// Creates an empty history. A capacity of zero is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            cursor: 0,
            capacity,
        }
    }

    /// Records a copy of `curves` as the newest state.
    pub fn save(&mut self, curves: &[Curve]) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(curves.to_vec());
        self.cursor = self.entries.len() - 1;

        log::debug!(
            "History saved: {} curves, entry {}/{}",
            curves.len(),
            self.cursor + 1,
            self.entries.len()
        );
    }

    /// Steps back one entry and returns a fresh copy of it, or `None` at the
    /// oldest entry.
    pub fn undo(&mut self) -> Option<Vec<Curve>> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        log::debug!("Undo to entry {}/{}", self.cursor + 1, self.entries.len());
        self.current()
    }

    /// Steps forward one entry and returns a fresh copy of it, or `None` at
    /// the newest entry.
    pub fn redo(&mut self) -> Option<Vec<Curve>> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        log::debug!("Redo to entry {}/{}", self.cursor + 1, self.entries.len());
        self.current()
    }

    /// A copy of the entry under the cursor.
    pub fn current(&self) -> Option<Vec<Curve>> {
        self.entries.get(self.cursor).cloned()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
