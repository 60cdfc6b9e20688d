//! Undo/redo history over cube documents.
//!
//! Two stacks of persistent snapshots: past states (capped, oldest
//! evicted FIFO) and redo states. Snapshots are `CubeDoc`s built on
//! `im` maps, so keeping 50 of them costs only the structural diffs.
//!
//! Undo and redo themselves are never recorded as entries - only
//! state-changing mutations push, and any mutation truncates the redo
//! tail.

use im::Vector;

use super::doc::CubeDoc;

/// Maximum retained undo entries. On overflow the oldest is evicted.
pub const HISTORY_CAP: usize = 50;

/// Undo/redo stacks for a cube editing session.
#[derive(Clone, Debug, Default)]
pub struct History {
    past: Vector<CubeDoc>,
    future: Vector<CubeDoc>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pre-mutation state. Clears the redo tail; evicts the
    /// oldest entry past `HISTORY_CAP`.
    pub fn record(&mut self, before: CubeDoc) {
        self.past.push_back(before);
        if self.past.len() > HISTORY_CAP {
            self.past.pop_front();
        }
        self.future.clear();
    }

    /// Step back: exchange `current` for the most recent past state.
    /// Returns `None` (leaving `current` untouched) at history start.
    pub fn undo(&mut self, current: &CubeDoc) -> Option<CubeDoc> {
        let previous = self.past.pop_back()?;
        self.future.push_back(current.clone());
        Some(previous)
    }

    /// Step forward: exchange `current` for the most recent undone
    /// state. Returns `None` at history end.
    pub fn redo(&mut self, current: &CubeDoc) -> Option<CubeDoc> {
        let next = self.future.pop_back()?;
        self.past.push_back(current.clone());
        Some(next)
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of retained undo entries.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Drop everything (e.g. after loading a different cube).
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
