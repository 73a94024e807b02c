//! State-change notification from the logic layer to whoever presents it.

use super::{Cell, Coord};

/// Receives every cell whose `alive` flag actually changed,
/// whether by a generation commit or a direct toggle.
pub trait CellObserver {
    fn cell_changed(&mut self, cell: &Cell);
}

/// Observer that ignores every notification
#[derive(Clone, Copy, Default, Debug)]
pub struct NoopObserver;

impl CellObserver for NoopObserver {
    fn cell_changed(&mut self, _cell: &Cell) {}
}

/// Records changed coordinates in notification order
#[derive(Clone, Default, Debug)]
pub struct ChangeLog {
    changes: Vec<(Coord, bool)>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coordinates with the state they changed to
    pub fn changes(&self) -> &[(Coord, bool)] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

impl CellObserver for ChangeLog {
    fn cell_changed(&mut self, cell: &Cell) {
        self.changes.push((cell.coord(), cell.is_alive()));
    }
}
