/// 1-indexed grid position. Row and column both start at 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Coord {
    pub row: usize,
    pub column: usize,
}

impl Coord {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Cell represents one square of the board.
/// `alive` is the observable state; `pending` holds the state planned for
/// the next generation until the commit pass applies it.
#[derive(Clone, PartialEq, Debug)]
pub struct Cell {
    alive: bool,
    pending: bool,
    coord: Coord,
}

impl Cell {
    /// Cells are only ever created dead, by the grid that owns them
    pub(crate) const fn new(coord: Coord) -> Self {
        Self {
            alive: false,
            pending: false,
            coord,
        }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// State planned for the next generation
    pub const fn pending_state(&self) -> bool {
        self.pending
    }

    pub const fn coord(&self) -> Coord {
        self.coord
    }

    pub const fn row(&self) -> usize {
        self.coord.row
    }

    pub const fn column(&self) -> usize {
        self.coord.column
    }

    /// Remember the state to apply at the end of the current generation.
    /// Does not touch `alive`.
    pub(crate) fn plan(&mut self, next: bool) {
        self.pending = next;
    }

    /// Apply the planned state. Returns true if `alive` changed.
    pub(crate) fn commit(&mut self) -> bool {
        if self.alive == self.pending {
            return false;
        }
        self.alive = self.pending;
        true
    }

    /// Kill a living cell, revive a dead one.
    /// `pending` follows so a later commit cannot undo the toggle.
    pub(crate) fn toggle(&mut self) -> bool {
        self.alive = !self.alive;
        self.pending = self.alive;
        self.alive
    }
}
