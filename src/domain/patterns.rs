use super::{CellObserver, Coord, Grid, GridError};

/// Represents a seed pattern that can be stamped onto the grid
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: Vec<(usize, usize)>, // (row, column) offsets of alive cells, 0-based
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { name, description, height, width, cells }
    }

    /// Bottom-right cell covered when the top-left corner sits at `origin`
    fn far_corner(&self, origin: Coord) -> Option<Coord> {
        Some(Coord::new(
            origin.row.checked_add(self.height - 1)?,
            origin.column.checked_add(self.width - 1)?,
        ))
    }

    /// Does the pattern fit with its top-left corner at `origin`?
    pub fn fits(&self, grid: &Grid, origin: Coord) -> bool {
        grid.contains(origin) && self.far_corner(origin).is_some_and(|corner| grid.contains(corner))
    }

    /// Top-left corner that centres the pattern, if the grid is big enough
    pub fn centered_origin(&self, grid: &Grid) -> Option<Coord> {
        let size = grid.size();
        if self.height > size || self.width > size {
            return None;
        }
        Some(Coord::new((size - self.height) / 2 + 1, (size - self.width) / 2 + 1))
    }

    /// Bring the pattern's cells to life with its top-left corner at `origin`.
    /// Nothing is written unless the whole pattern fits.
    pub fn place_on(
        &self,
        grid: &mut Grid,
        origin: Coord,
        observer: &mut dyn CellObserver,
    ) -> Result<(), GridError> {
        let size = grid.size();
        let outside = |at: Coord| GridError::OutOfBounds {
            row: at.row,
            column: at.column,
            size,
        };
        if !grid.contains(origin) {
            return Err(outside(origin));
        }
        let corner = self
            .far_corner(origin)
            .ok_or_else(|| outside(Coord::new(usize::MAX, usize::MAX)))?;
        if !grid.contains(corner) {
            return Err(outside(corner));
        }
        for &(dr, dc) in &self.cells {
            grid.set_alive(Coord::new(origin.row + dr, origin.column + dc), true, observer)?;
        }
        Ok(())
    }
}

/// Classic patterns library
pub mod presets {
    use super::*;

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (0, 2)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Block - still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![(0, 0), (0, 1), (1, 0), (1, 1)],
        )
    }

    /// Glider - moves diagonally until it hits the edge and settles
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Get all available patterns, in hotkey order
    pub fn all_patterns() -> Vec<Pattern> {
        vec![blinker(), toad(), beacon(), block(), glider()]
    }
}
