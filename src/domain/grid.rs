use log::{debug, info};
use rand::Rng;

use super::{Cell, CellObserver, Coord, GridError};

/// Offsets of the eight surrounding positions as (row, column) deltas.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Grid owns the square board of cells.
/// Bounded: positions outside `[1, size]` do not exist, nothing wraps.
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a size×size grid of dead cells, numbered row-major from (1, 1)
    pub fn new(size: i64) -> Result<Self, GridError> {
        if size <= 0 {
            return Err(GridError::InvalidSize(size));
        }
        let side = usize::try_from(size).map_err(|_| GridError::InvalidSize(size))?;
        let len = side
            .checked_mul(side)
            .ok_or(GridError::InvalidSize(size))?;

        let cells: Vec<Cell> = (1..=side)
            .flat_map(|row| (1..=side).map(move |column| Cell::new(Coord::new(row, column))))
            .collect();
        debug_assert_eq!(cells.len(), len);

        info!("constructed {side}x{side} grid ({len} cells)");
        Ok(Self { size: side, cells })
    }

    /// Validate user-entered grid size text before construction
    pub fn parse_size(input: &str) -> Result<usize, GridError> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| GridError::NotANumber(trimmed.to_owned()))?;
        if value <= 0 {
            return Err(GridError::InvalidSize(value));
        }
        usize::try_from(value).map_err(|_| GridError::InvalidSize(value))
    }

    /// Side length N
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (N²)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row >= 1 && coord.row <= self.size && coord.column >= 1 && coord.column <= self.size
    }

    /// Row-major position of a coordinate in the backing vector
    fn index_of(&self, coord: Coord) -> Result<usize, GridError> {
        if !self.contains(coord) {
            return Err(GridError::OutOfBounds {
                row: coord.row,
                column: coord.column,
                size: self.size,
            });
        }
        Ok((coord.row - 1) * self.size + (coord.column - 1))
    }

    /// Get cell at position (with bounds checking)
    pub fn cell(&self, coord: Coord) -> Result<&Cell, GridError> {
        let idx = self.index_of(coord)?;
        Ok(&self.cells[idx])
    }

    fn cell_mut(&mut self, coord: Coord) -> Result<&mut Cell, GridError> {
        let idx = self.index_of(coord)?;
        Ok(&mut self.cells[idx])
    }

    /// Every cell in row-major order
    pub fn all_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub(crate) fn all_cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> + '_ {
        self.cells.iter_mut()
    }

    /// The up-to-8 cells surrounding `cell`, filtered to the grid bounds.
    /// Never yields `cell` itself and never yields a position twice.
    pub fn neighbors_of<'a>(&'a self, cell: &Cell) -> impl Iterator<Item = &'a Cell> + use<'a> {
        let Coord { row, column } = cell.coord();
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = column.checked_add_signed(dc)?;
            self.cell(Coord::new(r, c)).ok()
        })
    }

    /// Count cells in the given set that are alive
    pub fn living_count<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> usize {
        cells.into_iter().filter(|cell| cell.is_alive()).count()
    }

    /// Number of living neighbours around `cell`
    pub fn living_neighbors(&self, cell: &Cell) -> usize {
        Self::living_count(self.neighbors_of(cell))
    }

    /// Number of living cells on the whole grid
    pub fn population(&self) -> usize {
        Self::living_count(self.all_cells())
    }

    /// Flip a single cell immediately, bypassing the generation step
    pub fn toggle(&mut self, coord: Coord, observer: &mut dyn CellObserver) -> Result<bool, GridError> {
        let cell = self.cell_mut(coord)?;
        let alive = cell.toggle();
        debug!("toggled ({}, {}) -> {}", coord.row, coord.column, alive);
        observer.cell_changed(cell);
        Ok(alive)
    }

    /// Force a cell into a state. Notifies only if the state changed.
    pub fn set_alive(
        &mut self,
        coord: Coord,
        alive: bool,
        observer: &mut dyn CellObserver,
    ) -> Result<(), GridError> {
        let cell = self.cell_mut(coord)?;
        if cell.is_alive() != alive {
            cell.toggle();
            observer.cell_changed(cell);
        }
        Ok(())
    }

    /// Kill every cell
    pub fn clear(&mut self, observer: &mut dyn CellObserver) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_alive()) {
            cell.toggle();
            observer.cell_changed(cell);
        }
    }

    /// Randomize grid, each cell alive with probability `density`
    pub fn randomize(&mut self, density: f64, rng: &mut impl Rng, observer: &mut dyn CellObserver) {
        let density = density.clamp(0.0, 1.0);
        for cell in self.cells.iter_mut() {
            let alive = rng.random_bool(density);
            if cell.is_alive() != alive {
                cell.toggle();
                observer.cell_changed(cell);
            }
        }
    }
}
