//! One synchronous generation transition.
//!
//! The plan pass computes every next state from the grid as it stood at the
//! start of the generation and parks it in each cell's pending flag. Only
//! once every cell is planned does the commit pass apply them, so no cell
//! ever observes a neighbour that has already advanced.

use log::debug;

use super::{CellObserver, ConwayRule, Grid, Rule};

/// Stateless apart from the rule it applies.
#[derive(Clone, Copy, Default, Debug)]
pub struct Stepper<R: Rule = ConwayRule> {
    rule: R,
}

impl Stepper<ConwayRule> {
    pub fn new() -> Self {
        Self { rule: ConwayRule }
    }
}

impl<R: Rule> Stepper<R> {
    pub fn with_rule(rule: R) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Advance the grid by one generation.
    /// Every cell whose state flips is reported to `observer` during commit.
    pub fn step(&self, grid: &mut Grid, observer: &mut dyn CellObserver) {
        self.plan(grid);
        let changed = Self::commit(grid, observer);
        debug!("{}: {} cells changed", self.rule.name(), changed);
    }

    fn plan(&self, grid: &mut Grid) {
        let next: Vec<bool> = grid
            .all_cells()
            .map(|cell| {
                let living = Grid::living_count(grid.neighbors_of(cell));
                self.rule.next_state(cell.is_alive(), living)
            })
            .collect();

        grid.all_cells_mut()
            .zip(next)
            .for_each(|(cell, alive)| cell.plan(alive));
    }

    fn commit(grid: &mut Grid, observer: &mut dyn CellObserver) -> usize {
        let mut changed = 0;
        for cell in grid.all_cells_mut() {
            if cell.commit() {
                observer.cell_changed(cell);
                changed += 1;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChangeLog, Coord, NoopObserver};

    fn grid_with(size: i64, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        for &(row, column) in alive {
            grid.set_alive(Coord::new(row, column), true, &mut NoopObserver).unwrap();
        }
        grid
    }

    fn living(grid: &Grid) -> Vec<(usize, usize)> {
        grid.all_cells()
            .filter(|c| c.is_alive())
            .map(|c| (c.row(), c.column()))
            .collect()
    }

    #[test]
    fn test_blinker_oscillates() {
        let stepper = Stepper::new();
        let horizontal = vec![(2, 1), (2, 2), (2, 3)];
        let mut grid = grid_with(3, &horizontal);

        stepper.step(&mut grid, &mut NoopObserver);
        assert_eq!(living(&grid), vec![(1, 2), (2, 2), (3, 2)]);

        stepper.step(&mut grid, &mut NoopObserver);
        assert_eq!(living(&grid), horizontal);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut grid = grid_with(5, &[(3, 3)]);
        Stepper::new().step(&mut grid, &mut NoopObserver);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_overcrowded_cell_dies() {
        let all: Vec<(usize, usize)> = (1..=3).flat_map(|r| (1..=3).map(move |c| (r, c))).collect();
        let mut grid = grid_with(3, &all);
        Stepper::new().step(&mut grid, &mut NoopObserver);

        assert!(!grid.cell(Coord::new(2, 2)).unwrap().is_alive());
        // Corners had 3 neighbours and survive
        assert_eq!(living(&grid), vec![(1, 1), (1, 3), (3, 1), (3, 3)]);
    }

    #[test]
    fn test_reproduction_needs_exactly_three() {
        let stepper = Stepper::new();
        let target = Coord::new(3, 3);

        let mut three = grid_with(5, &[(2, 2), (2, 3), (2, 4)]);
        stepper.step(&mut three, &mut NoopObserver);
        assert!(three.cell(target).unwrap().is_alive());

        let mut two = grid_with(5, &[(2, 2), (2, 4)]);
        stepper.step(&mut two, &mut NoopObserver);
        assert!(!two.cell(target).unwrap().is_alive());

        let mut four = grid_with(5, &[(2, 2), (2, 4), (4, 2), (4, 4)]);
        stepper.step(&mut four, &mut NoopObserver);
        assert!(!four.cell(target).unwrap().is_alive());
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let mut grid = Grid::new(6).unwrap();
        let mut log = ChangeLog::new();
        for _ in 0..10 {
            Stepper::new().step(&mut grid, &mut log);
        }
        assert_eq!(grid.population(), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_step_is_deterministic() {
        let seed = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3), (5, 5), (5, 6)];
        let mut a = grid_with(8, &seed);
        let mut b = grid_with(8, &seed);
        let stepper = Stepper::new();
        for _ in 0..6 {
            stepper.step(&mut a, &mut NoopObserver);
            stepper.step(&mut b, &mut NoopObserver);
            assert_eq!(living(&a), living(&b));
        }
    }

    #[test]
    fn test_observer_sees_only_changed_cells() {
        let mut grid = grid_with(3, &[(2, 1), (2, 2), (2, 3)]);
        let mut log = ChangeLog::new();
        Stepper::new().step(&mut grid, &mut log);

        let mut changes = log.changes().to_vec();
        changes.sort_by_key(|(c, _)| (c.row, c.column));
        assert_eq!(
            changes,
            vec![
                (Coord::new(1, 2), true),
                (Coord::new(2, 1), false),
                (Coord::new(2, 3), false),
                (Coord::new(3, 2), true),
            ]
        );
    }

    struct Extinction;

    impl Rule for Extinction {
        fn name(&self) -> &'static str {
            "extinction"
        }

        fn next_state(&self, _alive: bool, _living_neighbors: usize) -> bool {
            false
        }
    }

    #[test]
    fn test_custom_rule() {
        let stepper = Stepper::with_rule(Extinction);
        assert_eq!(stepper.rule().name(), "extinction");

        let mut grid = grid_with(3, &[(1, 1), (2, 2), (3, 3)]);
        let mut log = ChangeLog::new();
        stepper.step(&mut grid, &mut log);
        assert_eq!(grid.population(), 0);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = [(2, 2), (2, 3), (3, 2), (3, 3)];
        let mut grid = grid_with(4, &block);
        let mut log = ChangeLog::new();
        Stepper::new().step(&mut grid, &mut log);
        assert_eq!(living(&grid), block.to_vec());
        assert!(log.is_empty());
    }
}
