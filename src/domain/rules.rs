/// Trait for cellular automaton rules.
/// Maps a cell's current state and its living neighbour count to the next state.
pub trait Rule {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Apply rule to compute the next alive flag
    fn next_state(&self, alive: bool, living_neighbors: usize) -> bool;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Default, Debug)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway B3/S23"
    }

    /// Every (alive, count) pair falls in exactly one arm.
    fn next_state(&self, alive: bool, living_neighbors: usize) -> bool {
        match (alive, living_neighbors) {
            // Underpopulation
            (true, 0..=1) => false,
            // Survival
            (true, 2..=3) => true,
            // Overpopulation
            (true, 4..) => false,
            // Reproduction
            (false, 3) => true,
            (false, _) => false,
        }
    }
}
