use log::{info, warn};
use rand::Rng;

use super::Config;
use crate::domain::{CellObserver, Coord, Grid, GridError, Pattern, Stepper};

/// GameState orchestrates one simulation session.
/// Owns the grid and hands it to the stepper and to input adapters by reference.
pub struct GameState {
    pub grid: Grid,
    pub stepper: Stepper,
    pub config: Config,
    pub is_running: bool,
    pub generation: u64,
    /// Seconds left until the next generation while running
    pub next_update: f32,
    pub update_interval: f32,
}

impl GameState {
    /// Wrap an already constructed grid. The session starts paused.
    pub fn new(grid: Grid, config: Config) -> Self {
        let interval = config.update_interval_secs;
        Self {
            grid,
            stepper: Stepper::new(),
            config,
            is_running: false,
            generation: 0,
            next_update: interval,
            update_interval: interval,
        }
    }

    /// Validate the grid-size text and build a fresh session from it.
    /// Sizes above `config.max_grid_size` are rejected before anything is allocated.
    pub fn start(size_input: &str, config: Config) -> Result<Self, GridError> {
        let size = Grid::parse_size(size_input)?;
        if size > config.max_grid_size {
            return Err(GridError::TooLarge { size, max: config.max_grid_size });
        }
        // parse_size only yields values that came from a positive i64
        let size = size as i64;
        let grid = Grid::new(size)?;
        info!("session started on a {size}x{size} grid");
        Ok(Self::new(grid, config))
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        info!("{}", self.status_text());
        self
    }

    /// Label for the pause/resume button
    pub fn toggle_label(&self) -> &'static str {
        if self.is_running { "Pause" } else { "Resume" }
    }

    pub fn status_text(&self) -> &'static str {
        if self.is_running { "Game is Active" } else { "Game is Paused" }
    }

    /// Change the interval between generations, clamped to the configured range
    pub fn adjust_interval(mut self, delta: f32) -> Self {
        self.update_interval = (self.update_interval + delta)
            .clamp(self.config.min_interval_secs, self.config.max_interval_secs);
        self.next_update = self.next_update.min(self.update_interval);
        self
    }

    /// Count down while running and run one generation each time the interval elapses
    pub fn tick(mut self, delta_time: f32, observer: &mut dyn CellObserver) -> Self {
        if !self.is_running {
            return self;
        }

        self.next_update -= delta_time;
        if self.next_update <= 0.0 {
            self.next_update = self.update_interval;
            self = self.step_once(observer);
        }
        self
    }

    /// Run exactly one generation regardless of the running flag
    pub fn step_once(mut self, observer: &mut dyn CellObserver) -> Self {
        self.stepper.step(&mut self.grid, observer);
        self.generation += 1;
        self
    }

    /// Flip the cell a pointer pick resolved to
    pub fn toggle_cell(&mut self, coord: Coord, observer: &mut dyn CellObserver) -> Result<bool, GridError> {
        self.grid.toggle(coord, observer)
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self, observer: &mut dyn CellObserver) -> Self {
        self.grid.clear(observer);
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Randomize grid and reset generation counter
    pub fn randomize(mut self, rng: &mut impl Rng, observer: &mut dyn CellObserver) -> Self {
        self.grid.randomize(self.config.random_density, rng, observer);
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Stamp a pattern in the middle of the grid. Returns false if it does not fit.
    pub fn place_pattern(&mut self, pattern: &Pattern, observer: &mut dyn CellObserver) -> bool {
        let Some(origin) = pattern.centered_origin(&self.grid) else {
            warn!("{} does not fit on a {}x{} grid", pattern.name, self.grid.size(), self.grid.size());
            return false;
        };
        match pattern.place_on(&mut self.grid, origin, observer) {
            Ok(()) => true,
            Err(err) => {
                warn!("could not place {}: {err}", pattern.name);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChangeLog, NoopObserver, presets};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn blinker_state() -> GameState {
        let mut state = GameState::start("5", Config::default()).unwrap();
        assert!(state.place_pattern(&presets::blinker(), &mut NoopObserver));
        state
    }

    #[test]
    fn test_start_validates_input() {
        assert_eq!(
            GameState::start("abc", Config::default()).err(),
            Some(GridError::NotANumber("abc".to_owned()))
        );
        assert_eq!(
            GameState::start("0", Config::default()).err(),
            Some(GridError::InvalidSize(0))
        );
        let state = GameState::start("7", Config::default()).unwrap();
        assert_eq!(state.grid.size(), 7);
        assert!(!state.is_running);
    }

    #[test]
    fn test_start_rejects_oversized_grid() {
        let config = Config::default();
        let max = config.max_grid_size;
        assert_eq!(
            GameState::start("999999999", config.clone()).err(),
            Some(GridError::TooLarge { size: 999_999_999, max })
        );
        assert_eq!(
            GameState::start(&(max + 1).to_string(), config.clone()).err(),
            Some(GridError::TooLarge { size: max + 1, max })
        );

        let state = GameState::start(&max.to_string(), config).unwrap();
        assert_eq!(state.grid.size(), max);
        assert!(!state.is_running);
    }

    #[test]
    fn test_paused_tick_does_nothing() {
        let state = blinker_state().tick(10.0, &mut NoopObserver);
        assert_eq!(state.generation, 0);
        assert_eq!(state.status_text(), "Game is Paused");
        assert_eq!(state.toggle_label(), "Resume");
    }

    #[test]
    fn test_tick_steps_once_per_interval() {
        let mut state = blinker_state().toggle_running();
        assert_eq!(state.toggle_label(), "Pause");

        let mut log = ChangeLog::new();
        state = state.tick(0.5, &mut log);
        assert_eq!(state.generation, 0);
        assert!(log.is_empty());

        state = state.tick(0.5, &mut log);
        assert_eq!(state.generation, 1);
        assert_eq!(log.len(), 4);
        assert_eq!(state.next_update, state.update_interval);

        // A long frame still only advances a single generation
        state = state.tick(5.0, &mut log);
        assert_eq!(state.generation, 2);
    }

    #[test]
    fn test_step_once_while_paused() {
        let state = blinker_state().step_once(&mut NoopObserver);
        assert_eq!(state.generation, 1);
        assert!(state.grid.cell(Coord::new(2, 3)).unwrap().is_alive());
    }

    #[test]
    fn test_adjust_interval_clamps() {
        let state = blinker_state().adjust_interval(-10.0);
        assert_eq!(state.update_interval, state.config.min_interval_secs);
        assert!(state.next_update <= state.update_interval);

        let state = state.adjust_interval(100.0);
        assert_eq!(state.update_interval, state.config.max_interval_secs);
    }

    #[test]
    fn test_toggle_cell() {
        let mut state = blinker_state();
        assert!(state.toggle_cell(Coord::new(1, 1), &mut NoopObserver).unwrap());
        assert!(state.toggle_cell(Coord::new(6, 1), &mut NoopObserver).is_err());
    }

    #[test]
    fn test_clear_and_randomize_reset_generation() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = blinker_state()
            .toggle_running()
            .step_once(&mut NoopObserver)
            .clear(&mut NoopObserver);
        assert_eq!(state.generation, 0);
        assert!(!state.is_running);
        assert_eq!(state.grid.population(), 0);

        let state = state.step_once(&mut NoopObserver).randomize(&mut rng, &mut NoopObserver);
        assert_eq!(state.generation, 0);
    }
}
