use log::warn;

pub const INTERVAL_ENV: &str = "LIFE_INTERVAL_SECS";
pub const GRID_SIZE_ENV: &str = "LIFE_GRID_SIZE";

/// Session-wide tunables. Defaults mirror the classic one-generation-per-second loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Seconds between generations while running
    pub update_interval_secs: f32,
    pub min_interval_secs: f32,
    pub max_interval_secs: f32,
    /// Amount one speed key press adds or removes
    pub interval_step_secs: f32,
    /// Pre-filled value of the grid size input
    pub default_grid_size: usize,
    /// Largest side length the setup menu accepts
    pub max_grid_size: usize,
    /// Probability of a cell being alive after "Random"
    pub random_density: f64,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub zoom_speed: f32,
    /// Pixels per second for keyboard panning
    pub pan_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            update_interval_secs: 1.0,
            min_interval_secs: 0.05,
            max_interval_secs: 5.0,
            interval_step_secs: 0.1,
            default_grid_size: 20,
            max_grid_size: 200,
            random_density: 0.3,
            min_zoom: 0.5,
            max_zoom: 10.0,
            zoom_speed: 1.1,
            pan_speed: 400.0,
        }
    }
}

impl Config {
    /// Defaults, with interval and grid size overridable from the environment
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var(INTERVAL_ENV).ok().as_deref(),
            std::env::var(GRID_SIZE_ENV).ok().as_deref(),
        )
    }

    /// Apply raw override strings. Unparseable or out-of-range values are ignored.
    pub fn with_overrides(mut self, interval: Option<&str>, grid_size: Option<&str>) -> Self {
        if let Some(raw) = interval {
            match raw.trim().parse::<f32>() {
                Ok(secs) if secs.is_finite() && secs > 0.0 => {
                    self.update_interval_secs = secs.clamp(self.min_interval_secs, self.max_interval_secs);
                }
                _ => warn!("ignoring {INTERVAL_ENV}={raw:?}: expected a positive number of seconds"),
            }
        }
        if let Some(raw) = grid_size {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 && size <= self.max_grid_size => self.default_grid_size = size,
                _ => warn!(
                    "ignoring {GRID_SIZE_ENV}={raw:?}: expected an integer between 1 and {}",
                    self.max_grid_size
                ),
            }
        }
        self
    }
}
