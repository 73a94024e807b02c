// Domain layer - cells, grid, rule and stepper, no rendering dependency
pub mod domain;

// Application layer - session coordination, tick source, camera
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellObserver, Coord, Grid, GridError, Stepper};
pub use application::{Camera, Config, GameState};
