mod cell;
mod error;
mod grid;
mod observer;
mod patterns;
mod rules;
mod stepper;

pub use cell::{Cell, Coord};
pub use error::GridError;
pub use grid::Grid;
pub use observer::{CellObserver, ChangeLog, NoopObserver};
pub use patterns::{Pattern, presets};
pub use rules::{ConwayRule, Rule};
pub use stepper::Stepper;
