mod camera;
mod config;
mod game_state;

pub use camera::Camera;
pub use config::Config;
pub use game_state::GameState;
