mod button;
mod text_field;

pub use button::Button;
pub use text_field::TextField;

// UI constants - functions for responsive layout
use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const CELL_SIZE: f32 = 10.0;
/// Gap between neighbouring cells, as in a grid of spaced tiles
pub const CELL_GAP: f32 = 1.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Which game-menu button was clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameAction {
    ToggleRunning,
    Step,
    Clear,
    Randomize,
}

/// Game-menu buttons with their actions, stacked in the side panel
pub fn create_buttons(toggle_label: &str) -> Vec<(Button, GameAction)> {
    let px = panel_x();
    vec![
        (Button::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, toggle_label), GameAction::ToggleRunning),
        (Button::new(px, 70.0, PANEL_WIDTH, BUTTON_HEIGHT, "Step"), GameAction::Step),
        (Button::new(px, 120.0, PANEL_WIDTH, BUTTON_HEIGHT, "Clear"), GameAction::Clear),
        (Button::new(px, 170.0, PANEL_WIDTH, BUTTON_HEIGHT, "Random"), GameAction::Randomize),
    ]
}

/// "Start" button of the setup menu, centred under the size field
pub fn start_button() -> Button {
    let x = (screen_width() - PANEL_WIDTH) / 2.0;
    Button::new(x, screen_height() / 2.0 + 20.0, PANEL_WIDTH, BUTTON_HEIGHT, "Start")
}

/// Top-left of the setup menu's grid size field
pub fn size_field_position() -> (f32, f32) {
    ((screen_width() - PANEL_WIDTH) / 2.0, screen_height() / 2.0 - 30.0)
}
