use log::debug;
use macroquad::prelude::*;
use ::rand::Rng;

use crate::application::{Camera, GameState};
use crate::domain::{CellObserver, presets};
use crate::ui::{Button, CELL_SIZE, GameAction, grid_area_width};

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera, zoom_speed: f32) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(zoom_speed);
    } else if wheel < 0.0 {
        camera.zoom_out(zoom_speed);
    }
}

/// Pan with WASD or the arrow keys
pub fn handle_pan(camera: &mut Camera, pan_speed: f32, delta_time: f32) {
    let step = pan_speed * delta_time;
    let axis = |neg: [KeyCode; 2], pos: [KeyCode; 2]| -> f32 {
        let held = |keys: [KeyCode; 2]| keys.iter().any(|k| is_key_down(*k));
        match (held(neg), held(pos)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    };
    // Moving the view left shifts the grid right on screen
    let dx = axis([KeyCode::A, KeyCode::Left], [KeyCode::D, KeyCode::Right]);
    let dy = axis([KeyCode::W, KeyCode::Up], [KeyCode::S, KeyCode::Down]);
    if dx != 0.0 || dy != 0.0 {
        camera.pan(dx * step, dy * step);
    }
}

/// Right click toggles the picked cell
pub fn handle_pick(state: &mut GameState, camera: &Camera, mouse_pos: (f32, f32), observer: &mut dyn CellObserver) {
    if !is_mouse_button_pressed(MouseButton::Right) || mouse_pos.0 >= grid_area_width() {
        return;
    }
    let Some(coord) = camera.pick(mouse_pos.0, mouse_pos.1, CELL_SIZE, state.grid.size()) else {
        return;
    };
    // pick only yields in-bounds coordinates
    if let Ok(alive) = state.toggle_cell(coord, observer) {
        debug!("picked ({}, {}), now {}", coord.row, coord.column, if alive { "alive" } else { "dead" });
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(
    mut state: GameState,
    camera: &mut Camera,
    rng: &mut impl Rng,
    observer: &mut dyn CellObserver,
) -> GameState {
    let step = state.config.interval_step_secs;

    if is_key_pressed(KeyCode::Space) {
        state = state.toggle_running();
    }
    if is_key_pressed(KeyCode::N) && !state.is_running {
        state = state.step_once(observer);
    }
    if is_key_pressed(KeyCode::C) {
        state = state.clear(observer);
    }
    if is_key_pressed(KeyCode::R) {
        state = state.randomize(rng, observer);
    }
    if is_key_pressed(KeyCode::Equal) || is_key_pressed(KeyCode::KpAdd) {
        state = state.adjust_interval(step);
    }
    if is_key_pressed(KeyCode::Minus) || is_key_pressed(KeyCode::KpSubtract) {
        state = state.adjust_interval(-step);
    }

    let pattern_keys = [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4, KeyCode::Key5];
    let patterns = presets::all_patterns();
    for (key, pattern) in pattern_keys.iter().zip(&patterns) {
        if is_key_pressed(*key) {
            state.place_pattern(pattern, observer);
        }
    }

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }

    state
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[(Button, GameAction)],
    mouse_pos: (f32, f32),
    rng: &mut impl Rng,
    observer: &mut dyn CellObserver,
) -> GameState {
    buttons.iter().fold(state, |s, (btn, action)| {
        if !btn.is_clicked(mouse_pos) {
            return s;
        }
        debug!("{} clicked", btn.label());
        match action {
            GameAction::ToggleRunning => s.toggle_running(),
            GameAction::Step => s.step_once(observer),
            GameAction::Clear => s.clear(observer),
            GameAction::Randomize => s.randomize(&mut *rng, observer),
        }
    })
}
