use macroquad::prelude::*;

use crate::application::{Camera, GameState};
use crate::domain::{Cell, CellObserver, Coord, Grid, Rule, presets};
use crate::ui::{Button, CELL_GAP, CELL_SIZE, PANEL_WIDTH, TextField, grid_area_height, grid_area_width, panel_x};

pub const LIVING_MATERIAL: Color = Color::new(0.0, 1.0, 0.59, 1.0);
pub const DEAD_MATERIAL: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Per-cell colour buffer, the presentation side of the grid.
/// Kept in sync through `CellObserver` notifications rather than by
/// re-reading every cell each frame.
pub struct CellMaterials {
    size: usize,
    colors: Vec<Color>,
}

impl CellMaterials {
    /// Build the buffer from the grid's current state
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            size: grid.size(),
            colors: grid.all_cells().map(|cell| material_for(cell.is_alive())).collect(),
        }
    }

    /// Colour of the cell at a 1-indexed (row, column)
    pub fn color_at(&self, row: usize, column: usize) -> Option<Color> {
        if row == 0 || column == 0 || row > self.size || column > self.size {
            return None;
        }
        self.colors.get((row - 1) * self.size + (column - 1)).copied()
    }
}

impl CellObserver for CellMaterials {
    fn cell_changed(&mut self, cell: &Cell) {
        let idx = (cell.row() - 1) * self.size + (cell.column() - 1);
        if let Some(color) = self.colors.get_mut(idx) {
            *color = material_for(cell.is_alive());
        }
    }
}

fn material_for(alive: bool) -> Color {
    if alive { LIVING_MATERIAL } else { DEAD_MATERIAL }
}

/// Draw the visible part of the board
pub fn draw_grid(materials: &CellMaterials, camera: &Camera) {
    let span = CELL_SIZE * camera.zoom;
    let tile = (span - CELL_GAP * camera.zoom).max(1.0);
    let area_width = grid_area_width();
    let area_height = grid_area_height();

    for row in 1..=materials.size {
        for column in 1..=materials.size {
            let (x, y) = camera.cell_to_screen(Coord::new(row, column), CELL_SIZE);
            // Skip if outside viewport
            if x + span < 0.0 || x > area_width || y + span < 0.0 || y > area_height {
                continue;
            }
            if let Some(color) = materials.color_at(row, column) {
                draw_rectangle(x, y, tile, tile, color);
            }
        }
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));
}

/// Side panel of the game menu: buttons, status and counters
pub fn draw_controls(state: &GameState, camera: &Camera, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();
    let controls = [
        ("Controls:", 240.0, 14.0, WHITE),
        ("RMB: Toggle cell", 255.0, 12.0, GRAY),
        ("Space: Pause/Resume", 268.0, 12.0, GRAY),
        ("N: Step", 281.0, 12.0, GRAY),
        ("WASD/Arrows: Pan", 294.0, 12.0, GRAY),
        ("Wheel: Zoom", 307.0, 12.0, GRAY),
        ("+/-: Interval", 320.0, 12.0, GRAY),
        ("1-5: Place pattern", 333.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    // Hotkey legend for the pattern library
    for (i, pattern) in presets::all_patterns().iter().enumerate() {
        let line = format!("{} {}: {}", i + 1, pattern.name, pattern.description);
        draw_text(&line, px + 6.0, 346.0 + i as f32 * 13.0, 11.0, GRAY);
    }

    let status_color = if state.is_running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };
    let size = state.grid.size();
    let labels = [
        (format!("Rule: {}", state.stepper.rule().name()), 425.0, 14.0, GRAY),
        (format!("Grid: {size}x{size}"), 443.0, 14.0, GRAY),
        (format!("Population: {}", state.grid.population()), 461.0, 14.0, GRAY),
        (format!("Interval: {:.2}s", state.update_interval), 479.0, 14.0, GRAY),
        (format!("Generation: {}", state.generation), 503.0, 18.0, LIVING_MATERIAL),
        (state.status_text().to_owned(), 528.0, 16.0, status_color),
        (format!("Zoom: {:.1}x", camera.zoom), 553.0, 14.0, GRAY),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });
}

/// Grid size prompt shown before a session exists
pub fn draw_setup_menu(field: &TextField, start: &Button, error: Option<&str>, mouse_pos: (f32, f32)) {
    let (x, y) = crate::ui::size_field_position();
    draw_text("Conway's Game of Life", x, y - 60.0, 28.0, WHITE);
    field.draw();
    start.draw(mouse_pos);
    if let Some(message) = error {
        draw_text(message, x, y + 110.0, 16.0, Color::from_rgba(255, 80, 80, 255));
    }
}
