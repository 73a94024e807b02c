use crate::domain::Coord;

/// Camera manages viewport and zoom for grid navigation
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32, // 1.0 = normal, 2.0 = 2x zoomed in
    min_zoom: f32,
    max_zoom: f32,
}

impl Camera {
    pub fn new(min_zoom: f32, max_zoom: f32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0_f32.clamp(min_zoom, max_zoom),
            min_zoom,
            max_zoom,
        }
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(self.min_zoom, self.max_zoom);
    }

    /// Pan camera
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Resolve a screen position to the cell under it.
    /// Column runs along x, row along y; `None` when the point is off the grid.
    pub fn pick(&self, screen_x: f32, screen_y: f32, cell_size: f32, grid_size: usize) -> Option<Coord> {
        let span = cell_size * self.zoom;
        let gx = ((screen_x - self.offset_x) / span).floor();
        let gy = ((screen_y - self.offset_y) / span).floor();
        if gx < 0.0 || gy < 0.0 || gx >= grid_size as f32 || gy >= grid_size as f32 {
            return None;
        }
        Some(Coord::new(gy as usize + 1, gx as usize + 1))
    }

    /// Top-left screen position of a cell
    pub fn cell_to_screen(&self, coord: Coord, cell_size: f32) -> (f32, f32) {
        let span = cell_size * self.zoom;
        let screen_x = (coord.column - 1) as f32 * span + self.offset_x;
        let screen_y = (coord.row - 1) as f32 * span + self.offset_y;
        (screen_x, screen_y)
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.zoom = 1.0_f32.clamp(self.min_zoom, self.max_zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_maps_to_one_indexed_coord() {
        let camera = Camera::new(0.5, 10.0);
        assert_eq!(camera.pick(0.0, 0.0, 10.0, 5), Some(Coord::new(1, 1)));
        assert_eq!(camera.pick(25.0, 12.0, 10.0, 5), Some(Coord::new(2, 3)));
        assert_eq!(camera.pick(49.9, 49.9, 10.0, 5), Some(Coord::new(5, 5)));
    }

    #[test]
    fn test_pick_off_grid() {
        let camera = Camera::new(0.5, 10.0);
        assert_eq!(camera.pick(-1.0, 5.0, 10.0, 5), None);
        assert_eq!(camera.pick(50.0, 5.0, 10.0, 5), None);
        assert_eq!(camera.pick(5.0, 50.0, 10.0, 5), None);
    }

    #[test]
    fn test_pick_follows_pan_and_zoom() {
        let mut camera = Camera::new(0.5, 10.0);
        camera.pan(100.0, 100.0);
        camera.zoom_in(2.0);
        assert_eq!(camera.pick(100.0, 100.0, 10.0, 5), Some(Coord::new(1, 1)));
        assert_eq!(camera.pick(125.0, 145.0, 10.0, 5), Some(Coord::new(3, 2)));

        let (x, y) = camera.cell_to_screen(Coord::new(3, 2), 10.0);
        assert_eq!((x, y), (120.0, 140.0));
    }

    #[test]
    fn test_zoom_clamped() {
        let mut camera = Camera::new(0.5, 4.0);
        for _ in 0..50 {
            camera.zoom_in(1.5);
        }
        assert_eq!(camera.zoom, 4.0);
        for _ in 0..50 {
            camera.zoom_out(1.5);
        }
        assert_eq!(camera.zoom, 0.5);

        camera.reset();
        assert_eq!(camera.zoom, 1.0);
    }
}
