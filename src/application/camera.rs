use crate::domain::{BoundingBox, Cell};

/// Camera manages viewport and zoom for grid navigation.
/// `offset_x`/`offset_y` is the screen position of cell (0, 0)'s top-left
/// corner; grid y grows upward while screen y grows downward.
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32, // 1.0 = normal, 2.0 = 2x zoomed in
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
        }
    }

    /// Camera with the grid origin in the middle of a `width` x `height` view
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            offset_x: width / 2.0,
            offset_y: height / 2.0,
            zoom: 1.0,
        }
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(0.1, 10.0);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(0.1, 10.0);
    }

    /// Pan camera
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Convert screen coordinates to the cell under them
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32, cell_size: f32) -> Cell {
        let size = cell_size * self.zoom;
        let x = ((screen_x - self.offset_x) / size).floor() as i64;
        let y = -(((screen_y - self.offset_y) / size).floor() as i64);
        Cell::new(x, y)
    }

    /// Screen position of a cell's top-left corner
    pub fn grid_to_screen(&self, cell: Cell, cell_size: f32) -> (f32, f32) {
        let size = cell_size * self.zoom;
        (cell.x as f32 * size + self.offset_x, self.offset_y - cell.y as f32 * size)
    }

    /// Get visible grid bounds for culling
    pub fn visible_bounds(&self, viewport_width: f32, viewport_height: f32, cell_size: f32) -> BoundingBox {
        let top_left = self.screen_to_grid(0.0, 0.0, cell_size);
        let bottom_right = self.screen_to_grid(viewport_width, viewport_height, cell_size);
        BoundingBox {
            min_x: top_left.x,
            max_x: bottom_right.x,
            min_y: bottom_right.y,
            max_y: top_left.y,
        }
    }

    /// Put the grid origin back at the given view center, zoom 1
    pub fn reset(&mut self, width: f32, height: f32) {
        *self = Self::centered(width, height);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_grid_round_trip() {
        let camera = Camera::centered(200.0, 100.0);
        for cell in [Cell::new(0, 0), Cell::new(-3, 4), Cell::new(7, -2)] {
            let (sx, sy) = camera.grid_to_screen(cell, 10.0);
            // sample the middle of the cell
            assert_eq!(camera.screen_to_grid(sx + 5.0, sy + 5.0, 10.0), cell);
        }
    }

    #[test]
    fn test_y_points_up() {
        let camera = Camera::centered(200.0, 100.0);
        let above = camera.screen_to_grid(100.0, 10.0, 10.0);
        let below = camera.screen_to_grid(100.0, 90.0, 10.0);
        assert!(above.y > below.y);
    }

    #[test]
    fn test_visible_bounds() {
        let camera = Camera::centered(200.0, 100.0);
        let b = camera.visible_bounds(200.0, 100.0, 10.0);
        assert_eq!((b.min_x, b.max_x), (-10, 10));
        assert_eq!((b.min_y, b.max_y), (-5, 5));
    }
}
