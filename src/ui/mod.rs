mod button;

pub use button::Button;

// UI constants - functions for responsive layout
use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const CELL_SIZE: f32 = 6.0;

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

/// Panel buttons, in the order `input::process_button_clicks` expects
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    ["Play/Pause", "Step", "Clear", "Random"]
        .iter()
        .enumerate()
        .map(|(i, label)| Button::new(px, 20.0 + i as f32 * 50.0, PANEL_WIDTH, BUTTON_HEIGHT, *label))
        .collect()
}
