use macroquad::prelude::*;

use crate::application::{Camera, GameState};
use crate::domain::{BoundingBox, Cell, Diff, GridState, Renderer};
use crate::ui::{Button, CELL_SIZE, PANEL_WIDTH, grid_area_height, grid_area_width, panel_x};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0); // Bright green
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0); // Very dark gray
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Paints cells as squares through the camera, skipping anything off screen
pub struct ScreenRenderer<'a> {
    camera: &'a Camera,
    visible: BoundingBox,
    alive: Color,
    dead: Color,
}

impl<'a> ScreenRenderer<'a> {
    pub fn new(camera: &'a Camera) -> Self {
        Self {
            camera,
            visible: camera.visible_bounds(grid_area_width(), grid_area_height(), CELL_SIZE),
            alive: ALIVE_COLOR,
            dead: DEAD_COLOR,
        }
    }

    /// Semi-transparent colors for the placement ghost
    pub fn ghost(camera: &'a Camera) -> Self {
        Self {
            alive: Color::from_rgba(0, 255, 150, 120),
            dead: Color::from_rgba(60, 60, 60, 120),
            ..Self::new(camera)
        }
    }

    fn fill(&self, cell: Cell, color: Color) {
        if !self.visible.contains(cell) {
            return;
        }
        let size = CELL_SIZE * self.camera.zoom;
        let (x, y) = self.camera.grid_to_screen(cell, CELL_SIZE);
        draw_rectangle(x, y, size, size, color);
        if size >= 4.0 {
            draw_rectangle_lines(x, y, size, size, 1.0, GRID_LINE_COLOR);
        }
    }
}

impl Renderer for ScreenRenderer<'_> {
    fn draw(&mut self, cell: Cell) {
        self.fill(cell, self.alive);
    }

    fn erase(&mut self, cell: Cell) {
        self.fill(cell, self.dead);
    }
}

/// Draw every living cell that falls inside the grid area
pub fn draw_grid(grid: &GridState, camera: &Camera) {
    grid.render(&mut ScreenRenderer::new(camera));
}

/// Draw a pending placement as a ghost with its bounding box outlined
pub fn draw_pattern_preview(diff: &Diff, camera: &Camera) {
    diff.render(&mut ScreenRenderer::ghost(camera));

    if let Some(b) = diff.bounds() {
        let size = CELL_SIZE * camera.zoom;
        let (x, y) = camera.grid_to_screen(b.top_left(), CELL_SIZE);
        draw_rectangle_lines(
            x,
            y,
            b.width() as f32 * size,
            b.height() as f32 * size,
            2.0,
            Color::from_rgba(255, 255, 0, 180), // Yellow outline
        );
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with buttons and info
pub fn draw_controls<S>(
    state: &GameState<S>,
    camera: &Camera,
    buttons: &[Button],
    status: Option<&str>,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();

    let controls = [
        ("Controls:", 240.0, 14.0, WHITE),
        ("LMB: Toggle / Place", 255.0, 12.0, GRAY),
        ("N: Step   A: Auto", 268.0, 12.0, GRAY),
        ("S: Print  P: Place", 281.0, 12.0, GRAY),
        ("Wheel: Zoom", 294.0, 12.0, GRAY),
        ("Mid-drag: Pan", 307.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    let evolve_ms = state.last_evolution_time_ms;
    let perf_color = if evolve_ms < 5.0 {
        Color::from_rgba(0, 255, 0, 255)
    } else if evolve_ms < 33.0 {
        Color::from_rgba(255, 255, 0, 255)
    } else {
        Color::from_rgba(255, 0, 0, 255)
    };

    let population = format_number(state.grid.population());
    let labels = [
        (format!("Population: {}", population), 340.0, 14.0, WHITE),
        (format!("Evolve: {:.1}ms", evolve_ms), 360.0, 13.0, perf_color),
        (format!("{} | FPS: {}", state.algorithm.name(), get_fps()), 375.0, 12.0, GRAY),
        (format!("Speed: {:.0} gen/s", state.updates_per_second), 630.0, 16.0, WHITE),
        (format!("Generation: {}", state.generation), 680.0, 16.0, ALIVE_COLOR),
        (
            String::from(if state.is_running { "Running" } else { "Paused" }),
            735.0,
            16.0,
            if state.is_running { Color::from_rgba(0, 255, 0, 255) } else { Color::from_rgba(255, 165, 0, 255) },
        ),
        (format!("Zoom: {:.1}x", camera.zoom), 780.0, 14.0, GRAY),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    if let Some(message) = status {
        draw_text(message, 10.0, screen_height() - 10.0, 16.0, Color::from_rgba(255, 120, 120, 255));
    }
}
