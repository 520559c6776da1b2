use std::path::Path;

use macroquad::logging::{info, warn};

use super::{Compositor, Config, PatternSource};
use crate::domain::{Algorithm, BoundingBox, Cell, Diff, GridState, PatternError, TransformSpec};

/// Things the user can ask the simulation to do
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Toggle(Cell),
    Advance,
    ToggleAutoplay,
    PrintGrid,
    Clear,
    Randomize,
    SpeedUp,
    SlowDown,
}

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState<S> {
    pub grid: GridState,
    pub compositor: Compositor<S>,
    pub algorithm: Algorithm,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_evolution_time_ms: f32,
}

impl<S: PatternSource> GameState<S> {
    /// Create new game state reading patterns from `source`
    pub fn new(source: S, config: &Config) -> Self {
        Self {
            grid: GridState::new(),
            compositor: Compositor::new(source, config.max_depth),
            algorithm: config.algorithm,
            is_running: false,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: config.updates_per_second,
            last_evolution_time_ms: 0.0,
        }
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Fill the area around the population (or the origin) with a random soup
    pub fn randomize(mut self) -> Self {
        let area = self.grid.bounds().unwrap_or(BoundingBox { min_x: -40, max_x: 40, min_y: -30, max_y: 30 });
        self.grid.randomize(area, 0.3, &mut rand::rng());
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Replace the grid with its next generation
    pub fn step_once(mut self) -> Self {
        let start = std::time::Instant::now();
        self.grid.advance(self.algorithm);
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        self
    }

    /// Resolve a pattern file and apply it with its top-left corner at
    /// `origin`. On error the grid is left untouched.
    pub fn place_pattern(&mut self, origin: Cell, path: &Path, spec: TransformSpec) -> Result<Diff, PatternError> {
        info!("placing {} at ({}, {}) {:?}", path.display(), origin.x, origin.y, spec);
        let diff = self.compositor.place(origin, path, spec).inspect_err(|e| {
            warn!("placement of {} failed: {}", path.display(), e);
        })?;
        self.grid.apply(&diff);
        info!("placed {}: {} set, {} cleared", path.display(), diff.set_cells.len(), diff.clear_cells.len());
        Ok(diff)
    }

    pub fn handle(mut self, command: Command) -> Self {
        match command {
            Command::Toggle(cell) => {
                self.grid.toggle_cell(cell);
                self
            }
            // a manual step only makes sense while paused
            Command::Advance if self.is_running => self,
            Command::Advance => self.step_once(),
            Command::ToggleAutoplay => self.toggle_running(),
            Command::PrintGrid => {
                print!("{}", self.grid.to_plain_text());
                self
            }
            Command::Clear => self.clear(),
            Command::Randomize => self.randomize(),
            Command::SpeedUp => self.adjust_speed(1.0),
            Command::SlowDown => self.adjust_speed(-1.0),
        }
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.update_timer = 0.0;
            self = self.step_once();
        }
        self
    }
}
