// Domain layer - cells, stepping, decoding, transforms
pub mod domain;

// Application layer - composition, configuration, coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, GridState, PatternDescription, TransformSpec, presets};
pub use application::{Camera, Compositor, Config, GameState};
