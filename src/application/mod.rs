mod camera;
mod compositor;
mod config;
mod game_state;
mod source;

pub use camera::Camera;
pub use compositor::{Compositor, DEFAULT_MAX_DEPTH};
pub use config::{Config, ConfigError, Placement};
pub use game_state::{Command, GameState};
pub use source::{FileSource, LayeredSource, MemorySource, PatternSource, normalize};
