mod algorithm;
mod bounds;
mod cell;
mod error;
mod grid_state;
mod patterns;
mod renderer;
pub mod decode;
pub mod step;
pub mod transform;

pub use algorithm::Algorithm;
pub use bounds::BoundingBox;
pub use cell::{Cell, CellState};
pub use decode::{CompositeReference, Decoded, PatternFormat};
pub use error::{DecodeError, PatternError};
pub use grid_state::GridState;
pub use patterns::{Diff, PatternDescription, presets};
pub use renderer::{RecordingRenderer, Renderer};
pub use step::{LivingSet, step, step_parallel};
pub use transform::{TransformSpec, transform};
