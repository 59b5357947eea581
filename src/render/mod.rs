//! Rendering stages: rotation, tinting, and grid composition.

mod colourize;
mod compose;
mod rotate;

pub use colourize::{colourize, INK_THRESHOLD};
pub use compose::compose;
pub use rotate::rotate;
