//! Pixel color model and composition rules.
//!
//! Scope:
//! - 32-bit straight-alpha ARGB color
//! - source-over blending
//! - paint / fill modes carried by surfaces
//!
//! Geometry types remain in `coords`.

mod blend;
mod color;
mod mode;

pub use blend::alpha_blend;
pub use color::Color;
pub use mode::{FillMode, PaintMode};
