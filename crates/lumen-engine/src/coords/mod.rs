//! Coordinate and geometry types shared by devices, filters and drawables.
//!
//! Canonical space:
//! - Integer device pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Smooth shapes use `Vec2` with pixel centers at integer coordinates.

mod alignment;
mod orientation;
mod rect;
mod transform;
mod vec2;

pub use alignment::{Alignment, HAlign, VAlign};
pub use orientation::Orientation;
pub use rect::Rect;
pub use transform::Transformation;
pub use vec2::Vec2;

pub(crate) use rect::clamp16;
