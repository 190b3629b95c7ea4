//! Drawables and the surface they render onto.
//!
//! Responsibilities:
//! - `Surface`: per-draw destination (output + offset, clip and modes)
//! - `Drawable` / `Rasterizable`: what can be rendered or sampled
//! - small building blocks and wrappers (solid fills, closures, transform,
//!   erase)

mod basic;
mod drawable;
mod erased;
mod surface;
mod transformed;

pub(crate) mod raster;

pub use basic::{Clear, Fill, SolidRect};
pub use drawable::{Drawable, Rasterizable};
pub use erased::ErasedDrawable;
pub use raster::{FnRaster, draw_raster};
pub use surface::{Surface, SurfaceParams};
pub use transformed::TransformedDrawable;
