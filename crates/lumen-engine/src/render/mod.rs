//! Shape rasterization.
//!
//! Shapes are [`Drawable`](crate::scene::Drawable)s that compute per-pixel
//! coverage analytically and write through the surface output in small
//! batches.

pub mod shapes;

pub use shapes::{SmoothRoundRectShape, SmoothWedgeShape};
