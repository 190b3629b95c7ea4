//! Lumen engine crate.
//!
//! Antialiased shape rasterization and output compositing for small
//! pixel-addressed displays. Drawables write through a chain of filters
//! into a `DisplayDevice`; an in-memory `Offscreen` device stands in for
//! real panels.

pub mod coords;
pub mod core;
pub mod device;
pub mod filter;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;

#[cfg(test)]
mod testing;
