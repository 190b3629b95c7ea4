//! Display orchestration.
//!
//! - `Display`: a borrowed device plus drawing defaults and touch input
//! - `NestGuard`: keeps the device inside `begin`/`end` while drawing
//! - `DrawingContext`: a drawing session that routes drawables through the
//!   output filter chain

mod context;
mod display;
mod scope;

pub use context::DrawingContext;
pub use display::Display;
pub use scope::NestGuard;
