//! Display devices and raw output plumbing.
//!
//! This module is responsible for:
//! - the raw write capability (`DisplayOutput`) shared by devices and filters
//! - device lifecycle + geometry (`DisplayDevice`)
//! - batching writers that group single pixels and rects
//! - an in-memory device (`Offscreen`) and touch input traits

mod buffered;
mod device;
mod error;
mod offscreen;
mod output;
mod touch;
mod window;

pub use buffered::{
    BufferedColorWriter, BufferedPixelFiller, BufferedPixelWriter, BufferedRectFiller,
    BufferedRectWriter, ClippingBufferedPixelWriter, PIXEL_BUFFER_SIZE,
};
pub use device::DisplayDevice;
pub use error::OffscreenError;
pub use offscreen::Offscreen;
pub use output::DisplayOutput;
pub use touch::{TOUCH_MAX, TouchCalibration, TouchDevice, TouchPoint};
pub use window::AddressWindow;
