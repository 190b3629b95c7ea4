use crate::coords::Orientation;
use crate::paint::Color;

use super::DisplayOutput;

/// A physical (or simulated) display panel.
///
/// Adds lifecycle and geometry to the raw write capability. Writes between
/// [`begin`](Self::begin) and [`end`](Self::end) may be batched by the
/// driver; `Display` brackets every drawing session with that pair.
pub trait DisplayDevice: DisplayOutput {
    /// One-time hardware setup.
    fn init(&mut self) {}

    /// Starts a batch of writes (e.g. acquires the bus).
    fn begin(&mut self) {}

    /// Ends a batch of writes.
    fn end(&mut self) {}

    fn orientation(&self) -> Orientation;

    /// Changes the orientation. Called inside a `begin`/`end` pair.
    fn set_orientation(&mut self, orientation: Orientation);

    /// Native width, independent of orientation.
    fn raw_width(&self) -> i16;

    /// Native height, independent of orientation.
    fn raw_height(&self) -> i16;

    fn effective_width(&self) -> i16 {
        if self.orientation().is_xy_swapped() { self.raw_height() } else { self.raw_width() }
    }

    fn effective_height(&self) -> i16 {
        if self.orientation().is_xy_swapped() { self.raw_width() } else { self.raw_height() }
    }

    /// Tells the driver which color `Blend` writes should assume underneath,
    /// for devices that cannot read back.
    fn set_bg_color_hint(&mut self, _color: Color) {}
}
