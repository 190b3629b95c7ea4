use crate::coords::Rect;
use crate::paint::{Color, PaintMode};

/// Raw pixel-write capability.
///
/// Implemented by devices and by every stage of the output filter chain.
/// Coordinates are in the output's own (logical) space; writes outside the
/// output's area are dropped by the receiver.
pub trait DisplayOutput {
    /// Opens an address window for subsequent [`write`](Self::write) calls.
    ///
    /// Pixels are streamed row-major, left to right, top to bottom, starting
    /// at the top-left corner of `window`.
    fn set_address(&mut self, window: Rect, mode: PaintMode);

    /// Streams colors into the current address window.
    fn write(&mut self, colors: &[Color]);

    /// Fills every rect with its own color (`colors[i]` for `rects[i]`).
    fn write_rects(&mut self, mode: PaintMode, colors: &[Color], rects: &[Rect]);

    /// Fills every rect with one color.
    fn fill_rects(&mut self, mode: PaintMode, color: Color, rects: &[Rect]);

    /// Writes individual pixels (`colors[i]` at `(xs[i], ys[i])`).
    fn write_pixels(&mut self, mode: PaintMode, colors: &[Color], xs: &[i16], ys: &[i16]);

    /// Writes one color to individual pixels.
    fn fill_pixels(&mut self, mode: PaintMode, color: Color, xs: &[i16], ys: &[i16]);

    #[inline]
    fn fill_rect(&mut self, mode: PaintMode, rect: Rect, color: Color) {
        self.fill_rects(mode, color, &[rect]);
    }

    #[inline]
    fn write_pixel(&mut self, mode: PaintMode, x: i16, y: i16, color: Color) {
        self.write_pixels(mode, &[color], &[x], &[y]);
    }
}
