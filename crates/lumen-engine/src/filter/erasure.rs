use crate::coords::Rect;
use crate::device::{DisplayOutput, PIXEL_BUFFER_SIZE};
use crate::paint::{Color, PaintMode};

/// Replaces every written color with transparent.
///
/// Paired with [`PaintMode::Replace`] this punches holes in whatever was
/// drawn before, shaped like the drawable.
pub struct ErasureFilter<'o> {
    out: &'o mut dyn DisplayOutput,
}

impl<'o> ErasureFilter<'o> {
    pub fn new(out: &'o mut dyn DisplayOutput) -> Self {
        Self { out }
    }
}

impl DisplayOutput for ErasureFilter<'_> {
    fn set_address(&mut self, window: Rect, mode: PaintMode) {
        self.out.set_address(window, mode);
    }

    fn write(&mut self, colors: &[Color]) {
        const CLEAR: [Color; PIXEL_BUFFER_SIZE] = [Color::TRANSPARENT; PIXEL_BUFFER_SIZE];
        for chunk in colors.chunks(PIXEL_BUFFER_SIZE) {
            self.out.write(&CLEAR[..chunk.len()]);
        }
    }

    fn write_rects(&mut self, mode: PaintMode, _colors: &[Color], rects: &[Rect]) {
        self.out.fill_rects(mode, Color::TRANSPARENT, rects);
    }

    fn fill_rects(&mut self, mode: PaintMode, _color: Color, rects: &[Rect]) {
        self.out.fill_rects(mode, Color::TRANSPARENT, rects);
    }

    fn write_pixels(&mut self, mode: PaintMode, _colors: &[Color], xs: &[i16], ys: &[i16]) {
        self.out.fill_pixels(mode, Color::TRANSPARENT, xs, ys);
    }

    fn fill_pixels(&mut self, mode: PaintMode, _color: Color, xs: &[i16], ys: &[i16]) {
        self.out.fill_pixels(mode, Color::TRANSPARENT, xs, ys);
    }
}
