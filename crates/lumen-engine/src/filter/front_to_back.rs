use crate::coords::Rect;
use crate::device::{AddressWindow, BufferedPixelFiller, BufferedPixelWriter, DisplayOutput};
use crate::paint::{Color, PaintMode};

/// Bitmap of pixels already written within a bounded region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOnceMask {
    bounds: Rect,
    stride: usize,
    bits: Vec<u8>,
}

impl WriteOnceMask {
    pub fn new(bounds: Rect) -> Self {
        let stride = (bounds.width() as usize).div_ceil(8);
        Self { bounds, stride, bits: vec![0; stride * bounds.height() as usize] }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn is_written(&self, x: i16, y: i16) -> bool {
        self.locate(x, y).is_some_and(|(i, bit)| self.bits[i] & bit != 0)
    }

    /// Marks `(x, y)` as written. Returns `false` if it already was; points
    /// outside the bounds are always claimable.
    pub fn claim(&mut self, x: i16, y: i16) -> bool {
        match self.locate(x, y) {
            None => true,
            Some((i, bit)) => {
                let fresh = self.bits[i] & bit == 0;
                self.bits[i] |= bit;
                fresh
            }
        }
    }

    fn locate(&self, x: i16, y: i16) -> Option<(usize, u8)> {
        if !self.bounds.contains_point(x, y) {
            return None;
        }
        let col = (x as i32 - self.bounds.x_min() as i32) as usize;
        let row = (y as i32 - self.bounds.y_min() as i32) as usize;
        Some((row * self.stride + col / 8, 0x80 >> (col % 8)))
    }
}

/// Forwards only the first write to each pixel inside the mask bounds.
///
/// Drawing front-to-back through this writer means every pixel is
/// physically written at most once. Writes outside the bounds pass through.
pub struct FrontToBackWriter<'o, 'm> {
    out: &'o mut dyn DisplayOutput,
    mask: &'m mut WriteOnceMask,
    window: AddressWindow,
    mode: PaintMode,
}

impl<'o, 'm> FrontToBackWriter<'o, 'm> {
    pub fn new(out: &'o mut dyn DisplayOutput, mask: &'m mut WriteOnceMask) -> Self {
        Self { out, mask, window: AddressWindow::default(), mode: PaintMode::Blend }
    }
}

impl DisplayOutput for FrontToBackWriter<'_, '_> {
    fn set_address(&mut self, window: Rect, mode: PaintMode) {
        self.window = AddressWindow::new(window);
        self.mode = mode;
    }

    fn write(&mut self, colors: &[Color]) {
        let mut w = BufferedPixelWriter::new(&mut *self.out, self.mode);
        for &c in colors {
            let (x, y) = self.window.advance();
            if self.mask.claim(x, y) {
                w.write_pixel(x, y, c);
            }
        }
    }

    fn write_rects(&mut self, mode: PaintMode, colors: &[Color], rects: &[Rect]) {
        let mut w = BufferedPixelWriter::new(&mut *self.out, mode);
        for (&c, r) in colors.iter().zip(rects) {
            for y in r.y_min()..=r.y_max() {
                for x in r.x_min()..=r.x_max() {
                    if self.mask.claim(x, y) {
                        w.write_pixel(x, y, c);
                    }
                }
            }
        }
    }

    fn fill_rects(&mut self, mode: PaintMode, color: Color, rects: &[Rect]) {
        let mut f = BufferedPixelFiller::new(&mut *self.out, mode, color);
        for r in rects {
            for y in r.y_min()..=r.y_max() {
                for x in r.x_min()..=r.x_max() {
                    if self.mask.claim(x, y) {
                        f.fill_pixel(x, y);
                    }
                }
            }
        }
    }

    fn write_pixels(&mut self, mode: PaintMode, colors: &[Color], xs: &[i16], ys: &[i16]) {
        let mut w = BufferedPixelWriter::new(&mut *self.out, mode);
        for ((&c, &x), &y) in colors.iter().zip(xs).zip(ys) {
            if self.mask.claim(x, y) {
                w.write_pixel(x, y, c);
            }
        }
    }

    fn fill_pixels(&mut self, mode: PaintMode, color: Color, xs: &[i16], ys: &[i16]) {
        let mut f = BufferedPixelFiller::new(&mut *self.out, mode, color);
        for (&x, &y) in xs.iter().zip(ys) {
            if self.mask.claim(x, y) {
                f.fill_pixel(x, y);
            }
        }
    }
}
