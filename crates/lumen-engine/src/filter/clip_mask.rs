use crate::coords::Rect;
use crate::device::{
    AddressWindow, BufferedPixelFiller, BufferedPixelWriter, DisplayOutput, PIXEL_BUFFER_SIZE,
};
use crate::paint::{Color, PaintMode};

/// 1-bit-per-pixel visibility mask.
///
/// Rows are `(width + 7) / 8` bytes, most significant bit first. A pixel is
/// visible iff it lies inside `bounds` with its bit set, xor `inverted`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClipMask<'m> {
    data: &'m [u8],
    bounds: Rect,
    inverted: bool,
}

impl<'m> ClipMask<'m> {
    #[inline]
    pub const fn new(data: &'m [u8], bounds: Rect) -> Self {
        Self { data, bounds, inverted: false }
    }

    /// Same mask with visibility flipped.
    #[inline]
    pub const fn inverted(self) -> Self {
        Self { inverted: !self.inverted, ..self }
    }

    #[inline]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub const fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Bytes per mask row.
    #[inline]
    pub fn stride(&self) -> usize {
        (self.bounds.width() as usize).div_ceil(8)
    }

    pub fn is_visible(&self, x: i16, y: i16) -> bool {
        self.is_set(x, y) != self.inverted
    }

    fn is_set(&self, x: i16, y: i16) -> bool {
        if !self.bounds.contains_point(x, y) {
            return false;
        }
        let col = (x as i32 - self.bounds.x_min() as i32) as usize;
        let row = (y as i32 - self.bounds.y_min() as i32) as usize;
        self.data
            .get(row * self.stride() + col / 8)
            .is_some_and(|b| b & (0x80 >> (col % 8)) != 0)
    }
}

/// Drops every write the mask hides.
///
/// The mask is addressed in output coordinates shifted by `(-dx, -dy)`.
pub struct ClipMaskFilter<'o, 'm> {
    out: &'o mut dyn DisplayOutput,
    mask: ClipMask<'m>,
    dx: i16,
    dy: i16,
    window: AddressWindow,
    mode: PaintMode,
}

impl<'o, 'm> ClipMaskFilter<'o, 'm> {
    pub fn new(out: &'o mut dyn DisplayOutput, mask: ClipMask<'m>, dx: i16, dy: i16) -> Self {
        Self { out, mask, dx, dy, window: AddressWindow::default(), mode: PaintMode::Blend }
    }

    #[inline]
    fn visible(&self, x: i16, y: i16) -> bool {
        self.mask.is_visible(x.wrapping_sub(self.dx), y.wrapping_sub(self.dy))
    }
}

impl DisplayOutput for ClipMaskFilter<'_, '_> {
    fn set_address(&mut self, window: Rect, mode: PaintMode) {
        self.window = AddressWindow::new(window);
        self.mode = mode;
    }

    fn write(&mut self, colors: &[Color]) {
        let (mask, dx, dy) = (self.mask, self.dx, self.dy);
        let mut w = BufferedPixelWriter::new(&mut *self.out, self.mode);
        for &c in colors {
            let (x, y) = self.window.advance();
            if mask.is_visible(x.wrapping_sub(dx), y.wrapping_sub(dy)) {
                w.write_pixel(x, y, c);
            }
        }
    }

    fn write_rects(&mut self, mode: PaintMode, colors: &[Color], rects: &[Rect]) {
        let (mask, dx, dy) = (self.mask, self.dx, self.dy);
        let mut w = BufferedPixelWriter::new(&mut *self.out, mode);
        for (&c, r) in colors.iter().zip(rects) {
            for y in r.y_min()..=r.y_max() {
                for x in r.x_min()..=r.x_max() {
                    if mask.is_visible(x.wrapping_sub(dx), y.wrapping_sub(dy)) {
                        w.write_pixel(x, y, c);
                    }
                }
            }
        }
    }

    fn fill_rects(&mut self, mode: PaintMode, color: Color, rects: &[Rect]) {
        let (mask, dx, dy) = (self.mask, self.dx, self.dy);
        let mut f = BufferedPixelFiller::new(&mut *self.out, mode, color);
        for r in rects {
            for y in r.y_min()..=r.y_max() {
                for x in r.x_min()..=r.x_max() {
                    if mask.is_visible(x.wrapping_sub(dx), y.wrapping_sub(dy)) {
                        f.fill_pixel(x, y);
                    }
                }
            }
        }
    }

    fn write_pixels(&mut self, mode: PaintMode, colors: &[Color], xs: &[i16], ys: &[i16]) {
        let mut kept_c = [Color::TRANSPARENT; PIXEL_BUFFER_SIZE];
        let mut kept_x = [0i16; PIXEL_BUFFER_SIZE];
        let mut kept_y = [0i16; PIXEL_BUFFER_SIZE];
        for ((cs, xs), ys) in colors
            .chunks(PIXEL_BUFFER_SIZE)
            .zip(xs.chunks(PIXEL_BUFFER_SIZE))
            .zip(ys.chunks(PIXEL_BUFFER_SIZE))
        {
            let mut n = 0;
            for ((&c, &x), &y) in cs.iter().zip(xs).zip(ys) {
                if self.visible(x, y) {
                    kept_c[n] = c;
                    kept_x[n] = x;
                    kept_y[n] = y;
                    n += 1;
                }
            }
            if n > 0 {
                self.out.write_pixels(mode, &kept_c[..n], &kept_x[..n], &kept_y[..n]);
            }
        }
    }

    fn fill_pixels(&mut self, mode: PaintMode, color: Color, xs: &[i16], ys: &[i16]) {
        let (mask, dx, dy) = (self.mask, self.dx, self.dy);
        let mut f = BufferedPixelFiller::new(&mut *self.out, mode, color);
        for (&x, &y) in xs.iter().zip(ys) {
            if mask.is_visible(x.wrapping_sub(dx), y.wrapping_sub(dy)) {
                f.fill_pixel(x, y);
            }
        }
    }
}
