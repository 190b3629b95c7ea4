use crate::coords::{Rect, Transformation};
use crate::device::{
    AddressWindow, BufferedPixelFiller, BufferedPixelWriter, BufferedRectFiller, BufferedRectWriter,
    DisplayOutput,
};
use crate::paint::{Color, PaintMode};

/// Maps every write through a [`Transformation`] and clips it to a box in
/// output coordinates.
///
/// Each input pixel becomes a block of `|sx| × |sy|` output pixels. Address
/// windows that a pure translation keeps inside the clip box are forwarded
/// unchanged, so streaming writes stay streaming.
pub struct TransformedDisplayOutput<'o> {
    out: &'o mut dyn DisplayOutput,
    transformation: Transformation,
    clip: Rect,
    window: AddressWindow,
    mode: PaintMode,
    passthrough: bool,
}

impl<'o> TransformedDisplayOutput<'o> {
    pub fn new(out: &'o mut dyn DisplayOutput, transformation: Transformation, clip: Rect) -> Self {
        Self {
            out,
            transformation,
            clip,
            window: AddressWindow::default(),
            mode: PaintMode::Blend,
            passthrough: false,
        }
    }

    #[inline]
    pub fn transformation(&self) -> Transformation {
        self.transformation
    }

    #[inline]
    pub fn clip_box(&self) -> Rect {
        self.clip
    }
}

/// Output pixels covered by input pixel `(x, y)`, clipped.
#[inline]
pub fn transform_pixel(t: Transformation, clip: Rect, x: i16, y: i16) -> Rect {
    t.transform_rect(Rect::new(x, y, x, y)).intersect(clip)
}

impl DisplayOutput for TransformedDisplayOutput<'_> {
    fn set_address(&mut self, window: Rect, mode: PaintMode) {
        let t = self.transformation;
        if t.is_translation() {
            let moved = window.translate(t.x_offset(), t.y_offset());
            if self.clip.contains(moved) {
                self.passthrough = true;
                self.out.set_address(moved, mode);
                return;
            }
        }
        self.passthrough = false;
        self.window = AddressWindow::new(window);
        self.mode = mode;
    }

    fn write(&mut self, colors: &[Color]) {
        if self.passthrough {
            self.out.write(colors);
            return;
        }
        let (t, clip) = (self.transformation, self.clip);
        let mut w = BufferedRectWriter::new(&mut *self.out, self.mode);
        for &c in colors {
            let (x, y) = self.window.advance();
            w.write_rect(transform_pixel(t, clip, x, y), c);
        }
    }

    fn write_rects(&mut self, mode: PaintMode, colors: &[Color], rects: &[Rect]) {
        let (t, clip) = (self.transformation, self.clip);
        let mut w = BufferedRectWriter::new(&mut *self.out, mode);
        for (&c, &r) in colors.iter().zip(rects) {
            w.write_rect(t.transform_rect(r).intersect(clip), c);
        }
    }

    fn fill_rects(&mut self, mode: PaintMode, color: Color, rects: &[Rect]) {
        let (t, clip) = (self.transformation, self.clip);
        let mut f = BufferedRectFiller::new(&mut *self.out, mode, color);
        for &r in rects {
            f.fill_rect(t.transform_rect(r).intersect(clip));
        }
    }

    fn write_pixels(&mut self, mode: PaintMode, colors: &[Color], xs: &[i16], ys: &[i16]) {
        let (t, clip) = (self.transformation, self.clip);
        if t.is_rescaled() {
            let mut w = BufferedRectWriter::new(&mut *self.out, mode);
            for ((&c, &x), &y) in colors.iter().zip(xs).zip(ys) {
                w.write_rect(transform_pixel(t, clip, x, y), c);
            }
        } else {
            let mut w = BufferedPixelWriter::new(&mut *self.out, mode);
            for ((&c, &x), &y) in colors.iter().zip(xs).zip(ys) {
                let p = transform_pixel(t, clip, x, y);
                if !p.is_empty() {
                    w.write_pixel(p.x_min(), p.y_min(), c);
                }
            }
        }
    }

    fn fill_pixels(&mut self, mode: PaintMode, color: Color, xs: &[i16], ys: &[i16]) {
        let (t, clip) = (self.transformation, self.clip);
        if t.is_rescaled() {
            let mut f = BufferedRectFiller::new(&mut *self.out, mode, color);
            for (&x, &y) in xs.iter().zip(ys) {
                f.fill_rect(transform_pixel(t, clip, x, y));
            }
        } else {
            let mut f = BufferedPixelFiller::new(&mut *self.out, mode, color);
            for (&x, &y) in xs.iter().zip(ys) {
                let p = transform_pixel(t, clip, x, y);
                if !p.is_empty() {
                    f.fill_pixel(p.x_min(), p.y_min());
                }
            }
        }
    }
}
