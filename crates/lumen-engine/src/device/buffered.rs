//! Small fixed-size write buffers that batch per-pixel and per-rect output.
//!
//! Each buffer flushes when full and on drop, so a writer can be used as a
//! plain local and forgotten.

use crate::coords::Rect;
use crate::paint::{Color, PaintMode};

use super::DisplayOutput;

/// Batch size for every buffered writer.
pub const PIXEL_BUFFER_SIZE: usize = 64;

/// Collects `(x, y, color)` triples and emits them through
/// [`DisplayOutput::write_pixels`].
pub struct BufferedPixelWriter<'a> {
    out: &'a mut dyn DisplayOutput,
    mode: PaintMode,
    colors: [Color; PIXEL_BUFFER_SIZE],
    xs: [i16; PIXEL_BUFFER_SIZE],
    ys: [i16; PIXEL_BUFFER_SIZE],
    len: usize,
}

impl<'a> BufferedPixelWriter<'a> {
    pub fn new(out: &'a mut dyn DisplayOutput, mode: PaintMode) -> Self {
        Self {
            out,
            mode,
            colors: [Color::TRANSPARENT; PIXEL_BUFFER_SIZE],
            xs: [0; PIXEL_BUFFER_SIZE],
            ys: [0; PIXEL_BUFFER_SIZE],
            len: 0,
        }
    }

    #[inline]
    pub fn write_pixel(&mut self, x: i16, y: i16, color: Color) {
        self.colors[self.len] = color;
        self.xs[self.len] = x;
        self.ys[self.len] = y;
        self.len += 1;
        if self.len == PIXEL_BUFFER_SIZE {
            self.flush();
        }
    }

    pub fn flush(&mut self) {
        if self.len == 0 {
            return;
        }
        let n = self.len;
        self.len = 0;
        self.out.write_pixels(self.mode, &self.colors[..n], &self.xs[..n], &self.ys[..n]);
    }
}

impl Drop for BufferedPixelWriter<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}

/// [`BufferedPixelWriter`] that silently drops pixels outside a clip box.
///
/// Handed to user callbacks, which may write anywhere.
pub struct ClippingBufferedPixelWriter<'a> {
    inner: BufferedPixelWriter<'a>,
    clip: Rect,
}

impl<'a> ClippingBufferedPixelWriter<'a> {
    pub fn new(out: &'a mut dyn DisplayOutput, mode: PaintMode, clip: Rect) -> Self {
        Self { inner: BufferedPixelWriter::new(out, mode), clip }
    }

    #[inline]
    pub fn clip_box(&self) -> Rect {
        self.clip
    }

    #[inline]
    pub fn write_pixel(&mut self, x: i16, y: i16, color: Color) {
        if self.clip.contains_point(x, y) {
            self.inner.write_pixel(x, y, color);
        }
    }

    pub fn flush(&mut self) {
        self.inner.flush();
    }
}

/// Collects coordinates that all receive one color; emits them through
/// [`DisplayOutput::fill_pixels`].
pub struct BufferedPixelFiller<'a> {
    out: &'a mut dyn DisplayOutput,
    mode: PaintMode,
    color: Color,
    xs: [i16; PIXEL_BUFFER_SIZE],
    ys: [i16; PIXEL_BUFFER_SIZE],
    len: usize,
}

impl<'a> BufferedPixelFiller<'a> {
    pub fn new(out: &'a mut dyn DisplayOutput, mode: PaintMode, color: Color) -> Self {
        Self { out, mode, color, xs: [0; PIXEL_BUFFER_SIZE], ys: [0; PIXEL_BUFFER_SIZE], len: 0 }
    }

    #[inline]
    pub fn fill_pixel(&mut self, x: i16, y: i16) {
        self.xs[self.len] = x;
        self.ys[self.len] = y;
        self.len += 1;
        if self.len == PIXEL_BUFFER_SIZE {
            self.flush();
        }
    }

    pub fn flush(&mut self) {
        if self.len == 0 {
            return;
        }
        let n = self.len;
        self.len = 0;
        self.out.fill_pixels(self.mode, self.color, &self.xs[..n], &self.ys[..n]);
    }
}

impl Drop for BufferedPixelFiller<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}

/// Collects `(rect, color)` pairs; emits them through
/// [`DisplayOutput::write_rects`].
pub struct BufferedRectWriter<'a> {
    out: &'a mut dyn DisplayOutput,
    mode: PaintMode,
    colors: [Color; PIXEL_BUFFER_SIZE],
    rects: [Rect; PIXEL_BUFFER_SIZE],
    len: usize,
}

impl<'a> BufferedRectWriter<'a> {
    pub fn new(out: &'a mut dyn DisplayOutput, mode: PaintMode) -> Self {
        Self {
            out,
            mode,
            colors: [Color::TRANSPARENT; PIXEL_BUFFER_SIZE],
            rects: [Rect::empty(); PIXEL_BUFFER_SIZE],
            len: 0,
        }
    }

    #[inline]
    pub fn write_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.colors[self.len] = color;
        self.rects[self.len] = rect;
        self.len += 1;
        if self.len == PIXEL_BUFFER_SIZE {
            self.flush();
        }
    }

    pub fn flush(&mut self) {
        if self.len == 0 {
            return;
        }
        let n = self.len;
        self.len = 0;
        self.out.write_rects(self.mode, &self.colors[..n], &self.rects[..n]);
    }
}

impl Drop for BufferedRectWriter<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}

/// Collects rects that all receive one color; emits them through
/// [`DisplayOutput::fill_rects`].
pub struct BufferedRectFiller<'a> {
    out: &'a mut dyn DisplayOutput,
    mode: PaintMode,
    color: Color,
    rects: [Rect; PIXEL_BUFFER_SIZE],
    len: usize,
}

impl<'a> BufferedRectFiller<'a> {
    pub fn new(out: &'a mut dyn DisplayOutput, mode: PaintMode, color: Color) -> Self {
        Self { out, mode, color, rects: [Rect::empty(); PIXEL_BUFFER_SIZE], len: 0 }
    }

    #[inline]
    pub fn fill_rect(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        self.rects[self.len] = rect;
        self.len += 1;
        if self.len == PIXEL_BUFFER_SIZE {
            self.flush();
        }
    }

    pub fn flush(&mut self) {
        if self.len == 0 {
            return;
        }
        let n = self.len;
        self.len = 0;
        self.out.fill_rects(self.mode, self.color, &self.rects[..n]);
    }
}

impl Drop for BufferedRectFiller<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}

/// Streams colors into an address window in batches of
/// [`PIXEL_BUFFER_SIZE`].
pub struct BufferedColorWriter<'a> {
    out: &'a mut dyn DisplayOutput,
    colors: [Color; PIXEL_BUFFER_SIZE],
    len: usize,
}

impl<'a> BufferedColorWriter<'a> {
    /// Opens `window` on `out` and starts buffering.
    pub fn new(out: &'a mut dyn DisplayOutput, window: Rect, mode: PaintMode) -> Self {
        out.set_address(window, mode);
        Self { out, colors: [Color::TRANSPARENT; PIXEL_BUFFER_SIZE], len: 0 }
    }

    #[inline]
    pub fn write_color(&mut self, color: Color) {
        self.colors[self.len] = color;
        self.len += 1;
        if self.len == PIXEL_BUFFER_SIZE {
            self.flush();
        }
    }

    pub fn flush(&mut self) {
        if self.len == 0 {
            return;
        }
        let n = self.len;
        self.len = 0;
        self.out.write(&self.colors[..n]);
    }
}

impl Drop for BufferedColorWriter<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}
