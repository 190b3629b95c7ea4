use crate::coords::{Orientation, Rect};
use crate::paint::{Color, PaintMode, alpha_blend};

use super::{AddressWindow, DisplayDevice, DisplayOutput, OffscreenError};

/// In-memory ARGB8888 display.
///
/// Pixels are stored in native (raw) row-major order; writes are mapped from
/// logical coordinates through the current [`Orientation`]. `Blend` writes
/// compose over the stored pixel, `Replace` writes overwrite it.
#[derive(Debug, Clone)]
pub struct Offscreen {
    raw_width: i16,
    raw_height: i16,
    orientation: Orientation,
    pixels: Vec<Color>,
    window: AddressWindow,
    mode: PaintMode,
}

impl Offscreen {
    /// Creates a `width × height` buffer filled with `fill`. Non-positive
    /// sizes yield an empty buffer.
    pub fn new(width: i16, height: i16, fill: Color) -> Self {
        let (w, h) = (width.max(0), height.max(0));
        Self {
            raw_width: w,
            raw_height: h,
            orientation: Orientation::default(),
            pixels: vec![fill; w as usize * h as usize],
            window: AddressWindow::default(),
            mode: PaintMode::Blend,
        }
    }

    /// Wraps existing raw pixels.
    pub fn from_pixels(width: i16, height: i16, pixels: Vec<Color>) -> Result<Self, OffscreenError> {
        if width <= 0 || height <= 0 {
            return Err(OffscreenError::InvalidSize { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(OffscreenError::LengthMismatch { expected, actual: pixels.len() });
        }
        Ok(Self {
            raw_width: width,
            raw_height: height,
            orientation: Orientation::default(),
            pixels,
            window: AddressWindow::default(),
            mode: PaintMode::Blend,
        })
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Logical extents under the current orientation.
    pub fn extents(&self) -> Rect {
        Rect::from_i32(0, 0, self.effective_width() as i32 - 1, self.effective_height() as i32 - 1)
    }

    /// Color at logical `(x, y)`; transparent outside the buffer.
    pub fn pixel(&self, x: i16, y: i16) -> Color {
        self.index(x, y).map_or(Color::TRANSPARENT, |i| self.pixels[i])
    }

    /// Color at native `(x, y)`; transparent outside the buffer.
    pub fn raw_pixel(&self, x: i16, y: i16) -> Color {
        if x < 0 || y < 0 || x >= self.raw_width || y >= self.raw_height {
            return Color::TRANSPARENT;
        }
        self.pixels[y as usize * self.raw_width as usize + x as usize]
    }

    /// Native row-major pixels.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Native pixels as native-endian `u32` ARGB bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.effective_width() || y >= self.effective_height() {
            return None;
        }
        let (u, v) = self.orientation.to_physical(x, y, self.raw_width, self.raw_height);
        Some(v as usize * self.raw_width as usize + u as usize)
    }

    #[inline]
    fn put(&mut self, mode: PaintMode, x: i16, y: i16, color: Color) {
        if let Some(i) = self.index(x, y) {
            let dst = &mut self.pixels[i];
            *dst = match mode {
                PaintMode::Blend => alpha_blend(*dst, color),
                PaintMode::Replace => color,
            };
        }
    }

    fn put_rect(&mut self, mode: PaintMode, rect: Rect, color: Color) {
        let r = rect.intersect(self.extents());
        for y in r.y_min()..=r.y_max() {
            for x in r.x_min()..=r.x_max() {
                self.put(mode, x, y, color);
            }
        }
    }
}

impl DisplayOutput for Offscreen {
    fn set_address(&mut self, window: Rect, mode: PaintMode) {
        self.window = AddressWindow::new(window);
        self.mode = mode;
    }

    fn write(&mut self, colors: &[Color]) {
        for &c in colors {
            let (x, y) = self.window.advance();
            self.put(self.mode, x, y, c);
        }
    }

    fn write_rects(&mut self, mode: PaintMode, colors: &[Color], rects: &[Rect]) {
        for (&c, &r) in colors.iter().zip(rects) {
            self.put_rect(mode, r, c);
        }
    }

    fn fill_rects(&mut self, mode: PaintMode, color: Color, rects: &[Rect]) {
        for &r in rects {
            self.put_rect(mode, r, color);
        }
    }

    fn write_pixels(&mut self, mode: PaintMode, colors: &[Color], xs: &[i16], ys: &[i16]) {
        for ((&c, &x), &y) in colors.iter().zip(xs).zip(ys) {
            self.put(mode, x, y, c);
        }
    }

    fn fill_pixels(&mut self, mode: PaintMode, color: Color, xs: &[i16], ys: &[i16]) {
        for (&x, &y) in xs.iter().zip(ys) {
            self.put(mode, x, y, color);
        }
    }
}

impl DisplayDevice for Offscreen {
    fn init(&mut self) {
        log::debug!("offscreen {}x{} initialized", self.raw_width, self.raw_height);
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    fn raw_width(&self) -> i16 {
        self.raw_width
    }

    fn raw_height(&self) -> i16 {
        self.raw_height
    }
}
