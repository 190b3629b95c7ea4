use std::marker::PhantomData;

use crate::coords::Rect;
use crate::device::{AddressWindow, DisplayOutput, PIXEL_BUFFER_SIZE};
use crate::paint::{Color, PaintMode, alpha_blend};
use crate::scene::Rasterizable;
use crate::scene::raster::for_each_tile;

/// How a written color combines with the raster sample at its coordinate.
pub trait SampleBlend {
    fn blend(written: Color, sample: Color) -> Color;
}

/// Written colors go on top of the sample.
#[derive(Debug, Copy, Clone)]
pub struct Behind;

/// Written colors go underneath the sample.
#[derive(Debug, Copy, Clone)]
pub struct InFront;

impl SampleBlend for Behind {
    #[inline]
    fn blend(written: Color, sample: Color) -> Color {
        blend_background(sample, written)
    }
}

impl SampleBlend for InFront {
    #[inline]
    fn blend(written: Color, sample: Color) -> Color {
        blend_foreground(written, sample)
    }
}

/// Per-pixel rule of [`BackgroundFilter`].
#[inline]
pub fn blend_background(sample: Color, written: Color) -> Color {
    alpha_blend(sample, written)
}

/// Per-pixel rule of [`ForegroundFilter`].
#[inline]
pub fn blend_foreground(written: Color, sample: Color) -> Color {
    alpha_blend(written, sample)
}

/// Composites every write against a [`Rasterizable`] sampled at the same
/// coordinate, then forwards it.
///
/// The raster is addressed in output coordinates shifted by `(-dx, -dy)`.
pub struct RasterFilter<'o, 'r, B> {
    out: &'o mut dyn DisplayOutput,
    raster: &'r dyn Rasterizable,
    dx: i16,
    dy: i16,
    window: AddressWindow,
    _blend: PhantomData<B>,
}

/// Draws underneath a background raster: `alpha_blend(sample, c)`.
pub type BackgroundFilter<'o, 'r> = RasterFilter<'o, 'r, Behind>;

/// Draws underneath a foreground raster: `alpha_blend(c, sample)`.
pub type ForegroundFilter<'o, 'r> = RasterFilter<'o, 'r, InFront>;

impl<'o, 'r, B: SampleBlend> RasterFilter<'o, 'r, B> {
    pub fn new(out: &'o mut dyn DisplayOutput, raster: &'r dyn Rasterizable, dx: i16, dy: i16) -> Self {
        Self { out, raster, dx, dy, window: AddressWindow::default(), _blend: PhantomData }
    }

    /// Samples `(xs[i], ys[i])` (output coordinates) and blends `colors[i]`
    /// into `out[i]`.
    fn blend_points(&self, colors: &[Color], xs: &[i16], ys: &[i16], out: &mut [Color]) {
        let n = colors.len();
        let mut sx = [0i16; PIXEL_BUFFER_SIZE];
        let mut sy = [0i16; PIXEL_BUFFER_SIZE];
        for i in 0..n {
            sx[i] = xs[i].wrapping_sub(self.dx);
            sy[i] = ys[i].wrapping_sub(self.dy);
        }
        self.raster.read_colors(&sx[..n], &sy[..n], &mut out[..n]);
        for (o, &c) in out[..n].iter_mut().zip(colors) {
            *o = B::blend(c, *o);
        }
    }

    /// Fills `rect` with `color` composited per tile.
    fn fill_composited(&mut self, mode: PaintMode, rect: Rect, color: Color) {
        let (raster, dx, dy) = (self.raster, self.dx, self.dy);
        let out = &mut *self.out;
        let mut buf = [Color::TRANSPARENT; PIXEL_BUFFER_SIZE];
        for_each_tile(rect, |tile| {
            if raster.read_color_rect(tile.translate(-dx, -dy), &mut buf) {
                out.fill_rect(mode, tile, B::blend(color, buf[0]));
                return;
            }
            let n = tile.area() as usize;
            for c in &mut buf[..n] {
                *c = B::blend(color, *c);
            }
            out.set_address(tile, mode);
            out.write(&buf[..n]);
        });
    }
}

impl<B: SampleBlend> DisplayOutput for RasterFilter<'_, '_, B> {
    fn set_address(&mut self, window: Rect, mode: PaintMode) {
        self.window = AddressWindow::new(window);
        self.out.set_address(window, mode);
    }

    fn write(&mut self, colors: &[Color]) {
        let mut xs = [0i16; PIXEL_BUFFER_SIZE];
        let mut ys = [0i16; PIXEL_BUFFER_SIZE];
        let mut blended = [Color::TRANSPARENT; PIXEL_BUFFER_SIZE];
        for chunk in colors.chunks(PIXEL_BUFFER_SIZE) {
            for i in 0..chunk.len() {
                (xs[i], ys[i]) = self.window.advance();
            }
            let n = chunk.len();
            self.blend_points(chunk, &xs[..n], &ys[..n], &mut blended);
            self.out.write(&blended[..n]);
        }
    }

    fn write_rects(&mut self, mode: PaintMode, colors: &[Color], rects: &[Rect]) {
        for (&c, &r) in colors.iter().zip(rects) {
            self.fill_composited(mode, r, c);
        }
    }

    fn fill_rects(&mut self, mode: PaintMode, color: Color, rects: &[Rect]) {
        for &r in rects {
            self.fill_composited(mode, r, color);
        }
    }

    fn write_pixels(&mut self, mode: PaintMode, colors: &[Color], xs: &[i16], ys: &[i16]) {
        let mut blended = [Color::TRANSPARENT; PIXEL_BUFFER_SIZE];
        for ((cs, xs), ys) in colors
            .chunks(PIXEL_BUFFER_SIZE)
            .zip(xs.chunks(PIXEL_BUFFER_SIZE))
            .zip(ys.chunks(PIXEL_BUFFER_SIZE))
        {
            let n = cs.len();
            self.blend_points(cs, xs, ys, &mut blended);
            self.out.write_pixels(mode, &blended[..n], xs, ys);
        }
    }

    fn fill_pixels(&mut self, mode: PaintMode, color: Color, xs: &[i16], ys: &[i16]) {
        let colors = [color; PIXEL_BUFFER_SIZE];
        let mut blended = [Color::TRANSPARENT; PIXEL_BUFFER_SIZE];
        for (xs, ys) in xs.chunks(PIXEL_BUFFER_SIZE).zip(ys.chunks(PIXEL_BUFFER_SIZE)) {
            let n = xs.len();
            self.blend_points(&colors[..n], xs, ys, &mut blended);
            self.out.write_pixels(mode, &blended[..n], xs, ys);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Offscreen;
    use crate::testing::{WritePath, block_pattern, pattern_pixels, send_pattern};
    use crate::scene::{FnRaster, SolidRect};

    fn half_white() -> Color {
        Color::new(0x80FF_FFFF)
    }

    #[test]
    fn background_rule_puts_write_on_top() {
        let sample = Color::new(0xFF00_0000);
        assert_eq!(blend_background(sample, Color::RED), Color::RED);
        assert_eq!(blend_foreground(Color::RED, Color::new(0xFF00_0000)), Color::new(0xFF00_0000));
    }

    #[test]
    fn background_blends_translucent_fill() {
        let bg = SolidRect::new(Rect::new(0, 0, 3, 3), Color::new(0xFF77_7777));
        let mut screen = Offscreen::new(4, 4, Color::BLACK);
        {
            let mut f = BackgroundFilter::new(&mut screen, &bg, 0, 0);
            f.fill_rect(PaintMode::Replace, Rect::new(1, 1, 2, 2), half_white());
        }
        let expected = alpha_blend(Color::new(0xFF77_7777), half_white());
        assert_eq!(screen.pixel(1, 1), expected);
        assert_eq!(screen.pixel(2, 2), expected);
        assert_eq!(screen.pixel(0, 0), Color::BLACK);
    }

    #[test]
    fn foreground_covers_writes() {
        // Opaque foreground on the left half only.
        let fg = FnRaster::new(Rect::new(0, 0, 3, 0), |x, _| {
            if x < 2 { Color::BLUE } else { Color::TRANSPARENT }
        });
        let mut screen = Offscreen::new(4, 1, Color::BLACK);
        {
            let mut f = ForegroundFilter::new(&mut screen, &fg, 0, 0);
            f.set_address(Rect::new(0, 0, 3, 0), PaintMode::Replace);
            f.write(&[Color::RED; 4]);
        }
        assert_eq!(screen.pixel(0, 0), Color::BLUE);
        assert_eq!(screen.pixel(1, 0), Color::BLUE);
        assert_eq!(screen.pixel(2, 0), Color::RED);
        assert_eq!(screen.pixel(3, 0), Color::RED);
    }

    #[test]
    fn raster_is_sampled_relative_to_offset() {
        let bg = SolidRect::new(Rect::new(0, 0, 0, 0), Color::WHITE);
        let mut screen = Offscreen::new(4, 4, Color::BLACK);
        {
            let mut f = BackgroundFilter::new(&mut screen, &bg, 2, 3);
            f.write_pixel(PaintMode::Replace, 2, 3, Color::TRANSPARENT);
            f.write_pixel(PaintMode::Replace, 0, 0, Color::TRANSPARENT);
        }
        assert_eq!(screen.pixel(2, 3), Color::WHITE);
        assert_eq!(screen.pixel(0, 0), Color::TRANSPARENT);
    }

    fn check_every_write_path<B: SampleBlend>(raster: &dyn Rasterizable) {
        let blocks = block_pattern(16, 11);
        let mut expected = Offscreen::new(16, 11, Color::BLACK);
        for (x, y, c) in pattern_pixels(&blocks) {
            expected.write_pixel(PaintMode::Blend, x, y, B::blend(c, raster.get_color(x - 3, y - 2)));
        }
        for path in WritePath::ALL {
            let mut screen = Offscreen::new(16, 11, Color::BLACK);
            send_pattern(&mut RasterFilter::<B>::new(&mut screen, raster, 3, 2), path, PaintMode::Blend, &blocks);
            assert_eq!(screen.pixels(), expected.pixels(), "{path:?}");
        }
    }

    fn gradient() -> FnRaster<impl Fn(i16, i16) -> Color> {
        FnRaster::new(Rect::new(-1, 0, 9, 7), |x, y| {
            Color::from_argb((x * 40 + y * 9) as u8, (x * 23) as u8, (y * 31) as u8, 200)
        })
    }

    #[test]
    fn background_every_write_path_matches_per_pixel() {
        check_every_write_path::<Behind>(&gradient());
        // Uniform tiles take the single-fill shortcut.
        check_every_write_path::<Behind>(&SolidRect::new(Rect::new(2, 1, 12, 6), Color::new(0x80_30A0C0)));
    }

    #[test]
    fn foreground_every_write_path_matches_per_pixel() {
        check_every_write_path::<InFront>(&gradient());
        check_every_write_path::<InFront>(&SolidRect::new(Rect::new(2, 1, 12, 6), Color::new(0x80_30A0C0)));
    }
}
