use crate::coords::Rect;
use crate::device::{BufferedColorWriter, BufferedPixelWriter, PIXEL_BUFFER_SIZE};
use crate::paint::{Color, FillMode, alpha_blend};

use super::{Drawable, Rasterizable, Surface};

/// Rasterizable backed by a closure `(x, y) -> Color`, bounded by `extents`.
///
/// Outside the extents the color is transparent.
pub struct FnRaster<F> {
    extents: Rect,
    f: F,
}

impl<F: Fn(i16, i16) -> Color> FnRaster<F> {
    pub fn new(extents: Rect, f: F) -> Self {
        Self { extents, f }
    }

    #[inline]
    fn color_at(&self, x: i16, y: i16) -> Color {
        if self.extents.contains_point(x, y) { (self.f)(x, y) } else { Color::TRANSPARENT }
    }
}

impl<F: Fn(i16, i16) -> Color> Drawable for FnRaster<F> {
    fn extents(&self) -> Rect {
        self.extents
    }

    fn draw_interior_to(&self, s: &mut Surface<'_>) {
        draw_raster(self, s);
    }
}

impl<F: Fn(i16, i16) -> Color> Rasterizable for FnRaster<F> {
    fn read_colors(&self, xs: &[i16], ys: &[i16], out: &mut [Color]) {
        for ((&x, &y), c) in xs.iter().zip(ys).zip(out.iter_mut()) {
            *c = self.color_at(x, y);
        }
    }
}

/// Renders a rasterizable in tiles of at most [`PIXEL_BUFFER_SIZE`] pixels.
///
/// Uniform tiles become one rect fill; others are streamed through an address
/// window. In [`FillMode::Visible`] fully transparent pixels are skipped.
pub fn draw_raster<R: Rasterizable + ?Sized>(raster: &R, s: &mut Surface<'_>) {
    let (dx, dy) = (s.dx(), s.dy());
    let bounds = raster.extents().translate(dx, dy).intersect(s.clip_box());
    if bounds.is_empty() {
        return;
    }
    let (bg, fill_mode, mode) = (s.bgcolor(), s.fill_mode(), s.paint_mode());
    let out = s.out();
    let mut buf = [Color::TRANSPARENT; PIXEL_BUFFER_SIZE];
    for_each_tile(bounds, |tile| {
        let obj_tile = tile.translate(-dx, -dy);
        if raster.read_color_rect(obj_tile, &mut buf) {
            let c = buf[0];
            if fill_mode == FillMode::Rectangle || !c.is_transparent() {
                out.fill_rect(mode, tile, alpha_blend(bg, c));
            }
            return;
        }
        let n = tile.area() as usize;
        if fill_mode == FillMode::Rectangle {
            let mut w = BufferedColorWriter::new(&mut *out, tile, mode);
            for &c in &buf[..n] {
                w.write_color(alpha_blend(bg, c));
            }
        } else {
            let mut i = 0;
            let mut w = BufferedPixelWriter::new(&mut *out, mode);
            for y in tile.y_min()..=tile.y_max() {
                for x in tile.x_min()..=tile.x_max() {
                    let c = buf[i];
                    i += 1;
                    if !c.is_transparent() {
                        w.write_pixel(x, y, alpha_blend(bg, c));
                    }
                }
            }
        }
    });
}

/// Visits `rect` in 8×8 tiles (edge tiles clipped).
pub(crate) fn for_each_tile(rect: Rect, mut f: impl FnMut(Rect)) {
    if rect.is_empty() {
        return;
    }
    let mut y = rect.y_min() as i32;
    while y <= rect.y_max() as i32 {
        let y1 = (y + 7).min(rect.y_max() as i32);
        let mut x = rect.x_min() as i32;
        while x <= rect.x_max() as i32 {
            let x1 = (x + 7).min(rect.x_max() as i32);
            f(Rect::from_i32(x, y, x1, y1));
            x += 8;
        }
        y += 8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Offscreen;
    use crate::paint::PaintMode;
    use crate::scene::SurfaceParams;

    fn checker() -> FnRaster<impl Fn(i16, i16) -> Color> {
        FnRaster::new(Rect::new(0, 0, 19, 19), |x, y| {
            if (x + y) % 2 == 0 { Color::WHITE } else { Color::TRANSPARENT }
        })
    }

    #[test]
    fn tiles_cover_rect_once() {
        let mut seen = 0u32;
        let mut tiles = 0;
        for_each_tile(Rect::new(-3, 2, 13, 10), |t| {
            assert!(t.width() <= 8 && t.height() <= 8);
            seen += t.area();
            tiles += 1;
        });
        assert_eq!(seen, Rect::new(-3, 2, 13, 10).area());
        assert_eq!(tiles, 6);
    }

    #[test]
    fn visible_mode_skips_transparent_pixels() {
        let mut screen = Offscreen::new(20, 20, Color::BLUE);
        let p = SurfaceParams { clip_box: screen.extents(), ..SurfaceParams::default() };
        p.bind(&mut screen).draw_object(&checker());
        assert_eq!(screen.pixel(0, 0), Color::WHITE);
        assert_eq!(screen.pixel(1, 0), Color::BLUE);
        assert_eq!(screen.pixel(19, 19), Color::WHITE);
    }

    #[test]
    fn rectangle_mode_writes_background() {
        let mut screen = Offscreen::new(20, 20, Color::BLUE);
        let p = SurfaceParams {
            clip_box: screen.extents(),
            fill_mode: FillMode::Rectangle,
            paint_mode: PaintMode::Replace,
            bgcolor: Color::BLACK,
            ..SurfaceParams::default()
        };
        p.bind(&mut screen).draw_object(&checker());
        assert_eq!(screen.pixel(0, 0), Color::WHITE);
        assert_eq!(screen.pixel(1, 0), Color::BLACK);
        assert_eq!(screen.pixel(18, 19), Color::BLACK);
    }

    #[test]
    fn offset_shifts_samples() {
        let raster = FnRaster::new(Rect::new(0, 0, 0, 0), |_, _| Color::RED);
        let mut screen = Offscreen::new(4, 4, Color::BLACK);
        let p = SurfaceParams { dx: 2, dy: 3, clip_box: screen.extents(), ..SurfaceParams::default() };
        p.bind(&mut screen).draw_object(&raster);
        assert_eq!(screen.pixel(2, 3), Color::RED);
        assert_eq!(screen.pixel(0, 0), Color::BLACK);
        assert_eq!(raster.get_color(1, 0), Color::TRANSPARENT);
    }
}
