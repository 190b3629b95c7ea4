use crate::coords::Rect;
use crate::paint::{Color, FillMode, PaintMode, alpha_blend};

use super::{Drawable, Rasterizable, Surface};
use super::drawable::read_rect_by_points;

/// Axis-aligned rectangle of one color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SolidRect {
    rect: Rect,
    color: Color,
}

impl SolidRect {
    #[inline]
    pub const fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }

    #[inline]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }
}

impl Drawable for SolidRect {
    fn extents(&self) -> Rect {
        self.rect
    }

    fn draw_interior_to(&self, s: &mut Surface<'_>) {
        let r = self.rect.translate(s.dx(), s.dy()).intersect(s.clip_box());
        if r.is_empty() || (s.fill_mode() == FillMode::Visible && self.color.is_transparent()) {
            return;
        }
        let (mode, c) = (s.paint_mode(), alpha_blend(s.bgcolor(), self.color));
        s.out().fill_rect(mode, r, c);
    }
}

impl Rasterizable for SolidRect {
    fn read_colors(&self, xs: &[i16], ys: &[i16], out: &mut [Color]) {
        for ((&x, &y), c) in xs.iter().zip(ys).zip(out.iter_mut()) {
            *c = if self.rect.contains_point(x, y) { self.color } else { Color::TRANSPARENT };
        }
    }

    fn read_color_rect(&self, rect: Rect, out: &mut [Color]) -> bool {
        if self.rect.contains(rect) {
            out[0] = self.color;
            return true;
        }
        if self.rect.intersect(rect).is_empty() {
            out[0] = Color::TRANSPARENT;
            return true;
        }
        read_rect_by_points(self, rect, out);
        false
    }
}

/// Unbounded area of one color; covers the whole clip box.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Fill {
    color: Color,
}

impl Fill {
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Drawable for Fill {
    fn extents(&self) -> Rect {
        Rect::maximum()
    }

    fn draw_interior_to(&self, s: &mut Surface<'_>) {
        if s.fill_mode() == FillMode::Visible && self.color.is_transparent() {
            return;
        }
        let (mode, clip, c) = (s.paint_mode(), s.clip_box(), alpha_blend(s.bgcolor(), self.color));
        s.out().fill_rect(mode, clip, c);
    }
}

impl Rasterizable for Fill {
    fn read_colors(&self, xs: &[i16], _ys: &[i16], out: &mut [Color]) {
        out.iter_mut().take(xs.len()).for_each(|c| *c = self.color);
    }

    fn read_color_rect(&self, _rect: Rect, out: &mut [Color]) -> bool {
        out[0] = self.color;
        true
    }
}

/// Overwrites the whole clip box with the surface background color.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Clear;

impl Drawable for Clear {
    fn extents(&self) -> Rect {
        Rect::maximum()
    }

    fn draw_interior_to(&self, s: &mut Surface<'_>) {
        let (clip, bg) = (s.clip_box(), s.bgcolor());
        s.out().fill_rect(PaintMode::Replace, clip, bg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Offscreen;
    use crate::scene::SurfaceParams;

    fn params(clip_box: Rect) -> SurfaceParams {
        SurfaceParams { clip_box, ..SurfaceParams::default() }
    }

    #[test]
    fn solid_rect_respects_offset_and_clip() {
        let mut screen = Offscreen::new(6, 6, Color::BLACK);
        let p = SurfaceParams { dx: 1, dy: 1, ..params(Rect::new(0, 0, 4, 4)) };
        p.bind(&mut screen).draw_object(&SolidRect::new(Rect::new(0, 0, 5, 5), Color::WHITE));
        assert_eq!(screen.pixel(0, 0), Color::BLACK);
        assert_eq!(screen.pixel(1, 1), Color::WHITE);
        assert_eq!(screen.pixel(4, 4), Color::WHITE);
        assert_eq!(screen.pixel(5, 5), Color::BLACK);
    }

    #[test]
    fn rectangle_mode_paints_background_around_rect() {
        let mut screen = Offscreen::new(4, 4, Color::BLACK);
        let p = SurfaceParams {
            fill_mode: FillMode::Rectangle,
            bgcolor: Color::BLUE,
            ..params(Rect::new(0, 0, 3, 3))
        };
        p.bind(&mut screen).draw_object(&SolidRect::new(Rect::new(1, 1, 2, 2), Color::RED));
        assert_eq!(screen.pixel(0, 0), Color::BLUE);
        assert_eq!(screen.pixel(1, 1), Color::RED);
        assert_eq!(screen.pixel(2, 2), Color::RED);
        assert_eq!(screen.pixel(3, 3), Color::BLUE);
    }

    #[test]
    fn fill_covers_clip_box_only() {
        let mut screen = Offscreen::new(4, 4, Color::BLACK);
        params(Rect::new(1, 0, 2, 3)).bind(&mut screen).draw_object(&Fill::new(Color::GREEN));
        assert_eq!(screen.pixel(0, 2), Color::BLACK);
        assert_eq!(screen.pixel(1, 2), Color::GREEN);
        assert_eq!(screen.pixel(3, 2), Color::BLACK);
    }

    #[test]
    fn clear_replaces_with_background() {
        let mut screen = Offscreen::new(2, 2, Color::WHITE);
        params(Rect::new(0, 0, 1, 1)).bind(&mut screen).draw_object(&Clear);
        assert!(screen.pixels().iter().all(|c| c.is_transparent()));
    }

    #[test]
    fn solid_rect_reports_uniform_tiles() {
        let rect = SolidRect::new(Rect::new(0, 0, 9, 9), Color::RED);
        let mut out = [Color::WHITE; 16];
        assert!(rect.read_color_rect(Rect::new(2, 2, 5, 5), &mut out));
        assert_eq!(out[0], Color::RED);
        assert!(rect.read_color_rect(Rect::new(20, 20, 23, 23), &mut out));
        assert_eq!(out[0], Color::TRANSPARENT);

        assert!(!rect.read_color_rect(Rect::new(8, 0, 11, 0), &mut out));
        assert_eq!(&out[..4], &[Color::RED, Color::RED, Color::TRANSPARENT, Color::TRANSPARENT]);
    }
}
