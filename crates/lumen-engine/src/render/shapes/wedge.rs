use crate::coords::{Rect, Vec2};
use crate::device::{BufferedColorWriter, BufferedPixelWriter};
use crate::paint::{Color, FillMode, alpha_blend};
use crate::scene::{Drawable, Surface};

/// Antialiased capsule / cone between two circles.
///
/// Endpoint `a` has radius `ra`, endpoint `b` radius `rb`; the shape is the
/// region swept by a circle whose center and radius move linearly from one
/// endpoint to the other.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SmoothWedgeShape {
    a: Vec2,
    ra: f32,
    b: Vec2,
    rb: f32,
    color: Color,
    extents: Rect,
}

impl SmoothWedgeShape {
    pub fn new(a: Vec2, ra: f32, b: Vec2, rb: f32, color: Color) -> Self {
        let finite = a.is_finite() && b.is_finite() && ra.is_finite() && rb.is_finite();
        let extents = if finite {
            Rect::from_i32(
                (a.x - ra).min(b.x - rb).floor() as i32,
                (a.y - ra).min(b.y - rb).floor() as i32,
                (a.x + ra).max(b.x + rb).ceil() as i32,
                (a.y + ra).max(b.y + rb).ceil() as i32,
            )
        } else {
            Rect::empty()
        };
        Self { a, ra, b, rb, color, extents }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Coverage of pixel `(x, y)` in object coordinates, scaled to the
    /// color's alpha.
    pub fn alpha_at(&self, x: i16, y: i16) -> u8 {
        let max_alpha = self.color.a();
        let ba = self.b - self.a;
        let pa = Vec2::new(x as f32, y as f32) - self.a;
        let len_sq = ba.length_sq();
        let h = if len_sq > 0.0 { (pa.dot(ba) / len_sq).clamp(0.0, 1.0) } else { 1.0 };
        let dist = (pa - ba * h).length_sq().sqrt();
        let d = (self.ra + 0.5) - dist - h * (self.ra - self.rb);
        if d >= 1.0 {
            max_alpha
        } else if d <= 0.0 {
            0
        } else {
            (d * max_alpha as f32) as u8
        }
    }

    /// Row where the scan splits: the first row at or below the center of
    /// the endpoint whose circle reaches furthest left.
    fn split_row(&self) -> f32 {
        if self.a.x - self.ra > self.b.x - self.rb { self.b.y.ceil() } else { self.a.y.ceil() }
    }

    /// Pixels that may receive coverage, in output coordinates.
    fn clipped_box(&self, s: &Surface<'_>) -> Rect {
        self.extents.translate(s.dx(), s.dy()).intersect(s.clip_box())
    }

    fn draw_spans(&self, s: &mut Surface<'_>, bx: Rect) {
        let (dx, dy) = (s.dx(), s.dy());
        let max_alpha = self.color.a();
        let bg = s.bgcolor();
        let preblended = alpha_blend(bg, self.color);
        let mode = s.paint_mode();
        let mut w = BufferedPixelWriter::new(s.out(), mode);

        // Object-space scan box.
        let (x0, x1) = (bx.x_min() as i32 - dx as i32, bx.x_max() as i32 - dx as i32);
        let (y0, y1) = (bx.y_min() as i32 - dy as i32, bx.y_max() as i32 - dy as i32);
        let ys = (self.split_row() as i32).clamp(y0, y1 + 1);

        let mut scan_row = |y: i32, xs: &mut i32| {
            let mut opened = false;
            for x in *xs..=x1 {
                let alpha = self.alpha_at(x as i16, y as i16);
                if alpha == 0 {
                    if opened {
                        break;
                    }
                    continue;
                }
                if !opened {
                    opened = true;
                    *xs = x;
                }
                let c = if alpha == max_alpha {
                    preblended
                } else {
                    alpha_blend(bg, self.color.with_a(alpha))
                };
                w.write_pixel((x + dx as i32) as i16, (y + dy as i32) as i16, c);
            }
        };

        let mut xs = x0;
        for y in ys..=y1 {
            scan_row(y, &mut xs);
        }
        let mut xs = x0;
        for y in (y0..ys).rev() {
            scan_row(y, &mut xs);
        }
    }

    fn draw_full(&self, s: &mut Surface<'_>, bx: Rect) {
        let (dx, dy) = (s.dx(), s.dy());
        let max_alpha = self.color.a();
        let bg = s.bgcolor();
        let preblended = alpha_blend(bg, self.color);
        let mode = s.paint_mode();
        let mut w = BufferedColorWriter::new(s.out(), bx, mode);
        for y in bx.y_min()..=bx.y_max() {
            for x in bx.x_min()..=bx.x_max() {
                let alpha = self.alpha_at(x.wrapping_sub(dx), y.wrapping_sub(dy));
                w.write_color(match alpha {
                    0 => bg,
                    a if a == max_alpha => preblended,
                    a => alpha_blend(bg, self.color.with_a(a)),
                });
            }
        }
    }
}

impl Drawable for SmoothWedgeShape {
    fn extents(&self) -> Rect {
        self.extents
    }

    fn draw_interior_to(&self, s: &mut Surface<'_>) {
        let bx = self.clipped_box(s);
        if bx.is_empty() {
            return;
        }
        match s.fill_mode() {
            FillMode::Visible => {
                if self.color.is_transparent() {
                    return;
                }
                self.draw_spans(s, bx);
            }
            FillMode::Rectangle => self.draw_full(s, bx),
        }
    }
}
