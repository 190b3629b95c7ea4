use crate::coords::Rect;
use crate::device::{BufferedColorWriter, BufferedPixelWriter, DisplayOutput};
use crate::paint::{Color, FillMode, PaintMode, alpha_blend};
use crate::scene::{Drawable, Rasterizable, Surface};

/// Tiles of at most this many pixels are processed without splitting.
const TILE_PIXELS: u32 = 64;

/// Antialiased rounded rectangle with an outline band and an interior.
///
/// `(x0, y0)-(x1, y1)` are the centers of the four corner circles. The
/// outline band lies between radius `ri` and radius `r` from that
/// rectangle; everything closer than `ri` is interior.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SmoothRoundRectShape {
    geometry: Geometry,
    outline: Color,
    interior: Color,
    extents: Rect,
}

/// Shape geometry plus three boxes whose pixels are provably interior.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Geometry {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    r: f32,
    ri: f32,
    inner_wide: Rect,
    inner_tall: Rect,
    inner_mid: Rect,
}

#[inline]
fn floor_i32(v: f32) -> i32 {
    v.floor() as i32
}

#[inline]
fn ceil_i32(v: f32) -> i32 {
    v.ceil() as i32
}

impl Geometry {
    fn new(x0: f32, y0: f32, x1: f32, y1: f32, r: f32, ri: f32) -> Self {
        let inner_wide = Rect::from_i32(
            ceil_i32(x0 - ri + 0.5),
            ceil_i32(y0 + 0.5),
            floor_i32(x1 + ri - 0.5),
            floor_i32(y1 - 0.5),
        );
        let inner_tall = Rect::from_i32(
            ceil_i32(x0 + 0.5),
            ceil_i32(y0 - ri + 0.5),
            floor_i32(x1 - 0.5),
            floor_i32(y1 + ri - 0.5),
        );
        let d = 0.5f32.sqrt() * ri;
        let inner_mid = Rect::from_i32(
            ceil_i32(x0 - d + 0.5),
            ceil_i32(y0 - d + 0.5),
            floor_i32(x1 + d - 0.5),
            floor_i32(y1 + d - 0.5),
        );
        Self { x0, y0, x1, y1, r, ri, inner_wide, inner_tall, inner_mid }
    }

    fn translate(&self, dx: i16, dy: i16) -> Self {
        let (fx, fy) = (dx as f32, dy as f32);
        Self {
            x0: self.x0 + fx,
            y0: self.y0 + fy,
            x1: self.x1 + fx,
            y1: self.y1 + fy,
            inner_wide: self.inner_wide.translate(dx, dy),
            inner_tall: self.inner_tall.translate(dx, dy),
            inner_mid: self.inner_mid.translate(dx, dy),
            ..*self
        }
    }

    #[inline]
    fn inner_contains_point(&self, x: i16, y: i16) -> bool {
        self.inner_mid.contains_point(x, y)
            || self.inner_wide.contains_point(x, y)
            || self.inner_tall.contains_point(x, y)
    }

    #[inline]
    fn inner_contains(&self, rect: Rect) -> bool {
        self.inner_mid.contains(rect) || self.inner_wide.contains(rect) || self.inner_tall.contains(rect)
    }

    /// Squared distance from pixel `(x, y)` to the corner-center rectangle.
    #[inline]
    fn dist_sq(&self, x: i16, y: i16) -> f32 {
        let (fx, fy) = (x as f32, y as f32);
        let dx = fx - fx.max(self.x0).min(self.x1);
        let dy = fy - fy.max(self.y0).min(self.y1);
        dx * dx + dy * dy
    }

    /// Per-pixel color, without consulting the interior boxes.
    fn pixel_color(&self, x: i16, y: i16, outline: Color, interior: Color) -> Color {
        let (r, ri) = (self.r, self.ri);
        let d_sq = self.dist_sq(x, y);
        let ri_sq_adj = ri * ri + 0.25;
        if d_sq <= ri_sq_adj - ri - 1.0 {
            return interior;
        }
        let r_sq_adj = r * r + 0.25;
        if d_sq >= r_sq_adj + r {
            return Color::TRANSPARENT;
        }
        let fully_within_outer = d_sq <= r_sq_adj - r;
        let fully_outside_inner = r == ri || d_sq >= ri_sq_adj + ri;
        if fully_within_outer && fully_outside_inner {
            return outline;
        }
        let d = d_sq.sqrt();
        let a = outline.a() as f32;
        if fully_outside_inner {
            return outline.with_a((a * (r - d + 0.5)) as u8);
        }
        if fully_within_outer {
            return alpha_blend(interior, outline.with_a((a * (1.0 - (ri - d + 0.5))) as u8));
        }
        alpha_blend(interior, outline.with_a((a * ((r - d + 0.5) - (ri - d + 0.5)).max(0.0)) as u8))
    }

    /// Fast-path classification of a whole tile.
    fn classify(&self, tile: Rect) -> TileClass {
        if self.inner_contains(tile) {
            return TileClass::Interior;
        }
        let (x_min, y_min, x_max, y_max) = (tile.x_min(), tile.y_min(), tile.x_max(), tile.y_max());
        let dtl = self.dist_sq(x_min, y_min);
        let dtr = self.dist_sq(x_max, y_min);
        let dbl = self.dist_sq(x_min, y_max);
        let dbr = self.dist_sq(x_max, y_max);
        let r_min_sq = (self.ri - 0.5) * (self.ri - 0.5);
        if dtl < r_min_sq && dtr < r_min_sq && dbl < r_min_sq && dbr < r_min_sq {
            return TileClass::Interior;
        }

        // Entirely in one exterior quadrant, with its nearest corner out of reach.
        let r_max_sq = (self.r + 0.5) * (self.r + 0.5);
        let (fx_min, fx_max) = (x_min as f32, x_max as f32);
        let (fy_min, fy_max) = (y_min as f32, y_max as f32);
        let nearest = if fx_max < self.x0 {
            if fy_max < self.y0 {
                Some(dbr)
            } else if fy_min > self.y1 {
                Some(dtr)
            } else {
                None
            }
        } else if fx_min > self.x1 {
            if fy_max < self.y0 {
                Some(dbl)
            } else if fy_min > self.y1 {
                Some(dtl)
            } else {
                None
            }
        } else {
            None
        };
        match nearest {
            Some(d) if d >= r_max_sq => TileClass::Exterior,
            _ => TileClass::Mixed,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum TileClass {
    Interior,
    Exterior,
    Mixed,
}

/// Per-draw state: geometry in output coordinates plus pre-blended colors.
struct Painter {
    g: Geometry,
    outline: Color,
    interior: Color,
    bgcolor: Color,
    pre_blended_interior: Color,
    pre_blended_outline: Color,
    fill_mode: FillMode,
    paint_mode: PaintMode,
}

impl Painter {
    /// Output color of a pixel whose shape color is `c`; `None` to skip.
    #[inline]
    fn resolve(&self, c: Color) -> Option<Color> {
        if c.is_transparent() {
            return match self.fill_mode {
                FillMode::Rectangle => Some(self.bgcolor),
                FillMode::Visible => None,
            };
        }
        Some(if c == self.interior {
            self.pre_blended_interior
        } else if c == self.outline {
            self.pre_blended_outline
        } else {
            alpha_blend(self.bgcolor, c)
        })
    }

    /// Renders a tile of at most [`TILE_PIXELS`] pixels.
    fn fill_tile(&self, out: &mut dyn DisplayOutput, tile: Rect) {
        match self.g.classify(tile) {
            TileClass::Interior => {
                if self.fill_mode == FillMode::Rectangle || !self.interior.is_transparent() {
                    out.fill_rect(self.paint_mode, tile, self.pre_blended_interior);
                }
            }
            TileClass::Exterior => {
                if self.fill_mode == FillMode::Rectangle {
                    out.fill_rect(self.paint_mode, tile, self.bgcolor);
                }
            }
            TileClass::Mixed => match self.fill_mode {
                FillMode::Visible => {
                    let mut w = BufferedPixelWriter::new(out, self.paint_mode);
                    for y in tile.y_min()..=tile.y_max() {
                        for x in tile.x_min()..=tile.x_max() {
                            let c = self.g.pixel_color(x, y, self.outline, self.interior);
                            if let Some(c) = self.resolve(c) {
                                w.write_pixel(x, y, c);
                            }
                        }
                    }
                }
                FillMode::Rectangle => {
                    let mut w = BufferedColorWriter::new(out, tile, self.paint_mode);
                    for y in tile.y_min()..=tile.y_max() {
                        for x in tile.x_min()..=tile.x_max() {
                            let c = self.g.pixel_color(x, y, self.outline, self.interior);
                            w.write_color(self.resolve(c).unwrap_or(self.bgcolor));
                        }
                    }
                }
            },
        }
    }
}

impl SmoothRoundRectShape {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        radius: f32,
        interior_radius: f32,
        outline: Color,
        interior: Color,
    ) -> Self {
        let finite = [x0, y0, x1, y1, radius, interior_radius].iter().all(|v| v.is_finite());
        let extents = if finite {
            Rect::from_i32(
                (x0 - radius).round() as i32,
                (y0 - radius).round() as i32,
                (x1 + radius).round() as i32,
                (y1 + radius).round() as i32,
            )
        } else {
            Rect::empty()
        };
        Self {
            geometry: Geometry::new(x0, y0, x1, y1, radius, interior_radius),
            outline,
            interior,
            extents,
        }
    }

    #[inline]
    pub fn outline_color(&self) -> Color {
        self.outline
    }

    #[inline]
    pub fn interior_color(&self) -> Color {
        self.interior
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.geometry.r
    }

    #[inline]
    pub fn interior_radius(&self) -> f32 {
        self.geometry.ri
    }

    /// Per-pixel color, ignoring every fast path.
    pub fn pixel_color(&self, x: i16, y: i16) -> Color {
        self.geometry.pixel_color(x, y, self.outline, self.interior)
    }
}

impl Drawable for SmoothRoundRectShape {
    fn extents(&self) -> Rect {
        self.extents
    }

    fn draw_interior_to(&self, s: &mut Surface<'_>) {
        let (dx, dy) = (s.dx(), s.dy());
        let bx = self.extents.translate(dx, dy).intersect(s.clip_box());
        if bx.is_empty() {
            return;
        }
        let bg = s.bgcolor();
        let pre_blended_interior = alpha_blend(bg, self.interior);
        let painter = Painter {
            g: self.geometry.translate(dx, dy),
            outline: self.outline,
            interior: self.interior,
            bgcolor: bg,
            pre_blended_interior,
            pre_blended_outline: alpha_blend(pre_blended_interior, self.outline),
            fill_mode: s.fill_mode(),
            paint_mode: s.paint_mode(),
        };
        let out = s.out();
        if bx.area() <= TILE_PIXELS {
            painter.fill_tile(out, bx);
            return;
        }
        // 8×8 grid aligned to output coordinates; edge tiles clipped to the box.
        let (x_min, y_min) = (bx.x_min() as i32, bx.y_min() as i32);
        let (x_max, y_max) = (bx.x_max() as i32, bx.y_max() as i32);
        let mut y = y_min.div_euclid(8) * 8;
        while y <= y_max {
            let mut x = x_min.div_euclid(8) * 8;
            while x <= x_max {
                let tile = Rect::from_i32(x.max(x_min), y.max(y_min), (x + 7).min(x_max), (y + 7).min(y_max));
                painter.fill_tile(&mut *out, tile);
                x += 8;
            }
            y += 8;
        }
    }
}

impl Rasterizable for SmoothRoundRectShape {
    fn read_colors(&self, xs: &[i16], ys: &[i16], out: &mut [Color]) {
        for ((&x, &y), c) in xs.iter().zip(ys).zip(out.iter_mut()) {
            *c = self.get_color(x, y);
        }
    }

    fn read_color_rect(&self, rect: Rect, out: &mut [Color]) -> bool {
        match self.geometry.classify(rect) {
            TileClass::Interior => {
                out[0] = self.interior;
                true
            }
            TileClass::Exterior => {
                out[0] = Color::TRANSPARENT;
                true
            }
            TileClass::Mixed => {
                let mut i = 0;
                for y in rect.y_min()..=rect.y_max() {
                    for x in rect.x_min()..=rect.x_max() {
                        out[i] = self.pixel_color(x, y);
                        i += 1;
                    }
                }
                false
            }
        }
    }

    fn get_color(&self, x: i16, y: i16) -> Color {
        if self.geometry.inner_contains_point(x, y) {
            return self.interior;
        }
        self.pixel_color(x, y)
    }
}
