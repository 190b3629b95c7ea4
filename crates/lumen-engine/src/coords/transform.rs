use super::Rect;
use super::rect::clamp16;

/// Grid-aligned affine transformation: axis swap, then integer scale, then
/// translation.
///
/// `(x, y) → swap? (y, x) → (x·sx + dx, y·sy + dy)`
///
/// Every object pixel maps to a block of `|sx| × |sy|` device pixels. Builder
/// methods compose on top of the current mapping (the new step is applied
/// last).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Transformation {
    xy_swap: bool,
    x_scale: i16,
    y_scale: i16,
    x_offset: i16,
    y_offset: i16,
}

impl Default for Transformation {
    fn default() -> Self {
        Self::new()
    }
}

impl Transformation {
    /// Identity.
    #[inline]
    pub const fn new() -> Self {
        Self { xy_swap: false, x_scale: 1, y_scale: 1, x_offset: 0, y_offset: 0 }
    }

    #[inline]
    pub const fn xy_swap(self) -> bool {
        self.xy_swap
    }

    #[inline]
    pub const fn x_scale(self) -> i16 {
        self.x_scale
    }

    #[inline]
    pub const fn y_scale(self) -> i16 {
        self.y_scale
    }

    #[inline]
    pub const fn x_offset(self) -> i16 {
        self.x_offset
    }

    #[inline]
    pub const fn y_offset(self) -> i16 {
        self.y_offset
    }

    #[inline]
    pub const fn is_rescaled(self) -> bool {
        self.x_scale != 1 || self.y_scale != 1
    }

    /// True when the transformation is a pure translation (possibly zero).
    #[inline]
    pub const fn is_translation(self) -> bool {
        !self.xy_swap && !self.is_rescaled()
    }

    #[inline]
    pub const fn is_identity(self) -> bool {
        self.is_translation() && self.x_offset == 0 && self.y_offset == 0
    }

    #[inline]
    pub fn translate(self, dx: i16, dy: i16) -> Self {
        Self {
            x_offset: clamp16(self.x_offset as i32 + dx as i32),
            y_offset: clamp16(self.y_offset as i32 + dy as i32),
            ..self
        }
    }

    /// Scales by integer factors. Negative factors mirror; a zero factor
    /// counts as 1.
    #[inline]
    pub fn scale(self, sx: i16, sy: i16) -> Self {
        let (sx, sy) = (nonzero(sx), nonzero(sy));
        Self {
            xy_swap: self.xy_swap,
            x_scale: clamp16(self.x_scale as i32 * sx as i32),
            y_scale: clamp16(self.y_scale as i32 * sy as i32),
            x_offset: clamp16(self.x_offset as i32 * sx as i32),
            y_offset: clamp16(self.y_offset as i32 * sy as i32),
        }
    }

    #[inline]
    pub fn swap_xy(self) -> Self {
        Self {
            xy_swap: !self.xy_swap,
            x_scale: self.y_scale,
            y_scale: self.x_scale,
            x_offset: self.y_offset,
            y_offset: self.x_offset,
        }
    }

    #[inline]
    pub fn flip_x(self) -> Self {
        self.scale(-1, 1)
    }

    #[inline]
    pub fn flip_y(self) -> Self {
        self.scale(1, -1)
    }

    /// Quarter turn clockwise around the origin: `(x, y) → (−y, x)`.
    #[inline]
    pub fn rotate_right(self) -> Self {
        self.swap_xy().flip_x()
    }

    /// Quarter turn counter-clockwise around the origin: `(x, y) → (y, −x)`.
    #[inline]
    pub fn rotate_left(self) -> Self {
        self.swap_xy().flip_y()
    }

    #[inline]
    pub fn rotate_upside_down(self) -> Self {
        self.scale(-1, -1)
    }

    /// Device pixels covered by the object-space rect `r`.
    pub fn transform_rect(self, r: Rect) -> Rect {
        if r.is_empty() {
            return r;
        }
        let r = if self.xy_swap { r.swap_xy() } else { r };
        let (x_min, x_max) = forward_range(r.x_min(), r.x_max(), self.x_scale, self.x_offset);
        let (y_min, y_max) = forward_range(r.y_min(), r.y_max(), self.y_scale, self.y_offset);
        Rect::from_i32(x_min, y_min, x_max, y_max)
    }

    /// Smallest object-space rect whose image covers every device pixel of
    /// `clip` that the transformation can reach.
    pub fn smallest_enclosing_rect(self, clip: Rect) -> Rect {
        if clip.is_empty() {
            return clip;
        }
        let (x_min, x_max) = inverse_range(clip.x_min(), clip.x_max(), self.x_scale, self.x_offset);
        let (y_min, y_max) = inverse_range(clip.y_min(), clip.y_max(), self.y_scale, self.y_offset);
        let r = Rect::from_i32(x_min, y_min, x_max, y_max);
        if self.xy_swap { r.swap_xy() } else { r }
    }
}

#[inline]
fn nonzero(factor: i16) -> i16 {
    if factor == 0 { 1 } else { factor }
}

fn forward_range(lo: i16, hi: i16, scale: i16, offset: i16) -> (i32, i32) {
    let (lo, hi, s, o) = (lo as i32, hi as i32, scale as i32, offset as i32);
    if s > 0 {
        (lo * s + o, hi * s + o + s - 1)
    } else {
        (hi * s + o + s + 1, lo * s + o)
    }
}

fn inverse_range(lo: i16, hi: i16, scale: i16, offset: i16) -> (i32, i32) {
    let (lo, hi, s, o) = (lo as i32, hi as i32, scale as i32, offset as i32);
    if s > 0 {
        ((lo - o).div_euclid(s), (hi - o).div_euclid(s))
    } else {
        let s = -s;
        ((o - hi).div_euclid(s), (o - lo).div_euclid(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_noop() {
        let t = Transformation::new();
        assert!(t.is_identity());
        let r = Rect::new(1, 2, 3, 4);
        assert_eq!(t.transform_rect(r), r);
        assert_eq!(t.smallest_enclosing_rect(r), r);
    }

    #[test]
    fn translate_then_scale_scales_offsets() {
        let t = Transformation::new().translate(1, 2).scale(2, 3);
        assert_eq!((t.x_offset(), t.y_offset()), (2, 6));
        let t = Transformation::new().scale(2, 3).translate(1, 2);
        assert_eq!((t.x_offset(), t.y_offset()), (1, 2));
    }

    #[test]
    fn scaled_rect_covers_blocks() {
        let t = Transformation::new().scale(2, 3);
        assert_eq!(t.transform_rect(Rect::new(1, 2, 3, 4)), Rect::new(2, 6, 7, 14));
    }

    #[test]
    fn negative_scale_mirrors_blocks() {
        let t = Transformation::new().scale(-2, 1).translate(10, 0);
        // x = 0 → [9, 10], x = 1 → [7, 8]
        assert_eq!(t.transform_rect(Rect::new(0, 0, 0, 0)), Rect::new(9, 0, 10, 0));
        assert_eq!(t.transform_rect(Rect::new(0, 0, 1, 0)), Rect::new(7, 0, 10, 0));
    }

    #[test]
    fn swap_transposes_rect() {
        let t = Transformation::new().swap_xy();
        assert_eq!(t.transform_rect(Rect::new(1, 2, 3, 7)), Rect::new(2, 1, 7, 3));
    }

    #[test]
    fn rotate_right_maps_x_axis_down() {
        let t = Transformation::new().rotate_right();
        // (x, y) → (−y, x)
        assert_eq!(t.transform_rect(Rect::new(5, 0, 5, 0)), Rect::new(0, 5, 0, 5));
        assert_eq!(t.transform_rect(Rect::new(0, 3, 0, 3)), Rect::new(-3, 0, -3, 0));
    }

    #[test]
    fn enclosing_rect_inverts_transform_rect() {
        let transforms = [
            Transformation::new().scale(2, 3).translate(1, 2),
            Transformation::new().scale(-3, 2).translate(40, -1),
            Transformation::new().rotate_right().translate(20, 0),
            Transformation::new().rotate_left().scale(2, 2).translate(3, 50),
        ];
        let object = Rect::new(-4, 2, 7, 9);
        for t in transforms {
            let device = t.transform_rect(object);
            assert_eq!(t.smallest_enclosing_rect(device), object, "{t:?}");
        }
    }

    #[test]
    fn enclosing_rect_rounds_outward() {
        let t = Transformation::new().scale(1, 2).translate(1, 2);
        // Device rows 0..=10 are reached by object rows -1..=4.
        let r = t.smallest_enclosing_rect(Rect::new(0, 0, 9, 10));
        assert_eq!(r, Rect::new(-1, -1, 8, 4));
    }

    #[test]
    fn zero_scale_is_ignored() {
        let t = Transformation::new().scale(0, 2).scale(3, 0);
        assert_eq!(t, Transformation::new().scale(3, 2));
        let r = Transformation::new().scale(0, 0).smallest_enclosing_rect(Rect::new(0, 0, 9, 9));
        assert_eq!(r, Rect::new(0, 0, 9, 9));
    }
}
