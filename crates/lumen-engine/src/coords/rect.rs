/// Axis-aligned integer rectangle in device pixels (top-left origin).
///
/// Bounds are inclusive on both ends: `[x_min, x_max] × [y_min, y_max]`.
/// A rectangle with `x_min > x_max` or `y_min > y_max` is empty.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect {
    x_min: i16,
    y_min: i16,
    x_max: i16,
    y_max: i16,
}

/// Coordinate range of [`Rect::maximum`]. Leaves headroom so that translating
/// the maximum rect by a screen-sized offset does not overflow `i16`.
const MAX_EXTENT: i16 = 16384;

impl Rect {
    #[inline]
    pub const fn new(x_min: i16, y_min: i16, x_max: i16, y_max: i16) -> Self {
        Self { x_min, y_min, x_max, y_max }
    }

    /// Canonical empty rectangle.
    #[inline]
    pub const fn empty() -> Self {
        Self::new(0, 0, -1, -1)
    }

    /// The largest rectangle the engine works with; used as "unbounded".
    #[inline]
    pub const fn maximum() -> Self {
        Self::new(-MAX_EXTENT, -MAX_EXTENT, MAX_EXTENT - 1, MAX_EXTENT - 1)
    }

    /// Builds a rect from `i32` bounds, saturating into the `i16` range.
    #[inline]
    pub fn from_i32(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self::new(clamp16(x_min), clamp16(y_min), clamp16(x_max), clamp16(y_max))
    }

    #[inline]
    pub const fn x_min(self) -> i16 {
        self.x_min
    }

    #[inline]
    pub const fn y_min(self) -> i16 {
        self.y_min
    }

    #[inline]
    pub const fn x_max(self) -> i16 {
        self.x_max
    }

    #[inline]
    pub const fn y_max(self) -> i16 {
        self.y_max
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    /// Width in pixels; zero for empty rects.
    #[inline]
    pub fn width(self) -> i32 {
        (self.x_max as i32 - self.x_min as i32 + 1).max(0)
    }

    /// Height in pixels; zero for empty rects.
    #[inline]
    pub fn height(self) -> i32 {
        (self.y_max as i32 - self.y_min as i32 + 1).max(0)
    }

    #[inline]
    pub fn area(self) -> u32 {
        if self.is_empty() { 0 } else { (self.width() * self.height()) as u32 }
    }

    #[inline]
    pub fn contains_point(self, x: i16, y: i16) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// True if `other` lies entirely within `self`. Empty rects are contained
    /// in everything.
    #[inline]
    pub fn contains(self, other: Rect) -> bool {
        other.is_empty()
            || (other.x_min >= self.x_min
                && other.x_max <= self.x_max
                && other.y_min >= self.y_min
                && other.y_max <= self.y_max)
    }

    /// Intersection; the result is either well-formed or [`Rect::empty`].
    #[inline]
    pub fn intersect(self, other: Rect) -> Rect {
        let r = Rect::new(
            self.x_min.max(other.x_min),
            self.y_min.max(other.y_min),
            self.x_max.min(other.x_max),
            self.y_max.min(other.y_max),
        );
        if r.is_empty() { Rect::empty() } else { r }
    }

    /// Smallest rect covering both. Empty operands are ignored.
    #[inline]
    pub fn extent(self, other: Rect) -> Rect {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Rect::new(
            self.x_min.min(other.x_min),
            self.y_min.min(other.y_min),
            self.x_max.max(other.x_max),
            self.y_max.max(other.y_max),
        )
    }

    /// Pure coordinate shift. Empty rects stay empty.
    #[inline]
    pub fn translate(self, dx: i16, dy: i16) -> Rect {
        if self.is_empty() {
            return self;
        }
        Rect::from_i32(
            self.x_min as i32 + dx as i32,
            self.y_min as i32 + dy as i32,
            self.x_max as i32 + dx as i32,
            self.y_max as i32 + dy as i32,
        )
    }

    /// Mirrors the rect across the main diagonal.
    #[inline]
    pub const fn swap_xy(self) -> Rect {
        Rect::new(self.y_min, self.x_min, self.y_max, self.x_max)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Rect::empty()
    }
}

#[inline]
pub(crate) fn clamp16(v: i32) -> i16 {
    v.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x0: i16, y0: i16, x1: i16, y1: i16) -> Rect { Rect::new(x0, y0, x1, y1) }

    // ── size ──────────────────────────────────────────────────────────────

    #[test]
    fn single_pixel_has_unit_size() {
        let p = r(3, 4, 3, 4);
        assert_eq!(p.width(), 1);
        assert_eq!(p.height(), 1);
        assert_eq!(p.area(), 1);
    }

    #[test]
    fn inverted_bounds_are_empty() {
        assert!(r(5, 0, 4, 10).is_empty());
        assert!(r(0, 5, 10, 4).is_empty());
        assert_eq!(r(5, 0, 4, 10).area(), 0);
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_point_is_inclusive() {
        let b = r(0, 0, 9, 9);
        assert!(b.contains_point(0, 0));
        assert!(b.contains_point(9, 9));
        assert!(!b.contains_point(10, 9));
        assert!(!b.contains_point(-1, 0));
    }

    #[test]
    fn contains_rect() {
        let outer = r(0, 0, 99, 99);
        assert!(outer.contains(r(10, 10, 20, 20)));
        assert!(outer.contains(outer));
        assert!(!outer.contains(r(90, 90, 100, 99)));
        assert!(outer.contains(Rect::empty()));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        assert_eq!(r(0, 0, 9, 9).intersect(r(5, 5, 14, 14)), r(5, 5, 9, 9));
    }

    #[test]
    fn intersect_touching_edge_is_one_pixel_wide() {
        // Inclusive bounds: sharing column 9 is a real overlap.
        assert_eq!(r(0, 0, 9, 9).intersect(r(9, 0, 19, 9)), r(9, 0, 9, 9));
    }

    #[test]
    fn intersect_disjoint_is_empty() {
        let i = r(0, 0, 4, 4).intersect(r(20, 20, 24, 24));
        assert!(i.is_empty());
        assert_eq!(i, Rect::empty());
    }

    // ── extent / translate ────────────────────────────────────────────────

    #[test]
    fn extent_ignores_empty() {
        let a = r(1, 2, 3, 4);
        assert_eq!(a.extent(Rect::empty()), a);
        assert_eq!(Rect::empty().extent(a), a);
        assert_eq!(a.extent(r(10, 0, 11, 1)), r(1, 0, 11, 4));
    }

    #[test]
    fn translate_shifts_both_corners() {
        assert_eq!(r(1, 2, 3, 4).translate(10, -2), r(11, 0, 13, 2));
        assert!(Rect::empty().translate(5, 5).is_empty());
    }

    #[test]
    fn translate_saturates() {
        let t = Rect::maximum().translate(i16::MAX, 0);
        assert_eq!(t.x_max(), i16::MAX);
    }

    #[test]
    fn swap_xy_mirrors() {
        assert_eq!(r(1, 2, 3, 4).swap_xy(), r(2, 1, 4, 3));
    }
}
