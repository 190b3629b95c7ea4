use super::Rect;
use super::rect::clamp16;

/// Horizontal anchor used by aligned placement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum HAlign {
    /// Plain offset: the object's own origin lands on the coordinate.
    #[default]
    None,
    Left,
    Center,
    Right,
}

/// Vertical anchor used by aligned placement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum VAlign {
    /// Plain offset: the object's own origin lands on the coordinate.
    #[default]
    None,
    Top,
    Middle,
    Bottom,
}

/// Horizontal + vertical anchor pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    pub h: HAlign,
    pub v: VAlign,
}

impl Alignment {
    #[inline]
    pub const fn new(h: HAlign, v: VAlign) -> Self {
        Self { h, v }
    }

    pub const TOP_LEFT: Alignment = Alignment::new(HAlign::Left, VAlign::Top);
    pub const CENTER: Alignment = Alignment::new(HAlign::Center, VAlign::Middle);
    pub const BOTTOM_RIGHT: Alignment = Alignment::new(HAlign::Right, VAlign::Bottom);

    /// Offset that puts the chosen anchor of `anchor` at `(x, y)`.
    pub fn offset(self, anchor: Rect, x: i16, y: i16) -> (i16, i16) {
        (self.h.offset(anchor, x), self.v.offset(anchor, y))
    }
}

impl HAlign {
    fn offset(self, anchor: Rect, x: i16) -> i16 {
        let (x, lo, hi) = (x as i32, anchor.x_min() as i32, anchor.x_max() as i32);
        clamp16(match self {
            HAlign::None => x,
            HAlign::Left => x - lo,
            HAlign::Center => x - (lo + hi) / 2,
            HAlign::Right => x - hi,
        })
    }
}

impl VAlign {
    fn offset(self, anchor: Rect, y: i16) -> i16 {
        let (y, lo, hi) = (y as i32, anchor.y_min() as i32, anchor.y_max() as i32);
        clamp16(match self {
            VAlign::None => y,
            VAlign::Top => y - lo,
            VAlign::Middle => y - (lo + hi) / 2,
            VAlign::Bottom => y - hi,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_plain_offset() {
        let anchor = Rect::new(3, 4, 9, 9);
        assert_eq!(Alignment::default().offset(anchor, 5, 6), (5, 6));
    }

    #[test]
    fn edges_land_on_coordinate() {
        let anchor = Rect::new(3, 4, 9, 10);
        let (dx, dy) = Alignment::TOP_LEFT.offset(anchor, 0, 0);
        assert_eq!((anchor.x_min() + dx, anchor.y_min() + dy), (0, 0));
        let (dx, dy) = Alignment::BOTTOM_RIGHT.offset(anchor, 20, 20);
        assert_eq!((anchor.x_max() + dx, anchor.y_max() + dy), (20, 20));
    }

    #[test]
    fn center_uses_midpoint() {
        let anchor = Rect::new(0, 0, 4, 2);
        assert_eq!(Alignment::CENTER.offset(anchor, 10, 10), (8, 9));
    }
}
