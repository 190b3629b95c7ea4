use crate::coords::Rect;
use crate::filter::ErasureFilter;
use crate::paint::PaintMode;

use super::{Drawable, Surface};

/// Draws the footprint of another drawable as transparent pixels.
#[derive(Copy, Clone)]
pub struct ErasedDrawable<'d> {
    inner: &'d dyn Drawable,
}

impl<'d> ErasedDrawable<'d> {
    pub fn new(inner: &'d dyn Drawable) -> Self {
        Self { inner }
    }
}

impl Drawable for ErasedDrawable<'_> {
    fn extents(&self) -> Rect {
        self.inner.extents()
    }

    fn anchor_extents(&self) -> Rect {
        self.inner.anchor_extents()
    }

    fn draw_to(&self, s: &mut Surface<'_>) {
        let mut params = s.params();
        params.paint_mode = PaintMode::Replace;
        let mut out = ErasureFilter::new(s.out());
        params.bind(&mut out).draw_object(self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Offscreen;
    use crate::paint::Color;
    use crate::scene::{SolidRect, SurfaceParams};

    #[test]
    fn erases_footprint_even_when_blending() {
        let rect = SolidRect::new(Rect::new(1, 1, 2, 2), Color::RED);
        let mut screen = Offscreen::new(4, 4, Color::WHITE);
        let p = SurfaceParams { clip_box: screen.extents(), ..SurfaceParams::default() };
        p.bind(&mut screen).draw_object(&ErasedDrawable::new(&rect));
        assert_eq!(screen.pixel(1, 1), Color::TRANSPARENT);
        assert_eq!(screen.pixel(2, 2), Color::TRANSPARENT);
        assert_eq!(screen.pixel(0, 0), Color::WHITE);
        assert_eq!(screen.pixel(3, 2), Color::WHITE);
    }

    #[test]
    fn keeps_anchor_of_inner() {
        let rect = SolidRect::new(Rect::new(1, 2, 3, 4), Color::RED);
        assert_eq!(ErasedDrawable::new(&rect).anchor_extents(), Rect::new(1, 2, 3, 4));
    }
}
