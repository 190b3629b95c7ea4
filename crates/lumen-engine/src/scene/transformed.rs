use crate::coords::{Rect, Transformation};
use crate::filter::TransformedDisplayOutput;

use super::{Drawable, Surface};

/// Draws another drawable through a [`Transformation`].
#[derive(Copy, Clone)]
pub struct TransformedDrawable<'d> {
    transformation: Transformation,
    inner: &'d dyn Drawable,
}

impl<'d> TransformedDrawable<'d> {
    pub fn new(transformation: Transformation, inner: &'d dyn Drawable) -> Self {
        Self { transformation, inner }
    }
}

impl Drawable for TransformedDrawable<'_> {
    fn extents(&self) -> Rect {
        self.transformation.transform_rect(self.inner.extents())
    }

    fn anchor_extents(&self) -> Rect {
        self.transformation.transform_rect(self.inner.anchor_extents())
    }

    fn draw_to(&self, s: &mut Surface<'_>) {
        let t = self.transformation.translate(s.dx(), s.dy());
        let mut params = s.params();
        params.dx = 0;
        params.dy = 0;
        params.clip_box = t.smallest_enclosing_rect(s.clip_box());
        let clip = s.clip_box();
        let mut out = TransformedDisplayOutput::new(s.out(), t, clip);
        params.bind(&mut out).draw_object(self.inner);
    }
}
