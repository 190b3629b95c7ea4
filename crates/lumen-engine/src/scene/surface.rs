use crate::coords::Rect;
use crate::device::DisplayOutput;
use crate::paint::{Color, FillMode, PaintMode};

use super::Drawable;

/// Everything a drawable needs to know about its destination, except the
/// output itself.
///
/// `Copy`, so a filter can take the parameters of one surface and re-bind
/// them to a wrapping output with [`bind`](Self::bind).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceParams {
    /// Offset added to object coordinates to get output coordinates.
    pub dx: i16,
    pub dy: i16,
    /// Writes must stay within this box (output coordinates).
    pub clip_box: Rect,
    /// Color assumed underneath the drawable; used for pre-blending.
    pub bgcolor: Color,
    pub fill_mode: FillMode,
    pub paint_mode: PaintMode,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            dx: 0,
            dy: 0,
            clip_box: Rect::maximum(),
            bgcolor: Color::TRANSPARENT,
            fill_mode: FillMode::Visible,
            paint_mode: PaintMode::Blend,
        }
    }
}

impl SurfaceParams {
    #[inline]
    pub fn bind<'a>(self, out: &'a mut dyn DisplayOutput) -> Surface<'a> {
        Surface { out, params: self }
    }
}

/// Destination of a single draw call: a borrowed output plus parameters.
pub struct Surface<'a> {
    out: &'a mut dyn DisplayOutput,
    params: SurfaceParams,
}

impl<'a> Surface<'a> {
    #[inline]
    pub fn out(&mut self) -> &mut dyn DisplayOutput {
        &mut *self.out
    }

    #[inline]
    pub fn params(&self) -> SurfaceParams {
        self.params
    }

    #[inline]
    pub fn dx(&self) -> i16 {
        self.params.dx
    }

    #[inline]
    pub fn dy(&self) -> i16 {
        self.params.dy
    }

    #[inline]
    pub fn clip_box(&self) -> Rect {
        self.params.clip_box
    }

    #[inline]
    pub fn bgcolor(&self) -> Color {
        self.params.bgcolor
    }

    #[inline]
    pub fn fill_mode(&self) -> FillMode {
        self.params.fill_mode
    }

    #[inline]
    pub fn paint_mode(&self) -> PaintMode {
        self.params.paint_mode
    }

    /// Draws `object`; no-op when the clip box is empty.
    pub fn draw_object(&mut self, object: &dyn Drawable) {
        if self.params.clip_box.is_empty() {
            return;
        }
        object.draw_to(self);
    }

    /// Draws `object` shifted by `(dx, dy)` on top of the surface offset.
    pub fn draw_object_at(&mut self, object: &dyn Drawable, dx: i16, dy: i16) {
        let saved = self.params;
        self.params.dx = saved.dx.saturating_add(dx);
        self.params.dy = saved.dy.saturating_add(dy);
        self.draw_object(object);
        self.params = saved;
    }
}
