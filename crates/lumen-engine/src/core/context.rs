use log::{debug, trace};

use crate::coords::{Alignment, Rect, Transformation, clamp16};
use crate::device::{ClippingBufferedPixelWriter, DisplayOutput};
use crate::filter::{BackgroundFilter, ClipMask, ClipMaskFilter, FrontToBackWriter, TransformedDisplayOutput, WriteOnceMask};
use crate::paint::{Color, FillMode, PaintMode};
use crate::scene::{Clear, Drawable, ErasedDrawable, Fill, Rasterizable, Surface, SurfaceParams, TransformedDrawable};

use super::display::Display;
use super::scope::NestGuard;

/// A drawing session on a [`Display`].
///
/// Coordinates are relative to the context bounds: `(0, 0)` is the top-left
/// corner of the bounds. The device stays inside a `begin`/`end` bracket for
/// as long as the context lives; contexts opened on
/// [`display_mut`](Self::display_mut) nest inside it.
///
/// Writes issued by a drawable pass through, in order: the transformation,
/// the background raster, the clip mask, the write-once mask, then the device.
pub struct DrawingContext<'c, 'a> {
    display: NestGuard<'c, 'a>,
    /// Context origin in device coordinates.
    dx: i16,
    dy: i16,
    /// Bounds clipped to the display extents, device coordinates.
    max_clip: Rect,
    /// Device coordinates; always within `max_clip`.
    clip_box: Rect,
    width: i16,
    height: i16,
    bgcolor: Color,
    background: Option<&'c dyn Rasterizable>,
    /// Device position of the background raster's origin.
    background_origin: (i16, i16),
    clip_mask: Option<ClipMask<'c>>,
    fill_mode: FillMode,
    paint_mode: PaintMode,
    transformation: Transformation,
    write_once: Option<WriteOnceMask>,
}

impl<'c, 'a> DrawingContext<'c, 'a> {
    /// Context covering the display extents.
    pub fn new(display: &'c mut Display<'a>) -> Self {
        let bounds = display.extents();
        Self::with_bounds(display, bounds)
    }

    /// Context covering `bounds` (display coordinates), with its origin at
    /// the top-left corner of `bounds`.
    pub fn with_bounds(display: &'c mut Display<'a>, bounds: Rect) -> Self {
        let max_clip = bounds.intersect(display.extents());
        let bgcolor = display.background_color();
        let background = display.background();
        Self {
            display: display.enter_scope(),
            dx: bounds.x_min(),
            dy: bounds.y_min(),
            max_clip,
            clip_box: max_clip,
            width: bounds.width() as i16,
            height: bounds.height() as i16,
            bgcolor,
            background,
            background_origin: (0, 0),
            clip_mask: None,
            fill_mode: FillMode::Visible,
            paint_mode: PaintMode::Blend,
            transformation: Transformation::new(),
            write_once: None,
        }
    }

    #[inline]
    pub fn width(&self) -> i16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i16 {
        self.height
    }

    /// `(0, 0)-(width - 1, height - 1)`.
    pub fn bounds(&self) -> Rect {
        Rect::from_i32(0, 0, self.width as i32 - 1, self.height as i32 - 1)
    }

    /// The display this context draws on; open nested contexts here.
    pub fn display_mut(&mut self) -> &mut Display<'a> {
        &mut self.display
    }

    // ── background ────────────────────────────────────────────────────────

    #[inline]
    pub fn background_color(&self) -> Color {
        self.bgcolor
    }

    /// Uses a solid background color; drops any background raster.
    pub fn set_background_color(&mut self, bgcolor: Color) {
        self.bgcolor = bgcolor;
        self.background = None;
    }

    /// Composites every write over `background`, sampled in context
    /// coordinates. A background inherited from the display is sampled in
    /// display coordinates instead.
    pub fn set_background(&mut self, background: &'c dyn Rasterizable) {
        self.background = Some(background);
        self.background_origin = (self.dx, self.dy);
        self.bgcolor = Color::TRANSPARENT;
    }

    // ── clipping ──────────────────────────────────────────────────────────

    #[inline]
    pub fn clip_box(&self) -> Rect {
        self.clip_box.translate(-self.dx, -self.dy)
    }

    /// Restricts drawing to `clip_box` (context coordinates), within the
    /// bounds.
    pub fn set_clip_box(&mut self, clip_box: Rect) {
        self.clip_box = clip_box.translate(self.dx, self.dy).intersect(self.max_clip);
    }

    /// Hides pixels the mask does not show. The mask is in context
    /// coordinates.
    pub fn set_clip_mask(&mut self, mask: ClipMask<'c>) {
        self.clip_mask = Some(mask);
    }

    pub fn clear_clip_mask(&mut self) {
        self.clip_mask = None;
    }

    // ── modes ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn transformation(&self) -> Transformation {
        self.transformation
    }

    pub fn set_transform(&mut self, transformation: Transformation) {
        self.transformation = transformation;
    }

    pub fn clear_transform(&mut self) {
        self.transformation = Transformation::new();
    }

    #[inline]
    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    pub fn set_fill_mode(&mut self, fill_mode: FillMode) {
        self.fill_mode = fill_mode;
    }

    #[inline]
    pub fn paint_mode(&self) -> PaintMode {
        self.paint_mode
    }

    pub fn set_paint_mode(&mut self, paint_mode: PaintMode) {
        self.paint_mode = paint_mode;
    }

    /// From now on, each pixel within the bounds is written at most once;
    /// later draws only reach pixels no earlier draw touched. Draw
    /// front-to-back.
    pub fn set_write_once(&mut self) {
        if self.write_once.is_some() {
            return;
        }
        debug!("write-once enabled for {:?}", self.max_clip);
        self.write_once = Some(WriteOnceMask::new(self.max_clip));
    }

    #[inline]
    pub fn is_write_once(&self) -> bool {
        self.write_once.is_some()
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn draw(&mut self, object: &dyn Drawable) {
        self.draw_internal(object, 0, 0);
    }

    /// Draws `object` shifted by `(dx, dy)`, applied after the
    /// transformation.
    pub fn draw_at(&mut self, object: &dyn Drawable, dx: i16, dy: i16) {
        self.draw_internal(object, dx, dy);
    }

    /// Draws `object` so that the `alignment` anchor of its (transformed)
    /// anchor extents lands on `(x, y)`.
    pub fn draw_aligned(&mut self, object: &dyn Drawable, x: i16, y: i16, alignment: Alignment) {
        let anchor = if self.transformation.is_identity() {
            object.anchor_extents()
        } else {
            self.transformation.transform_rect(object.anchor_extents())
        };
        let (dx, dy) = alignment.offset(anchor, x, y);
        self.draw_internal(object, dx, dy);
    }

    /// Hands a pixel writer to `f`. Coordinates are transformed like any
    /// drawable's; pixels outside the clip box are dropped.
    pub fn draw_pixels(&mut self, f: impl Fn(&mut ClippingBufferedPixelWriter<'_>)) {
        let extents = self.transformation.smallest_enclosing_rect(self.clip_box());
        self.draw(&Pixels { f: &f, extents });
    }

    /// Overwrites the footprint of `object` with transparent pixels.
    pub fn erase(&mut self, object: &dyn Drawable) {
        self.draw(&ErasedDrawable::new(object));
    }

    pub fn erase_at(&mut self, object: &dyn Drawable, dx: i16, dy: i16) {
        self.draw_at(&ErasedDrawable::new(object), dx, dy);
    }

    pub fn erase_aligned(&mut self, object: &dyn Drawable, x: i16, y: i16, alignment: Alignment) {
        self.draw_aligned(&ErasedDrawable::new(object), x, y, alignment);
    }

    /// Blends `color` over the clip box.
    pub fn fill(&mut self, color: Color) {
        self.draw(&Fill::new(color));
    }

    /// Replaces the clip box with the background.
    pub fn clear(&mut self) {
        self.draw(&Clear);
    }

    fn draw_internal(&mut self, object: &dyn Drawable, dx: i16, dy: i16) {
        if self.clip_box.is_empty() {
            trace!("draw skipped: empty clip box");
            return;
        }
        let params = SurfaceParams {
            dx: self.dx,
            dy: self.dy,
            clip_box: self.clip_box,
            bgcolor: self.bgcolor,
            fill_mode: self.fill_mode,
            paint_mode: self.paint_mode,
        };

        // Stages wrap the device innermost-first.
        let mut out: &mut dyn DisplayOutput = self.display.output();
        let mut front_to_back;
        if let Some(mask) = self.write_once.as_mut() {
            front_to_back = FrontToBackWriter::new(out, mask);
            out = &mut front_to_back;
        }
        let mut masked;
        if let Some(mask) = self.clip_mask {
            masked = ClipMaskFilter::new(out, mask, self.dx, self.dy);
            out = &mut masked;
        }
        let mut composited;
        if let Some(background) = self.background {
            let (ox, oy) = self.background_origin;
            composited = BackgroundFilter::new(out, background, ox, oy);
            out = &mut composited;
        }

        let mut s = params.bind(out);
        let t = self.transformation;
        if t.is_identity() {
            s.draw_object_at(object, dx, dy);
        } else if t.is_translation() {
            s.draw_object_at(object, clamp16(t.x_offset() as i32 + dx as i32), clamp16(t.y_offset() as i32 + dy as i32));
        } else {
            s.draw_object(&TransformedDrawable::new(t.translate(dx, dy), object));
        }
    }
}

/// Drawable adapter for [`DrawingContext::draw_pixels`].
struct Pixels<'f> {
    f: &'f dyn Fn(&mut ClippingBufferedPixelWriter<'_>),
    extents: Rect,
}

impl Drawable for Pixels<'_> {
    fn extents(&self) -> Rect {
        self.extents
    }

    fn draw_to(&self, s: &mut Surface<'_>) {
        let (dx, dy, mode) = (s.dx(), s.dy(), s.paint_mode());
        if dx == 0 && dy == 0 {
            let mut w = ClippingBufferedPixelWriter::new(s.out(), mode, self.extents);
            (self.f)(&mut w);
            return;
        }
        let clip = s.clip_box();
        let mut out = TransformedDisplayOutput::new(s.out(), Transformation::new().translate(dx, dy), clip);
        let mut w = ClippingBufferedPixelWriter::new(&mut out, mode, self.extents);
        (self.f)(&mut w);
    }
}
