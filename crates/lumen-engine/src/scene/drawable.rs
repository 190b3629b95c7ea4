use crate::coords::Rect;
use crate::device::{BufferedRectFiller, PIXEL_BUFFER_SIZE};
use crate::paint::{Color, FillMode};

use super::Surface;

/// Something that can render itself onto a [`Surface`].
///
/// Coordinates are object-space; the surface offset maps them to output
/// space. Implementations must not write outside
/// `extents().translate(dx, dy) ∩ clip_box`, except for the background fill
/// done by the default [`draw_to`](Self::draw_to).
pub trait Drawable {
    /// Bounding box of everything the drawable may write.
    fn extents(&self) -> Rect;

    /// Box used for aligned placement. Defaults to [`extents`](Self::extents).
    fn anchor_extents(&self) -> Rect {
        self.extents()
    }

    /// Renders the drawable. In [`FillMode::Rectangle`] the part of the clip
    /// box outside the extents is filled with the background color first.
    fn draw_to(&self, s: &mut Surface<'_>) {
        if s.fill_mode() == FillMode::Rectangle {
            let ext = self.extents().translate(s.dx(), s.dy());
            fill_outside(s, ext);
        }
        self.draw_interior_to(s);
    }

    /// Renders the part inside the extents.
    fn draw_interior_to(&self, _s: &mut Surface<'_>) {}
}

/// A drawable that can report its color at any point.
///
/// Used as the color source of background and foreground filters.
pub trait Rasterizable: Drawable {
    /// Writes the color at `(xs[i], ys[i])` into `out[i]`.
    fn read_colors(&self, xs: &[i16], ys: &[i16], out: &mut [Color]);

    /// Reads every color of `rect`, row-major, into `out`.
    ///
    /// Returns `true` if the rect is known to be a single color; in that case
    /// only `out[0]` is written.
    fn read_color_rect(&self, rect: Rect, out: &mut [Color]) -> bool {
        read_rect_by_points(self, rect, out);
        false
    }

    fn get_color(&self, x: i16, y: i16) -> Color {
        let mut c = [Color::TRANSPARENT];
        self.read_colors(&[x], &[y], &mut c);
        c[0]
    }
}

/// Fills `rect` row-major by querying point batches.
pub(crate) fn read_rect_by_points<R: Rasterizable + ?Sized>(raster: &R, rect: Rect, out: &mut [Color]) {
    let mut xs = [0i16; PIXEL_BUFFER_SIZE];
    let mut ys = [0i16; PIXEL_BUFFER_SIZE];
    let mut n = 0;
    let mut start = 0;
    for y in rect.y_min()..=rect.y_max() {
        for x in rect.x_min()..=rect.x_max() {
            xs[n] = x;
            ys[n] = y;
            n += 1;
            if n == PIXEL_BUFFER_SIZE {
                raster.read_colors(&xs, &ys, &mut out[start..start + n]);
                start += n;
                n = 0;
            }
        }
    }
    if n > 0 {
        raster.read_colors(&xs[..n], &ys[..n], &mut out[start..start + n]);
    }
}

/// Fills `s.clip_box() \ inner` with the background color.
pub(crate) fn fill_outside(s: &mut Surface<'_>, inner: Rect) {
    let clip = s.clip_box();
    if clip.is_empty() {
        return;
    }
    let (mode, bg) = (s.paint_mode(), s.bgcolor());
    let mut filler = BufferedRectFiller::new(s.out(), mode, bg);
    let inner = inner.intersect(clip);
    if inner.is_empty() {
        filler.fill_rect(clip);
        return;
    }
    let (cx0, cy0, cx1, cy1) = (clip.x_min() as i32, clip.y_min() as i32, clip.x_max() as i32, clip.y_max() as i32);
    let (ix0, iy0, ix1, iy1) = (inner.x_min() as i32, inner.y_min() as i32, inner.x_max() as i32, inner.y_max() as i32);
    filler.fill_rect(Rect::from_i32(cx0, cy0, cx1, iy0 - 1));
    filler.fill_rect(Rect::from_i32(cx0, iy0, ix0 - 1, iy1));
    filler.fill_rect(Rect::from_i32(ix1 + 1, iy0, cx1, iy1));
    filler.fill_rect(Rect::from_i32(cx0, iy1 + 1, cx1, cy1));
}
