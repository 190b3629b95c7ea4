//! Antialiased shapes and the constructors that build common figures out of
//! them.
//!
//! All coordinates are pixel centers: pixel `(x, y)` covers the square
//! `[x - 0.5, x + 0.5] × [y - 0.5, y + 0.5]`.

mod round_rect;
mod wedge;

pub use round_rect::SmoothRoundRectShape;
pub use wedge::SmoothWedgeShape;

use crate::coords::Vec2;
use crate::paint::Color;

// ── lines ─────────────────────────────────────────────────────────────────

/// Line of constant `width` with round caps.
pub fn smooth_thick_line(a: Vec2, b: Vec2, width: f32, color: Color) -> SmoothWedgeShape {
    SmoothWedgeShape::new(a, width * 0.5, b, width * 0.5, color)
}

/// Line whose width changes linearly from `a_width` at `a` to `b_width` at `b`.
pub fn smooth_wedged_line(a: Vec2, a_width: f32, b: Vec2, b_width: f32, color: Color) -> SmoothWedgeShape {
    SmoothWedgeShape::new(a, a_width * 0.5, b, b_width * 0.5, color)
}

// ── circles ───────────────────────────────────────────────────────────────

pub fn smooth_filled_circle(center: Vec2, radius: f32, color: Color) -> SmoothRoundRectShape {
    SmoothRoundRectShape::new(center.x, center.y, center.x, center.y, radius, radius, color, color)
}

/// Ring whose outer edge is at `radius`. `thickness` is capped at `radius`.
pub fn smooth_thick_circle(center: Vec2, radius: f32, thickness: f32, color: Color) -> SmoothRoundRectShape {
    let ri = (radius - thickness).max(0.0);
    SmoothRoundRectShape::new(center.x, center.y, center.x, center.y, radius, ri, color, Color::TRANSPARENT)
}

// ── rounded rectangles ────────────────────────────────────────────────────
//
// The rectangle arguments are the outermost covered pixels, so the corner
// circle centers sit `radius - 0.5` inside them.

pub fn smooth_filled_round_rect(x0: f32, y0: f32, x1: f32, y1: f32, radius: f32, color: Color) -> SmoothRoundRectShape {
    let inset = radius - 0.5;
    SmoothRoundRectShape::new(x0 + inset, y0 + inset, x1 - inset, y1 - inset, radius, radius, color, color)
}

/// Rounded rectangle with an outline band of `thickness` pixels. The corner
/// radius is raised to at least `thickness`.
#[allow(clippy::too_many_arguments)]
pub fn smooth_thick_round_rect(
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    radius: f32,
    thickness: f32,
    outline: Color,
    interior: Color,
) -> SmoothRoundRectShape {
    let radius = radius.max(thickness);
    let inset = radius - 0.5;
    SmoothRoundRectShape::new(
        x0 + inset,
        y0 + inset,
        x1 - inset,
        y1 - inset,
        radius,
        radius - thickness,
        outline,
        interior,
    )
}

/// One pixel wide rounded outline with nothing inside.
pub fn smooth_round_rect(x0: f32, y0: f32, x1: f32, y1: f32, radius: f32, color: Color) -> SmoothRoundRectShape {
    smooth_thick_round_rect(x0, y0, x1, y1, radius, 1.0, color, Color::TRANSPARENT)
}
