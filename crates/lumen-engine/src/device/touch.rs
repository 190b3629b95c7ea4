use crate::coords::{Orientation, Rect};

/// Largest raw touch coordinate (12-bit panels).
pub const TOUCH_MAX: i16 = 4095;

/// Raw touch sample. `x` and `y` are in `0..=TOUCH_MAX` after calibration;
/// `z` is pressure, device-specific.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct TouchPoint {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl TouchPoint {
    #[inline]
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }
}

/// Touch-panel hardware.
pub trait TouchDevice {
    fn init(&mut self) {}

    /// Current touch, or `None` when the panel is not pressed.
    fn get_touch(&mut self) -> Option<TouchPoint>;
}

/// Maps raw panel readings onto the full `0..=TOUCH_MAX` range and into the
/// display's native orientation.
///
/// `bounds` are the raw readings observed at the panel edges; `orientation`
/// is how the panel is mounted relative to the display.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TouchCalibration {
    bounds: Rect,
    orientation: Orientation,
}

impl Default for TouchCalibration {
    fn default() -> Self {
        Self::new(Rect::new(0, 0, TOUCH_MAX, TOUCH_MAX), Orientation::default())
    }
}

impl TouchCalibration {
    #[inline]
    pub const fn new(bounds: Rect, orientation: Orientation) -> Self {
        Self { bounds, orientation }
    }

    /// Uncalibrated, but possibly reoriented.
    #[inline]
    pub fn oriented(orientation: Orientation) -> Self {
        Self { orientation, ..Self::default() }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn calibrate(&self, point: TouchPoint) -> TouchPoint {
        let mut x = rescale(point.x, self.bounds.x_min(), self.bounds.x_max());
        let mut y = rescale(point.y, self.bounds.y_min(), self.bounds.y_max());
        if self.orientation.is_xy_swapped() {
            std::mem::swap(&mut x, &mut y);
        }
        if self.orientation.is_right_to_left() {
            x = TOUCH_MAX - x;
        }
        if self.orientation.is_bottom_to_top() {
            y = TOUCH_MAX - y;
        }
        TouchPoint { x, y, z: point.z }
    }
}

fn rescale(v: i16, lo: i16, hi: i16) -> i16 {
    let span = hi as i32 - lo as i32;
    if span <= 0 {
        return 0;
    }
    let v = (v as i32).clamp(lo as i32, hi as i32);
    ((v - lo as i32) * TOUCH_MAX as i32 / span) as i16
}
