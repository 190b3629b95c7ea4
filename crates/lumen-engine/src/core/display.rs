use log::{debug, trace};

use crate::coords::{Orientation, Rect};
use crate::device::{DisplayDevice, DisplayOutput, TOUCH_MAX, TouchCalibration, TouchDevice, TouchPoint};
use crate::paint::Color;
use crate::scene::Rasterizable;

use super::context::DrawingContext;
use super::scope::NestGuard;

/// A display device together with its drawing defaults.
///
/// Holds the device (and optional touch panel) by mutable borrow for its
/// whole lifetime. Drawing goes through [`DrawingContext`]s; each one keeps
/// the device inside a `begin`/`end` bracket while it lives.
pub struct Display<'a> {
    device: &'a mut dyn DisplayDevice,
    touch: Option<&'a mut dyn TouchDevice>,
    calibration: TouchCalibration,
    nest_level: u32,
    orientation: Orientation,
    extents: Rect,
    bgcolor: Color,
    background: Option<&'a dyn Rasterizable>,
}

impl<'a> Display<'a> {
    pub fn new(device: &'a mut dyn DisplayDevice) -> Self {
        let orientation = device.orientation();
        let mut display = Self {
            device,
            touch: None,
            calibration: TouchCalibration::default(),
            nest_level: 0,
            orientation,
            extents: Rect::maximum(),
            bgcolor: Color::TRANSPARENT,
            background: None,
        };
        display.reset_extents();
        display
    }

    pub fn with_touch(
        device: &'a mut dyn DisplayDevice,
        touch: &'a mut dyn TouchDevice,
        calibration: TouchCalibration,
    ) -> Self {
        let mut display = Self::new(device);
        display.touch = Some(touch);
        display.calibration = calibration;
        display
    }

    /// Initializes the hardware and clears the screen to `bgcolor`.
    pub fn init(&mut self, bgcolor: Color) {
        self.device.init();
        if let Some(touch) = self.touch.as_deref_mut() {
            touch.init();
        }
        debug!(
            "display init: {}x{} {:?}",
            self.device.effective_width(),
            self.device.effective_height(),
            self.orientation
        );
        self.set_background_color(bgcolor);
        self.clear();
    }

    /// Fills the extents with the background.
    pub fn clear(&mut self) {
        DrawingContext::new(self).clear();
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Reorients the device. Resets the extents to the full screen, since
    /// width and height may have swapped.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation == orientation {
            return;
        }
        debug!("display orientation: {:?} -> {:?}", self.orientation, orientation);
        self.orientation = orientation;
        {
            let mut scope = self.enter_scope();
            scope.device.set_orientation(orientation);
        }
        self.reset_extents();
    }

    #[inline]
    pub fn width(&self) -> i16 {
        self.extents.width() as i16
    }

    #[inline]
    pub fn height(&self) -> i16 {
        self.extents.height() as i16
    }

    /// Region that new drawing contexts cover by default.
    #[inline]
    pub fn extents(&self) -> Rect {
        self.extents
    }

    pub fn set_extents(&mut self, extents: Rect) {
        self.extents = extents;
    }

    #[inline]
    pub fn background_color(&self) -> Color {
        self.bgcolor
    }

    #[inline]
    pub fn background(&self) -> Option<&'a dyn Rasterizable> {
        self.background
    }

    /// Uses a solid background color; drops any background raster.
    pub fn set_background_color(&mut self, bgcolor: Color) {
        self.bgcolor = bgcolor;
        self.background = None;
        self.device.set_bg_color_hint(bgcolor);
    }

    /// Draws everything on top of `background`.
    pub fn set_background(&mut self, background: &'a dyn Rasterizable) {
        self.background = Some(background);
        self.bgcolor = Color::TRANSPARENT;
    }

    #[inline]
    pub fn touch_calibration(&self) -> TouchCalibration {
        self.calibration
    }

    pub fn set_touch_calibration(&mut self, calibration: TouchCalibration) {
        self.calibration = calibration;
    }

    /// Current touch position in display coordinates, or `None` when not
    /// touched or there is no touch panel. `z` is passed through.
    pub fn get_touch(&mut self) -> Option<TouchPoint> {
        let raw = self.touch.as_deref_mut()?.get_touch()?;
        let p = self.calibration.calibrate(raw);
        let (mut x, mut y) = (p.x as i32, p.y as i32);
        let max = TOUCH_MAX as i32;
        if self.orientation.is_right_to_left() {
            x = max - x;
        }
        if self.orientation.is_bottom_to_top() {
            y = max - y;
        }
        if self.orientation.is_xy_swapped() {
            std::mem::swap(&mut x, &mut y);
        }
        let w = self.device.effective_width() as i32;
        let h = self.device.effective_height() as i32;
        Some(TouchPoint::new((x * (w - 1) / max) as i16, (y * (h - 1) / max) as i16, p.z))
    }

    /// Opens a device scope; released when the guard drops.
    pub fn enter_scope(&mut self) -> NestGuard<'_, 'a> {
        NestGuard::new(self)
    }

    #[inline]
    pub fn nest_level(&self) -> u32 {
        self.nest_level
    }

    pub(super) fn nest(&mut self) {
        self.nest_level += 1;
        if self.nest_level == 1 {
            trace!("device begin");
            self.device.begin();
        }
    }

    pub(super) fn unnest(&mut self) {
        self.nest_level -= 1;
        if self.nest_level == 0 {
            self.device.end();
            trace!("device end");
        }
    }

    pub(super) fn output(&mut self) -> &mut dyn DisplayOutput {
        &mut *self.device
    }

    fn reset_extents(&mut self) {
        self.extents = Rect::from_i32(
            0,
            0,
            self.device.effective_width() as i32 - 1,
            self.device.effective_height() as i32 - 1,
        );
    }
}
