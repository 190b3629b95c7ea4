/// Display orientation: one of the 8 combinations of 90° rotation and mirroring.
///
/// Mapping from logical to physical (native) device coordinates:
/// 1) swap x and y if [`is_xy_swapped`](Self::is_xy_swapped)
/// 2) reverse the physical x axis if [`is_right_to_left`](Self::is_right_to_left)
/// 3) reverse the physical y axis if [`is_bottom_to_top`](Self::is_bottom_to_top)
///
/// The default orientation maps logical coordinates to physical ones unchanged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Orientation {
    xy_swapped: bool,
    right_to_left: bool,
    bottom_to_top: bool,
}

impl Orientation {
    #[inline]
    pub const fn new(xy_swapped: bool, right_to_left: bool, bottom_to_top: bool) -> Self {
        Self { xy_swapped, right_to_left, bottom_to_top }
    }

    #[inline]
    pub const fn is_xy_swapped(self) -> bool {
        self.xy_swapped
    }

    #[inline]
    pub const fn is_right_to_left(self) -> bool {
        self.right_to_left
    }

    #[inline]
    pub const fn is_bottom_to_top(self) -> bool {
        self.bottom_to_top
    }

    /// True for the four orientations that include a reflection.
    #[inline]
    pub const fn is_mirrored(self) -> bool {
        self.xy_swapped ^ self.right_to_left ^ self.bottom_to_top
    }

    /// Rotates the logical frame by 90° clockwise.
    #[inline]
    pub const fn rotate_right(self) -> Self {
        if self.xy_swapped {
            Self::new(false, self.right_to_left, !self.bottom_to_top)
        } else {
            Self::new(true, !self.right_to_left, self.bottom_to_top)
        }
    }

    /// Rotates the logical frame by 90° counter-clockwise.
    #[inline]
    pub const fn rotate_left(self) -> Self {
        if self.xy_swapped {
            Self::new(false, !self.right_to_left, self.bottom_to_top)
        } else {
            Self::new(true, self.right_to_left, !self.bottom_to_top)
        }
    }

    #[inline]
    pub const fn rotate_upside_down(self) -> Self {
        Self::new(self.xy_swapped, !self.right_to_left, !self.bottom_to_top)
    }

    /// Mirrors the logical x axis.
    #[inline]
    pub const fn flip_horizontally(self) -> Self {
        if self.xy_swapped {
            Self::new(true, self.right_to_left, !self.bottom_to_top)
        } else {
            Self::new(false, !self.right_to_left, self.bottom_to_top)
        }
    }

    /// Mirrors the logical y axis.
    #[inline]
    pub const fn flip_vertically(self) -> Self {
        if self.xy_swapped {
            Self::new(true, !self.right_to_left, self.bottom_to_top)
        } else {
            Self::new(false, self.right_to_left, !self.bottom_to_top)
        }
    }

    /// Mirrors across the main diagonal (transposes the logical frame).
    #[inline]
    pub const fn swap_xy(self) -> Self {
        Self::new(!self.xy_swapped, self.right_to_left, self.bottom_to_top)
    }

    /// Number of clockwise quarter turns (0..=3) relative to the default.
    ///
    /// Mirrored orientations report the rotation of their horizontally
    /// flipped counterpart.
    pub const fn rotation_count(self) -> u8 {
        let o = if self.is_mirrored() { self.flip_horizontally() } else { self };
        match (o.xy_swapped, o.right_to_left) {
            (false, false) => 0,
            (true, true) => 1,
            (false, true) => 2,
            (true, false) => 3,
        }
    }

    /// Maps a logical pixel to physical coordinates on a device whose native
    /// size is `raw_width × raw_height`.
    #[inline]
    pub fn to_physical(self, x: i16, y: i16, raw_width: i16, raw_height: i16) -> (i16, i16) {
        let (mut u, mut v) = if self.xy_swapped { (y, x) } else { (x, y) };
        if self.right_to_left {
            u = raw_width - 1 - u;
        }
        if self.bottom_to_top {
            v = raw_height - 1 - v;
        }
        (u, v)
    }
}
