use std::fmt;

/// Failure to build an [`Offscreen`](super::Offscreen) from existing pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffscreenError {
    /// Width or height is not positive.
    InvalidSize { width: i16, height: i16 },
    /// Pixel buffer length does not match `width * height`.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for OffscreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OffscreenError::InvalidSize { width, height } => {
                write!(f, "offscreen size must be positive, got {width}x{height}")
            }
            OffscreenError::LengthMismatch { expected, actual } => {
                write!(f, "offscreen buffer holds {actual} pixels, expected {expected}")
            }
        }
    }
}

impl std::error::Error for OffscreenError {}
