/// How written colors combine with existing device content.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum PaintMode {
    /// Alpha-composite over what is already on the device.
    #[default]
    Blend,
    /// Overwrite the device pixel, alpha included.
    Replace,
}

/// Which pixels of a drawable's footprint get written.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum FillMode {
    /// Only pixels the drawable actually covers; fully transparent ones are skipped.
    #[default]
    Visible,
    /// The whole footprint; uncovered pixels receive the background color.
    Rectangle,
}
