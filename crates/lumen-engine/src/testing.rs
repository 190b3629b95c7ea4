//! Test helpers shared across modules.

use crate::coords::{Orientation, Rect};
use crate::device::{DisplayDevice, DisplayOutput, Offscreen};
use crate::paint::{Color, PaintMode};

/// One character per pixel: `' '` for black, `'*'` for white, hex digits
/// in between. Uses the red channel quantized to 4 bits.
pub fn gray4(screen: &Offscreen) -> Vec<String> {
    let ext = screen.extents();
    (ext.y_min()..=ext.y_max())
        .map(|y| {
            (ext.x_min()..=ext.x_max())
                .map(|x| match (screen.pixel(x, y).r() as u32 * 15 + 127) / 255 {
                    0 => ' ',
                    15 => '*',
                    v => char::from_digit(v, 16).map_or('?', |c| c.to_ascii_uppercase()),
                })
                .collect()
        })
        .collect()
}

/// Device that records lifecycle calls and counts written pixels.
#[derive(Debug, Default)]
pub struct CountingDevice {
    pub width: i16,
    pub height: i16,
    pub orientation: Orientation,
    pub inits: u32,
    pub begins: u32,
    pub ends: u32,
    pub orientation_changes: u32,
    pub bg_hint: Option<Color>,
    pub pixels_written: usize,
}

impl CountingDevice {
    pub fn new(width: i16, height: i16) -> Self {
        Self { width, height, ..Self::default() }
    }
}

impl DisplayOutput for CountingDevice {
    fn set_address(&mut self, _window: Rect, _mode: PaintMode) {}

    fn write(&mut self, colors: &[Color]) {
        self.pixels_written += colors.len();
    }

    fn write_rects(&mut self, _mode: PaintMode, _colors: &[Color], rects: &[Rect]) {
        self.pixels_written += rects.iter().map(|r| r.area() as usize).sum::<usize>();
    }

    fn fill_rects(&mut self, _mode: PaintMode, _color: Color, rects: &[Rect]) {
        self.pixels_written += rects.iter().map(|r| r.area() as usize).sum::<usize>();
    }

    fn write_pixels(&mut self, _mode: PaintMode, colors: &[Color], _xs: &[i16], _ys: &[i16]) {
        self.pixels_written += colors.len();
    }

    fn fill_pixels(&mut self, _mode: PaintMode, _color: Color, xs: &[i16], _ys: &[i16]) {
        self.pixels_written += xs.len();
    }
}

impl DisplayDevice for CountingDevice {
    fn init(&mut self) {
        self.inits += 1;
    }

    fn begin(&mut self) {
        self.begins += 1;
    }

    fn end(&mut self) {
        self.ends += 1;
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.orientation_changes += 1;
    }

    fn raw_width(&self) -> i16 {
        self.width
    }

    fn raw_height(&self) -> i16 {
        self.height
    }

    fn set_bg_color_hint(&mut self, color: Color) {
        self.bg_hint = Some(color);
    }
}

// ── write-path differentials ──────────────────────────────────────────────

/// Every way a block pattern can be sent to a [`DisplayOutput`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WritePath {
    FillRects,
    HLines,
    VLines,
    FillPixels,
    WriteRects,
    WritePixels,
    /// One address window over the whole pattern, streamed in odd-sized
    /// chunks.
    Window,
    /// One address window per block.
    BlockWindows,
}

impl WritePath {
    pub const ALL: [WritePath; 8] = [
        WritePath::FillRects,
        WritePath::HLines,
        WritePath::VLines,
        WritePath::FillPixels,
        WritePath::WriteRects,
        WritePath::WritePixels,
        WritePath::Window,
        WritePath::BlockWindows,
    ];
}

const PALETTE: [Color; 7] = [
    Color::RED,
    Color::new(0x80FF_FFFF),
    Color::TRANSPARENT,
    Color::BLUE,
    Color::new(0x4000_FF00),
    Color::WHITE,
    Color::new(0xC010_2030),
];

/// `(0, 0)-(w - 1, h - 1)` split into blocks of uneven size, each one color.
/// The blocks cover the region without overlapping.
pub fn block_pattern(w: i16, h: i16) -> Vec<(Rect, Color)> {
    const WIDTHS: [i16; 5] = [1, 3, 2, 5, 4];
    const HEIGHTS: [i16; 4] = [2, 1, 3, 4];
    let mut blocks = Vec::new();
    let (mut y, mut row) = (0, 0);
    while y < h {
        let y1 = (y + HEIGHTS[row % HEIGHTS.len()] - 1).min(h - 1);
        let (mut x, mut col) = (0, 0);
        while x < w {
            let x1 = (x + WIDTHS[(col + row) % WIDTHS.len()] - 1).min(w - 1);
            let color = PALETTE[blocks.len() % PALETTE.len()];
            blocks.push((Rect::new(x, y, x1, y1), color));
            x = x1 + 1;
            col += 1;
        }
        y = y1 + 1;
        row += 1;
    }
    blocks
}

/// Every pixel of `blocks` with its color, block by block, row-major within
/// a block.
pub fn pattern_pixels(blocks: &[(Rect, Color)]) -> Vec<(i16, i16, Color)> {
    let mut pixels = Vec::new();
    for &(r, c) in blocks {
        for y in r.y_min()..=r.y_max() {
            for x in r.x_min()..=r.x_max() {
                pixels.push((x, y, c));
            }
        }
    }
    pixels
}

/// Sends `blocks` to `out` through `path`.
pub fn send_pattern(out: &mut dyn DisplayOutput, path: WritePath, mode: PaintMode, blocks: &[(Rect, Color)]) {
    match path {
        WritePath::FillRects => {
            for &(r, c) in blocks {
                out.fill_rects(mode, c, &[r]);
            }
        }
        WritePath::HLines => {
            for &(r, c) in blocks {
                let lines: Vec<Rect> = (r.y_min()..=r.y_max()).map(|y| Rect::new(r.x_min(), y, r.x_max(), y)).collect();
                out.fill_rects(mode, c, &lines);
            }
        }
        WritePath::VLines => {
            for &(r, c) in blocks {
                let lines: Vec<Rect> = (r.x_min()..=r.x_max()).map(|x| Rect::new(x, r.y_min(), x, r.y_max())).collect();
                out.fill_rects(mode, c, &lines);
            }
        }
        WritePath::FillPixels => {
            for &(r, c) in blocks {
                let pixels = pattern_pixels(&[(r, c)]);
                let xs: Vec<i16> = pixels.iter().map(|p| p.0).collect();
                let ys: Vec<i16> = pixels.iter().map(|p| p.1).collect();
                out.fill_pixels(mode, c, &xs, &ys);
            }
        }
        WritePath::WriteRects => {
            let colors: Vec<Color> = blocks.iter().map(|b| b.1).collect();
            let rects: Vec<Rect> = blocks.iter().map(|b| b.0).collect();
            out.write_rects(mode, &colors, &rects);
        }
        WritePath::WritePixels => {
            let pixels = pattern_pixels(blocks);
            let xs: Vec<i16> = pixels.iter().map(|p| p.0).collect();
            let ys: Vec<i16> = pixels.iter().map(|p| p.1).collect();
            let colors: Vec<Color> = pixels.iter().map(|p| p.2).collect();
            out.write_pixels(mode, &colors, &xs, &ys);
        }
        WritePath::Window => {
            let area = blocks.iter().fold(Rect::empty(), |acc, b| acc.extent(b.0));
            let mut colors = Vec::new();
            for y in area.y_min()..=area.y_max() {
                for x in area.x_min()..=area.x_max() {
                    let c = blocks.iter().find(|b| b.0.contains_point(x, y)).map_or(Color::TRANSPARENT, |b| b.1);
                    colors.push(c);
                }
            }
            out.set_address(area, mode);
            for chunk in colors.chunks(13) {
                out.write(chunk);
            }
        }
        WritePath::BlockWindows => {
            for &(r, c) in blocks {
                out.set_address(r, mode);
                out.write(&vec![c; r.area() as usize]);
            }
        }
    }
}
