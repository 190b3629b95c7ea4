use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;
use log::info;

use lumen_engine::coords::{Alignment, Rect, Transformation, Vec2};
use lumen_engine::core::{Display, DrawingContext};
use lumen_engine::device::Offscreen;
use lumen_engine::logging::{LoggingConfig, init_logging};
use lumen_engine::paint::Color;
use lumen_engine::render::shapes::{
    smooth_filled_circle, smooth_filled_round_rect, smooth_round_rect, smooth_thick_circle,
    smooth_thick_line, smooth_thick_round_rect, smooth_wedged_line,
};
use lumen_engine::scene::{FnRaster, SolidRect};

/// Preview configuration.
#[derive(Debug, Clone)]
struct PreviewConfig {
    width: i16,
    height: i16,
    out_dir: PathBuf,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { width: 240, height: 160, out_dir: PathBuf::from(".") }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut config = PreviewConfig::default();
    if let Some(dir) = std::env::args_os().nth(1) {
        config.out_dir = PathBuf::from(dir);
    }

    let screen = render_preview(&config);
    write_png(&screen, &config.out_dir.join("lumen-preview.png"))?;
    let raw = config.out_dir.join("lumen-preview.argb");
    std::fs::write(&raw, screen.as_bytes()).with_context(|| format!("failed to write {}", raw.display()))?;
    info!("wrote {}x{} preview to {}", config.width, config.height, config.out_dir.display());
    Ok(())
}

fn render_preview(config: &PreviewConfig) -> Offscreen {
    let mut screen = Offscreen::new(config.width, config.height, Color::BLACK);
    let backdrop = FnRaster::new(Rect::new(0, 0, config.width - 1, config.height - 1), |x, y| {
        let v = (96 + (x as i32 + y as i32) / 8 % 2 * 16) as u8;
        Color::from_rgb(v / 3, v / 3, v)
    });
    {
        let mut display = Display::new(&mut screen);
        display.init(Color::from_rgb(24, 24, 40));

        let mut dc = DrawingContext::new(&mut display);
        dc.set_background(&backdrop);
        dc.clear();

        // ── panels ────────────────────────────────────────────────────────
        dc.draw(&smooth_filled_round_rect(8.0, 8.0, 112.0, 72.0, 10.0, Color::new(0xC020_3040)));
        dc.draw(&smooth_thick_round_rect(
            124.0,
            8.0,
            232.0,
            72.0,
            12.0,
            3.0,
            Color::from_rgb(240, 200, 60),
            Color::new(0x8060_4010),
        ));
        dc.draw(&smooth_round_rect(12.0, 84.0, 108.0, 152.0, 6.0, Color::WHITE));

        // ── circles and lines ─────────────────────────────────────────────
        dc.draw(&smooth_filled_circle(Vec2::new(60.0, 40.0), 20.0, Color::from_rgb(80, 200, 120)));
        dc.draw(&smooth_thick_circle(Vec2::new(178.0, 40.0), 22.0, 4.0, Color::from_rgb(255, 255, 255)));
        for i in 0..6 {
            let x = 20.0 + i as f32 * 14.0;
            dc.draw(&smooth_thick_line(
                Vec2::new(x, 140.0),
                Vec2::new(x + 10.0, 96.0),
                1.0 + i as f32,
                Color::from_rgb(200, 80 + 30 * i as u8, 80),
            ));
        }
        dc.draw(&smooth_wedged_line(Vec2::new(124.0, 150.0), 14.0, Vec2::new(230.0, 96.0), 2.0, Color::new(0xE0FF_6040)));

        // ── transformed ───────────────────────────────────────────────────
        dc.set_transform(Transformation::new().scale(3, 2).rotate_right());
        dc.draw_aligned(&SolidRect::new(Rect::new(0, 0, 5, 3), Color::new(0xA040_80FF)), 200, 150, Alignment::BOTTOM_RIGHT);
        dc.clear_transform();
    }
    screen
}

fn write_png(screen: &Offscreen, path: &Path) -> Result<()> {
    let img = to_image(screen)?;
    img.save(path).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Logical (oriented) view of the screen as an RGBA image.
fn to_image(screen: &Offscreen) -> Result<RgbaImage> {
    let ext = screen.extents();
    let rgba: Vec<u8> = (ext.y_min()..=ext.y_max())
        .flat_map(|y| (ext.x_min()..=ext.x_max()).map(move |x| (x, y)))
        .flat_map(|(x, y)| {
            let c = screen.pixel(x, y);
            [c.r(), c.g(), c.b(), c.a()]
        })
        .collect();
    RgbaImage::from_raw(ext.width() as u32, ext.height() as u32, rgba)
        .context("pixel buffer does not match the screen size")
}
