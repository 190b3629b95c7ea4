use super::Color;

/// Exact `round(x / 255)` for `x` in `0..=255 * 255`.
#[inline]
fn div255(x: u32) -> u32 {
    ((x + 128) * 257) >> 16
}

/// Source-over composition of `fg` on top of `bg` (straight alpha).
pub fn alpha_blend(bg: Color, fg: Color) -> Color {
    let fa = fg.a() as u32;
    if fa == 0xFF {
        return fg;
    }
    if fa == 0 {
        return bg;
    }
    let ba = bg.a() as u32;
    if ba == 0xFF {
        let inv = 255 - fa;
        let mix = |f: u8, b: u8| div255(f as u32 * fa + b as u32 * inv) as u8;
        return Color::from_argb(0xFF, mix(fg.r(), bg.r()), mix(fg.g(), bg.g()), mix(fg.b(), bg.b()));
    }
    if ba == 0 {
        return fg;
    }

    // General case: out_a = fa + ba * (255 - fa) / 255, channels weighted by
    // their effective coverage.
    let tmp = ba * (255 - fa);
    let out_a255 = fa * 255 + tmp;
    let out_a = div255(out_a255);
    let mix = |f: u8, b: u8| {
        ((f as u32 * fa * 255 + b as u32 * tmp + out_a255 / 2) / out_a255) as u8
    };
    Color::from_argb(out_a as u8, mix(fg.r(), bg.r()), mix(fg.g(), bg.g()), mix(fg.b(), bg.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_foreground_wins() {
        assert_eq!(alpha_blend(Color::WHITE, Color::RED), Color::RED);
    }

    #[test]
    fn transparent_foreground_is_noop() {
        let bg = Color::new(0x8012_3456);
        assert_eq!(alpha_blend(bg, Color::new(0x00FF_FFFF)), bg);
    }

    #[test]
    fn over_transparent_keeps_foreground() {
        let fg = Color::new(0x7711_2233);
        assert_eq!(alpha_blend(Color::TRANSPARENT, fg), fg);
    }

    #[test]
    fn half_white_over_gray() {
        assert_eq!(alpha_blend(Color::new(0xFF77_7777), Color::new(0x77FF_FFFF)), Color::new(0xFFB6_B6B6));
    }

    #[test]
    fn opaque_background_matches_linear_mix() {
        for fa in [1u32, 17, 100, 128, 200, 254] {
            for (fc, bc) in [(0u32, 255u32), (255, 0), (30, 220), (128, 129)] {
                let bg = Color::from_argb(0xFF, bc as u8, bc as u8, bc as u8);
                let fg = Color::from_argb(fa as u8, fc as u8, fc as u8, fc as u8);
                let out = alpha_blend(bg, fg);
                let exact = (bc as f32 * (255 - fa) as f32 + fc as f32 * fa as f32) / 255.0;
                assert!((out.r() as f32 - exact).abs() <= 1.0, "fa={fa} fc={fc} bc={bc}");
                assert!(out.is_opaque());
            }
        }
    }

    #[test]
    fn translucent_over_translucent_accumulates_alpha() {
        let out = alpha_blend(Color::new(0x80FF_0000), Color::new(0x8000_00FF));
        // 128 + 128 * 127 / 255 ≈ 192
        assert!((out.a() as i32 - 192).abs() <= 1);
        assert!(out.b() > out.r());
    }
}
