//! Color space conversions behind the [`ColorSpaceConverter`] seam.
//!
//! The ramp engine mutates hue/chroma/tone and hue/saturation/brightness
//! values but never does the perceptual math itself; that stays behind this
//! trait. [`PaletteConverter`] is the default implementation, realizing the
//! HCT axes as CIE LCh (tone = L*, chroma/hue = the cylindrical Lab
//! coordinates) via the `palette` crate. Out-of-gamut results are channel
//! clamped.

use palette::{FromColor, Hsv, IntoColor, LabHue, Lch, RgbHue, Srgb};

use crate::models::{Hct, Hsb, RgbColor};

/// Spacing between suggested analogous hues, as a fraction of a turn (30
/// degrees).
const ANALOGOUS_STEP: f32 = 1.0 / 12.0;

/// Conversions between the seed color models.
///
/// Implementations must be pure: same input, same output, no cross-call
/// state. All hues cross this boundary as fractions of a full turn.
pub trait ColorSpaceConverter {
    /// Converts an RGB color to its HCT representation.
    fn rgb_to_hct(&self, color: RgbColor) -> Hct;

    /// Converts an HCT value to a concrete RGB color, clamping out-of-gamut
    /// results per channel.
    fn hct_to_rgb(&self, hct: Hct) -> RgbColor;

    /// Converts an RGB color to its HSB representation.
    fn rgb_to_hsb(&self, color: RgbColor) -> Hsb;

    /// Converts an HSB value to a concrete RGB color.
    fn hsb_to_rgb(&self, hsb: Hsb) -> RgbColor;

    /// `count` hue suggestions near the seed hue, alternating to either
    /// side in 30 degree steps (for hue-wheel style pickers).
    fn analogous_hues(&self, seed: Hct, count: usize) -> Vec<f32> {
        (1..=count)
            .map(|k| {
                let magnitude = ((k + 1) / 2) as f32 * ANALOGOUS_STEP;
                let offset = if k % 2 == 1 { magnitude } else { -magnitude };
                (seed.hue + offset).rem_euclid(1.0)
            })
            .collect()
    }
}

/// Replaces a non-finite channel value with 0 so one bad seed never takes
/// down a whole ramp.
fn finite_or_zero(value: f32, channel: &str) -> f32 {
    if value.is_finite() {
        value
    } else {
        tracing::warn!("non-finite {channel} channel; substituting 0");
        0.0
    }
}

/// Rounds a unit-range sRGB value into 8-bit channels.
fn quantize(srgb: Srgb) -> RgbColor {
    RgbColor::new(
        (srgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
        (srgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
        (srgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}

fn to_srgb(color: RgbColor) -> Srgb {
    Srgb::new(
        f32::from(color.r) / 255.0,
        f32::from(color.g) / 255.0,
        f32::from(color.b) / 255.0,
    )
}

/// The default converter, backed by the `palette` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteConverter;

impl ColorSpaceConverter for PaletteConverter {
    fn rgb_to_hct(&self, color: RgbColor) -> Hct {
        let lch = Lch::from_color(to_srgb(color));
        Hct {
            hue: lch.hue.into_positive_degrees() / 360.0,
            chroma: lch.chroma,
            tone: lch.l,
        }
    }

    fn hct_to_rgb(&self, hct: Hct) -> RgbColor {
        let hue = finite_or_zero(hct.hue, "hue").rem_euclid(1.0);
        let chroma = finite_or_zero(hct.chroma, "chroma").max(0.0);
        let tone = finite_or_zero(hct.tone, "tone").clamp(0.0, 100.0);

        let lch = Lch::new(tone, chroma, LabHue::from_degrees(hue * 360.0));
        let srgb: Srgb = lch.into_color();
        quantize(srgb)
    }

    fn rgb_to_hsb(&self, color: RgbColor) -> Hsb {
        let hsv = Hsv::from_color(to_srgb(color));
        Hsb {
            hue: hsv.hue.into_positive_degrees() / 360.0,
            saturation: hsv.saturation,
            brightness: hsv.value,
        }
    }

    fn hsb_to_rgb(&self, hsb: Hsb) -> RgbColor {
        let hue = finite_or_zero(hsb.hue, "hue").rem_euclid(1.0);
        let saturation = finite_or_zero(hsb.saturation, "saturation").clamp(0.0, 1.0);
        let brightness = finite_or_zero(hsb.brightness, "brightness").clamp(0.0, 1.0);

        let hsv = Hsv::new(RgbHue::from_degrees(hue * 360.0), saturation, brightness);
        let srgb = Srgb::from_color(hsv);
        quantize(srgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONVERTER: PaletteConverter = PaletteConverter;

    fn assert_channel_close(actual: RgbColor, expected: RgbColor, tolerance: i16) {
        for (a, e) in [
            (actual.r, expected.r),
            (actual.g, expected.g),
            (actual.b, expected.b),
        ] {
            assert!(
                (i16::from(a) - i16::from(e)).abs() <= tolerance,
                "channel mismatch: {actual:?} vs {expected:?}"
            );
        }
    }

    #[test]
    fn test_hct_extremes() {
        let white = CONVERTER.rgb_to_hct(RgbColor::WHITE);
        assert!(white.tone > 99.0, "white tone {}", white.tone);
        assert!(white.chroma < 1.0, "white chroma {}", white.chroma);

        let black = CONVERTER.rgb_to_hct(RgbColor::BLACK);
        assert!(black.tone < 1.0, "black tone {}", black.tone);
    }

    #[test]
    fn test_gray_has_no_chroma() {
        let gray = CONVERTER.rgb_to_hct(RgbColor::new(128, 128, 128));
        assert!(gray.chroma < 1.0, "gray chroma {}", gray.chroma);
    }

    #[test]
    fn test_hct_roundtrip() {
        for seed in [
            RgbColor::new(104, 159, 212),
            RgbColor::new(255, 0, 0),
            RgbColor::new(30, 180, 90),
            RgbColor::new(250, 240, 20),
        ] {
            let back = CONVERTER.hct_to_rgb(CONVERTER.rgb_to_hct(seed));
            assert_channel_close(back, seed, 2);
        }
    }

    #[test]
    fn test_hct_hue_is_a_unit_fraction() {
        let hct = CONVERTER.rgb_to_hct(RgbColor::new(104, 159, 212));
        assert!((0.0..1.0).contains(&hct.hue), "hue {}", hct.hue);
    }

    #[test]
    fn test_hct_tone_zero_is_black() {
        let color = CONVERTER.hct_to_rgb(Hct::new(0.5, 0.0, 0.0));
        assert_eq!(color, RgbColor::BLACK);
    }

    #[test]
    fn test_out_of_gamut_chroma_is_clamped() {
        // No sRGB color has chroma 500; conversion must still land in range
        let color = CONVERTER.hct_to_rgb(Hct::new(0.1, 500.0, 50.0));
        // Just being here without a panic is most of the point; the result
        // is a valid color by construction of RgbColor.
        let _ = color;
    }

    #[test]
    fn test_non_finite_channels_fall_back_to_zero() {
        let color = CONVERTER.hct_to_rgb(Hct::new(f32::NAN, f32::NAN, f32::INFINITY));
        // Every channel collapses to 0, and zero tone with zero chroma is black
        assert_eq!(color, RgbColor::BLACK);

        let color = CONVERTER.hsb_to_rgb(Hsb::new(0.5, f32::NAN, 1.0));
        // Saturation 0 at full brightness is white
        assert_eq!(color, RgbColor::WHITE);
    }

    #[test]
    fn test_hsb_of_primaries() {
        let red = CONVERTER.rgb_to_hsb(RgbColor::new(255, 0, 0));
        assert!(red.hue < 0.01 || red.hue > 0.99, "red hue {}", red.hue);
        assert!((red.saturation - 1.0).abs() < 0.01);
        assert!((red.brightness - 1.0).abs() < 0.01);

        let green = CONVERTER.rgb_to_hsb(RgbColor::new(0, 255, 0));
        assert!((green.hue - 1.0 / 3.0).abs() < 0.01, "green hue {}", green.hue);
    }

    #[test]
    fn test_hsb_roundtrip() {
        for seed in [
            RgbColor::new(104, 159, 212),
            RgbColor::new(200, 100, 50),
            RgbColor::new(12, 34, 56),
        ] {
            let back = CONVERTER.hsb_to_rgb(CONVERTER.rgb_to_hsb(seed));
            assert_channel_close(back, seed, 1);
        }
    }

    #[test]
    fn test_hsb_hue_wraps() {
        let a = CONVERTER.hsb_to_rgb(Hsb::new(0.25, 0.8, 0.8));
        let b = CONVERTER.hsb_to_rgb(Hsb::new(1.25, 0.8, 0.8));
        assert_eq!(a, b);
    }

    #[test]
    fn test_analogous_hues_alternate_around_seed() {
        let seed = Hct::new(0.5, 40.0, 50.0);
        let hues = CONVERTER.analogous_hues(seed, 4);
        assert_eq!(hues.len(), 4);

        let step = 1.0 / 12.0;
        assert!((hues[0] - (0.5 + step)).abs() < 1e-6);
        assert!((hues[1] - (0.5 - step)).abs() < 1e-6);
        assert!((hues[2] - (0.5 + 2.0 * step)).abs() < 1e-6);
        assert!((hues[3] - (0.5 - 2.0 * step)).abs() < 1e-6);
    }

    #[test]
    fn test_analogous_hues_stay_in_unit_range() {
        let seed = Hct::new(0.98, 40.0, 50.0);
        for hue in CONVERTER.analogous_hues(seed, 8) {
            assert!((0.0..1.0).contains(&hue), "hue {hue} out of range");
        }
    }
}
