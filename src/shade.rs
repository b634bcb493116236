//! The shade generation engine: turns a seed color, its scheme configs and
//! the global parameters into an ordered list of light/dark shade pairs.
//!
//! Generation is pure: identical inputs produce identical colors, no I/O,
//! no shared state. Each appearance mode walks the tone table independently
//! (honoring its own scale direction, skip direction and range window),
//! then branches on the requested color model for the actual shading math.

use crate::convert::ColorSpaceConverter;
use crate::curve::{self, Anchor};
use crate::models::{
    ColorConfig, ColorModelKind, ColorPair, Hct, Hsb, PaletteParameters, RgbColor, Scale,
    SchemeConfig, SkipDirection, SkipScheme,
};
use crate::tones;

/// Skew strength for the RGB branch's blend weight.
const RGB_BLEND_SKEW: f32 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Light,
    Dark,
}

impl Mode {
    const fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }
}

/// Generates the shade ramp for one color config.
///
/// Output length is the tone count minus `params.skip_count`; pairs are in
/// ascending ramp order. The config's authored model is irrelevant here:
/// `kind` chooses the shading branch and the seed is converted as needed.
#[must_use]
pub fn generate(
    config: &ColorConfig,
    params: &PaletteParameters,
    kind: ColorModelKind,
    converter: &dyn ColorSpaceConverter,
) -> Vec<ColorPair> {
    let count = tones::TONE_COUNT.saturating_sub(params.skip_count);
    let code_base = match params.skip_scheme {
        SkipScheme::Light => 0,
        SkipScheme::Dark => params.skip_count,
    };

    (0..count)
        .map(|index| {
            let light = shade_at(index, count, Mode::Light, config, params, kind, converter);
            let dark = shade_at(index, count, Mode::Dark, config, params, kind, converter);
            ColorPair::new(
                &config.color_name,
                tones::tone_name(index + code_base),
                light,
                dark,
            )
        })
        .collect()
}

/// One mode's shade at one ramp position.
fn shade_at(
    index: usize,
    count: usize,
    mode: Mode,
    config: &ColorConfig,
    params: &PaletteParameters,
    kind: ColorModelKind,
    converter: &dyn ColorSpaceConverter,
) -> RgbColor {
    let scheme = match mode {
        Mode::Light => &config.light_config,
        Mode::Dark => &config.dark_config,
    };
    let fraction = ramp_fraction(index, count, mode, scheme, params);

    match kind {
        ColorModelKind::Hct => hct_shade(fraction, mode, config, params, converter),
        ColorModelKind::Hsb => hsb_shade(fraction, mode, scheme, config, params, converter),
        ColorModelKind::Rgb => rgb_shade(fraction, mode, config, params, converter),
    }
}

/// The normalized tone fraction a mode uses at one ramp position, after
/// skip trimming, scale direction and the range window.
fn ramp_fraction(
    index: usize,
    count: usize,
    mode: Mode,
    scheme: &SchemeConfig,
    params: &PaletteParameters,
) -> f32 {
    // Forward skip consumes table entries at the walk's start; backward
    // skip leaves the start alone and the shortened count trims the end.
    let mode_skip = if scheme.skip_direction == SkipDirection::Forward {
        params.skip_count
    } else {
        0
    };

    // Darkening is the natural direction for light mode, lightening for
    // dark mode; the opposite scale walks the same table in reverse.
    let natural = matches!(
        (mode, scheme.scale),
        (Mode::Light, Scale::Darkening) | (Mode::Dark, Scale::Lightening)
    );
    let table_index = if natural {
        index + mode_skip
    } else {
        count + mode_skip - index - 1
    };

    let raw_fraction = tones::tones(mode.is_light())[table_index] / 100.0;

    // The range window offsets light ramps from the axis start and dark
    // ramps from the axis end, keeping the two modes visually symmetric.
    let width = scheme.range.width_percent();
    let lower = if mode.is_light() {
        scheme.range.start
    } else {
        100.0 - width - scheme.range.start
    };
    let transformed = curve::mapped(raw_fraction, lower, lower + width);

    (transformed / 100.0).clamp(0.0, 1.0)
}

/// The seed's HCT view with the mode's hue offset and chroma factor
/// applied. Tone is left for the per-index step.
fn mode_adjusted_hct(seed: Hct, mode: Mode, params: &PaletteParameters) -> Hct {
    let hue = match mode {
        Mode::Light => seed.hue,
        Mode::Dark => (seed.hue + params.hct_dark_hue_offset).rem_euclid(1.0),
    };
    let chroma_factor = if mode.is_light() {
        params.hct_light_chroma_factor
    } else {
        params.hct_dark_chroma_factor
    };
    Hct::new(hue, seed.chroma * chroma_factor, seed.tone)
}

fn hct_shade(
    fraction: f32,
    mode: Mode,
    config: &ColorConfig,
    params: &PaletteParameters,
    converter: &dyn ColorSpaceConverter,
) -> RgbColor {
    let seed = config.color_model.as_hct(converter);
    let mut hct = mode_adjusted_hct(seed, mode, params);

    let tone_factor = if mode.is_light() {
        params.hct_light_tone_factor
    } else {
        params.hct_dark_tone_factor
    };
    hct.tone = (fraction * 100.0 * tone_factor).clamp(0.0, 100.0);

    converter.hct_to_rgb(hct)
}

fn hsb_shade(
    fraction: f32,
    mode: Mode,
    scheme: &SchemeConfig,
    config: &ColorConfig,
    params: &PaletteParameters,
    converter: &dyn ColorSpaceConverter,
) -> RgbColor {
    let seed = config.color_model.as_hsb(converter);

    let hue = match mode {
        Mode::Light => seed.hue,
        Mode::Dark => (seed.hue + params.hsb_dark_hue_offset).rem_euclid(1.0),
    };

    let saturation_factor = if mode.is_light() {
        params.hsb_light_saturation_factor
    } else {
        params.hsb_dark_saturation_factor
    };
    let shaped = curve::logarithmic(fraction, std::f32::consts::E * saturation_factor);
    let saturation = (seed.saturation
        * saturation_factor
        * shaped
        * scheme.saturation_level.multiplier())
    .clamp(0.0, 1.0);

    let brightness_factor = if mode.is_light() {
        params.hsb_light_brightness_factor
    } else {
        params.hsb_dark_brightness_factor
    };
    let anchor = if mode.is_light() {
        Anchor::One
    } else {
        Anchor::Zero
    };
    let alpha = brightness_factor * scheme.brightness_level.multiplier();
    let brightness = curve::skewed(fraction, anchor, alpha).clamp(0.0, 1.0);

    converter.hsb_to_rgb(Hsb::new(hue, saturation, brightness))
}

fn rgb_shade(
    fraction: f32,
    mode: Mode,
    config: &ColorConfig,
    params: &PaletteParameters,
    converter: &dyn ColorSpaceConverter,
) -> RgbColor {
    let seed = config.color_model.as_rgb(converter);

    // Blend weight skewed toward the dark end; the overlay switches at the
    // midpoint and the amount fades to zero there, so the ramp passes
    // through the seed itself with no seam.
    let weight = curve::skewed(fraction, Anchor::Zero, RGB_BLEND_SKEW);
    let (overlay, amount) = if weight > 0.5 {
        (RgbColor::WHITE, (weight - 0.5) * 2.0)
    } else {
        (RgbColor::BLACK, (0.5 - weight) * 2.0)
    };
    let blended = seed.blend(overlay, amount);

    // Final HSB-space nudge with the mode's RGB factors.
    let hsb = converter.rgb_to_hsb(blended);
    let (hue_offset, saturation_factor, brightness_factor) = if mode.is_light() {
        (
            params.rgb_light_hue_offset,
            params.rgb_light_saturation_factor,
            params.rgb_light_brightness_factor,
        )
    } else {
        (
            params.rgb_dark_hue_offset,
            params.rgb_dark_saturation_factor,
            params.rgb_dark_brightness_factor,
        )
    };

    converter.hsb_to_rgb(Hsb::new(
        (hsb.hue + hue_offset).rem_euclid(1.0),
        (hsb.saturation * saturation_factor).clamp(0.0, 1.0),
        (hsb.brightness * brightness_factor).clamp(0.0, 1.0),
    ))
}
