//! Scalar shaping curves used by the tone ramp math.
//!
//! All functions operate on normalized positions in `[0, 1]` unless noted
//! and are pure: no state, no I/O. Out-of-domain input is the caller's
//! responsibility; values are expected to be clamped upstream.

use std::f32::consts::{E, FRAC_PI_2, PI};

/// Default epsilon for [`logarithmic`] (`2e`).
pub const DEFAULT_LOG_EPSILON: f32 = 2.0 * E;

/// Skew anchor: which end of the unit interval a value is pulled toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Pull values toward 0 (darker end of a brightness curve).
    Zero,
    /// Pull values toward 1 (lighter end of a brightness curve).
    One,
}

/// Widens a unit value: `sin²(π/2 · x)`.
///
/// Pushes mid-range values toward the extremes while keeping 0, 0.5 and 1
/// fixed. Inverse in spirit to [`narrow`].
///
/// # Examples
///
/// ```
/// use shadekit::curve::widen;
///
/// assert!((widen(0.0) - 0.0).abs() < 1e-6);
/// assert!((widen(0.5) - 0.5).abs() < 1e-6);
/// assert!((widen(1.0) - 1.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn widen(x: f32) -> f32 {
    let s = (FRAC_PI_2 * x).sin();
    s * s
}

/// Narrows a value: `(2/π) · asin(x)`.
///
/// Defined on `[-1, 1]` in general but used on `[0, 1]` here. Produces NaN
/// outside the asin domain, matching the fail-fast contract of this module.
#[must_use]
pub fn narrow(x: f32) -> f32 {
    (2.0 / PI) * x.asin()
}

/// Exponential remap: `exp(x · ln(base / e))`.
///
/// Degenerates to the constant 1 when `base == e`, so only explicit bases
/// produce a useful curve (`base = e²` gives `exp(x)`).
#[must_use]
pub fn exponential(x: f32, base: f32) -> f32 {
    (x * (base / E).ln()).exp()
}

/// Log-weighted remap of a unit value: `ln(1 + x·(ε−1)) / ln(ε)`.
///
/// Maps 0 to 0 and 1 to 1 for any `epsilon > 0`, `epsilon != 1`, rising
/// quickly near 0 and flattening toward 1 when `epsilon > 1`. See
/// [`DEFAULT_LOG_EPSILON`] for the conventional default.
///
/// # Examples
///
/// ```
/// use shadekit::curve::{logarithmic, DEFAULT_LOG_EPSILON};
///
/// assert!((logarithmic(0.0, DEFAULT_LOG_EPSILON) - 0.0).abs() < 1e-6);
/// assert!((logarithmic(1.0, DEFAULT_LOG_EPSILON) - 1.0).abs() < 1e-6);
/// // Concave: the midpoint lands above 0.5.
/// assert!(logarithmic(0.5, DEFAULT_LOG_EPSILON) > 0.5);
/// ```
#[must_use]
pub fn logarithmic(x: f32, epsilon: f32) -> f32 {
    (1.0 + x * (epsilon - 1.0)).ln() / epsilon.ln()
}

/// Affine remap of a unit value into `[lower, upper]`.
///
/// # Examples
///
/// ```
/// use shadekit::curve::mapped;
///
/// assert!((mapped(0.5, 0.0, 100.0) - 50.0).abs() < 1e-4);
/// assert!((mapped(0.25, 20.0, 60.0) - 30.0).abs() < 1e-4);
/// ```
#[must_use]
pub fn mapped(x: f32, lower: f32, upper: f32) -> f32 {
    x * (upper - lower) + lower
}

/// Skews a unit value toward an anchor with strength `alpha`.
///
/// Power curve: `x^(1+alpha)` toward [`Anchor::Zero`], `1 − (1−x)^(1+alpha)`
/// toward [`Anchor::One`]. Both ends stay fixed, the curve is monotone in
/// `x`, `alpha = 0` is the identity, and larger `alpha` pulls mid-range
/// values harder toward the anchor.
///
/// # Examples
///
/// ```
/// use shadekit::curve::{skewed, Anchor};
///
/// assert!((skewed(0.5, Anchor::Zero, 1.0) - 0.25).abs() < 1e-6);
/// assert!((skewed(0.5, Anchor::One, 1.0) - 0.75).abs() < 1e-6);
/// ```
#[must_use]
pub fn skewed(x: f32, towards: Anchor, alpha: f32) -> f32 {
    match towards {
        Anchor::Zero => x.powf(1.0 + alpha),
        Anchor::One => 1.0 - (1.0 - x).powf(1.0 + alpha),
    }
}
