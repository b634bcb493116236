//! The canonical tone table: the fixed set of tone percentages every ramp
//! walks, plus the light/dark orderings and display codes derived from it.

/// Number of canonical tones; every full ramp has this length.
pub const TONE_COUNT: usize = 16;

/// Canonical tone percentages, ascending. Dense near both extremes where
/// adjacent shades are hardest to tell apart.
const CANONICAL: [u16; TONE_COUNT] = [1, 2, 5, 10, 20, 30, 40, 50, 60, 70, 80, 90, 95, 98, 99, 100];

/// Tone percentages in ramp order for the given appearance mode.
///
/// Light-mode ramps darken as the index grows, so the table is walked from
/// 100 down to 1; dark-mode ramps lighten, walking 1 up to 100. Both
/// orderings cover the same percentages.
///
/// # Examples
///
/// ```
/// use shadekit::tones;
///
/// let light = tones::tones(true);
/// let dark = tones::tones(false);
/// assert_eq!(light[0], 100.0);
/// assert_eq!(dark[0], 1.0);
/// assert_eq!(light.len(), dark.len());
/// ```
#[must_use]
pub fn tones(light: bool) -> [f32; TONE_COUNT] {
    let mut table = [0.0; TONE_COUNT];
    for (i, slot) in table.iter_mut().enumerate() {
        let source = if light { TONE_COUNT - i - 1 } else { i };
        *slot = f32::from(CANONICAL[source]);
    }
    table
}

/// Display code for the canonical tone at `index`: the percentage times
/// ten, zero-padded to at least three digits ("010" through "1000").
///
/// # Examples
///
/// ```
/// use shadekit::tones::tone_name;
///
/// assert_eq!(tone_name(7), "500");
/// assert_eq!(tone_name(0), "010");
/// assert_eq!(tone_name(15), "1000");
/// ```
#[must_use]
pub fn tone_name(index: usize) -> String {
    format!("{:03}", u32::from(CANONICAL[index]) * 10)
}
