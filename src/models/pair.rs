//! The output record of a generation call: one shade pair per tone.

use serde::Serialize;
use uuid::Uuid;

use super::RgbColor;

/// One tone position of a generated ramp: the light-mode and dark-mode
/// colors plus the asset naming pieces.
///
/// Output-only and derived: recomputed on every generation call, never
/// persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorPair {
    /// Unique identifier, fresh per generation call.
    pub id: String,
    /// Asset name: `<color_name>-<tone_code>`.
    pub name: String,
    /// Three-digit tone display code ("010" through "1000").
    pub tone_code: String,
    /// The light-mode shade.
    pub light: RgbColor,
    /// The dark-mode shade.
    pub dark: RgbColor,
}

impl ColorPair {
    /// Creates a pair for one ramp position.
    #[must_use]
    pub fn new(
        color_name: &str,
        tone_code: impl Into<String>,
        light: RgbColor,
        dark: RgbColor,
    ) -> Self {
        let tone_code = tone_code.into();
        Self {
            id: Uuid::new_v4().to_string(),
            name: format!("{color_name}-{tone_code}"),
            tone_code,
            light,
            dark,
        }
    }
}
