//! Typed errors for the palette text grammar.

use thiserror::Error;

/// Errors produced while parsing palette text.
///
/// Grammar mismatches are recoverable: palette-level parsing skips the
/// offending line and moves on. Config inconsistencies are caller errors
/// (hand-authored values that violate a model invariant) and propagate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line does not match the palette config pattern.
    #[error("line does not match the palette grammar: {line:?}")]
    GrammarMismatch {
        /// The offending input line, as read.
        line: String,
    },

    /// A parsed value violates a model invariant (e.g. a range window
    /// extending past 100%).
    #[error("inconsistent config value: {reason}")]
    ConfigInconsistency {
        /// Human-readable description of the violated invariant.
        reason: String,
    },
}

impl ParseError {
    /// Shorthand for a [`ParseError::GrammarMismatch`] on the given line.
    #[must_use]
    pub fn mismatch(line: impl Into<String>) -> Self {
        Self::GrammarMismatch { line: line.into() }
    }

    /// Shorthand for a [`ParseError::ConfigInconsistency`] with the given
    /// reason.
    #[must_use]
    pub fn inconsistency(reason: impl Into<String>) -> Self {
        Self::ConfigInconsistency {
            reason: reason.into(),
        }
    }
}
