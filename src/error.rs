//! Error types for note and scale operations
//!
//! Every failure in the crate is local and synchronous: it is reported by the
//! call that broke the contract and nothing is retried.

use thiserror::Error;

/// Errors raised while building or transforming notes and scales
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Letter outside A-G
    #[error("invalid note letter '{0}' (expected one of A-G)")]
    InvalidLetter(char),

    /// Raw accidental value outside Natural/Flat/Sharp
    #[error("invalid accidental value {0} (expected 0 = natural, 1 = flat, 2 = sharp)")]
    InvalidAccidental(u8),

    /// Octave outside the range the checked constructors accept
    #[error(
        "octave {0} is out of range (expected {} to {})",
        crate::models::note::MIN_OCTAVE,
        crate::models::note::MAX_OCTAVE
    )]
    OctaveOutOfRange(i32),

    /// Note name that does not match the note grammar
    #[error("note string '{0}' could not be parsed into a valid note")]
    UnparseableNote(String),

    /// Scale built from an empty interval list
    #[error("a scale needs at least one interval")]
    EmptyScale,

    /// Mode outside 1..=len
    #[error("mode {mode} is out of range for a scale of {len} intervals (expected 1-{len})")]
    InvalidMode { mode: usize, len: usize },

    /// Negative bound passed to a range-limiting adapter
    #[error("\"{argument}\" cannot be less than 0 (got {value})")]
    NegativeRange { argument: &'static str, value: i32 },

    /// Preset lookup miss
    #[error("unknown scale preset '{0}'")]
    UnknownPreset(String),

    /// Malformed API request
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, TheoryError>;
