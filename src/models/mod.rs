//! Value types for notes and scales
//!
//! Everything here is an immutable value: operations return new notes and
//! scales rather than mutating in place.

pub mod accidental;
pub mod interval;
pub mod letter;
pub mod note;
pub mod presets;
pub mod scale;

// Re-export commonly used types
pub use accidental::Accidental;
pub use interval::Interval;
pub use letter::Letter;
pub use note::{Note, MAX_OCTAVE, MIN_OCTAVE, STANDARD_TUNING_HZ};
pub use scale::{Scale, ScaleNotes};
