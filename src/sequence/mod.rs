//! Post-processing adapters for generated note sequences
//!
//! `Scale::generate` never terminates, so nearly every caller chains one of
//! these adapters (or `take`) onto it. They work on any iterator of notes,
//! including reversed or hand-built ones.

pub mod accidentals;
pub mod range;

pub use accidentals::{force_accidental, OfAccidental};
pub use range::WithinRange;

use crate::error::{Result, TheoryError};
use crate::models::{Accidental, Note};

/// Extension methods for any `Iterator<Item = Note>`
pub trait NoteIteratorExt: Iterator<Item = Note> + Sized {
    /// Respell notes toward `accidental` where an enharmonic allows it.
    /// Naturals are only touched when `convert_naturals` is set.
    fn of_accidental(self, accidental: Accidental, convert_naturals: bool) -> OfAccidental<Self> {
        OfAccidental::new(self, accidental, convert_naturals)
    }

    /// Yield notes while they stay within `semitones` of the first note.
    ///
    /// The bound is exclusive when `exclusive` is set. Iteration stops at the
    /// first note outside the bound.
    fn within_range(self, semitones: i32, exclusive: bool) -> Result<WithinRange<Self>> {
        if semitones < 0 {
            return Err(TheoryError::NegativeRange {
                argument: "semitones",
                value: semitones,
            });
        }

        Ok(WithinRange::new(self, semitones, exclusive))
    }

    /// `within_range` measured in whole octaves. With `contains_last_root`
    /// the root an exact `count` octaves up is included.
    fn octaves(self, count: i32, contains_last_root: bool) -> Result<WithinRange<Self>> {
        if count < 0 {
            return Err(TheoryError::NegativeRange {
                argument: "count",
                value: count,
            });
        }

        self.within_range(count.saturating_mul(12), !contains_last_root)
    }

    /// Collect the letter names into a string, e.g. `"CDEFGABC"`.
    /// Never returns on an unbounded sequence.
    fn letters(self) -> String {
        self.map(|note| note.letter().as_char()).collect()
    }
}

impl<I: Iterator<Item = Note>> NoteIteratorExt for I {}
