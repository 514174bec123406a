//! Note value type
//!
//! A `Note` is a pure value: letter, accidental, octave and a cents detuning.
//! All arithmetic produces a new note. Equality is enharmonic-aware, so
//! `A#4 == Bb4` and `C4 == B#3`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::accidental::Accidental;
use super::letter::Letter;
use crate::error::{Result, TheoryError};

/// Reference pitch of A4 in Hz (equal temperament)
pub const STANDARD_TUNING_HZ: f64 = 440.0;

/// Highest octave accepted by the checked constructors and the parser
pub const MAX_OCTAVE: i32 = 100_000_000;

/// Lowest octave accepted by the checked constructors and the parser
pub const MIN_OCTAVE: i32 = -MAX_OCTAVE;

/// A4, the tuning reference note
const A4: Note = Note::from_parts(Letter::A, Accidental::Natural, 4, 0);

/// A single musical pitch
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Note {
    letter: Letter,
    accidental: Accidental,
    /// Octave 4 contains middle C
    octave: i32,
    /// Detuning in hundredths of a semitone
    cents: i32,
}

impl Note {
    /// Build a note from a letter character (case-insensitive).
    ///
    /// Fails with `InvalidLetter` when the letter is outside A-G and with
    /// `OctaveOutOfRange` outside `MIN_OCTAVE..=MAX_OCTAVE`.
    pub fn new(letter: char, accidental: Accidental, octave: i32, cents: i32) -> Result<Note> {
        let letter = Letter::from_char(letter)?;
        check_octave(octave)?;
        Ok(Note::from_parts(letter, accidental, octave, cents))
    }

    /// Natural note in octave 4 with no detuning
    pub fn natural(letter: char) -> Result<Note> {
        Note::new(letter, Accidental::Natural, 4, 0)
    }

    pub const fn from_parts(letter: Letter, accidental: Accidental, octave: i32, cents: i32) -> Note {
        Note {
            letter,
            accidental,
            octave,
            cents,
        }
    }

    /// Build a note from unchecked raw state (a letter character and an
    /// accidental discriminant). Reports the letter before the accidental.
    pub fn from_raw(letter: char, accidental: u8, octave: i32, cents: i32) -> Result<Note> {
        let letter = Letter::from_char(letter)?;
        let accidental = Accidental::try_from(accidental)?;
        check_octave(octave)?;
        Ok(Note::from_parts(letter, accidental, octave, cents))
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    pub fn cents(&self) -> i32 {
        self.cents
    }

    pub fn with_letter(&self, letter: char) -> Result<Note> {
        Ok(Note {
            letter: Letter::from_char(letter)?,
            ..*self
        })
    }

    pub fn with_accidental(&self, accidental: Accidental) -> Note {
        Note { accidental, ..*self }
    }

    pub fn with_octave(&self, octave: i32) -> Note {
        Note { octave, ..*self }
    }

    pub fn with_cents(&self, cents: i32) -> Note {
        Note { cents, ..*self }
    }

    /// The same pitch spelled the other way.
    ///
    /// Naturals A, D and G have no single-accidental alternative and come back
    /// unchanged. Crossing between B and C moves the octave; no other letter
    /// pair does. Applying this twice returns the original spelling.
    pub fn enharmonic(&self) -> Note {
        let (letter, accidental, octave) = match (self.accidental, self.letter) {
            (Accidental::Natural, Letter::B) => (Letter::C, Accidental::Flat, self.octave.saturating_add(1)),
            (Accidental::Natural, Letter::C) => (Letter::B, Accidental::Sharp, self.octave.saturating_sub(1)),
            (Accidental::Natural, Letter::E) => (Letter::F, Accidental::Flat, self.octave),
            (Accidental::Natural, Letter::F) => (Letter::E, Accidental::Sharp, self.octave),
            (Accidental::Natural, _) => return *self,

            (Accidental::Sharp, Letter::B) => (Letter::C, Accidental::Natural, self.octave.saturating_add(1)),
            (Accidental::Sharp, Letter::E) => (Letter::F, Accidental::Natural, self.octave),
            (Accidental::Sharp, letter) => (letter.next(), Accidental::Flat, self.octave),

            (Accidental::Flat, Letter::C) => (Letter::B, Accidental::Natural, self.octave.saturating_sub(1)),
            (Accidental::Flat, Letter::F) => (Letter::E, Accidental::Natural, self.octave),
            (Accidental::Flat, letter) => (letter.previous(), Accidental::Sharp, self.octave),
        };

        Note {
            letter,
            accidental,
            octave,
            ..*self
        }
    }

    /// Signed semitone distance from C4. Enharmonic spellings measure the same.
    /// Saturates at the `i32` bounds for octaves far outside the checked range.
    pub fn distance_to_middle_c(&self) -> i32 {
        let offset = self.letter.natural_offset() + self.accidental.semitone_offset();
        self.octave
            .saturating_sub(4)
            .saturating_mul(12)
            .saturating_add(offset)
    }

    /// Semitones from `other` up to `self` (negative when `self` is lower)
    pub fn semitones_from(&self, other: &Note) -> i32 {
        self.distance_to_middle_c()
            .saturating_sub(other.distance_to_middle_c())
    }

    /// Pitch-height comparison; cents are not considered
    pub fn is_higher_than(&self, other: &Note) -> bool {
        self.distance_to_middle_c() > other.distance_to_middle_c()
    }

    /// Pitch-height comparison; cents are not considered
    pub fn is_lower_than(&self, other: &Note) -> bool {
        self.distance_to_middle_c() < other.distance_to_middle_c()
    }

    /// True when both notes sound the same but are spelled differently
    pub fn is_enharmonic_of(&self, other: &Note) -> bool {
        self == other && !self.same_spelling(other)
    }

    /// One semitone up, preferring the simplest spelling.
    ///
    /// Flats resolve to the natural of the same letter, naturals gain a sharp
    /// (B and E step straight to C and F), sharps move to the next letter.
    pub fn increment(&self) -> Note {
        let (letter, accidental, octave) = match (self.accidental, self.letter) {
            (Accidental::Flat, letter) => (letter, Accidental::Natural, self.octave),

            (Accidental::Natural, Letter::B) => (Letter::C, Accidental::Natural, self.octave.saturating_add(1)),
            (Accidental::Natural, Letter::E) => (Letter::F, Accidental::Natural, self.octave),
            (Accidental::Natural, letter) => (letter, Accidental::Sharp, self.octave),

            // B# and E# already sound as C and F
            (Accidental::Sharp, Letter::B) => (Letter::C, Accidental::Sharp, self.octave.saturating_add(1)),
            (Accidental::Sharp, Letter::E) => (Letter::F, Accidental::Sharp, self.octave),
            (Accidental::Sharp, letter) => (letter.next(), Accidental::Natural, self.octave),
        };

        Note {
            letter,
            accidental,
            octave,
            ..*self
        }
    }

    /// One semitone down; the mirror image of [`Note::increment`].
    pub fn decrement(&self) -> Note {
        let (letter, accidental, octave) = match (self.accidental, self.letter) {
            (Accidental::Sharp, letter) => (letter, Accidental::Natural, self.octave),

            (Accidental::Natural, Letter::C) => (Letter::B, Accidental::Natural, self.octave.saturating_sub(1)),
            (Accidental::Natural, Letter::F) => (Letter::E, Accidental::Natural, self.octave),
            (Accidental::Natural, letter) => (letter, Accidental::Flat, self.octave),

            // Cb and Fb already sound as B and E
            (Accidental::Flat, Letter::C) => (Letter::B, Accidental::Flat, self.octave.saturating_sub(1)),
            (Accidental::Flat, Letter::F) => (Letter::E, Accidental::Flat, self.octave),
            (Accidental::Flat, letter) => (letter.previous(), Accidental::Natural, self.octave),
        };

        Note {
            letter,
            accidental,
            octave,
            ..*self
        }
    }

    /// Move by a signed number of semitones.
    ///
    /// Whole octaves are applied directly to the octave number, the remainder
    /// one semitone at a time through `increment`/`decrement`.
    pub fn transpose(&self, semitones: i32) -> Note {
        self.shift(i64::from(semitones))
    }

    /// `transpose` over a wider range so that `note - i32::MIN` is defined.
    /// The octave saturates at the `i32` bounds.
    fn shift(&self, semitones: i64) -> Note {
        if semitones == 0 {
            return *self;
        }

        let octave = (i64::from(self.octave) + semitones / 12)
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        let mut note = self.with_octave(octave);
        let mut offset = semitones % 12;

        while offset != 0 {
            if offset > 0 {
                note = note.increment();
                offset -= 1;
            } else {
                note = note.decrement();
                offset += 1;
            }
        }

        note
    }

    /// Equal-temperament frequency in Hz, referenced to A4 = 440 Hz.
    /// The cents field does not take part.
    pub fn frequency(&self) -> f64 {
        let semitones = self.semitones_from(&A4) as f64;
        STANDARD_TUNING_HZ * 2f64.powf(semitones / 12.0)
    }

    fn same_spelling(&self, other: &Note) -> bool {
        self.letter == other.letter && self.accidental == other.accidental && self.octave == other.octave
    }
}

fn check_octave(octave: i32) -> Result<()> {
    if (MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
        Ok(())
    } else {
        Err(TheoryError::OctaveOutOfRange(octave))
    }
}

impl Default for Note {
    fn default() -> Self {
        A4
    }
}

impl PartialEq for Note {
    /// Cents must match exactly; the pitch must match either the right-hand
    /// spelling or its enharmonic.
    fn eq(&self, other: &Note) -> bool {
        if self.cents != other.cents {
            return false;
        }

        self.same_spelling(other) || self.same_spelling(&other.enharmonic())
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.distance_to_middle_c().hash(state);
        self.cents.hash(state);
    }
}

impl Add<i32> for Note {
    type Output = Note;

    fn add(self, semitones: i32) -> Note {
        self.transpose(semitones)
    }
}

impl AddAssign<i32> for Note {
    fn add_assign(&mut self, semitones: i32) {
        *self = self.transpose(semitones);
    }
}

impl Sub<i32> for Note {
    type Output = Note;

    fn sub(self, semitones: i32) -> Note {
        self.shift(-i64::from(semitones))
    }
}

impl SubAssign<i32> for Note {
    fn sub_assign(&mut self, semitones: i32) {
        *self = self.shift(-i64::from(semitones));
    }
}

impl Sub<Note> for Note {
    type Output = i32;

    fn sub(self, other: Note) -> i32 {
        self.semitones_from(&other)
    }
}

impl From<Note> for f64 {
    fn from(note: Note) -> f64 {
        note.frequency()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.letter, self.accidental.symbol(), self.octave)
    }
}
