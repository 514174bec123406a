//! Note-name parsing
//!
//! Grammar, matched case-insensitively with free whitespace between parts:
//! a letter A-G, an optional accidental token (`flat`, `b`, `♭`, `sharp`,
//! `#`, `♯`) and an optional octave number. The octave defaults to 4.

use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

use crate::error::{Result, TheoryError};
use crate::models::note::{MAX_OCTAVE, MIN_OCTAVE};
use crate::models::{Accidental, Letter, Note};

lazy_static! {
    static ref NOTE_NAME: Regex = Regex::new(
        r"(?i)^\s*(?P<letter>[A-G])\s*(?P<accidental>flat|b|sharp|#|♭|♯)?\s*(?P<octave>-?(?:[1-9][0-9]*|0))?\s*$"
    )
    .unwrap();
}

/// Octave assumed when a note name does not give one
pub const DEFAULT_OCTAVE: i32 = 4;

/// Parse a note name such as `"Bb5"`, `"C sharp 6"` or `"a"`
pub fn parse_note(input: &str) -> Result<Note> {
    let unparseable = || TheoryError::UnparseableNote(input.to_string());

    let caps = NOTE_NAME.captures(input).ok_or_else(|| {
        log::trace!("note name '{}' did not match", input);
        unparseable()
    })?;

    let letter = caps
        .name("letter")
        .and_then(|m| m.as_str().chars().next())
        .ok_or_else(unparseable)
        .and_then(Letter::from_char)?;

    let accidental = match caps.name("accidental") {
        Some(m) => Accidental::from_token(m.as_str()).ok_or_else(unparseable)?,
        None => Accidental::Natural,
    };

    let octave = match caps.name("octave") {
        Some(m) => m.as_str().parse::<i32>().map_err(|_| unparseable())?,
        None => DEFAULT_OCTAVE,
    };
    if !(MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
        log::trace!("octave {} in '{}' is out of range", octave, input);
        return Err(unparseable());
    }

    Ok(Note::from_parts(letter, accidental, octave, 0))
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        parse_note(s)
    }
}
