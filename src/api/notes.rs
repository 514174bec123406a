//! Note operations exposed to JavaScript
//!
//! Each `#[wasm_bindgen]` function is a thin shell over a plain function
//! returning `crate::Result`, which is what the native tests exercise.

use wasm_bindgen::prelude::*;

use super::helpers::{serialize, theory_error};
use super::types::NoteDto;
use crate::error::Result as TheoryResult;
use crate::models::Note;
use crate::parse::parse_note;

/// Parse a note name into its DTO
pub fn describe_note(name: &str) -> TheoryResult<NoteDto> {
    parse_note(name).map(NoteDto::from)
}

/// Build a note from raw parts. The accidental is a discriminant
/// (0 = natural, 1 = flat, 2 = sharp) and is validated.
pub fn describe_parts(letter: char, accidental: u8, octave: i32, cents: i32) -> TheoryResult<NoteDto> {
    Note::from_raw(letter, accidental, octave, cents).map(NoteDto::from)
}

pub fn enharmonic_name(name: &str) -> TheoryResult<String> {
    Ok(parse_note(name)?.enharmonic().to_string())
}

pub fn transpose_name(name: &str, semitones: i32) -> TheoryResult<String> {
    Ok((parse_note(name)? + semitones).to_string())
}

/// Signed semitones from `from` up to `to`
pub fn distance_between(from: &str, to: &str) -> TheoryResult<i32> {
    Ok(parse_note(to)? - parse_note(from)?)
}

/// Enharmonic-aware equality of two note names
pub fn same_pitch(a: &str, b: &str) -> TheoryResult<bool> {
    Ok(parse_note(a)? == parse_note(b)?)
}

#[wasm_bindgen(js_name = parseNote)]
pub fn parse_note_name(name: &str) -> Result<JsValue, JsValue> {
    crate::wasm_log!("parseNote called: name='{}'", name);
    let dto = describe_note(name).map_err(|e| theory_error(e, "parseNote"))?;
    serialize(&dto, "Failed to serialize note")
}

#[wasm_bindgen(js_name = noteFromParts)]
pub fn note_from_parts(letter: char, accidental: u8, octave: i32, cents: i32) -> Result<JsValue, JsValue> {
    let dto = describe_parts(letter, accidental, octave, cents)
        .map_err(|e| theory_error(e, "noteFromParts"))?;
    serialize(&dto, "Failed to serialize note")
}

#[wasm_bindgen(js_name = enharmonic)]
pub fn enharmonic(name: &str) -> Result<String, JsValue> {
    enharmonic_name(name).map_err(|e| theory_error(e, "enharmonic"))
}

#[wasm_bindgen(js_name = transpose)]
pub fn transpose(name: &str, semitones: i32) -> Result<String, JsValue> {
    transpose_name(name, semitones).map_err(|e| theory_error(e, "transpose"))
}

#[wasm_bindgen(js_name = noteFrequency)]
pub fn note_frequency(name: &str) -> Result<f64, JsValue> {
    parse_note(name)
        .map(f64::from)
        .map_err(|e| theory_error(e, "noteFrequency"))
}

#[wasm_bindgen(js_name = semitonesBetween)]
pub fn semitones_between(from: &str, to: &str) -> Result<i32, JsValue> {
    distance_between(from, to).map_err(|e| theory_error(e, "semitonesBetween"))
}

#[wasm_bindgen(js_name = notesEqual)]
pub fn notes_equal(a: &str, b: &str) -> Result<bool, JsValue> {
    same_pitch(a, b).map_err(|e| theory_error(e, "notesEqual"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TheoryError;
    use crate::models::Accidental;

    #[test]
    fn test_describe_note() {
        let dto = describe_note("a").unwrap();
        assert_eq!(dto.name, "A4");
        assert_eq!(dto.frequency, 440.0);
        assert_eq!(describe_note("Q4"), Err(TheoryError::UnparseableNote("Q4".to_string())));
    }

    #[test]
    fn test_huge_octaves_are_rejected_not_overflowed() {
        assert_eq!(
            describe_note("C999999999"),
            Err(TheoryError::UnparseableNote("C999999999".to_string()))
        );
        assert_eq!(
            describe_parts('C', 0, 999_999_999, 0),
            Err(TheoryError::OctaveOutOfRange(999_999_999))
        );
        assert_eq!(transpose_name("C4", i32::MIN).unwrap(), "E-178956967");
    }

    #[test]
    fn test_describe_parts_validates_raw_state() {
        let dto = describe_parts('f', 2, 3, -12).unwrap();
        assert_eq!(dto.name, "F#3");
        assert_eq!(dto.accidental, Accidental::Sharp);
        assert_eq!(dto.cents, -12);
        assert_eq!(describe_parts('X', 9, 4, 0), Err(TheoryError::InvalidLetter('X')));
        assert_eq!(describe_parts('C', 9, 4, 0), Err(TheoryError::InvalidAccidental(9)));
    }

    #[test]
    fn test_enharmonic_and_transpose() {
        assert_eq!(enharmonic_name("B4").unwrap(), "Cb5");
        assert_eq!(enharmonic_name("A#4").unwrap(), "Bb4");
        assert_eq!(transpose_name("C4", 14).unwrap(), "D5");
        assert_eq!(transpose_name("C4", -1).unwrap(), "B3");
    }

    #[test]
    fn test_distance_and_equality() {
        assert_eq!(distance_between("C4", "A4").unwrap(), 9);
        assert_eq!(distance_between("A4", "C4").unwrap(), -9);
        assert!(same_pitch("A#4", "Bb4").unwrap());
        assert!(same_pitch("C4", "B#3").unwrap());
        assert!(!same_pitch("C4", "C5").unwrap());
        assert!(same_pitch("C4", "nope").is_err());
    }
}
