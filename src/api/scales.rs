//! Scale generation exposed to JavaScript

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, serialize, theory_error};
use super::types::ScaleRequest;
use crate::error::{Result as TheoryResult, TheoryError};
use crate::models::{presets, Note, Scale};
use crate::parse::parse_note;
use crate::sequence::NoteIteratorExt;

/// Pick the scale a request names and apply its mode
pub fn resolve_scale(request: &ScaleRequest) -> TheoryResult<Scale> {
    let scale = match (&request.preset, &request.intervals) {
        (Some(name), None) => {
            presets::by_name(name).ok_or_else(|| TheoryError::UnknownPreset(name.clone()))?
        }
        (None, Some(intervals)) => Scale::new(intervals.iter().copied())?,
        (Some(_), Some(_)) => {
            return Err(TheoryError::InvalidRequest(
                "give either a preset or intervals, not both".to_string(),
            ))
        }
        (None, None) => {
            return Err(TheoryError::InvalidRequest(
                "a preset or an interval list is required".to_string(),
            ))
        }
    };

    match request.mode {
        Some(mode) => scale.with_mode(mode),
        None => Ok(scale),
    }
}

/// Run a request to completion
pub fn generate_notes(request: &ScaleRequest) -> TheoryResult<Vec<Note>> {
    let scale = resolve_scale(request)?;
    let root = parse_note(&request.root)?;

    let generated = scale.generate(root, request.retain_order);
    let notes: Box<dyn Iterator<Item = Note>> = match request.accidental {
        Some(accidental) => Box::new(generated.of_accidental(accidental, request.convert_naturals)),
        None => Box::new(generated),
    };

    let notes = match (request.count, request.semitones, request.octaves) {
        (Some(count), None, None) => notes.take(count).collect(),
        (None, Some(semitones), None) => notes.within_range(semitones, request.exclusive)?.collect(),
        (None, None, Some(octaves)) => notes.octaves(octaves, request.contains_last_root)?.collect(),
        (None, None, None) => {
            return Err(TheoryError::InvalidRequest(
                "scales are infinite; set count, semitones or octaves".to_string(),
            ))
        }
        _ => {
            return Err(TheoryError::InvalidRequest(
                "only one of count, semitones or octaves may be set".to_string(),
            ))
        }
    };

    Ok(notes)
}

/// Generate a scale and return its note names
#[wasm_bindgen(js_name = generateScale)]
pub fn generate_scale(request_js: JsValue) -> Result<JsValue, JsValue> {
    let request: ScaleRequest = deserialize(request_js, "Failed to deserialize scale request")?;
    crate::wasm_info!(
        "generateScale called: preset={:?}, root='{}', mode={:?}",
        request.preset,
        request.root,
        request.mode
    );

    let notes = generate_notes(&request).map_err(|e| theory_error(e, "generateScale"))?;
    if notes.is_empty() {
        crate::wasm_warn!("generateScale produced no notes (zero-width exclusive bound?)");
    }

    let names: Vec<String> = notes.iter().map(Note::to_string).collect();
    serialize(&names, "Failed to serialize scale")
}

/// Canonical preset names, aliases excluded
#[wasm_bindgen(js_name = listPresets)]
pub fn list_presets() -> js_sys::Array {
    presets::names().map(JsValue::from_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Accidental, Interval};

    fn names(notes: Vec<Note>) -> Vec<String> {
        notes.iter().map(Note::to_string).collect()
    }

    #[test]
    fn test_preset_by_count() {
        let notes = generate_notes(&ScaleRequest::preset("major", "D4", 8)).unwrap();
        assert_eq!(names(notes), vec!["D4", "E4", "F#4", "G4", "A4", "B4", "C#5", "D5"]);
    }

    #[test]
    fn test_mode_override() {
        let mut request = ScaleRequest::preset("major", "A4", 8);
        request.mode = Some(6);
        let notes = generate_notes(&request).unwrap();
        assert_eq!(notes.into_iter().letters(), "ABCDEFGA");
    }

    #[test]
    fn test_intervals_with_octave_bound() {
        let mut request = ScaleRequest::preset("ignored", "C4", 0);
        request.preset = None;
        request.intervals = Some(vec![Interval::WHOLE]);
        request.retain_order = false;
        request.count = None;
        request.octaves = Some(1);
        let notes = generate_notes(&request).unwrap();
        assert_eq!(names(notes), vec!["C4", "D4", "E4", "F#4", "G#4", "A#4", "C5"]);
    }

    #[test]
    fn test_accidental_forcing_and_semitone_bound() {
        let mut request = ScaleRequest::preset("whole tone", "C4", 0);
        request.retain_order = false;
        request.accidental = Some(Accidental::Flat);
        request.count = None;
        request.semitones = Some(12);
        request.exclusive = true;
        let notes = generate_notes(&request).unwrap();
        assert_eq!(names(notes), vec!["C4", "D4", "E4", "Gb4", "Ab4", "Bb4"]);
    }

    #[test]
    fn test_request_errors() {
        let mut unbounded = ScaleRequest::preset("major", "C4", 0);
        unbounded.count = None;
        assert!(matches!(generate_notes(&unbounded), Err(TheoryError::InvalidRequest(_))));

        let mut doubly_bounded = ScaleRequest::preset("major", "C4", 3);
        doubly_bounded.octaves = Some(1);
        assert!(matches!(generate_notes(&doubly_bounded), Err(TheoryError::InvalidRequest(_))));

        let unknown = ScaleRequest::preset("bogus", "C4", 3);
        assert_eq!(generate_notes(&unknown), Err(TheoryError::UnknownPreset("bogus".to_string())));

        let mut bad_mode = ScaleRequest::preset("chromatic", "C4", 3);
        bad_mode.mode = Some(2);
        assert_eq!(generate_notes(&bad_mode), Err(TheoryError::InvalidMode { mode: 2, len: 1 }));

        let mut negative = ScaleRequest::preset("major", "C4", 0);
        negative.count = None;
        negative.octaves = Some(-1);
        assert!(matches!(generate_notes(&negative), Err(TheoryError::NegativeRange { .. })));

        let bad_root = ScaleRequest::preset("major", "H2", 3);
        assert!(matches!(generate_notes(&bad_root), Err(TheoryError::UnparseableNote(_))));
    }
}
