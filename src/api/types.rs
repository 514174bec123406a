//! Request and response types for the WASM API
//!
//! Field names are camelCase on the JS side.

use serde::{Deserialize, Serialize};

use crate::models::{Accidental, Interval, Note};

/// A note as handed to JavaScript
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoteDto {
    /// Display form, e.g. "Bb4"
    pub name: String,
    pub letter: char,
    pub accidental: Accidental,
    pub octave: i32,
    pub cents: i32,
    pub distance_to_middle_c: i32,
    pub frequency: f64,
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        NoteDto {
            name: note.to_string(),
            letter: note.letter().as_char(),
            accidental: note.accidental(),
            octave: note.octave(),
            cents: note.cents(),
            distance_to_middle_c: note.distance_to_middle_c(),
            frequency: note.frequency(),
        }
    }
}

/// Parameters for `generateScale`.
///
/// The scale comes from exactly one of `preset` or `intervals`; `mode`
/// replaces the preset's own mode when given. Exactly one bound (`count`,
/// `semitones` or `octaves`) must be set.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScaleRequest {
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub intervals: Option<Vec<Interval>>,
    #[serde(default)]
    pub mode: Option<usize>,
    pub root: String,
    #[serde(default = "default_true")]
    pub retain_order: bool,

    #[serde(default)]
    pub accidental: Option<Accidental>,
    #[serde(default)]
    pub convert_naturals: bool,

    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub semitones: Option<i32>,
    #[serde(default)]
    pub exclusive: bool,
    #[serde(default)]
    pub octaves: Option<i32>,
    #[serde(default = "default_true")]
    pub contains_last_root: bool,
}

fn default_true() -> bool {
    true
}

impl ScaleRequest {
    /// Request for a preset bounded by a note count; the rest defaulted
    pub fn preset(name: &str, root: &str, count: usize) -> Self {
        ScaleRequest {
            preset: Some(name.to_string()),
            intervals: None,
            mode: None,
            root: root.to_string(),
            retain_order: true,
            accidental: None,
            convert_naturals: false,
            count: Some(count),
            semitones: None,
            exclusive: false,
            octaves: None,
            contains_last_root: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: ScaleRequest =
            serde_json::from_str(r#"{"preset":"major","root":"C4","octaves":1}"#).unwrap();
        assert_eq!(request.preset.as_deref(), Some("major"));
        assert!(request.retain_order);
        assert!(request.contains_last_root);
        assert!(!request.convert_naturals);
        assert_eq!(request.accidental, None);
        assert_eq!(request.octaves, Some(1));
    }

    #[test]
    fn test_request_camel_case_fields() {
        let request: ScaleRequest = serde_json::from_str(
            r#"{"intervals":[2,2],"root":"C","retainOrder":false,"accidental":1,"convertNaturals":true,"containsLastRoot":false,"octaves":2}"#,
        )
        .unwrap();
        assert_eq!(request.intervals, Some(vec![Interval::WHOLE, Interval::WHOLE]));
        assert!(!request.retain_order);
        assert_eq!(request.accidental, Some(Accidental::Flat));
        assert!(request.convert_naturals);
        assert!(!request.contains_last_root);
    }

    #[test]
    fn test_request_requires_root() {
        assert!(serde_json::from_str::<ScaleRequest>(r#"{"preset":"major","count":3}"#).is_err());
    }

    #[test]
    fn test_note_dto_from_note() {
        let dto = NoteDto::from("Bb4".parse::<Note>().unwrap());
        assert_eq!(dto.name, "Bb4");
        assert_eq!(dto.letter, 'B');
        assert_eq!(dto.accidental, Accidental::Flat);
        assert_eq!(dto.distance_to_middle_c, 10);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["distanceToMiddleC"], 10);
        assert_eq!(json["accidental"], 1);
    }
}
