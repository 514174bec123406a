//! Accidental forcing and range limiting over generated scales

use scale_slayer::models::presets::MAJOR;
use scale_slayer::{Accidental, Note, NoteIteratorExt, ScaleNotes, TheoryError};

fn major_from(root: &str) -> ScaleNotes {
    MAJOR.generate_from(root, true).unwrap()
}

#[test]
fn test_force_flats_on_a_major() {
    let forced = major_from("A4").take(8).of_accidental(Accidental::Flat, false);
    assert_eq!(forced.letters(), "ABDDEGAA");
}

#[test]
fn test_force_sharps_on_a_major_is_unchanged() {
    let forced = major_from("A4").take(8).of_accidental(Accidental::Sharp, false);
    assert_eq!(forced.letters(), "ABCDEFGA");
}

#[test]
fn test_force_without_converting_naturals() {
    let forced = major_from("C4").take(8).of_accidental(Accidental::Flat, false);
    assert_eq!(forced.letters(), "CDEFGABC");
}

#[test]
fn test_force_converting_naturals() {
    let flats = major_from("C4").take(8).of_accidental(Accidental::Flat, true);
    assert_eq!(flats.letters(), "CDFFGACC");

    let sharps = major_from("C4").take(8).of_accidental(Accidental::Sharp, true);
    assert_eq!(sharps.letters(), "BDEEGABB");
}

#[test]
fn test_forcing_keeps_pitch() {
    let plain: Vec<Note> = major_from("E4").take(15).collect();
    let forced: Vec<Note> = major_from("E4").of_accidental(Accidental::Flat, true).take(15).collect();
    assert_eq!(plain, forced);
}

#[test]
fn test_within_range() {
    assert_eq!(major_from("C4").within_range(7, true).unwrap().letters(), "CDEF");
    assert_eq!(major_from("C4").within_range(7, false).unwrap().letters(), "CDEFG");
    assert_eq!(major_from("C4").within_range(12, true).unwrap().letters(), "CDEFGAB");
    assert_eq!(major_from("C4").within_range(0, true).unwrap().letters(), "");
    assert_eq!(major_from("C4").within_range(0, false).unwrap().letters(), "C");
}

#[test]
fn test_within_range_descending() {
    let mut notes: Vec<Note> = major_from("C4").take(15).collect();
    notes.reverse();
    assert_eq!(notes.into_iter().within_range(12, true).unwrap().letters(), "CBAGFED");
}

#[test]
fn test_octaves() {
    assert_eq!(major_from("C4").octaves(1, true).unwrap().letters(), "CDEFGABC");
    assert_eq!(major_from("C4").octaves(1, false).unwrap().letters(), "CDEFGAB");
    assert_eq!(major_from("C4").octaves(2, true).unwrap().letters(), "CDEFGABCDEFGABC");
    assert_eq!(major_from("C4").octaves(2, false).unwrap().letters(), "CDEFGABCDEFGAB");
    assert_eq!(major_from("C4").octaves(0, true).unwrap().letters(), "C");
    assert_eq!(major_from("C4").octaves(0, false).unwrap().letters(), "");
}

#[test]
fn test_negative_bounds_rejected() {
    let err = major_from("C4").within_range(-3, false).unwrap_err();
    assert_eq!(
        err,
        TheoryError::NegativeRange {
            argument: "semitones",
            value: -3
        }
    );
    assert_eq!(err.to_string(), "\"semitones\" cannot be less than 0 (got -3)");

    let err = major_from("C4").octaves(-1, true).unwrap_err();
    assert_eq!(err.to_string(), "\"count\" cannot be less than 0 (got -1)");
}

#[test]
fn test_adapters_compose() {
    let bounded = major_from("F4")
        .of_accidental(Accidental::Sharp, false)
        .octaves(1, true)
        .unwrap();
    let names: Vec<String> = bounded.map(|n| n.to_string()).collect();
    assert_eq!(names, ["F4", "G4", "A4", "A#4", "C5", "D5", "E5", "F5"]);
}
