//! Named scale presets
//!
//! Each family is one interval table; the other members of the family are
//! its modes. Aliases are plain re-bindings of the same constant.

use super::interval::Interval;
use super::scale::Scale;

const W: Interval = Interval::WHOLE;
const H: Interval = Interval::HALF;
const WH: Interval = Interval::WHOLE_HALF;

const MAJOR_STEPS: [Interval; 7] = [W, W, H, W, W, W, H];
const MELODIC_MINOR_STEPS: [Interval; 7] = [W, H, W, W, W, W, H];
const HARMONIC_MINOR_STEPS: [Interval; 7] = [W, H, W, W, H, WH, H];
const HARMONIC_MAJOR_STEPS: [Interval; 7] = [W, W, H, W, H, WH, H];
const DOUBLE_HARMONIC_STEPS: [Interval; 7] = [H, WH, H, W, H, WH, H];
const DIMINISHED_STEPS: [Interval; 2] = [W, H];
const WHOLE_TONE_STEPS: [Interval; 1] = [W];
const CHROMATIC_STEPS: [Interval; 1] = [H];

// Major modes
pub const MAJOR: Scale = Scale::preset(&MAJOR_STEPS, 1);
pub const DORIAN: Scale = Scale::preset(&MAJOR_STEPS, 2);
pub const PHRYGIAN: Scale = Scale::preset(&MAJOR_STEPS, 3);
pub const LYDIAN: Scale = Scale::preset(&MAJOR_STEPS, 4);
pub const MIXOLYDIAN: Scale = Scale::preset(&MAJOR_STEPS, 5);
pub const MINOR: Scale = Scale::preset(&MAJOR_STEPS, 6);
pub const LOCRIAN: Scale = Scale::preset(&MAJOR_STEPS, 7);
pub const IONIAN: Scale = MAJOR;
pub const AEOLIAN: Scale = MINOR;

// Melodic minor modes
pub const MELODIC_MINOR: Scale = Scale::preset(&MELODIC_MINOR_STEPS, 1);
pub const DORIAN_FLAT2: Scale = Scale::preset(&MELODIC_MINOR_STEPS, 2);
pub const PHRYGIAN_SHARP6: Scale = DORIAN_FLAT2;
pub const LYDIAN_AUGMENTED: Scale = Scale::preset(&MELODIC_MINOR_STEPS, 3);
pub const ACOUSTIC: Scale = Scale::preset(&MELODIC_MINOR_STEPS, 4);
pub const OVERTONE: Scale = ACOUSTIC;
pub const LYDIAN_DOMINANT: Scale = ACOUSTIC;
pub const MIXOLYDIAN_SHARP4: Scale = ACOUSTIC;
pub const AEOLIAN_DOMINANT: Scale = Scale::preset(&MELODIC_MINOR_STEPS, 5);
pub const MIXOLYDIAN_FLAT6: Scale = AEOLIAN_DOMINANT;
pub const HINDU: Scale = AEOLIAN_DOMINANT;
pub const HALF_DIMINISHED: Scale = Scale::preset(&MELODIC_MINOR_STEPS, 6);
pub const LOCRIAN_NATURAL2: Scale = HALF_DIMINISHED;
pub const AEOLIAN_FLAT5: Scale = HALF_DIMINISHED;
pub const ALTERED: Scale = Scale::preset(&MELODIC_MINOR_STEPS, 7);
pub const SUPER_LOCRIAN: Scale = ALTERED;

// Harmonic minor modes
pub const HARMONIC_MINOR: Scale = Scale::preset(&HARMONIC_MINOR_STEPS, 1);
pub const LOCRIAN_SHARP6: Scale = Scale::preset(&HARMONIC_MINOR_STEPS, 2);
pub const IONIAN_SHARP5: Scale = Scale::preset(&HARMONIC_MINOR_STEPS, 3);
pub const ROMANIAN_MINOR: Scale = Scale::preset(&HARMONIC_MINOR_STEPS, 4);
pub const UKRAINIAN_DORIAN: Scale = ROMANIAN_MINOR;
pub const ALTERED_DORIAN: Scale = ROMANIAN_MINOR;
pub const PHRYGIAN_DOMINANT: Scale = Scale::preset(&HARMONIC_MINOR_STEPS, 5);
pub const ALTERED_PHRYGIAN: Scale = PHRYGIAN_DOMINANT;
pub const DOMINANT_FLAT2_FLAT6: Scale = PHRYGIAN_DOMINANT;
pub const FREYGISH: Scale = PHRYGIAN_DOMINANT;
pub const LYDIAN_SHARP2: Scale = Scale::preset(&HARMONIC_MINOR_STEPS, 6);
pub const ALTERED_DIMINISHED: Scale = Scale::preset(&HARMONIC_MINOR_STEPS, 7);

// Harmonic major modes
pub const HARMONIC_MAJOR: Scale = Scale::preset(&HARMONIC_MAJOR_STEPS, 1);
pub const DORIAN_FLAT5: Scale = Scale::preset(&HARMONIC_MAJOR_STEPS, 2);
pub const LOCRIAN_SHARP2_SHARP6: Scale = DORIAN_FLAT5;
pub const PHRYGIAN_FLAT4: Scale = Scale::preset(&HARMONIC_MAJOR_STEPS, 3);
pub const ALTERED_DOMINANT_SHARP5: Scale = PHRYGIAN_FLAT4;
pub const LYDIAN_FLAT3: Scale = Scale::preset(&HARMONIC_MAJOR_STEPS, 4);
pub const MELODIC_MINOR_SHARP4: Scale = LYDIAN_FLAT3;
pub const MIXOLYDIAN_FLAT2: Scale = Scale::preset(&HARMONIC_MAJOR_STEPS, 5);
pub const LYDIAN_AUGMENTED_SHARP2: Scale = Scale::preset(&HARMONIC_MAJOR_STEPS, 6);
pub const LOCRIAN_DOUBLE_FLAT7: Scale = Scale::preset(&HARMONIC_MAJOR_STEPS, 7);

// Double harmonic modes
pub const DOUBLE_HARMONIC: Scale = Scale::preset(&DOUBLE_HARMONIC_STEPS, 1);
pub const MAYAMALAVAGOWLA: Scale = DOUBLE_HARMONIC;
pub const BHAIRAV_RAGA: Scale = DOUBLE_HARMONIC;
pub const BYZANTINE: Scale = DOUBLE_HARMONIC;
pub const ARABIC: Scale = DOUBLE_HARMONIC;
pub const GYPSY_MAJOR: Scale = DOUBLE_HARMONIC;
pub const LYDIAN_SHARP2_SHARP6: Scale = Scale::preset(&DOUBLE_HARMONIC_STEPS, 2);
pub const ULTRAPHRYGIAN: Scale = Scale::preset(&DOUBLE_HARMONIC_STEPS, 3);
pub const PHRYGIAN_DOUBLE_FLAT7_FLAT4: Scale = ULTRAPHRYGIAN;
pub const ALTERED_DIMINISHED_SHARP5: Scale = ULTRAPHRYGIAN;
pub const HUNGARIAN_MINOR: Scale = Scale::preset(&DOUBLE_HARMONIC_STEPS, 4);
pub const GYPSY_MINOR: Scale = HUNGARIAN_MINOR;
pub const LOCRIAN_NATURAL6_NATURAL3: Scale = Scale::preset(&DOUBLE_HARMONIC_STEPS, 5);
pub const MIXOLYDIAN_FLAT5_FLAT2: Scale = LOCRIAN_NATURAL6_NATURAL3;
pub const ORIENTAL: Scale = LOCRIAN_NATURAL6_NATURAL3;
pub const IONIAN_SHARP2_SHARP5: Scale = Scale::preset(&DOUBLE_HARMONIC_STEPS, 6);
pub const LOCRIAN_DOUBLE_FLAT3_DOUBLE_FLAT7: Scale = Scale::preset(&DOUBLE_HARMONIC_STEPS, 7);

// Special scales
pub const DIMINISHED: Scale = Scale::preset(&DIMINISHED_STEPS, 1);
pub const OCTATONIC: Scale = DIMINISHED;
pub const INVERTED_DIMINISHED: Scale = Scale::preset(&DIMINISHED_STEPS, 2);
pub const WHOLE_TONE: Scale = Scale::preset(&WHOLE_TONE_STEPS, 1);
pub const CHROMATIC: Scale = Scale::preset(&CHROMATIC_STEPS, 1);

/// Canonical preset names, in family order
const CANONICAL: &[(&str, Scale)] = &[
    ("major", MAJOR),
    ("dorian", DORIAN),
    ("phrygian", PHRYGIAN),
    ("lydian", LYDIAN),
    ("mixolydian", MIXOLYDIAN),
    ("minor", MINOR),
    ("locrian", LOCRIAN),
    ("melodic minor", MELODIC_MINOR),
    ("dorian flat2", DORIAN_FLAT2),
    ("lydian augmented", LYDIAN_AUGMENTED),
    ("acoustic", ACOUSTIC),
    ("aeolian dominant", AEOLIAN_DOMINANT),
    ("half diminished", HALF_DIMINISHED),
    ("altered", ALTERED),
    ("harmonic minor", HARMONIC_MINOR),
    ("locrian sharp6", LOCRIAN_SHARP6),
    ("ionian sharp5", IONIAN_SHARP5),
    ("romanian minor", ROMANIAN_MINOR),
    ("phrygian dominant", PHRYGIAN_DOMINANT),
    ("lydian sharp2", LYDIAN_SHARP2),
    ("altered diminished", ALTERED_DIMINISHED),
    ("harmonic major", HARMONIC_MAJOR),
    ("dorian flat5", DORIAN_FLAT5),
    ("phrygian flat4", PHRYGIAN_FLAT4),
    ("lydian flat3", LYDIAN_FLAT3),
    ("mixolydian flat2", MIXOLYDIAN_FLAT2),
    ("lydian augmented sharp2", LYDIAN_AUGMENTED_SHARP2),
    ("locrian double flat7", LOCRIAN_DOUBLE_FLAT7),
    ("double harmonic", DOUBLE_HARMONIC),
    ("lydian sharp2 sharp6", LYDIAN_SHARP2_SHARP6),
    ("ultraphrygian", ULTRAPHRYGIAN),
    ("hungarian minor", HUNGARIAN_MINOR),
    ("locrian natural6 natural3", LOCRIAN_NATURAL6_NATURAL3),
    ("ionian sharp2 sharp5", IONIAN_SHARP2_SHARP5),
    ("locrian double flat3 double flat7", LOCRIAN_DOUBLE_FLAT3_DOUBLE_FLAT7),
    ("diminished", DIMINISHED),
    ("inverted diminished", INVERTED_DIMINISHED),
    ("whole tone", WHOLE_TONE),
    ("chromatic", CHROMATIC),
];

const ALIASES: &[(&str, Scale)] = &[
    ("ionian", IONIAN),
    ("aeolian", AEOLIAN),
    ("natural minor", MINOR),
    ("phrygian sharp6", PHRYGIAN_SHARP6),
    ("overtone", OVERTONE),
    ("lydian dominant", LYDIAN_DOMINANT),
    ("mixolydian sharp4", MIXOLYDIAN_SHARP4),
    ("mixolydian flat6", MIXOLYDIAN_FLAT6),
    ("hindu", HINDU),
    ("locrian natural2", LOCRIAN_NATURAL2),
    ("aeolian flat5", AEOLIAN_FLAT5),
    ("super locrian", SUPER_LOCRIAN),
    ("ukrainian dorian", UKRAINIAN_DORIAN),
    ("altered dorian", ALTERED_DORIAN),
    ("altered phrygian", ALTERED_PHRYGIAN),
    ("dominant flat2 flat6", DOMINANT_FLAT2_FLAT6),
    ("freygish", FREYGISH),
    ("locrian sharp2 sharp6", LOCRIAN_SHARP2_SHARP6),
    ("altered dominant sharp5", ALTERED_DOMINANT_SHARP5),
    ("melodic minor sharp4", MELODIC_MINOR_SHARP4),
    ("mayamalavagowla", MAYAMALAVAGOWLA),
    ("bhairav raga", BHAIRAV_RAGA),
    ("byzantine", BYZANTINE),
    ("arabic", ARABIC),
    ("gypsy major", GYPSY_MAJOR),
    ("phrygian double flat7 flat4", PHRYGIAN_DOUBLE_FLAT7_FLAT4),
    ("altered diminished sharp5", ALTERED_DIMINISHED_SHARP5),
    ("gypsy minor", GYPSY_MINOR),
    ("mixolydian flat5 flat2", MIXOLYDIAN_FLAT5_FLAT2),
    ("oriental", ORIENTAL),
    ("octatonic", OCTATONIC),
];

/// Strip separators and case so "Whole-Tone", "whole_tone" and "WholeTone" match
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Look up a preset or alias by name
pub fn by_name(name: &str) -> Option<Scale> {
    let wanted = normalize(name);
    CANONICAL
        .iter()
        .chain(ALIASES.iter())
        .find(|(candidate, _)| normalize(candidate) == wanted)
        .map(|(_, scale)| scale.clone())
}

/// Canonical preset names (aliases excluded)
pub fn names() -> impl Iterator<Item = &'static str> {
    CANONICAL.iter().map(|(name, _)| *name)
}
