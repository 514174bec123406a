//! Semitone intervals used to build scales

use serde::{Deserialize, Serialize};
use std::fmt;

/// A distance between two scale degrees, counted in semitones.
///
/// Conventional names are provided as constants; several names share a
/// value (`HALF`, `SEMITONE` and `MINOR_SECOND` are all one semitone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Interval(u8);

impl Interval {
    pub const UNISON: Interval = Interval(0);
    pub const MINOR_SECOND: Interval = Interval(1);
    pub const SEMITONE: Interval = Interval(1);
    pub const HALF: Interval = Interval(1);
    pub const MAJOR_SECOND: Interval = Interval(2);
    pub const WHOLE_TONE: Interval = Interval(2);
    pub const WHOLE: Interval = Interval(2);
    pub const MINOR_THIRD: Interval = Interval(3);
    pub const WHOLE_HALF: Interval = Interval(3);
    pub const AUGMENTED_SECOND: Interval = Interval(3);
    pub const MAJOR_THIRD: Interval = Interval(4);
    pub const FOURTH: Interval = Interval(5);
    pub const TRITONE: Interval = Interval(6);
    pub const FIFTH: Interval = Interval(7);
    pub const MINOR_SIXTH: Interval = Interval(8);
    pub const MAJOR_SIXTH: Interval = Interval(9);
    pub const MINOR_SEVENTH: Interval = Interval(10);
    pub const MAJOR_SEVENTH: Interval = Interval(11);
    pub const OCTAVE: Interval = Interval(12);
    pub const MINOR_NINTH: Interval = Interval(13);
    pub const MAJOR_NINTH: Interval = Interval(14);
    pub const ELEVENTH: Interval = Interval(17);
    pub const SHARP_ELEVENTH: Interval = Interval(18);
    pub const THIRTEENTH: Interval = Interval(21);

    pub const fn new(semitones: u8) -> Interval {
        Interval(semitones)
    }

    pub const fn semitones(&self) -> i32 {
        self.0 as i32
    }

    /// Conventional name, if the size has one
    pub fn name(&self) -> Option<&'static str> {
        let name = match self.0 {
            0 => "unison",
            1 => "half",
            2 => "whole",
            3 => "minor third",
            4 => "major third",
            5 => "fourth",
            6 => "tritone",
            7 => "fifth",
            8 => "minor sixth",
            9 => "major sixth",
            10 => "minor seventh",
            11 => "major seventh",
            12 => "octave",
            13 => "minor ninth",
            14 => "major ninth",
            17 => "eleventh",
            18 => "sharp eleventh",
            21 => "thirteenth",
            _ => return None,
        };
        Some(name)
    }
}

impl From<u8> for Interval {
    fn from(semitones: u8) -> Self {
        Interval(semitones)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{} semitones", self.0),
        }
    }
}
