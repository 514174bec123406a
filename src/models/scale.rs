//! Interval patterns and scale generation
//!
//! A `Scale` is a cyclic list of intervals plus a 1-indexed mode that picks
//! the starting point in the cycle. `Scale::generate` walks the cycle from a
//! root note and yields notes forever; callers decide where to stop.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::iter::FusedIterator;

use super::interval::Interval;
use super::note::Note;
use crate::error::{Result, TheoryError};

/// An ordered, cyclic interval pattern with a mode offset
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ScaleDef")]
pub struct Scale {
    intervals: Cow<'static, [Interval]>,
    mode: usize,
}

/// Unvalidated wire form of a scale
#[derive(Deserialize)]
struct ScaleDef {
    intervals: Vec<Interval>,
    #[serde(default = "default_mode")]
    mode: usize,
}

fn default_mode() -> usize {
    1
}

impl TryFrom<ScaleDef> for Scale {
    type Error = TheoryError;

    fn try_from(def: ScaleDef) -> Result<Self> {
        Scale::new(def.intervals)?.with_mode(def.mode)
    }
}

impl Scale {
    /// Build a scale in mode 1. An empty interval list is rejected.
    pub fn new<I>(intervals: I) -> Result<Scale>
    where
        I: IntoIterator<Item = Interval>,
    {
        let intervals: Vec<Interval> = intervals.into_iter().collect();
        if intervals.is_empty() {
            return Err(TheoryError::EmptyScale);
        }

        Ok(Scale {
            intervals: Cow::Owned(intervals),
            mode: 1,
        })
    }

    /// Build a scale from raw semitone counts
    pub fn from_semitones(semitones: &[u8]) -> Result<Scale> {
        Scale::new(semitones.iter().copied().map(Interval::from))
    }

    /// Compile-time constructor for the preset tables.
    /// Panics (at compile time) on an empty table or a bad mode.
    pub(crate) const fn preset(intervals: &'static [Interval], mode: usize) -> Scale {
        assert!(!intervals.is_empty() && mode >= 1 && mode <= intervals.len());
        Scale {
            intervals: Cow::Borrowed(intervals),
            mode,
        }
    }

    /// Copy of this scale starting at another degree of the same cycle
    pub fn with_mode(&self, mode: usize) -> Result<Scale> {
        if mode == 0 || mode > self.intervals.len() {
            log::debug!("rejected mode {} for {}-interval scale", mode, self.intervals.len());
            return Err(TheoryError::InvalidMode {
                mode,
                len: self.intervals.len(),
            });
        }

        Ok(Scale {
            intervals: self.intervals.clone(),
            mode,
        })
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// 1-indexed mode
    pub fn mode(&self) -> usize {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Total semitones covered by one pass through the cycle
    pub fn span(&self) -> i32 {
        self.intervals.iter().map(Interval::semitones).sum()
    }

    /// Every mode of this interval cycle, starting from mode 1
    pub fn modes(&self) -> impl Iterator<Item = Scale> + '_ {
        (1..=self.intervals.len()).map(move |mode| Scale {
            intervals: self.intervals.clone(),
            mode,
        })
    }

    /// Generate notes from `root`, forever.
    ///
    /// With `retain_order`, each note is respelled to its enharmonic when that
    /// keeps the letters climbing one step at a time (Bb major spells its
    /// fourth degree Eb rather than D#). Symmetric scales such as whole-tone
    /// usually want `retain_order = false`.
    pub fn generate(&self, root: Note, retain_order: bool) -> ScaleNotes {
        log::trace!(
            "generating scale from {} (mode {}, retain_order={})",
            root,
            self.mode,
            retain_order
        );

        ScaleNotes {
            intervals: self.intervals.clone(),
            current: root,
            index: self.mode - 1,
            retain_order,
        }
    }

    /// Same as [`Scale::generate`], parsing the root from a note name
    pub fn generate_from(&self, root: &str, retain_order: bool) -> Result<ScaleNotes> {
        Ok(self.generate(root.parse()?, retain_order))
    }
}

/// Infinite iterator returned by [`Scale::generate`].
///
/// Owns its interval cycle, so it can outlive the scale it came from.
/// Cloning a preset's cycle does not allocate.
#[derive(Debug, Clone)]
pub struct ScaleNotes {
    intervals: Cow<'static, [Interval]>,
    current: Note,
    index: usize,
    retain_order: bool,
}

impl Iterator for ScaleNotes {
    type Item = Note;

    fn next(&mut self) -> Option<Note> {
        let emitted = self.current;
        let next_letter = emitted.letter().next();

        let mut next = emitted + self.intervals[self.index].semitones();
        if self.retain_order && next.letter() != next_letter {
            let respelled = next.enharmonic();
            if respelled.letter() == next_letter {
                next = respelled;
            }
        }

        self.index = (self.index + 1) % self.intervals.len();
        self.current = next;

        Some(emitted)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for ScaleNotes {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::accidental::Accidental;

    const MAJOR: [Interval; 7] = [
        Interval::WHOLE,
        Interval::WHOLE,
        Interval::HALF,
        Interval::WHOLE,
        Interval::WHOLE,
        Interval::WHOLE,
        Interval::HALF,
    ];

    fn names(notes: impl Iterator<Item = Note>) -> Vec<String> {
        notes.map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(Scale::new(Vec::new()), Err(TheoryError::EmptyScale));
        assert_eq!(Scale::from_semitones(&[]), Err(TheoryError::EmptyScale));
    }

    #[test]
    fn test_mode_bounds() {
        let major = Scale::new(MAJOR).unwrap();
        assert_eq!(major.mode(), 1);
        assert_eq!(major.with_mode(7).unwrap().mode(), 7);
        assert_eq!(major.with_mode(0), Err(TheoryError::InvalidMode { mode: 0, len: 7 }));
        assert_eq!(major.with_mode(8), Err(TheoryError::InvalidMode { mode: 8, len: 7 }));
    }

    #[test]
    fn test_with_mode_leaves_original_untouched() {
        let major = Scale::new(MAJOR).unwrap();
        let dorian = major.with_mode(2).unwrap();
        assert_eq!(major.mode(), 1);
        assert_eq!(dorian.intervals(), major.intervals());
    }

    #[test]
    fn test_span_and_modes() {
        let major = Scale::new(MAJOR).unwrap();
        assert_eq!(major.span(), 12);
        let modes: Vec<usize> = major.modes().map(|s| s.mode()).collect();
        assert_eq!(modes, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_generate_c_major() {
        let major = Scale::new(MAJOR).unwrap();
        let notes = major.generate(Note::natural('C').unwrap(), true).take(8);
        assert_eq!(names(notes), vec!["C4", "D4", "E4", "F4", "G4", "A4", "B4", "C5"]);
    }

    #[test]
    fn test_generate_is_restartable() {
        let major = Scale::new(MAJOR).unwrap();
        let root = Note::new('A', Accidental::Natural, 4, 0).unwrap();
        let first: Vec<Note> = major.generate(root, true).take(5).collect();
        let second: Vec<Note> = major.generate(root, true).take(5).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_respects_mode() {
        let minor = Scale::new(MAJOR).unwrap().with_mode(6).unwrap();
        let notes = minor.generate_from("A4", true).unwrap().take(8);
        assert_eq!(names(notes), vec!["A4", "B4", "C5", "D5", "E5", "F5", "G5", "A5"]);
    }

    #[test]
    fn test_generate_keeps_letter_order() {
        let major = Scale::new(MAJOR).unwrap();
        let notes = major.generate_from("Bb4", true).unwrap().take(8);
        assert_eq!(names(notes), vec!["Bb4", "C5", "D5", "Eb5", "F5", "G5", "A5", "Bb5"]);

        let unordered = major.generate_from("Bb4", false).unwrap().take(4);
        assert_eq!(names(unordered), vec!["Bb4", "C5", "D5", "D#5"]);
    }

    #[test]
    fn test_generate_from_bad_root() {
        let major = Scale::new(MAJOR).unwrap();
        assert!(matches!(major.generate_from("H#", true), Err(TheoryError::UnparseableNote(_))));
    }

    #[test]
    fn test_deserialize_validates() {
        let scale: Scale = serde_json::from_str(r#"{"intervals":[2,1],"mode":2}"#).unwrap();
        assert_eq!(scale.mode(), 2);
        assert_eq!(scale.len(), 2);

        let defaulted: Scale = serde_json::from_str(r#"{"intervals":[2]}"#).unwrap();
        assert_eq!(defaulted.mode(), 1);

        assert!(serde_json::from_str::<Scale>(r#"{"intervals":[2,1],"mode":3}"#).is_err());
        assert!(serde_json::from_str::<Scale>(r#"{"intervals":[]}"#).is_err());
    }
}
