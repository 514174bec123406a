//! Accidental forcing

use std::iter::FusedIterator;

use crate::models::{Accidental, Note};

/// Respell a single note toward `target` where its enharmonic allows it.
///
/// Notes already carrying `target` pass through. Naturals are respelled only
/// with `convert_naturals`, and only when the enharmonic really carries
/// `target` (A, D and G have none). Forcing toward `Natural` resolves E#, B#,
/// Fb and Cb and leaves other accidentals alone.
pub fn force_accidental(note: Note, target: Accidental, convert_naturals: bool) -> Note {
    if note.accidental() == target {
        return note;
    }

    let respelled = note.enharmonic();
    match (note.accidental(), target) {
        (Accidental::Natural, _) if convert_naturals && respelled.accidental() == target => respelled,
        (Accidental::Natural, _) => note,
        (_, Accidental::Natural) if respelled.accidental() == Accidental::Natural => respelled,
        (_, Accidental::Natural) => note,
        _ => respelled,
    }
}

/// Iterator returned by [`NoteIteratorExt::of_accidental`](super::NoteIteratorExt::of_accidental)
#[derive(Debug, Clone)]
pub struct OfAccidental<I> {
    iter: I,
    target: Accidental,
    convert_naturals: bool,
}

impl<I> OfAccidental<I> {
    pub(crate) fn new(iter: I, target: Accidental, convert_naturals: bool) -> Self {
        OfAccidental {
            iter,
            target,
            convert_naturals,
        }
    }
}

impl<I: Iterator<Item = Note>> Iterator for OfAccidental<I> {
    type Item = Note;

    fn next(&mut self) -> Option<Note> {
        self.iter
            .next()
            .map(|note| force_accidental(note, self.target, self.convert_naturals))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: DoubleEndedIterator<Item = Note>> DoubleEndedIterator for OfAccidental<I> {
    fn next_back(&mut self) -> Option<Note> {
        self.iter
            .next_back()
            .map(|note| force_accidental(note, self.target, self.convert_naturals))
    }
}

impl<I: FusedIterator<Item = Note>> FusedIterator for OfAccidental<I> {}
