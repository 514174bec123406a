//! Range limiting

use std::iter::FusedIterator;

use crate::models::Note;

/// Iterator returned by [`NoteIteratorExt::within_range`](super::NoteIteratorExt::within_range)
/// and [`NoteIteratorExt::octaves`](super::NoteIteratorExt::octaves).
///
/// The first note pulled becomes the root. Distance is measured as absolute
/// semitones from it, so descending sequences are limited the same way.
#[derive(Debug, Clone)]
pub struct WithinRange<I> {
    iter: I,
    /// Exclusive upper bound on the distance from the root
    limit: i32,
    root: Option<Note>,
    done: bool,
}

impl<I> WithinRange<I> {
    pub(crate) fn new(iter: I, semitones: i32, exclusive: bool) -> Self {
        let limit = if exclusive {
            semitones
        } else {
            semitones.saturating_add(1)
        };

        WithinRange {
            iter,
            limit,
            root: None,
            done: false,
        }
    }
}

impl<I: Iterator<Item = Note>> Iterator for WithinRange<I> {
    type Item = Note;

    fn next(&mut self) -> Option<Note> {
        if self.done {
            return None;
        }

        let Some(note) = self.iter.next() else {
            self.done = true;
            return None;
        };
        let root = *self.root.get_or_insert(note);

        if (note - root).saturating_abs() < self.limit {
            Some(note)
        } else {
            log::trace!("{} is outside {} semitones of {}, stopping", note, self.limit, root);
            self.done = true;
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I: Iterator<Item = Note>> FusedIterator for WithinRange<I> {}
