//! Scale Slayer WASM API
//!
//! The JavaScript-facing surface. Every entry point converts at the
//! boundary only; the work is done by plain functions returning
//! `crate::Result` so it can be tested natively.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, error conversion and console logging
//! - `types`: request/response DTOs
//! - `notes`: note parsing, respelling, transposition and comparison
//! - `scales`: scale generation and the preset list

pub mod helpers;
pub mod types;
pub mod notes;
pub mod scales;

pub use notes::{
    enharmonic, note_frequency, note_from_parts, notes_equal, parse_note_name, semitones_between,
    transpose,
};
pub use scales::{generate_scale, list_presets};
pub use types::{NoteDto, ScaleRequest};
