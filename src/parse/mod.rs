//! Parsing module
//!
//! Converts user-typed note names such as `"Bb5"`, `"C sharp 6"` or `"A"`
//! into `Note` values.

pub mod note_name;

pub use note_name::parse_note;
