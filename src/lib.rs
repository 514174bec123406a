//! Scale Slayer
//!
//! Enharmonic-aware notes and lazy scale generation, usable natively and
//! as a WASM module.
//!
//! ```
//! use scale_slayer::models::presets;
//! use scale_slayer::{Note, NoteIteratorExt};
//!
//! let root: Note = "Bb4".parse().unwrap();
//! let letters = presets::MAJOR.generate(root, true).octaves(1, true).unwrap().letters();
//! assert_eq!(letters, "BCDEFGAB");
//! ```

pub mod error;
pub mod models;
pub mod parse;
pub mod sequence;
pub mod api;

// Re-export commonly used types
pub use error::{Result, TheoryError};
pub use models::{Accidental, Interval, Letter, Note, Scale, ScaleNotes, STANDARD_TUNING_HZ};
pub use parse::parse_note;
pub use sequence::NoteIteratorExt;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Err only when a logger is already installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Scale Slayer WASM module initialized");
}
