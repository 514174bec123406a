//! Accidentals applied to note letters

use std::fmt;
use wasm_bindgen::prelude::*;

use crate::error::{Result, TheoryError};

/// Natural, flat or sharp. Double accidentals are not modelled.
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum Accidental {
    /// No accidental
    #[default]
    Natural = 0,

    /// Flat (b)
    Flat = 1,

    /// Sharp (#)
    Sharp = 2,
}

impl Accidental {
    /// ASCII symbol used when rendering note names
    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Flat => "b",
            Accidental::Sharp => "#",
        }
    }

    pub fn unicode_symbol(&self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Flat => "♭",
            Accidental::Sharp => "♯",
        }
    }

    /// Parse an accidental token as it appears in a note name.
    /// Tokens are compared case-insensitively.
    pub fn from_token(token: &str) -> Option<Accidental> {
        match token.to_lowercase().as_str() {
            "flat" | "b" | "♭" => Some(Accidental::Flat),
            "sharp" | "#" | "♯" => Some(Accidental::Sharp),
            _ => None,
        }
    }

    /// Semitone offset relative to the natural letter
    pub fn semitone_offset(&self) -> i32 {
        match self {
            Accidental::Natural => 0,
            Accidental::Flat => -1,
            Accidental::Sharp => 1,
        }
    }

    /// Flat for sharp and vice versa; natural stays natural
    pub fn opposite(&self) -> Accidental {
        match self {
            Accidental::Natural => Accidental::Natural,
            Accidental::Flat => Accidental::Sharp,
            Accidental::Sharp => Accidental::Flat,
        }
    }
}

impl TryFrom<u8> for Accidental {
    type Error = TheoryError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Accidental::Natural),
            1 => Ok(Accidental::Flat),
            2 => Ok(Accidental::Sharp),
            other => Err(TheoryError::InvalidAccidental(other)),
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
