//! Natural note letters A-G

use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::prelude::*;

use crate::error::{Result, TheoryError};

/// One of the seven natural note names
#[wasm_bindgen]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
}

impl Letter {
    /// All letters in alphabetical order
    pub const ALL: [Letter; 7] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
    ];

    /// Look up a letter, ignoring case
    pub fn from_char(c: char) -> Result<Letter> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Letter::A),
            'B' => Ok(Letter::B),
            'C' => Ok(Letter::C),
            'D' => Ok(Letter::D),
            'E' => Ok(Letter::E),
            'F' => Ok(Letter::F),
            'G' => Ok(Letter::G),
            _ => Err(TheoryError::InvalidLetter(c)),
        }
    }

    /// Canonical uppercase character
    pub fn as_char(&self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
        }
    }

    /// The following letter, wrapping G → A
    pub fn next(&self) -> Letter {
        Letter::ALL[(*self as usize + 1) % 7]
    }

    /// The preceding letter, wrapping A → G
    pub fn previous(&self) -> Letter {
        Letter::ALL[(*self as usize + 6) % 7]
    }

    /// Chromatic offset of the natural letter above C
    pub fn natural_offset(&self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = TheoryError;

    fn try_from(c: char) -> Result<Self> {
        Letter::from_char(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_case_insensitive() {
        for (lower, upper) in "abcdefg".chars().zip("ABCDEFG".chars()) {
            assert_eq!(Letter::from_char(lower).unwrap(), Letter::from_char(upper).unwrap());
            assert_eq!(Letter::from_char(lower).unwrap().as_char(), upper);
        }
    }

    #[test]
    fn test_from_char_invalid() {
        assert_eq!(Letter::from_char('H'), Err(TheoryError::InvalidLetter('H')));
        assert_eq!(Letter::from_char('1'), Err(TheoryError::InvalidLetter('1')));
        assert!(Letter::try_from(' ').is_err());
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(Letter::A.next(), Letter::B);
        assert_eq!(Letter::F.next(), Letter::G);
        assert_eq!(Letter::G.next(), Letter::A);
    }

    #[test]
    fn test_previous_wraps() {
        assert_eq!(Letter::B.previous(), Letter::A);
        assert_eq!(Letter::A.previous(), Letter::G);
        assert_eq!(Letter::C.previous(), Letter::B);
    }

    #[test]
    fn test_natural_offsets() {
        let offsets: Vec<i32> = [Letter::C, Letter::D, Letter::E, Letter::F, Letter::G, Letter::A, Letter::B]
            .iter()
            .map(|l| l.natural_offset())
            .collect();
        assert_eq!(offsets, vec![0, 2, 4, 5, 7, 9, 11]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Letter::F).unwrap();
        assert_eq!(json, "\"F\"");
        let parsed: Letter = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Letter::F);
    }
}
