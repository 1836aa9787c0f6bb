//! Ready-made alphabets.

pub mod alphabets;

use crate::alphabet::Alphabet;

use serde::{Deserialize, Serialize};

/// Names the built-in alphabets so a configuration can refer to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphabetPreset {
    ExtendedSpanish,
    SpanishUppercase,
    Base64,
}

impl AlphabetPreset {
    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            AlphabetPreset::ExtendedSpanish => &alphabets::EXTENDED_SPANISH,
            AlphabetPreset::SpanishUppercase => &alphabets::SPANISH_UPPERCASE,
            AlphabetPreset::Base64 => &alphabets::BASE64,
        }
    }
}
