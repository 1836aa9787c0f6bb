use crate::alphabet::Alphabet;
use crate::cipher::{Direction, HillCipher};
use crate::errors::HillCryptoError;
use crate::preset::AlphabetPreset;

use serde::{Deserialize, Serialize};

/// Where a configuration takes its alphabet from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphabetSource {
    Preset(AlphabetPreset),
    Custom(Alphabet),
}

impl AlphabetSource {
    pub fn alphabet(&self) -> &Alphabet {
        match self {
            AlphabetSource::Preset(preset) => preset.alphabet(),
            AlphabetSource::Custom(alphabet) => alphabet,
        }
    }
}

/// Everything one Hill cipher invocation needs besides the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherConfig {
    pub alphabet: AlphabetSource,
    pub key: String,
    pub direction: Direction,
}

impl CipherConfig {
    /// Parses a configuration such as
    /// `{"alphabet":{"preset":"spanish_uppercase"},"key":"EAFB","direction":"encode"}`.
    pub fn from_json(json: &str) -> Result<Self, HillCryptoError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, HillCryptoError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validates the key for the configured direction.
    pub fn cipher(&self) -> Result<HillCipher<'_>, HillCryptoError> {
        HillCipher::try_with(&self.key, self.alphabet.alphabet(), self.direction)
    }

    pub fn run(&self, message: &str) -> Result<String, HillCryptoError> {
        self.cipher()?.transform(message)
    }
}
