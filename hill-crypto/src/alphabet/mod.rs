//! # Alphabet Module
//!
//! Bijection between the symbols a cipher accepts and the integers `[0, M)`.

use crate::errors::HillCryptoError;
use crate::ring::{Ring, Vector};

use serde::{Deserialize, Serialize};

use std::collections::HashMap;

/// Ordered set of distinct symbols plus an optional blank used for padding.
///
/// Built once and then only read; every cipher operation borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AlphabetDef", into = "AlphabetDef")]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
    blank: Option<char>,
    ring: Ring,
}

/// Wire form of an [`Alphabet`]: the symbols as one string plus the blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlphabetDef {
    pub symbols: String,
    pub blank: Option<char>,
}

impl Alphabet {
    /// Builds an alphabet from `symbols` in order.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::InvalidAlphabet` when a symbol repeats, when
    /// there are fewer than two symbols, or when `blank` is not one of them.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::alphabet::Alphabet;
    /// let alphabet = Alphabet::try_with("ABC ", Some(' ')).unwrap();
    /// assert_eq!(alphabet.len(), 4);
    /// assert!(Alphabet::try_with("ABA", None).is_err());
    /// assert!(Alphabet::try_with("AB", Some(' ')).is_err());
    /// ```
    pub fn try_with(symbols: &str, blank: Option<char>) -> Result<Self, HillCryptoError> {
        let symbols: Vec<char> = symbols.chars().collect();
        let mut index = HashMap::with_capacity(symbols.len());
        for (i, &symbol) in symbols.iter().enumerate() {
            if index.insert(symbol, i).is_some() {
                return Err(HillCryptoError::InvalidAlphabet(format!(
                    "Symbol {:?} appears more than once",
                    symbol
                )));
            }
        }

        if symbols.len() < 2 {
            return Err(HillCryptoError::InvalidAlphabet(format!(
                "An alphabet needs at least 2 symbols, got {}",
                symbols.len()
            )));
        }

        if let Some(blank) = blank {
            if !index.contains_key(&blank) {
                return Err(HillCryptoError::InvalidAlphabet(format!(
                    "Blank symbol {:?} is not part of the alphabet",
                    blank
                )));
            }
        }

        let ring = Ring::try_with(symbols.len() as u64)?;

        Ok(Self {
            symbols,
            index,
            blank,
            ring,
        })
    }

    /// Number of symbols, M.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`: construction rejects alphabets with fewer than two symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The ring Z_M matching this alphabet's size.
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// The designated padding symbol, if any.
    pub fn blank(&self) -> Option<char> {
        self.blank
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Position of `symbol` in the alphabet.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::UnsupportedSymbol` if the symbol is absent.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::preset::alphabets::SPANISH_UPPERCASE;
    /// assert_eq!(SPANISH_UPPERCASE.symbol_to_index('Ñ').unwrap(), 14);
    /// assert_eq!(SPANISH_UPPERCASE.symbol_to_index('O').unwrap(), 15);
    /// assert!(SPANISH_UPPERCASE.symbol_to_index('a').is_err());
    /// ```
    pub fn symbol_to_index(&self, symbol: char) -> Result<usize, HillCryptoError> {
        self.index
            .get(&symbol)
            .copied()
            .ok_or(HillCryptoError::UnsupportedSymbol(symbol))
    }

    /// Symbol at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Indices handed to this function come
    /// out of a modular reduction, so an out-of-range value is a bug.
    pub fn index_to_symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// Translates every symbol of `text`, failing on the first foreign one.
    pub fn encode_str(&self, text: &str) -> Result<Vector, HillCryptoError> {
        text.chars()
            .map(|symbol| self.symbol_to_index(symbol).map(|i| i as i64))
            .collect()
    }

    /// Inverse of [`Alphabet::encode_str`] for already reduced values.
    ///
    /// # Panics
    ///
    /// Panics if a value lies outside `[0, M)`.
    pub fn decode_vector(&self, values: &[i64]) -> String {
        values
            .iter()
            .map(|&value| {
                let index = usize::try_from(value).expect("reduced values are non-negative");
                self.index_to_symbol(index)
            })
            .collect()
    }
}

impl TryFrom<AlphabetDef> for Alphabet {
    type Error = HillCryptoError;

    fn try_from(def: AlphabetDef) -> Result<Self, Self::Error> {
        Alphabet::try_with(&def.symbols, def.blank)
    }
}

impl From<Alphabet> for AlphabetDef {
    fn from(alphabet: Alphabet) -> Self {
        AlphabetDef {
            symbols: alphabet.symbols.into_iter().collect(),
            blank: alphabet.blank,
        }
    }
}
