//! # Cipher Module
//!
//! Drives the Hill cipher: key setup, padding, blocking and reassembly.

use crate::alphabet::Alphabet;
use crate::errors::HillCryptoError;
use crate::key::KeyMatrix;
use crate::ring::Vector;

use itertools::Itertools;
use rayon::prelude::*;

use serde::{Deserialize, Serialize};

/// Which way a cipher runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Encode,
    Decode,
}

/// A Hill cipher with its key matrix already installed for one direction.
///
/// When decoding the installed matrix is the modular inverse of the key, so
/// both directions run the same block multiplication.
#[derive(Debug, Clone)]
pub struct HillCipher<'a> {
    key: KeyMatrix,
    alphabet: &'a Alphabet,
    direction: Direction,
}

impl<'a> HillCipher<'a> {
    /// Builds the key matrix and, for decoding, replaces it with its inverse.
    ///
    /// Every key problem surfaces here, before a single message symbol is read.
    pub fn try_with(
        key: &str,
        alphabet: &'a Alphabet,
        direction: Direction,
    ) -> Result<Self, HillCryptoError> {
        Self::with_key(KeyMatrix::from_key(key, alphabet)?, alphabet, direction)
    }

    /// Same as [`HillCipher::try_with`] for an already built key matrix.
    pub fn with_key(
        key: KeyMatrix,
        alphabet: &'a Alphabet,
        direction: Direction,
    ) -> Result<Self, HillCryptoError> {
        if key.size() == 0 {
            return Err(HillCryptoError::InvalidKeyShape(0));
        }
        if key.ring() != alphabet.ring() {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Key is defined mod {} but the alphabet has {} symbols",
                key.ring().modulus(),
                alphabet.len()
            )));
        }

        let key = match direction {
            Direction::Encode => key,
            Direction::Decode => key.inverse()?,
        };

        log::debug!(
            "hill cipher ready: direction={:?}, block={}, modulus={}, det={}",
            direction,
            key.size(),
            alphabet.len(),
            key.determinant()
        );

        Ok(Self {
            key,
            alphabet,
            direction,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn block_size(&self) -> usize {
        self.key.size()
    }

    /// The matrix blocks are multiplied by (the inverse key when decoding).
    pub fn installed_key(&self) -> &KeyMatrix {
        &self.key
    }

    /// Runs the cipher over `message`, one block after another.
    pub fn transform(&self, message: &str) -> Result<String, HillCryptoError> {
        let values = self.prepare(message)?;

        let mut output = Vec::with_capacity(values.len());
        for (i, block) in values.chunks_exact(self.block_size()).enumerate() {
            let transformed = self.key.apply(block)?;
            log::trace!(
                "block {i}: {} -> {}",
                format_blocks(block, block.len()),
                format_blocks(&transformed, transformed.len())
            );
            output.extend(transformed);
        }

        Ok(self.alphabet.decode_vector(&output))
    }

    /// Same result as [`HillCipher::transform`], with blocks spread over the rayon pool.
    ///
    /// Blocks are independent; collecting the indexed parallel iterator keeps
    /// every block at its original position.
    pub fn transform_par(&self, message: &str) -> Result<String, HillCryptoError> {
        let values = self.prepare(message)?;

        let blocks = values
            .par_chunks_exact(self.block_size())
            .map(|block| self.key.apply(block))
            .collect::<Result<Vec<Vector>, HillCryptoError>>()?;

        Ok(self.alphabet.decode_vector(&blocks.concat()))
    }

    /// Pads (encode only) and translates the whole message up front, so a
    /// foreign symbol aborts before any block is produced.
    fn prepare(&self, message: &str) -> Result<Vector, HillCryptoError> {
        let n = self.block_size();
        let length = message.chars().count();
        let missing = (n - length % n) % n;

        let mut values = self.alphabet.encode_str(message)?;

        if missing > 0 {
            match (self.direction, self.alphabet.blank()) {
                (Direction::Encode, Some(blank)) => {
                    log::debug!("padding message of length {length} with {missing} blank(s)");
                    let pad = self.alphabet.symbol_to_index(blank)? as i64;
                    values.extend(std::iter::repeat_n(pad, missing));
                }
                (Direction::Encode, None) => {
                    return Err(HillCryptoError::MissingPadSymbol { length, block: n });
                }
                (Direction::Decode, _) => {
                    return Err(HillCryptoError::DimensionMismatch(format!(
                        "Ciphertext length ({}) must be a multiple of the block size ({})",
                        length, n
                    )));
                }
            }
        }

        Ok(values)
    }
}

/// Runs the Hill cipher described by `key` over `message` in `direction`.
pub fn hill_cipher(
    message: &str,
    key: &str,
    alphabet: &Alphabet,
    direction: Direction,
) -> Result<String, HillCryptoError> {
    HillCipher::try_with(key, alphabet, direction)?.transform(message)
}

/// Encrypts `message`, padding it with the alphabet's blank to whole blocks.
///
/// # Example
///
/// ```
/// # use hill_crypto::cipher::{decode, encode};
/// # use hill_crypto::preset::alphabets::SPANISH_UPPERCASE;
/// assert_eq!(encode("PEAR", "EAFB", &SPANISH_UPPERCASE).unwrap(), "KDAR");
/// assert_eq!(decode("KDAR", "EAFB", &SPANISH_UPPERCASE).unwrap(), "PEAR");
/// ```
pub fn encode(message: &str, key: &str, alphabet: &Alphabet) -> Result<String, HillCryptoError> {
    hill_cipher(message, key, alphabet, Direction::Encode)
}

/// Decrypts `message`. Padding added by [`encode`] is left in place.
pub fn decode(message: &str, key: &str, alphabet: &Alphabet) -> Result<String, HillCryptoError> {
    hill_cipher(message, key, alphabet, Direction::Decode)
}

/// Drops every trailing blank from a decoded text.
///
/// This is lossy: a plaintext that really ended in blanks loses them too,
/// since the ciphertext does not record how much padding was added.
pub fn strip_padding<'t>(text: &'t str, alphabet: &Alphabet) -> &'t str {
    match alphabet.blank() {
        Some(blank) => text.trim_end_matches(blank),
        None => text,
    }
}

/// Shows blocks as `[a b c]` groups, handy in logs and test failures.
pub fn format_blocks(values: &[i64], block: usize) -> String {
    values
        .chunks(block.max(1))
        .map(|chunk| format!("[{}]", chunk.iter().join(" ")))
        .join(" ")
}
