//! # Key Module
//!
//! The N×N key matrix of a Hill cipher and its modular inverse.

use crate::alphabet::Alphabet;
use crate::errors::HillCryptoError;
use crate::ring::matrix_ops::{determinant, matrix_inverse, matrix_vector_mul, square_size};
use crate::ring::{Matrix, Ring, Vector, gcd};

use num_bigint::BigInt;
use num_integer::Roots;
use num_traits::Zero;

use rand::prelude::{Rng, SeedableRng, StdRng};

use serde::{Deserialize, Serialize};

/// Attempts [`KeyMatrix::random`] makes before giving up.
pub const MAX_KEY_ATTEMPTS: usize = 1000;

/// Square matrix with entries in `[0, M)`, owned by a single cipher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "KeyMatrixDef", into = "KeyMatrixDef")]
pub struct KeyMatrix {
    matrix: Matrix,
    ring: Ring,
}

/// Wire form of a [`KeyMatrix`]; deserializing re-runs [`KeyMatrix::try_with`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyMatrixDef {
    pub matrix: Matrix,
    pub ring: Ring,
}

impl TryFrom<KeyMatrixDef> for KeyMatrix {
    type Error = HillCryptoError;

    fn try_from(def: KeyMatrixDef) -> Result<Self, Self::Error> {
        KeyMatrix::try_with(def.matrix, def.ring)
    }
}

impl From<KeyMatrix> for KeyMatrixDef {
    fn from(key: KeyMatrix) -> Self {
        KeyMatrixDef {
            matrix: key.matrix,
            ring: key.ring,
        }
    }
}

impl KeyMatrix {
    /// Builds the key matrix row-major from `key`.
    ///
    /// The key must hold N² symbols for some N ≥ 1. Its length is checked
    /// before any symbol is looked up.
    ///
    /// # Errors
    ///
    /// * `InvalidKeyShape` if the length is zero or not a perfect square.
    /// * `UnsupportedSymbol` if a key symbol is not in the alphabet.
    pub fn from_key(key: &str, alphabet: &Alphabet) -> Result<Self, HillCryptoError> {
        let length = key.chars().count();
        let size = length.sqrt();
        if size == 0 || size * size != length {
            return Err(HillCryptoError::InvalidKeyShape(length));
        }

        let values = alphabet.encode_str(key)?;
        let matrix: Matrix = values.chunks_exact(size).map(<[i64]>::to_vec).collect();

        Ok(Self {
            matrix,
            ring: *alphabet.ring(),
        })
    }

    /// Wraps raw entries, reducing each into `[0, M)`.
    pub fn try_with(matrix: Matrix, ring: Ring) -> Result<Self, HillCryptoError> {
        if square_size(&matrix)? == 0 {
            return Err(HillCryptoError::InvalidKeyShape(0));
        }

        let matrix = matrix
            .into_iter()
            .map(|row| row.into_iter().map(|v| ring.normalize(v)).collect())
            .collect();

        Ok(Self { matrix, ring })
    }

    /// Draws an invertible n×n key for `alphabet` from a seeded generator.
    ///
    /// The same seed always yields the same key.
    pub fn random(n: usize, alphabet: &Alphabet, seed: u64) -> Result<Self, HillCryptoError> {
        if n == 0 {
            return Err(HillCryptoError::InvalidKeyShape(0));
        }

        let ring = *alphabet.ring();
        let m = ring.modulus() as i64;
        let mut rng = StdRng::seed_from_u64(seed);

        for attempt in 1..=MAX_KEY_ATTEMPTS {
            let matrix: Matrix = (0..n)
                .map(|_| (0..n).map(|_| rng.random_range(0..m)).collect())
                .collect();
            let key = Self { matrix, ring };
            if key.is_invertible() {
                log::debug!("found invertible {n}x{n} key mod {m} after {attempt} attempts");
                return Ok(key);
            }
        }

        Err(HillCryptoError::KeyGenerationFailed(MAX_KEY_ATTEMPTS))
    }

    /// Block size N.
    pub fn size(&self) -> usize {
        self.matrix.len()
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Exact integer determinant of the entries.
    pub fn determinant(&self) -> BigInt {
        determinant(&self.matrix)
    }

    /// `true` when `det ≠ 0` and `gcd(det mod M, M) = 1`.
    pub fn is_invertible(&self) -> bool {
        let det = self.determinant();
        !det.is_zero() && gcd(self.ring.reduce(&det), self.ring.modulus() as i64) == 1
    }

    /// The matrix K⁻¹ with `K · K⁻¹ ≡ I (mod M)`.
    ///
    /// # Errors
    ///
    /// * `SingularMatrix` when the determinant is exactly zero.
    /// * `NonInvertibleModulus` when it shares a factor with M.
    pub fn inverse(&self) -> Result<Self, HillCryptoError> {
        Ok(Self {
            matrix: matrix_inverse(&self.matrix, &self.ring)?,
            ring: self.ring,
        })
    }

    /// Multiplies one block by the matrix, modulo M.
    pub fn apply(&self, block: &[i64]) -> Result<Vector, HillCryptoError> {
        if block.len() != self.size() {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Block length ({}) must match key size ({})",
                block.len(),
                self.size()
            )));
        }
        matrix_vector_mul(&self.matrix, block, &self.ring)
    }

    /// Renders the matrix back as key text in `alphabet`.
    pub fn to_key_string(&self, alphabet: &Alphabet) -> Result<String, HillCryptoError> {
        if alphabet.ring() != &self.ring {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Key is defined mod {} but the alphabet has {} symbols",
                self.ring.modulus(),
                alphabet.len()
            )));
        }
        Ok(self
            .matrix
            .iter()
            .map(|row| alphabet.decode_vector(row))
            .collect())
    }
}
