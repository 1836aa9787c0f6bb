//! Implementation of Z_M arithmetic, where M is the alphabet size.

use crate::errors::HillCryptoError;

use super::extended_gcd;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::ToPrimitive;

use serde::{Deserialize, Serialize};

/// Represents the finite ring Z_M every cipher operation works in.
///
/// Serialized as the bare modulus; deserializing goes through [`Ring::try_with`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Ring {
    modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1 and fit in an `i64`.
    pub fn try_with(modulus: u64) -> Result<Self, HillCryptoError> {
        if modulus <= 1 || modulus > i64::MAX as u64 {
            return Err(HillCryptoError::InvalidModulus(format!(
                "Modulus must be in 2..=i64::MAX, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(27).unwrap();
    /// assert_eq!(ring.modulus(), 27);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Reduces a value into `[0, modulus)`, never negative.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(27).unwrap();
    /// assert_eq!(ring.normalize(64), 10);
    /// assert_eq!(ring.normalize(-4), 23);
    /// assert_eq!(ring.normalize(-27), 0);
    /// assert_eq!(ring.normalize(27), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        value.rem_euclid(self.modulus as i64)
    }

    /// Reduces an arbitrary-precision value (a determinant or cofactor) into `[0, modulus)`.
    pub fn reduce(&self, value: &BigInt) -> i64 {
        let m = BigInt::from(self.modulus);
        // mod_floor takes the sign of the divisor, so the result is already in range
        value
            .mod_floor(&m)
            .to_i64()
            .expect("residue is below the i64 modulus")
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(27).unwrap();
    /// assert_eq!(ring.add(20, 10), 3);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let sum = self.normalize(a) as i128 + self.normalize(b) as i128;
        (sum % self.modulus as i128) as i64
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(27).unwrap();
    /// assert_eq!(ring.sub(3, 5), 25);
    /// assert_eq!(ring.sub(7, 5), 2);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let diff = self.normalize(a) as i128 - self.normalize(b) as i128;
        diff.rem_euclid(self.modulus as i128) as i64
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally so the product cannot overflow before reduction.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(27).unwrap();
    /// assert_eq!(ring.mul(4, 16), 10); // 64 mod 27
    /// assert_eq!(ring.mul(-2, 6), 15); // -12 mod 27
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let product = self.normalize(a) as i128 * self.normalize(b) as i128;
        (product % self.modulus as i128) as i64
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`; it is found
    /// with the extended Euclidean algorithm.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::NonInvertibleModulus` if `a` shares a factor
    /// with the modulus (this includes `a ≡ 0`).
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(27).unwrap();
    /// assert_eq!(ring.inv(4).unwrap(), 7); // 4 * 7 = 28 = 1 mod 27
    /// assert!(ring.inv(9).is_err());
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, HillCryptoError> {
        let a_norm = self.normalize(a);

        let (g, x, _) = extended_gcd(a_norm, self.modulus as i64);
        if g != 1 {
            return Err(HillCryptoError::NonInvertibleModulus {
                determinant: BigInt::from(a),
                modulus: self.modulus,
                gcd: g,
            });
        }

        Ok(self.normalize(x))
    }
}

impl TryFrom<u64> for Ring {
    type Error = HillCryptoError;

    fn try_from(modulus: u64) -> Result<Self, Self::Error> {
        Ring::try_with(modulus)
    }
}

impl From<Ring> for u64 {
    fn from(ring: Ring) -> Self {
        ring.modulus
    }
}
