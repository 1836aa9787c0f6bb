use num_bigint::BigInt;

#[derive(thiserror::Error, Debug)]
pub enum HillCryptoError {
    /// A message or key symbol that is not part of the configured alphabet.
    #[error("UnsupportedSymbol: {0:?} isn't supported by the alphabet")]
    UnsupportedSymbol(char),
    /// Key length has no integer square root (or is zero), so no N×N matrix exists.
    #[error("InvalidKeyShape: key of length {0} is not a non-empty perfect square")]
    InvalidKeyShape(usize),
    /// Determinant of the key matrix is exactly zero.
    #[error("SingularMatrix: the key matrix isn't invertible (its determinant is 0)")]
    SingularMatrix,
    /// Determinant is non-zero but shares a factor with the alphabet size.
    #[error(
        "NonInvertibleModulus: determinant {determinant} isn't coprime with {modulus} (gcd={gcd})"
    )]
    NonInvertibleModulus {
        determinant: BigInt,
        modulus: u64,
        gcd: i64,
    },

    /// Error when creating a ring with an invalid modulus (k <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("InvalidAlphabet: {0}")]
    InvalidAlphabet(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),

    #[error("Message of length {length} needs padding to blocks of {block}, but the alphabet has no blank symbol")]
    MissingPadSymbol { length: usize, block: usize },
    #[error("No invertible key found after {0} attempts")]
    KeyGenerationFailed(usize),

    #[error("Data serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}
