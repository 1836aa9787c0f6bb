//! # Hill Crypto
//!
//! Classical ciphers over a finite alphabet, centred on the generalized Hill
//! cipher: blocks of N symbols are multiplied by an N×N key matrix modulo the
//! alphabet size, and decoding multiplies by the matrix's modular inverse.

pub mod alphabet;
pub mod cipher;
pub mod config;
pub mod errors;
pub mod key;
pub mod preset;
pub mod ring;
pub mod shift;

pub use alphabet::Alphabet;
pub use cipher::{Direction, HillCipher, decode, encode, hill_cipher, strip_padding};
pub use config::CipherConfig;
pub use errors::HillCryptoError;
pub use key::KeyMatrix;
