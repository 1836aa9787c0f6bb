//! Caesar and Vigenère: per-symbol shifts over the same alphabet as the Hill cipher.

use crate::alphabet::Alphabet;
use crate::cipher::Direction;
use crate::errors::HillCryptoError;

/// Shifts every symbol by `shift` positions (backwards when decoding).
///
/// # Example
///
/// ```
/// # use hill_crypto::cipher::Direction;
/// # use hill_crypto::preset::alphabets::SPANISH_UPPERCASE;
/// # use hill_crypto::shift::caesar;
/// assert_eq!(caesar("ZORRO", 3, &SPANISH_UPPERCASE, Direction::Encode).unwrap(), "CRUUR");
/// ```
pub fn caesar(
    message: &str,
    shift: i64,
    alphabet: &Alphabet,
    direction: Direction,
) -> Result<String, HillCryptoError> {
    let ring = alphabet.ring();
    let values = alphabet
        .encode_str(message)?
        .into_iter()
        .map(|v| match direction {
            Direction::Encode => ring.add(v, shift),
            Direction::Decode => ring.sub(v, shift),
        })
        .collect::<Vec<_>>();

    Ok(alphabet.decode_vector(&values))
}

/// Shifts the i-th symbol by the index of key symbol `i mod len(key)`.
///
/// # Errors
///
/// `InvalidKeyShape(0)` for an empty key, `UnsupportedSymbol` for foreign
/// symbols in either the key or the message.
pub fn vigenere(
    message: &str,
    key: &str,
    alphabet: &Alphabet,
    direction: Direction,
) -> Result<String, HillCryptoError> {
    let shifts = alphabet.encode_str(key)?;
    if shifts.is_empty() {
        return Err(HillCryptoError::InvalidKeyShape(0));
    }

    let ring = alphabet.ring();
    let values = alphabet
        .encode_str(message)?
        .into_iter()
        .zip(shifts.iter().cycle())
        .map(|(v, &shift)| match direction {
            Direction::Encode => ring.add(v, shift),
            Direction::Decode => ring.sub(v, shift),
        })
        .collect::<Vec<_>>();

    Ok(alphabet.decode_vector(&values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::alphabets::{EXTENDED_SPANISH, SPANISH_UPPERCASE};

    #[test]
    fn test_caesar_wraps_around_ñ() -> Result<(), HillCryptoError> {
        // N(13) + 1 = Ñ, Z(26) + 1 = A
        assert_eq!(caesar("NZ", 1, &SPANISH_UPPERCASE, Direction::Encode)?, "ÑA");
        assert_eq!(caesar("ÑA", 1, &SPANISH_UPPERCASE, Direction::Decode)?, "NZ");
        assert_eq!(caesar("NZ", -1, &SPANISH_UPPERCASE, Direction::Encode)?, "MY");
        Ok(())
    }

    #[test]
    fn test_vigenere_known_answer() -> Result<(), HillCryptoError> {
        // shifts C=2, L=11, A=0, V=22
        let cipher = vigenere("HOLAMUNDO", "CLAV", &SPANISH_UPPERCASE, Direction::Encode)?;
        assert_eq!(cipher, "JZLVÑFNYQ");
        assert_eq!(
            vigenere(&cipher, "CLAV", &SPANISH_UPPERCASE, Direction::Decode)?,
            "HOLAMUNDO"
        );
        Ok(())
    }

    #[test]
    fn test_shift_known_answers() -> Result<(), HillCryptoError> {
        assert_eq!(caesar("MEXICANFLAG", 6, &SPANISH_UPPERCASE, Direction::Encode)?, "RKDÑIGSLQGM");
        // 30 wraps to 3
        assert_eq!(caesar("SLALHV", 30, &SPANISH_UPPERCASE, Direction::Decode)?, "PIXIES");
        assert_eq!(vigenere("WINDOWS", "UNIX", &SPANISH_UPPERCASE, Direction::Encode)?, "QUUAJJA");
        assert_eq!(vigenere("LJEHDV", "GOL", &SPANISH_UPPERCASE, Direction::Decode)?, "FUTBOL");
        Ok(())
    }

    #[test]
    fn test_vigenere_round_trip_extended() -> Result<(), HillCryptoError> {
        let message = "Mi abuelo fumó toda su vida. ¡Qué pena!";
        let cipher = vigenere(message, "clave secreta", &EXTENDED_SPANISH, Direction::Encode)?;
        assert_ne!(cipher, message);
        assert_eq!(
            vigenere(&cipher, "clave secreta", &EXTENDED_SPANISH, Direction::Decode)?,
            message
        );
        Ok(())
    }

    #[test]
    fn test_vigenere_empty_key() {
        assert!(matches!(
            vigenere("HOLA", "", &SPANISH_UPPERCASE, Direction::Encode),
            Err(HillCryptoError::InvalidKeyShape(0))
        ));
    }
}
