use crate::alphabet::Alphabet;

use lazy_static::lazy_static;

/// A-Z, a-z, 0-9, Spanish accented letters and punctuation. The blank is `' '`.
pub const EXTENDED_SPANISH_SYMBOLS: &str = concat!(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "abcdefghijklmnopqrstuvwxyz",
    "0123456789",
    "ñÑÁÉÍÓÚáéíóú",
    " ,.¿?¡!$*+-/#'\"",
);

/// The 27 letters of the Spanish alphabet, Ñ sitting between N and O.
pub const SPANISH_UPPERCASE_SYMBOLS: &str = "ABCDEFGHIJKLMNÑOPQRSTUVWXYZ";

/// Standard Base64 characters followed by the `=` pad, which doubles as the blank.
pub const BASE64_SYMBOLS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

lazy_static! {
    /// 89 symbols, padded with spaces.
    pub static ref EXTENDED_SPANISH: Alphabet =
        Alphabet::try_with(EXTENDED_SPANISH_SYMBOLS, Some(' '))
            .expect("preset alphabet is valid");

    /// 27 symbols and no blank: messages must already fill whole blocks.
    pub static ref SPANISH_UPPERCASE: Alphabet =
        Alphabet::try_with(SPANISH_UPPERCASE_SYMBOLS, None).expect("preset alphabet is valid");

    /// 65 symbols, padded with `=`.
    pub static ref BASE64: Alphabet =
        Alphabet::try_with(BASE64_SYMBOLS, Some('=')).expect("preset alphabet is valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    use quickcheck::TestResult;
    use quickcheck::quickcheck;

    #[test]
    fn test_preset_sizes() {
        assert_eq!(EXTENDED_SPANISH.len(), 89);
        assert_eq!(SPANISH_UPPERCASE.len(), 27);
        assert_eq!(BASE64.len(), 65);
        assert_eq!(EXTENDED_SPANISH.blank(), Some(' '));
        assert_eq!(SPANISH_UPPERCASE.blank(), None);
    }

    #[test]
    fn test_spanish_uppercase_order() {
        assert_eq!(SPANISH_UPPERCASE.symbol_to_index('N').unwrap(), 13);
        assert_eq!(SPANISH_UPPERCASE.symbol_to_index('Ñ').unwrap(), 14);
        assert_eq!(SPANISH_UPPERCASE.symbol_to_index('Z').unwrap(), 26);
    }

    quickcheck! {
        fn prop_base64_output_is_in_alphabet(data: Vec<u8>) -> TestResult {
            let encoded = STANDARD.encode(&data);
            for symbol in encoded.chars() {
                match BASE64.symbol_to_index(symbol) {
                    Ok(index) if BASE64_SYMBOLS.chars().nth(index) == Some(symbol) => {}
                    Ok(index) => {
                        return TestResult::error(format!(
                            "Symbol {:?} maps to index {} which holds a different symbol",
                            symbol, index
                        ));
                    }
                    Err(e) => return TestResult::error(e.to_string()),
                }
            }
            TestResult::passed()
        }
    }
}
