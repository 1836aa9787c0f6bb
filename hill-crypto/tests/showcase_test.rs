use hill_crypto::errors::HillCryptoError;
use hill_crypto::preset::alphabets::EXTENDED_SPANISH;
use hill_crypto::{Direction, HillCipher, KeyMatrix, strip_padding};

use std::sync::Once;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .try_init();
    });
}

#[test]
fn showcase_cipher_decipher_spanish_text() -> Result<(), HillCryptoError> {
    init_logging();

    let key = "FIVE BY FIVE KEY LONG KEY";
    let original = "Mi abuelo fumó toda su vida. Yo tenía unos 10 años cuando mi madre le dijo, \
                    '¡Si quieres ver graduarse a tus nietos, tienes que dejarlo ya!' ¿Lo hizo? Sí.";

    let encoder = HillCipher::try_with(key, &EXTENDED_SPANISH, Direction::Encode)?;
    let cipher = encoder.transform_par(original)?;

    dbg!(&cipher);

    let decoder = HillCipher::try_with(key, &EXTENDED_SPANISH, Direction::Decode)?;
    let decoded = decoder.transform_par(&cipher)?;

    dbg!(&original, strip_padding(&decoded, &EXTENDED_SPANISH));
    assert_eq!(original, strip_padding(&decoded, &EXTENDED_SPANISH));

    Ok(())
}

#[test]
fn showcase_generated_key() -> Result<(), HillCryptoError> {
    init_logging();

    let key = KeyMatrix::random(6, &EXTENDED_SPANISH, 2022)?;
    let key_text = key.to_key_string(&EXTENDED_SPANISH)?;
    log::info!("generated key {:?} with determinant {}", key_text, key.determinant());

    let original = "Block ciphers need invertible keys.";
    let cipher = hill_crypto::encode(original, &key_text, &EXTENDED_SPANISH)?;
    let decoded = hill_crypto::decode(&cipher, &key_text, &EXTENDED_SPANISH)?;
    assert_eq!(original, strip_padding(&decoded, &EXTENDED_SPANISH));

    Ok(())
}
