//! Ciphertext-only key recovery.

pub mod affine;
pub mod caesar;
pub mod vigenere;

#[cfg(test)]
pub(crate) mod samples;

use crate::error::CryptoError;
use crate::keys::CipherKey;
use crate::types::{Language, Scheme};

pub use vigenere::{
    FixedKeyLength, KasiskiReport, KeyLengthCandidate, KeyLengthSelector, MostVoted,
};

/// Recover the key of `ciphertext` under `scheme`.
///
/// `selector` is only consulted for Vigenère, to pick the key length.
pub fn crack(
    scheme: Scheme,
    ciphertext: &str,
    lang: Language,
    fast: bool,
    selector: &dyn KeyLengthSelector,
) -> Result<CipherKey, CryptoError> {
    log::debug!(
        "Cracking {} ({}, {} characters, fast = {})",
        scheme,
        lang,
        ciphertext.chars().count(),
        fast
    );

    let key: CipherKey = match scheme {
        Scheme::Caesar => caesar::crack(ciphertext, lang, fast).into(),
        Scheme::Affine => affine::crack(ciphertext, lang, fast)?.into(),
        Scheme::Vigenere => vigenere::crack(ciphertext, lang, fast, selector)?.into(),
    };

    log::info!("Recovered {} key: {}", scheme, key);
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet;
    use crate::ciphers;
    use crate::keys::{AffineKey, CaesarKey, VigenereKey};
    use crate::crack::samples::{ENGLISH, SPANISH};

    #[test]
    fn dispatch_recovers_each_scheme() {
        let cases: Vec<(CipherKey, &str)> = vec![
            (CaesarKey::new(17, Language::Spanish).into(), SPANISH),
            (AffineKey::new(11, 20, Language::English).unwrap().into(), ENGLISH),
            (VigenereKey::new("LEMON", Language::English).unwrap().into(), ENGLISH),
        ];

        for (key, text) in cases {
            let lang = key.language();
            let ciphertext = ciphers::encrypt(&alphabet::clean_text(text, lang), &key);
            let recovered = crack(key.scheme(), &ciphertext, lang, false, &MostVoted).unwrap();
            assert_eq!(recovered, key);
            assert_eq!(recovered.to_string(), key.to_string());
        }
    }

    #[test]
    fn dispatch_propagates_errors() {
        assert_eq!(
            crack(Scheme::Vigenere, "SHORT", Language::English, false, &MostVoted),
            Err(CryptoError::TooShortInput { len: 5, min: 8 })
        );
        assert!(matches!(
            crack(Scheme::Affine, "AAAAACCCCB", Language::English, true, &MostVoted),
            Err(CryptoError::NoCongruenceSolution { .. })
        ));
    }
}
