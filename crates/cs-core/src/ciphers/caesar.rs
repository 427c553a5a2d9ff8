use crate::alphabet;
use crate::keys::CaesarKey;
use crate::types::Mode;

/// Shift every letter of `message` forward by the key.
pub fn encrypt(message: &str, key: &CaesarKey) -> String {
    translate(message, key, Mode::Encryption)
}

/// Shift every letter of `message` back by the key.
pub fn decrypt(message: &str, key: &CaesarKey) -> String {
    translate(message, key, Mode::Decryption)
}

/// Shift every letter forward (encryption) or back (decryption) by the key.
pub fn translate(message: &str, key: &CaesarKey, mode: Mode) -> String {
    let step = match mode {
        Mode::Encryption => key.shift(),
        Mode::Decryption => -key.shift(),
    };

    message
        .chars()
        .map(|c| alphabet::shifted_letter(c, key.language(), step))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn hello_shift_three() {
        let key = CaesarKey::new(3, Language::English);
        assert_eq!(encrypt("HELLO", &key), "KHOOR");
        assert_eq!(decrypt("KHOOR", &key), "HELLO");
    }

    #[test]
    fn keeps_case_and_punctuation() {
        let key = CaesarKey::new(1, Language::English);
        assert_eq!(encrypt("Zebra, 42!", &key), "Afcsb, 42!");
    }

    #[test]
    fn shift_wraps_modulo_alphabet() {
        let message = "Ñandú";
        let a = encrypt(message, &CaesarKey::new(2, Language::Spanish));
        let b = encrypt(message, &CaesarKey::new(2 + 27 * 3, Language::Spanish));
        let c = encrypt(message, &CaesarKey::new(2 - 27, Language::Spanish));
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a, "Pcofú");
    }

    #[test]
    fn random_roundtrip() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for &lang in Language::all() {
            let upper = alphabet::alphabet(lang, crate::types::LetterCase::Upper);
            for _ in 0..50 {
                let message: String = (0..rng.gen_range(0..64))
                    .map(|_| upper[rng.gen_range(0..upper.len())])
                    .collect();
                let key = CaesarKey::new(rng.gen_range(-100..100), lang);
                assert_eq!(decrypt(&encrypt(&message, &key), &key), message);
            }
        }
    }
}
