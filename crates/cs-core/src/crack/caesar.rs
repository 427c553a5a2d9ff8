//! Caesar key recovery from letter frequencies.

use crate::alphabet;
use crate::histogram::{find_best_shift, LetterHistogram};
use crate::keys::CaesarKey;
use crate::types::Language;

/// Recover the shift of a Caesar ciphertext.
///
/// `fast` picks the congruence method, which only looks at the single most
/// frequent letter; otherwise the whole histogram is matched against the
/// language reference.
pub fn crack(ciphertext: &str, lang: Language, fast: bool) -> CaesarKey {
    if fast {
        crack_congruence(ciphertext, lang)
    } else {
        crack_frequency(ciphertext, lang)
    }
}

/// Slide the reference histogram until it best matches the ciphertext one.
pub fn crack_frequency(ciphertext: &str, lang: Language) -> CaesarKey {
    let cipher_histogram = LetterHistogram::normalized(ciphertext, lang);
    let shift = find_best_shift(&cipher_histogram, LetterHistogram::reference(lang));
    log::debug!("Caesar frequency match: shift {}", shift);
    CaesarKey::new(shift as i64, lang)
}

/// Assume the most frequent ciphertext letter encrypts the most frequent
/// letter of the language.
pub fn crack_congruence(ciphertext: &str, lang: Language) -> CaesarKey {
    let n = alphabet::len(lang) as i64;
    let cipher_letter = most_frequent_index(&LetterHistogram::normalized(ciphertext, lang), lang);
    let clear_letter = most_frequent_index(LetterHistogram::reference(lang), lang);

    let shift = (cipher_letter - clear_letter).rem_euclid(n);
    log::debug!(
        "Caesar congruence: cipher letter {} over clear letter {}, shift {}",
        cipher_letter,
        clear_letter,
        shift
    );
    CaesarKey::new(shift, lang)
}

fn most_frequent_index(hist: &LetterHistogram, lang: Language) -> i64 {
    hist.most_frequent()
        .and_then(|c| alphabet::index_of(lang, c))
        .unwrap_or(0) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ciphers::caesar;
    use crate::crack::samples::{ENGLISH, SPANISH};

    #[test]
    fn frequency_recovers_every_shift() {
        for (lang, text) in [(Language::English, ENGLISH), (Language::Spanish, SPANISH)] {
            for k in 0..alphabet::len(lang) as i64 {
                let ciphertext = caesar::encrypt(text, &CaesarKey::new(k, lang));
                assert_eq!(crack(&ciphertext, lang, false).shift(), k, "{} shift {}", lang, k);
            }
        }
    }

    #[test]
    fn congruence_recovers_english_shifts() {
        for k in 0..26 {
            let ciphertext = caesar::encrypt(ENGLISH, &CaesarKey::new(k, Language::English));
            assert_eq!(crack(&ciphertext, Language::English, true).shift(), k);
        }
    }

    #[test]
    fn congruence_misled_when_top_letter_differs() {
        // 'a' outnumbers 'e' in this passage, so the fast method lands 4 letters early
        let ciphertext = caesar::encrypt(SPANISH, &CaesarKey::new(10, Language::Spanish));
        assert_eq!(crack(&ciphertext, Language::Spanish, true).shift(), 6);
        assert_eq!(crack(&ciphertext, Language::Spanish, false).shift(), 10);
    }

    #[test]
    fn short_sample_is_unreliable() {
        let ciphertext = caesar::encrypt("HELLO", &CaesarKey::new(3, Language::English));
        assert_eq!(ciphertext, "KHOOR");
        // five letters are not enough to pin the shift
        assert_ne!(crack(&ciphertext, Language::English, false).shift(), 3);
        assert_ne!(crack(&ciphertext, Language::English, true).shift(), 3);
    }

    #[test]
    fn empty_ciphertext_gives_fixed_guess() {
        // all-zero histogram: 'a' stands in for the top letter, 'e' is 4 further
        assert_eq!(crack("", Language::English, true).shift(), 22);
        assert_eq!(crack("", Language::Spanish, true).shift(), 23);
        // every slide scores the same, so the first step wins
        for lang in Language::all() {
            assert_eq!(crack("12345", *lang, false).shift(), 0);
            assert_eq!(crack("", *lang, false).shift(), 0);
        }
    }
}
