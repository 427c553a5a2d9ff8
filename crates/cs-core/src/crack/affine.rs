//! Affine key recovery.

use crate::alphabet;
use crate::ciphers::affine;
use crate::error::CryptoError;
use crate::histogram::LetterHistogram;
use crate::keys::{gcd, mod_inverse, AffineKey};
use crate::types::Language;

/// Recover the key of an affine ciphertext.
///
/// The fast path solves a congruence from the two most frequent letters and
/// can fail with [`CryptoError::NoCongruenceSolution`]; the slow path tries
/// every valid key and always answers.
pub fn crack(ciphertext: &str, lang: Language, fast: bool) -> Result<AffineKey, CryptoError> {
    if fast {
        crack_congruence(ciphertext, lang)
    } else {
        Ok(crack_bruteforce(ciphertext, lang))
    }
}

/// Every valid `(a, b)` in the order the brute force visits them.
pub fn key_space(lang: Language) -> impl Iterator<Item = AffineKey> {
    let n = alphabet::len(lang) as i64;
    (1..n)
        .filter(move |&a| gcd(a, n) == 1)
        .flat_map(move |a| (0..n).filter_map(move |b| AffineKey::new(a, b, lang).ok()))
}

/// Decrypt under every key and keep the one whose output looks most like
/// the language. Ties go to the first key visited.
pub fn crack_bruteforce(ciphertext: &str, lang: Language) -> AffineKey {
    let reference = LetterHistogram::reference(lang);
    let mut best_key = AffineKey::identity(lang);
    let mut best_similarity = f64::NEG_INFINITY;

    for candidate in key_space(lang) {
        let decryption = affine::decrypt(ciphertext, &candidate);
        let similarity = LetterHistogram::normalized(&decryption, lang).similarity(reference);

        if similarity > best_similarity {
            best_similarity = similarity;
            best_key = candidate;
        }
    }

    log::debug!("Affine brute force: {} (similarity {:.6})", best_key, best_similarity);
    best_key
}

/// Map the two most frequent ciphertext letters onto the two most frequent
/// letters of the language and solve for `a` and `b`.
pub fn crack_congruence(ciphertext: &str, lang: Language) -> Result<AffineKey, CryptoError> {
    let clear = top_two_indices(LetterHistogram::reference(lang), lang);
    let cipher = top_two_indices(&LetterHistogram::normalized(ciphertext, lang), lang);

    let (a, b) = solve_congruence(clear, cipher, alphabet::len(lang))?;
    log::debug!("Affine congruence: a = {}, b = {}", a, b);
    AffineKey::new(a, b, lang)
}

/// Solve `cipher_i = a * clear_i + b (mod n)` for the two letter pairs.
pub fn solve_congruence(
    clear: (usize, usize),
    cipher: (usize, usize),
    n: usize,
) -> Result<(i64, i64), CryptoError> {
    let modulus = n as i64;
    let clear_diff = (clear.1 as i64 - clear.0 as i64).rem_euclid(modulus);
    let cipher_diff = (cipher.1 as i64 - cipher.0 as i64).rem_euclid(modulus);

    let inverse = mod_inverse(clear_diff, modulus)
        .ok_or(CryptoError::NoCongruenceSolution { value: clear_diff, n })?;

    let a = (cipher_diff * inverse).rem_euclid(modulus);
    if gcd(a, modulus) != 1 {
        return Err(CryptoError::NoCongruenceSolution { value: a, n });
    }

    let b = (cipher.0 as i64 - clear.0 as i64 * a).rem_euclid(modulus);
    Ok((a, b))
}

fn top_two_indices(hist: &LetterHistogram, lang: Language) -> (usize, usize) {
    let top = hist.top(2);
    let index = |i: usize| {
        top.get(i)
            .and_then(|&(c, _)| alphabet::index_of(lang, c))
            .unwrap_or(0)
    };
    (index(0), index(1))
}
