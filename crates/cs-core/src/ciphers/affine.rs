use crate::alphabet;
use crate::keys::{mod_inverse, AffineKey};
use crate::types::{LetterCase, Mode};

/// Encrypt `message` under the affine map of `key`.
pub fn encrypt(message: &str, key: &AffineKey) -> String {
    translate(message, key, Mode::Encryption)
}

/// Undo [`encrypt`] using the modular inverse of `a`.
pub fn decrypt(message: &str, key: &AffineKey) -> String {
    translate(message, key, Mode::Decryption)
}

/// Map letter `x` to `a*x + b` (encryption) or back (decryption).
pub fn translate(message: &str, key: &AffineKey, mode: Mode) -> String {
    let lang = key.language();
    let n = alphabet::len(lang) as i64;
    // AffineKey guarantees gcd(a, n) == 1
    let a_inv = mod_inverse(key.a(), n).unwrap_or(1);

    message
        .chars()
        .map(|c| match alphabet::index_of(lang, c) {
            Some(x) => {
                let x = x as i64;
                let y = match mode {
                    Mode::Encryption => key.a() * x + key.b(),
                    Mode::Decryption => a_inv * (x - key.b()),
                };
                alphabet::alphabet(lang, LetterCase::of(c))[y.rem_euclid(n) as usize]
            }
            None => c,
        })
        .collect()
}
