//! Cipher keys.
//!
//! Keys are immutable values; crackers build them and the translation
//! routines in [`crate::ciphers`] consume them.

use std::fmt;

use crate::alphabet;
use crate::error::CryptoError;
use crate::types::{Language, LetterCase, Scheme};

/// Greatest common divisor, always non-negative.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Inverse of `a` modulo `n`, if `gcd(a, n) == 1`.
pub fn mod_inverse(a: i64, n: i64) -> Option<i64> {
    let (mut old_r, mut r) = (a.rem_euclid(n), n);
    let (mut old_s, mut s) = (1i64, 0i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(n))
}

/// Shift of a Caesar cipher. Any integer is accepted and used modulo `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarKey {
    shift: i64,
    language: Language,
}

impl CaesarKey {
    /// Caesar key shifting letters by `shift` positions of `language`'s alphabet.
    pub fn new(shift: i64, language: Language) -> Self {
        Self { shift, language }
    }

    pub fn shift(&self) -> i64 {
        self.shift
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl fmt::Display for CaesarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.shift)
    }
}

/// Coefficients of the affine map `x -> a*x + b (mod n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineKey {
    a: i64,
    b: i64,
    language: Language,
}

impl AffineKey {
    /// Fails with [`CryptoError::InvalidAffineKey`] unless `gcd(a, n) == 1`;
    /// other multipliers do not give a bijection over the alphabet.
    pub fn new(a: i64, b: i64, language: Language) -> Result<Self, CryptoError> {
        let n = alphabet::len(language);
        if gcd(a, n as i64) != 1 {
            return Err(CryptoError::InvalidAffineKey { a, n });
        }
        Ok(Self { a, b, language })
    }

    /// `a = 1, b = 0`, valid for every alphabet.
    pub fn identity(language: Language) -> Self {
        Self { a: 1, b: 0, language }
    }

    /// Multiplier.
    pub fn a(&self) -> i64 {
        self.a
    }

    /// Offset.
    pub fn b(&self) -> i64 {
        self.b
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl fmt::Display for AffineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a: {}; b: {}", self.a, self.b)
    }
}

/// Vigenère keyword and the per-position shifts it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereKey {
    key: String,
    offsets: Vec<usize>,
    language: Language,
}

impl VigenereKey {
    /// An empty keyword degenerates to a single zero offset.
    pub fn new(key: &str, language: Language) -> Result<Self, CryptoError> {
        let mut offsets = key
            .chars()
            .map(|c| alphabet::index_of(language, c).ok_or(CryptoError::InvalidKeyLetter(c)))
            .collect::<Result<Vec<_>, _>>()?;

        if offsets.is_empty() {
            offsets.push(0);
        }

        Ok(Self {
            key: key.to_string(),
            offsets,
            language,
        })
    }

    /// Keyword made of the uppercase letters at `offsets`.
    pub fn from_offsets(offsets: &[usize], language: Language) -> Result<Self, CryptoError> {
        let upper = alphabet::alphabet(language, LetterCase::Upper);
        let key: String = offsets.iter().map(|&o| upper[o % upper.len()]).collect();
        Self::new(&key, language)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl fmt::Display for VigenereKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// Key of any supported scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherKey {
    Caesar(CaesarKey),
    Affine(AffineKey),
    Vigenere(VigenereKey),
}

impl CipherKey {
    pub fn language(&self) -> Language {
        match self {
            CipherKey::Caesar(k) => k.language(),
            CipherKey::Affine(k) => k.language(),
            CipherKey::Vigenere(k) => k.language(),
        }
    }

    pub fn scheme(&self) -> Scheme {
        match self {
            CipherKey::Caesar(_) => Scheme::Caesar,
            CipherKey::Affine(_) => Scheme::Affine,
            CipherKey::Vigenere(_) => Scheme::Vigenere,
        }
    }
}

impl fmt::Display for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKey::Caesar(k) => k.fmt(f),
            CipherKey::Affine(k) => k.fmt(f),
            CipherKey::Vigenere(k) => k.fmt(f),
        }
    }
}

impl From<CaesarKey> for CipherKey {
    fn from(key: CaesarKey) -> Self {
        CipherKey::Caesar(key)
    }
}

impl From<AffineKey> for CipherKey {
    fn from(key: AffineKey) -> Self {
        CipherKey::Affine(key)
    }
}

impl From<VigenereKey> for CipherKey {
    fn from(key: VigenereKey) -> Self {
        CipherKey::Vigenere(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(5, 26), 1);
        assert_eq!(gcd(13, 26), 13);
        assert_eq!(gcd(-4, 26), 2);
        assert_eq!(gcd(0, 27), 27);
    }

    #[test]
    fn test_mod_inverse() {
        assert_eq!(mod_inverse(5, 26), Some(21));
        assert_eq!(mod_inverse(2, 27), Some(14));
        assert_eq!(mod_inverse(-1, 26), Some(25));
        assert_eq!(mod_inverse(13, 26), None);
        assert_eq!(mod_inverse(0, 26), None);
        for a in 1..27 {
            if let Some(inv) = mod_inverse(a, 27) {
                assert_eq!((a * inv) % 27, 1);
            }
        }
    }

    #[test]
    fn test_affine_key_validity() {
        assert!(AffineKey::new(5, 8, Language::English).is_ok());
        assert_eq!(
            AffineKey::new(13, 0, Language::English),
            Err(CryptoError::InvalidAffineKey { a: 13, n: 26 })
        );
        // 13 is coprime with 27 but 3 is not
        assert!(AffineKey::new(13, 0, Language::Spanish).is_ok());
        assert!(AffineKey::new(3, 0, Language::Spanish).is_err());
    }

    #[test]
    fn test_vigenere_offsets() {
        let key = VigenereKey::new("KEY", Language::English).unwrap();
        assert_eq!(key.offsets(), &[10, 4, 24]);

        let key = VigenereKey::new("ñu", Language::Spanish).unwrap();
        assert_eq!(key.offsets(), &[14, 21]);
    }

    #[test]
    fn test_vigenere_empty_key() {
        let key = VigenereKey::new("", Language::English).unwrap();
        assert_eq!(key.offsets(), &[0]);
        assert_eq!(key.to_string(), "");
    }

    #[test]
    fn test_vigenere_rejects_foreign_letters() {
        assert_eq!(
            VigenereKey::new("K3Y", Language::English),
            Err(CryptoError::InvalidKeyLetter('3'))
        );
        assert!(VigenereKey::new("AÑO", Language::English).is_err());
    }

    #[test]
    fn test_vigenere_from_offsets() {
        let key = VigenereKey::from_offsets(&[10, 4, 24], Language::English).unwrap();
        assert_eq!(key.key(), "KEY");
    }

    #[test]
    fn test_display() {
        assert_eq!(CaesarKey::new(3, Language::English).to_string(), "3");
        assert_eq!(AffineKey::new(5, 8, Language::English).unwrap().to_string(), "a: 5; b: 8");
        let key: CipherKey = VigenereKey::new("LIMON", Language::Spanish).unwrap().into();
        assert_eq!(key.to_string(), "LIMON");
        assert_eq!(key.language(), Language::Spanish);
    }
}
