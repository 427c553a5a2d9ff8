/// Errors raised by the cipher and cryptanalysis routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Language code not recognised.
    UnsupportedLanguage(String),
    /// Scheme name not recognised.
    UnsupportedScheme(String),
    /// Kasiski examination needs at least `min` characters.
    TooShortInput { len: usize, min: usize },
    /// The congruence system has no invertible solution: `value` (the gap
    /// between the reference letters, or the derived multiplier) shares a
    /// factor with `n`.
    NoCongruenceSolution { value: i64, n: usize },
    /// Affine multiplier not coprime with the alphabet length.
    InvalidAffineKey { a: i64, n: usize },
    /// Key letter outside the language alphabet.
    InvalidKeyLetter(char),
    /// Key length selection produced no usable length.
    NoKeyLength,
}

impl std::fmt::Display for CryptoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CryptoError::UnsupportedLanguage(s) => write!(f, "Unsupported language: {}", s),
            CryptoError::UnsupportedScheme(s) => write!(f, "Unsupported cryptoscheme: {}", s),
            CryptoError::TooShortInput { len, min } => write!(
                f,
                "Cannot analyse message, too short ({} characters, need at least {})",
                len, min
            ),
            CryptoError::NoCongruenceSolution { value, n } => write!(
                f,
                "No congruence solution: {} is not invertible modulo {}",
                value, n
            ),
            CryptoError::InvalidAffineKey { a, n } => {
                write!(f, "Invalid affine key: a = {} is not coprime with {}", a, n)
            }
            CryptoError::InvalidKeyLetter(c) => write!(f, "Invalid key letter: {:?}", c),
            CryptoError::NoKeyLength => write!(f, "No key length selected"),
        }
    }
}

impl std::error::Error for CryptoError {}
