use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CryptoError;

/// Language whose alphabet and letter frequencies drive a cipher or an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    /// 27-letter alphabet (includes `ñ`).
    Spanish,
    /// 26-letter alphabet.
    English,
}

impl Language {
    /// Short code used in configuration files and on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Spanish => "ESP",
            Self::English => "ENG",
        }
    }

    /// Human-readable name for log and report output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Spanish => "Spanish",
            Self::English => "English",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::Spanish, Language::English]
    }
}

impl FromStr for Language {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ESP" => Ok(Self::Spanish),
            "ENG" => Ok(Self::English),
            _ => Err(CryptoError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = CryptoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.code().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Letter case of an alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCase {
    Upper,
    Lower,
}

impl LetterCase {
    /// Case of `c`; anything that is not lowercase counts as upper.
    pub fn of(c: char) -> Self {
        if c.is_lowercase() {
            Self::Lower
        } else {
            Self::Upper
        }
    }
}

/// Direction of a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Encryption,
    Decryption,
}

/// Supported substitution schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Scheme {
    Caesar,
    Affine,
    Vigenere,
}

impl Scheme {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Affine => "affine",
            Self::Vigenere => "vigenere",
        }
    }
}

impl FromStr for Scheme {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "caesar" => Ok(Self::Caesar),
            "affine" => Ok(Self::Affine),
            "vigenere" => Ok(Self::Vigenere),
            _ => Err(CryptoError::UnsupportedScheme(s.to_string())),
        }
    }
}

impl TryFrom<String> for Scheme {
    type Error = CryptoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Scheme> for String {
    fn from(scheme: Scheme) -> Self {
        scheme.name().to_string()
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
