//! Crack requests.
//!
//! A request names the scheme, the language, the ciphertext file and the
//! cracking options. It is stored as JSON so a run can be repeated.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::alphabet;
use crate::ciphers;
use crate::crack::{self, vigenere, FixedKeyLength, KeyLengthSelector, MostVoted};
use crate::error::CryptoError;
use crate::keys::CipherKey;
use crate::types::{Language, Scheme};

/// Everything needed to crack one ciphertext file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrackRequest {
    /// Scheme the ciphertext was encrypted with.
    pub scheme: Scheme,
    /// Suspected plaintext language.
    pub language: Language,
    /// Ciphertext file. Relative paths resolve against the request file.
    pub input: PathBuf,
    /// Use the congruence shortcuts instead of the exhaustive searches.
    #[serde(default)]
    pub fast: bool,
    /// Vigenère key length; the most voted Kasiski candidate when absent.
    #[serde(default)]
    pub key_length: Option<usize>,
    /// Also decrypt the ciphertext with the recovered key.
    #[serde(default)]
    pub decrypt: bool,
}

/// Result of running a [`CrackRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct CrackOutcome {
    pub key: CipherKey,
    /// Ranked `(key length, votes)` pairs, Vigenère only.
    pub key_length_ranking: Option<Vec<(usize, usize)>>,
    /// Decryption of the original text, when requested.
    pub plaintext: Option<String>,
}

impl CrackRequest {
    pub fn new(scheme: Scheme, language: Language, input: PathBuf) -> Self {
        Self {
            scheme,
            language,
            input,
            fast: false,
            key_length: None,
            decrypt: false,
        }
    }

    /// Load a request from a JSON file.
    pub fn load(path: &Path) -> Result<Self, RequestError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RequestError::IoError(e.to_string()))?;

        let mut request = Self::from_json(&content)?;
        if request.input.is_relative() {
            if let Some(dir) = path.parent() {
                request.input = dir.join(&request.input);
            }
        }

        Ok(request)
    }

    /// Parse and validate a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        let request: CrackRequest = serde_json::from_str(json)
            .map_err(|e| RequestError::ParseError(e.to_string()))?;

        if request.key_length == Some(0) {
            return Err(RequestError::Invalid("key_length must be at least 1".to_string()));
        }

        Ok(request)
    }

    pub fn to_json(&self) -> Result<String, RequestError> {
        serde_json::to_string_pretty(self).map_err(|e| RequestError::SerializeError(e.to_string()))
    }

    /// Save the request to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), RequestError> {
        let content = self.to_json()?;
        std::fs::write(path, content).map_err(|e| RequestError::IoError(e.to_string()))
    }

    /// Read the ciphertext file named by the request.
    pub fn read_input(&self) -> Result<String> {
        std::fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read ciphertext {}", self.input.display()))
    }

    /// Key length strategy implied by the request.
    pub fn selector(&self) -> Box<dyn KeyLengthSelector> {
        match self.key_length {
            Some(length) => Box::new(FixedKeyLength(length)),
            None => Box::new(MostVoted),
        }
    }

    /// Crack `text`. Characters outside the alphabet are dropped before the
    /// analysis; the optional decryption runs on the text as given.
    pub fn execute(&self, text: &str) -> Result<CrackOutcome, CryptoError> {
        let cleaned = alphabet::clean_text(text, self.language);

        let (key, key_length_ranking) = match self.scheme {
            Scheme::Vigenere => {
                let selector = self.selector();
                let (key, report) =
                    vigenere::crack_with_report(&cleaned, self.language, self.fast, &*selector)?;
                (CipherKey::from(key), Some(report.ranking()))
            }
            scheme => (
                crack::crack(scheme, &cleaned, self.language, self.fast, &MostVoted)?,
                None,
            ),
        };

        let plaintext = self.decrypt.then(|| ciphers::decrypt(text, &key));

        Ok(CrackOutcome {
            key,
            key_length_ranking,
            plaintext,
        })
    }
}

/// Errors from loading or saving a request.
#[derive(Debug)]
pub enum RequestError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    Invalid(String),
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::IoError(e) => write!(f, "I/O error: {}", e),
            RequestError::ParseError(e) => write!(f, "Parse error: {}", e),
            RequestError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            RequestError::Invalid(e) => write!(f, "Invalid request: {}", e),
        }
    }
}

impl std::error::Error for RequestError {}
