//! Encryption and decryption for the supported schemes.
//!
//! Every scheme keeps the case of each letter and copies characters outside
//! the alphabet through untouched.

pub mod affine;
pub mod caesar;
pub mod vigenere;

use crate::keys::CipherKey;
use crate::types::Mode;

/// Translate `message` with whichever scheme `key` belongs to.
pub fn translate(message: &str, key: &CipherKey, mode: Mode) -> String {
    match key {
        CipherKey::Caesar(k) => caesar::translate(message, k, mode),
        CipherKey::Affine(k) => affine::translate(message, k, mode),
        CipherKey::Vigenere(k) => vigenere::translate(message, k, mode),
    }
}

/// Encrypt `message` under `key`.
pub fn encrypt(message: &str, key: &CipherKey) -> String {
    translate(message, key, Mode::Encryption)
}

/// Decrypt `message` under `key`.
pub fn decrypt(message: &str, key: &CipherKey) -> String {
    translate(message, key, Mode::Decryption)
}
