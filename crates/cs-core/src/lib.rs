pub mod types;
pub mod error;
pub mod alphabet;
pub mod histogram;
pub mod keys;
pub mod ciphers;
pub mod crack;
pub mod request;

pub use types::{Language, LetterCase, Mode, Scheme};
pub use error::CryptoError;
pub use histogram::{find_best_shift, similarity, LetterHistogram};
pub use keys::{AffineKey, CaesarKey, CipherKey, VigenereKey};
pub use crack::{
    crack, FixedKeyLength, KasiskiReport, KeyLengthCandidate, KeyLengthSelector, MostVoted,
};
pub use request::{CrackRequest, RequestError};
