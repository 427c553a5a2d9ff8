//! Vigenère key recovery through Kasiski examination.
//!
//! Repeated trigrams and quadrigrams in a ciphertext tend to be the same
//! plaintext under the same key letters, so their distances are mostly
//! multiples of the key length. Every distance votes for all of its
//! divisors; the most voted lengths are the likely key lengths. Once a
//! length `L` is chosen, every `L`-th letter was shifted by the same key
//! letter and falls to the Caesar cracker.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use crate::alphabet;
use crate::crack::caesar;
use crate::error::CryptoError;
use crate::keys::VigenereKey;
use crate::types::Language;

/// Shortest text the examination accepts.
pub const MIN_ANALYSIS_LEN: usize = 8;

/// Number of ranked key lengths kept in a report.
pub const TOP_CANDIDATES: usize = 20;

static DIVISORS: OnceLock<Mutex<HashMap<usize, Vec<usize>>>> = OnceLock::new();

/// A key length and how many repeat distances it divides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLengthCandidate {
    pub length: usize,
    pub votes: usize,
}

/// Outcome of the Kasiski examination.
#[derive(Debug, Clone)]
pub struct KasiskiReport {
    /// Distances between consecutive occurrences of each repeated block.
    pub separations: HashMap<String, Vec<usize>>,
    /// Number of distances that voted.
    pub processed_distances: usize,
    /// Most voted key lengths, best first. Equal votes favour the shorter length.
    pub candidates: Vec<KeyLengthCandidate>,
}

impl KasiskiReport {
    /// Candidates as `(length, votes)` pairs for display.
    pub fn ranking(&self) -> Vec<(usize, usize)> {
        self.candidates.iter().map(|c| (c.length, c.votes)).collect()
    }
}

/// Chooses the key length from the ranked candidates.
pub trait KeyLengthSelector {
    fn select(&self, candidates: &[KeyLengthCandidate]) -> Option<usize>;
}

/// Always answer with a length decided beforehand.
#[derive(Debug, Clone, Copy)]
pub struct FixedKeyLength(pub usize);

impl KeyLengthSelector for FixedKeyLength {
    fn select(&self, _candidates: &[KeyLengthCandidate]) -> Option<usize> {
        Some(self.0)
    }
}

/// Highest ranked length above 1, or 1 if nothing else was voted.
///
/// Length 1 divides every distance and always tops the ranking, so it is
/// skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostVoted;

impl KeyLengthSelector for MostVoted {
    fn select(&self, candidates: &[KeyLengthCandidate]) -> Option<usize> {
        candidates
            .iter()
            .map(|c| c.length)
            .find(|&length| length > 1)
            .or(Some(1))
    }
}

impl<F> KeyLengthSelector for F
where
    F: Fn(&[KeyLengthCandidate]) -> Option<usize>,
{
    fn select(&self, candidates: &[KeyLengthCandidate]) -> Option<usize> {
        self(candidates)
    }
}

/// All divisors of `n` in ascending order, memoised.
pub fn divisors(n: usize) -> Vec<usize> {
    let cache = DIVISORS.get_or_init(|| Mutex::new(HashMap::new()));
    let mut cache = cache.lock().unwrap_or_else(|e| e.into_inner());

    cache
        .entry(n)
        .or_insert_with(|| {
            let mut small = Vec::new();
            let mut large = Vec::new();
            let mut i = 1;
            while i * i <= n {
                if n % i == 0 {
                    small.push(i);
                    if i != n / i {
                        large.push(n / i);
                    }
                }
                i += 1;
            }
            small.extend(large.into_iter().rev());
            small
        })
        .clone()
}

/// Distances between repeated 3- and 4-letter blocks.
///
/// Each block remembers where it was last seen; every new sighting records
/// the distance back to that position and moves it forward.
pub fn repeated_block_separations(text: &str) -> Result<HashMap<String, Vec<usize>>, CryptoError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < MIN_ANALYSIS_LEN {
        return Err(CryptoError::TooShortInput {
            len: chars.len(),
            min: MIN_ANALYSIS_LEN,
        });
    }

    let mut latest_position: HashMap<String, usize> = HashMap::new();
    let mut separations: HashMap<String, Vec<usize>> = HashMap::new();

    for i in 0..chars.len() - 3 {
        for block_len in [3, 4] {
            let block: String = chars[i..i + block_len].iter().collect();
            if let Some(previous) = latest_position.insert(block.clone(), i) {
                separations.entry(block).or_default().push(i - previous);
            }
        }
    }

    Ok(separations)
}

/// Run the examination and rank candidate key lengths.
pub fn analyze(text: &str) -> Result<KasiskiReport, CryptoError> {
    let separations = repeated_block_separations(text)?;

    let mut votes: HashMap<usize, usize> = HashMap::new();
    let mut processed_distances = 0;
    for distances in separations.values() {
        for &distance in distances {
            processed_distances += 1;
            for divisor in divisors(distance) {
                *votes.entry(divisor).or_insert(0) += 1;
            }
        }
    }

    let mut candidates: Vec<KeyLengthCandidate> = votes
        .into_iter()
        .map(|(length, votes)| KeyLengthCandidate { length, votes })
        .collect();
    candidates.sort_by(|a, b| b.votes.cmp(&a.votes).then(a.length.cmp(&b.length)));
    candidates.truncate(TOP_CANDIDATES);

    log::debug!(
        "Kasiski: {} repeated blocks, {} distances",
        separations.len(),
        processed_distances
    );

    Ok(KasiskiReport {
        separations,
        processed_distances,
        candidates,
    })
}

/// Every `key_length`-th character, starting at each offset in `[0, key_length)`.
pub fn columns(text: &str, key_length: usize) -> Vec<String> {
    let mut columns = vec![String::new(); key_length];
    if key_length == 0 {
        return columns;
    }
    for (i, c) in text.chars().enumerate() {
        columns[i % key_length].push(c);
    }
    columns
}

/// Recover a key of known length by cracking each column as a Caesar cipher.
///
/// `ciphertext` should only contain alphabet letters; anything else shifts
/// the columns.
pub fn crack_with_key_length(
    ciphertext: &str,
    lang: Language,
    key_length: usize,
    fast: bool,
) -> Result<VigenereKey, CryptoError> {
    if key_length == 0 {
        return Err(CryptoError::NoKeyLength);
    }

    let n = alphabet::len(lang) as i64;
    let offsets: Vec<usize> = columns(ciphertext, key_length)
        .iter()
        .map(|column| caesar::crack(column, lang, fast).shift().rem_euclid(n) as usize)
        .collect();

    let key = VigenereKey::from_offsets(&offsets, lang)?;
    log::debug!("Vigenère key for length {}: {}", key_length, key);
    Ok(key)
}

/// Examine the ciphertext, let `selector` pick a key length, then crack
/// each column.
pub fn crack(
    ciphertext: &str,
    lang: Language,
    fast: bool,
    selector: &dyn KeyLengthSelector,
) -> Result<VigenereKey, CryptoError> {
    crack_with_report(ciphertext, lang, fast, selector).map(|(key, _)| key)
}

/// Same as [`crack`], also returning the examination the key length was
/// chosen from.
pub fn crack_with_report(
    ciphertext: &str,
    lang: Language,
    fast: bool,
    selector: &dyn KeyLengthSelector,
) -> Result<(VigenereKey, KasiskiReport), CryptoError> {
    let report = analyze(ciphertext)?;
    log::info!("Top key length candidates: {:?}", report.ranking());

    let key_length = selector
        .select(&report.candidates)
        .filter(|&length| length > 0)
        .ok_or(CryptoError::NoKeyLength)?;
    log::info!("Selected key length: {}", key_length);

    let key = crack_with_key_length(ciphertext, lang, key_length, fast)?;
    Ok((key, report))
}
