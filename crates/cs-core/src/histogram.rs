//! Letter histogram computation for frequency analysis.
//!
//! A histogram holds one `(letter, frequency)` entry per alphabet letter, in
//! the alphabet's canonical order. Comparisons between histograms are
//! position-wise, so both sides must come from the same alphabet for the
//! score to mean anything.

use std::path::Path;
use std::sync::OnceLock;

use crate::alphabet;
use crate::types::{Language, LetterCase};

/// Published letter frequencies (percent) in alphabet order.
static ESP_PERCENT: [f64; 27] = [
    12.53, 1.42, 4.68, 5.86, 13.68, 0.69, 1.01, 0.70, 6.25, 0.44, 0.02, 4.97, 3.15, 6.71,
    0.31, 8.68, 2.51, 0.88, 6.87, 7.98, 4.63, 3.93, 0.90, 0.01, 0.22, 0.90, 0.52,
];

static ENG_PERCENT: [f64; 26] = [
    8.2, 1.5, 2.8, 4.3, 12.7, 2.2, 2.0, 6.1, 7.0, 0.15, 0.77, 4.0, 2.4,
    6.7, 7.5, 1.9, 0.095, 6.0, 6.3, 9.1, 2.8, 0.98, 2.4, 0.15, 2.0, 0.074,
];

static ESP_REFERENCE: OnceLock<LetterHistogram> = OnceLock::new();
static ENG_REFERENCE: OnceLock<LetterHistogram> = OnceLock::new();

/// Frequency of each letter of a language alphabet.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterHistogram {
    entries: Vec<(char, f64)>,
}

impl LetterHistogram {
    /// Histogram with every frequency set to zero.
    pub fn empty(lang: Language) -> Self {
        Self {
            entries: alphabet::alphabet(lang, LetterCase::Lower)
                .iter()
                .map(|&c| (c, 0.0))
                .collect(),
        }
    }

    /// Build a histogram from raw entries. Order is kept as given.
    pub fn from_entries(entries: Vec<(char, f64)>) -> Self {
        Self { entries }
    }

    /// Relative frequency of each alphabet letter in `text`.
    ///
    /// Case is folded and characters outside the alphabet are skipped; they
    /// count neither as letters nor toward the total. Text without a single
    /// alphabet letter gives the all-zero histogram.
    pub fn normalized(text: &str, lang: Language) -> Self {
        let mut hist = Self::empty(lang);
        let mut total: u64 = 0;

        for c in text.chars() {
            if let Some(index) = alphabet::index_of(lang, c) {
                hist.entries[index].1 += 1.0;
                total += 1;
            }
        }

        if total > 0 {
            let total = total as f64;
            for entry in &mut hist.entries {
                entry.1 /= total;
            }
        }

        hist
    }

    /// Reference letter distribution of a language, as fractions.
    pub fn reference(lang: Language) -> &'static LetterHistogram {
        let (cell, percent): (&OnceLock<LetterHistogram>, &[f64]) = match lang {
            Language::Spanish => (&ESP_REFERENCE, &ESP_PERCENT),
            Language::English => (&ENG_REFERENCE, &ENG_PERCENT),
        };

        cell.get_or_init(|| Self {
            entries: alphabet::alphabet(lang, LetterCase::Lower)
                .iter()
                .zip(percent)
                .map(|(&c, &p)| (c, p / 100.0))
                .collect(),
        })
    }

    /// Normalized histogram of a text file.
    ///
    /// An unreadable file is not an error; it gives the empty histogram.
    pub fn from_file(path: &Path, lang: Language) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::normalized(&content, lang),
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                Self::empty(lang)
            }
        }
    }

    pub fn entries(&self) -> &[(char, f64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Frequency recorded for `letter`, 0.0 if it has no entry.
    pub fn frequency(&self, letter: char) -> f64 {
        self.entries
            .iter()
            .find(|(c, _)| *c == letter)
            .map(|&(_, f)| f)
            .unwrap_or(0.0)
    }

    /// Sum of all frequencies.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|&(_, f)| f).sum()
    }

    /// `1 - sum((f1 - f2)^2)` over aligned positions.
    ///
    /// When lengths differ, the positions only the longer histogram has
    /// contribute their own squared frequency. The score is not a metric and
    /// goes negative for very different inputs.
    pub fn similarity(&self, other: &LetterHistogram) -> f64 {
        similarity(self, other)
    }

    /// Rotate frequencies so entry `i` takes the frequency of entry
    /// `(i - step) mod n`. Letters stay in canonical order.
    ///
    /// Sliding a plaintext histogram by `k` gives the histogram of the same
    /// text Caesar-encrypted with shift `k`.
    pub fn slide(&self, step: i64) -> LetterHistogram {
        if self.entries.is_empty() {
            return self.clone();
        }

        let n = self.entries.len() as i64;
        let entries = (0..n)
            .map(|i| {
                let src = (i - step).rem_euclid(n) as usize;
                (self.entries[i as usize].0, self.entries[src].1)
            })
            .collect();

        LetterHistogram { entries }
    }

    /// Most frequent letter; the first one in alphabet order wins a tie.
    pub fn most_frequent(&self) -> Option<char> {
        self.top(1).first().map(|&(c, _)| c)
    }

    /// The `count` most frequent entries, by descending frequency.
    /// Equal frequencies keep alphabet order.
    pub fn top(&self, count: usize) -> Vec<(char, f64)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.total_cmp(&a.1));
        sorted.truncate(count);
        sorted
    }
}

/// See [`LetterHistogram::similarity`].
pub fn similarity(h1: &LetterHistogram, h2: &LetterHistogram) -> f64 {
    let (shortest, longest) = if h1.len() < h2.len() { (h1, h2) } else { (h2, h1) };

    let mut difference = 0.0;
    for (index, &(_, f)) in longest.entries.iter().enumerate() {
        let diff = match shortest.entries.get(index) {
            Some(&(_, g)) => (f - g).abs(),
            None => f.abs(),
        };
        difference += diff * diff;
    }

    1.0 - difference
}

/// Step in `[0, n)` that makes `sliding` most similar to `target`.
///
/// Only a strictly better score replaces the incumbent, so ties go to the
/// smallest step.
pub fn find_best_shift(target: &LetterHistogram, sliding: &LetterHistogram) -> usize {
    let mut best_similarity = similarity(target, sliding);
    let mut best_step = 0;

    for step in 1..target.len() {
        let candidate = similarity(&sliding.slide(step as i64), target);
        if candidate > best_similarity {
            best_similarity = candidate;
            best_step = step;
        }
    }

    log::trace!("Best shift {} (similarity {:.6})", best_step, best_similarity);
    best_step
}
