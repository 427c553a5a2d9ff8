//! Per-language alphabets and letter lookups.
//!
//! Alphabets are static tables; lowercase and uppercase tables of one
//! language line up position by position.

use crate::keys::AffineKey;
use crate::types::{Language, LetterCase};

static ENG_LOWER: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

static ENG_UPPER: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

static ESP_LOWER: [char; 27] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n',
    'ñ', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

static ESP_UPPER: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N',
    'Ñ', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Ordered alphabet for a language and case.
pub fn alphabet(lang: Language, case: LetterCase) -> &'static [char] {
    match (lang, case) {
        (Language::English, LetterCase::Lower) => &ENG_LOWER,
        (Language::English, LetterCase::Upper) => &ENG_UPPER,
        (Language::Spanish, LetterCase::Lower) => &ESP_LOWER,
        (Language::Spanish, LetterCase::Upper) => &ESP_UPPER,
    }
}

/// Number of letters in the language alphabet.
pub fn len(lang: Language) -> usize {
    alphabet(lang, LetterCase::Lower).len()
}

/// Single-char lowercase mapping; letters whose lowercase form expands to
/// several chars are left as they are.
fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn fold_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Position of `c` in the alphabet, ignoring case.
pub fn index_of(lang: Language, c: char) -> Option<usize> {
    let folded = fold(c);
    alphabet(lang, LetterCase::Lower).iter().position(|&l| l == folded)
}

/// True if the lowercase form of `c` belongs to the alphabet.
pub fn is_member(lang: Language, c: char) -> bool {
    index_of(lang, c).is_some()
}

/// Alphabet rotated so that entry `i` holds the letter at `(i + step) mod n`.
pub fn shifted_alphabet(lang: Language, case: LetterCase, step: i64) -> Vec<char> {
    let src = alphabet(lang, case);
    let n = src.len() as i64;
    (0..n)
        .map(|i| src[(i + step).rem_euclid(n) as usize])
        .collect()
}

/// Shift a single letter by `step` positions, keeping its case.
/// Characters outside the alphabet are returned unchanged.
pub fn shifted_letter(c: char, lang: Language, step: i64) -> char {
    match index_of(lang, c) {
        Some(index) => {
            let src = alphabet(lang, LetterCase::of(c));
            let n = src.len() as i64;
            src[(index as i64 + step).rem_euclid(n) as usize]
        }
        None => c,
    }
}

/// Alphabet permuted by an affine key: entry `i` is the letter at `(a*i + b) mod n`.
pub fn affine_alphabet(key: &AffineKey, case: LetterCase) -> Vec<char> {
    let src = alphabet(key.language(), case);
    let n = src.len() as i64;
    (0..n)
        .map(|i| src[(key.a() * i + key.b()).rem_euclid(n) as usize])
        .collect()
}

/// Drop every character outside the alphabet and upper-case the rest.
pub fn clean_text(text: &str, lang: Language) -> String {
    text.chars()
        .filter(|&c| is_member(lang, c))
        .map(fold_upper)
        .collect()
}
