//! Canonical anagram signatures.
//!
//! Two words share a signature exactly when their letters are a permutation of
//! one another. Words are normalized first: lower-cased, with every character
//! outside `a..=z` removed. A word with no letters left has the empty signature,
//! so all such words land in the same class.

use std::fmt::Write;

/// Number of letters in the alphabet tallied by [`counted_signature`].
pub const ALPHABET_LEN: usize = 26;

/// Strategy used to turn a normalized word into a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignatureKind {
    /// Letters sorted into non-decreasing order, e.g. `"listen"` -> `"eilnst"`.
    #[default]
    Sorted,
    /// Comma-joined per-letter counts in `a..z` order.
    Counted,
}

impl SignatureKind {
    /// Signature of an arbitrary word.
    pub fn of(self, word: &str) -> String {
        self.of_normalized(&normalize(word))
    }

    /// Signature of a word that has already been through [`normalize`].
    pub fn of_normalized(self, normalized: &str) -> String {
        match self {
            SignatureKind::Sorted => sort_letters(normalized),
            SignatureKind::Counted => count_letters(normalized),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SignatureKind::Sorted => "sorted",
            SignatureKind::Counted => "counted",
        }
    }
}

impl std::fmt::Display for SignatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lower-case `word` and keep only the ASCII letters `a..=z`.
pub fn normalize(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Reference signature: the normalized letters in sorted order.
pub fn sorted_signature(word: &str) -> String {
    SignatureKind::Sorted.of(word)
}

/// Counting signature: a fixed-width tally of each letter, e.g. `"ab"` ->
/// `"1,1,0,...,0"`. Linear in the word length, but always 26 fields wide.
pub fn counted_signature(word: &str) -> String {
    SignatureKind::Counted.of(word)
}

fn sort_letters(normalized: &str) -> String {
    let mut bytes = normalized.as_bytes().to_vec();
    bytes.sort_unstable();
    bytes.into_iter().map(char::from).collect()
}

fn count_letters(normalized: &str) -> String {
    let mut counts = [0u32; ALPHABET_LEN];
    for b in normalized.bytes() {
        counts[(b - b'a') as usize] += 1;
    }

    let mut key = String::with_capacity(ALPHABET_LEN * 2);
    for (i, count) in counts.iter().enumerate() {
        if i > 0 {
            key.push(',');
        }
        // Writing into a String cannot fail.
        let _ = write!(key, "{}", count);
    }
    key
}
