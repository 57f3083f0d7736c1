//! # Anagrams
//!
//! A single-pass anagram classifier for dictionary word lists.
//!
//! Words are grouped by a canonical signature of their letters. The classifier
//! keeps running counts and tracks the group with the longest signature and the
//! group with the most members while words are fed, so statistics are available
//! at any point without a second pass.

pub mod classifier;
pub mod dictionary;
pub mod error;
pub mod signature;
pub mod store;

pub use classifier::{AnagramClassifier, Group, Stats};
pub use dictionary::{Dictionary, PrepareOptions};
pub use error::{Error, Result};
pub use signature::{counted_signature, normalize, sorted_signature, SignatureKind};
pub use store::OrderedStore;

/// Prepare `lines` and classify the resulting words in one call.
pub fn classify_lines<I, S>(
    lines: I,
    options: &PrepareOptions,
    kind: SignatureKind,
) -> AnagramClassifier
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let dictionary = Dictionary::prepare(lines, options);
    let mut classifier = AnagramClassifier::with_capacity(kind, dictionary.len());
    classifier.feed_all(dictionary.words());
    classifier
}
