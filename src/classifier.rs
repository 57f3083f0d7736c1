//! Streaming anagram classifier.
//!
//! Words are fed one at a time. Each signature moves through three states:
//! unseen, singleton (seen once), and group (seen two or more times). A group
//! never falls back to a singleton until [`AnagramClassifier::clear`].
//!
//! Running statistics are maintained as words arrive, so every accessor is
//! valid at any point of a feed sequence.

use crate::signature::{normalize, SignatureKind};
use crate::store::OrderedStore;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Singleton(String),
    Group(Vec<String>),
}

/// A confirmed anagram group: two or more words sharing one signature, in the
/// order they were fed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group<'a> {
    pub signature: &'a str,
    pub words: &'a [String],
}

impl<'a> Group<'a> {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Snapshot of the classifier counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub word_count: usize,
    pub anagram_word_count: usize,
    pub group_count: usize,
}

impl Stats {
    /// Percentage of fed words that belong to some group; zero before any word.
    pub fn anagram_ratio(&self) -> f64 {
        if self.word_count == 0 {
            return 0.0;
        }
        self.anagram_word_count as f64 / self.word_count as f64 * 100.0
    }
}

/// Current holder of an extremal title.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Champion {
    signature: String,
    measure: usize,
}

impl Champion {
    /// Strict comparison: a later contender that only ties keeps the incumbent.
    fn challenge(slot: &mut Option<Champion>, signature: &str, measure: usize) {
        let wins = slot.as_ref().map_or(true, |current| measure > current.measure);
        if wins {
            *slot = Some(Champion {
                signature: signature.to_owned(),
                measure,
            });
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnagramClassifier {
    kind: SignatureKind,
    entries: OrderedStore<Entry>,
    word_count: usize,
    anagram_word_count: usize,
    group_count: usize,
    longest: Option<Champion>,
    largest: Option<Champion>,
}

impl AnagramClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_signature(kind: SignatureKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Pre-size for roughly `words` distinct signatures.
    pub fn with_capacity(kind: SignatureKind, words: usize) -> Self {
        Self {
            kind,
            entries: OrderedStore::with_capacity(words),
            ..Self::default()
        }
    }

    pub fn signature_kind(&self) -> SignatureKind {
        self.kind
    }

    /// Classify one word.
    pub fn feed(&mut self, word: &str) {
        self.word_count += 1;

        let normalized = normalize(word);
        let letters = normalized.len();
        let key = self.kind.of_normalized(&normalized);

        match self.entries.get_mut(&key) {
            Some(Entry::Group(members)) => {
                members.push(word.to_owned());
                let size = members.len();
                self.anagram_word_count += 1;
                self.challenge(&key, letters, size);
            }
            Some(Entry::Singleton(_)) => {
                // Re-inserting moves the key to the end, so groups enumerate in
                // the order they were formed.
                if let Some(Entry::Singleton(first)) = self.entries.remove(&key) {
                    trace!(signature = %key, first = %first, second = %word, "promoted to group");
                    let members = vec![first, word.to_owned()];
                    let size = members.len();
                    self.entries.put(key.clone(), Entry::Group(members));
                    self.group_count += 1;
                    self.anagram_word_count += size;
                    self.challenge(&key, letters, size);
                }
            }
            None => {
                self.entries.put(key, Entry::Singleton(word.to_owned()));
            }
        }
    }

    /// Classify every word of `words`, in order.
    pub fn feed_all<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.feed(word.as_ref());
        }
    }

    /// The group sharing `word`'s signature. Words whose signature has only been
    /// seen once are not reported.
    pub fn find(&self, word: &str) -> Option<Group<'_>> {
        self.group_by_signature(&self.kind.of(word))
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn anagram_word_count(&self) -> usize {
        self.anagram_word_count
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Signatures seen exactly once so far.
    pub fn singleton_count(&self) -> usize {
        self.entries.size() - self.group_count
    }

    pub fn stats(&self) -> Stats {
        Stats {
            word_count: self.word_count,
            anagram_word_count: self.anagram_word_count,
            group_count: self.group_count,
        }
    }

    /// All groups, in the order they were formed.
    pub fn groups(&self) -> Vec<Group<'_>> {
        self.entries
            .iter()
            .filter_map(|(signature, entry)| match entry {
                Entry::Group(words) => Some(Group { signature, words }),
                Entry::Singleton(_) => None,
            })
            .collect()
    }

    /// Every grouped word, group by group.
    pub fn group_words(&self) -> Vec<&str> {
        self.groups()
            .into_iter()
            .flat_map(|group| group.words.iter().map(String::as_str))
            .collect()
    }

    /// The group whose signature has the most letters; the first group to reach
    /// that length keeps the title.
    pub fn longest_group(&self) -> Option<Group<'_>> {
        self.champion(&self.longest)
    }

    /// The group with the most members; the first group to reach that size
    /// keeps the title.
    pub fn largest_group(&self) -> Option<Group<'_>> {
        self.champion(&self.largest)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.word_count = 0;
        self.anagram_word_count = 0;
        self.group_count = 0;
        self.longest = None;
        self.largest = None;
    }

    fn challenge(&mut self, key: &str, letters: usize, size: usize) {
        Champion::challenge(&mut self.longest, key, letters);
        Champion::challenge(&mut self.largest, key, size);
    }

    fn champion(&self, slot: &Option<Champion>) -> Option<Group<'_>> {
        slot.as_ref()
            .and_then(|champion| self.group_by_signature(&champion.signature))
    }

    fn group_by_signature(&self, signature: &str) -> Option<Group<'_>> {
        let (signature, entry) = self.entries.get_key_value(signature)?;
        match entry {
            Entry::Group(words) => Some(Group { signature, words }),
            Entry::Singleton(_) => None,
        }
    }
}

impl<S: AsRef<str>> Extend<S> for AnagramClassifier {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.feed_all(iter);
    }
}
