use anagrams::{AnagramClassifier, SignatureKind, Stats};
use proptest::prelude::*;
use std::collections::HashSet;

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}

fn classify(words: &[&str]) -> AnagramClassifier {
    let mut classifier = AnagramClassifier::new();
    classifier.feed_all(words);
    classifier
}

#[test]
fn test_new_classifier_is_empty() {
    let classifier = AnagramClassifier::new();
    assert_eq!(classifier.stats(), Stats::default());
    assert_eq!(classifier.singleton_count(), 0);
    assert!(classifier.groups().is_empty());
    assert!(classifier.group_words().is_empty());
    assert!(classifier.longest_group().is_none());
    assert!(classifier.largest_group().is_none());
    assert!(classifier.find("anything").is_none());
}

#[test]
fn test_single_group_in_arrival_order() {
    let classifier = classify(&["listen", "silent", "enlist", "banana"]);

    assert_eq!(classifier.word_count(), 4);
    assert_eq!(classifier.anagram_word_count(), 3);
    assert_eq!(classifier.group_count(), 1);
    assert_eq!(classifier.singleton_count(), 1);

    let group = classifier.find("tinsel").unwrap();
    assert_eq!(group.signature, "eilnst");
    assert_eq!(group.words, owned(&["listen", "silent", "enlist"]).as_slice());
    assert!(classifier.find("banana").is_none());
}

#[test]
fn test_no_anagrams() {
    let classifier = classify(&["cat", "dog", "bird"]);

    assert_eq!(classifier.group_count(), 0);
    assert_eq!(classifier.anagram_word_count(), 0);
    assert_eq!(classifier.word_count(), 3);
    assert!(classifier.find("cat").is_none());
    assert!(classifier.longest_group().is_none());
    assert!(classifier.largest_group().is_none());
}

#[test]
fn test_longest_and_largest() {
    let classifier = classify(&["ab", "ba", "abc", "bca", "cab"]);

    let groups = classifier.groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].words, owned(&["ab", "ba"]).as_slice());
    assert_eq!(groups[1].words, owned(&["abc", "bca", "cab"]).as_slice());

    assert_eq!(classifier.largest_group().unwrap().words, groups[1].words);
    assert_eq!(classifier.longest_group().unwrap().words, groups[1].words);
}

#[test]
fn test_ties_keep_first_group() {
    let classifier = classify(&["ab", "ba", "cd", "dc"]);

    assert_eq!(classifier.group_count(), 2);
    let first = owned(&["ab", "ba"]);
    assert_eq!(classifier.largest_group().unwrap().words, first.as_slice());
    assert_eq!(classifier.longest_group().unwrap().words, first.as_slice());
}

#[test]
fn test_longest_and_largest_can_differ() {
    let classifier = classify(&["ab", "ba", "ab", "abcd", "dcba"]);

    assert_eq!(classifier.largest_group().unwrap().signature, "ab");
    assert_eq!(classifier.longest_group().unwrap().signature, "abcd");
}

#[test]
fn test_groups_enumerate_in_formation_order() {
    // "xy" is seen first but only becomes a group after "ab".
    let classifier = classify(&["xy", "ab", "ba", "yx"]);

    let signatures: Vec<&str> = classifier.groups().iter().map(|g| g.signature).collect();
    assert_eq!(signatures, vec!["ab", "xy"]);
    assert_eq!(classifier.group_words(), vec!["ab", "ba", "xy", "yx"]);
}

#[test]
fn test_empty_signature_forms_a_group() {
    let classifier = classify(&["123", "!!", "abc"]);

    assert_eq!(classifier.group_count(), 1);
    let group = classifier.find("").unwrap();
    assert_eq!(group.signature, "");
    assert_eq!(group.words, owned(&["123", "!!"]).as_slice());
    assert_eq!(classifier.longest_group().unwrap().signature, "");
}

#[test]
fn test_feed_order_changes_members_not_membership() {
    let forward = classify(&["listen", "silent"]);
    let backward = classify(&["silent", "listen"]);

    let a: HashSet<&String> = forward.find("listen").unwrap().words.iter().collect();
    let b: HashSet<&String> = backward.find("listen").unwrap().words.iter().collect();
    assert_eq!(a, b);
    assert_eq!(forward.stats(), backward.stats());
    assert_ne!(
        forward.find("listen").unwrap().words,
        backward.find("listen").unwrap().words
    );
}

#[test]
fn test_accessors_are_idempotent() {
    let classifier = classify(&["ab", "ba", "abc", "cab"]);

    assert_eq!(classifier.word_count(), classifier.word_count());
    assert_eq!(classifier.find("ab"), classifier.find("ab"));
    assert_eq!(classifier.groups(), classifier.groups());
    assert_eq!(classifier.largest_group(), classifier.largest_group());
}

#[test]
fn test_clear_restores_initial_state() {
    let mut classifier = AnagramClassifier::with_signature(SignatureKind::Counted);
    classifier.feed_all(["ab", "ba", "abc", "cab", "zz"]);
    classifier.clear();

    let fresh = AnagramClassifier::with_signature(SignatureKind::Counted);
    assert_eq!(classifier.stats(), fresh.stats());
    assert_eq!(classifier.singleton_count(), 0);
    assert!(classifier.groups().is_empty());
    assert!(classifier.longest_group().is_none());
    assert!(classifier.largest_group().is_none());
    assert!(classifier.find("ab").is_none());
    assert_eq!(classifier.signature_kind(), SignatureKind::Counted);

    // Still usable after a reset.
    classifier.feed_all(["ab", "ba"]);
    assert_eq!(classifier.group_count(), 1);
}

#[test]
fn test_counted_signature_reports_same_extremes() {
    let words = ["ab", "ba", "abcde", "edcba", "xyz", "zyx", "yxz", "zz"];

    let sorted = classify(&words);
    let mut counted = AnagramClassifier::with_signature(SignatureKind::Counted);
    counted.feed_all(words);

    assert_eq!(sorted.stats(), counted.stats());
    assert_eq!(
        sorted.longest_group().unwrap().words,
        counted.longest_group().unwrap().words
    );
    assert_eq!(
        sorted.largest_group().unwrap().words,
        counted.largest_group().unwrap().words
    );
    assert_eq!(sorted.group_words(), counted.group_words());
}

#[test]
fn test_extend_matches_feed() {
    let mut classifier = AnagramClassifier::new();
    classifier.extend(vec!["ab".to_string(), "ba".to_string()]);
    classifier.feed("c");

    assert_eq!(classifier.word_count(), 3);
    assert_eq!(classifier.anagram_word_count(), 2);
}

#[test]
fn test_partial_feed_is_queryable() {
    let words = ["ab", "ba", "abc", "cab", "bca"];
    let mut classifier = AnagramClassifier::new();

    for (i, word) in words.iter().enumerate() {
        classifier.feed(word);
        assert_eq!(classifier.word_count(), i + 1);
    }
    assert_eq!(classifier.anagram_word_count(), 5);
}

proptest! {
    #[test]
    fn prop_counts_are_conserved(words in prop::collection::vec("[a-d]{0,4}", 0..60)) {
        let mut classifier = AnagramClassifier::new();
        classifier.feed_all(&words);

        let groups = classifier.groups();
        let grouped: usize = groups.iter().map(|g| g.len()).sum();

        prop_assert_eq!(classifier.word_count(), words.len());
        prop_assert_eq!(classifier.anagram_word_count(), grouped);
        prop_assert!(classifier.anagram_word_count() <= classifier.word_count());
        prop_assert_eq!(classifier.group_count(), groups.len());
        prop_assert!(groups.iter().all(|g| g.len() >= 2));
        prop_assert_eq!(
            classifier.group_count() + classifier.singleton_count(),
            words.iter().map(|w| anagrams::sorted_signature(w)).collect::<HashSet<_>>().len()
        );
    }

    #[test]
    fn prop_groups_never_revert(words in prop::collection::vec("[a-c]{1,3}", 0..40)) {
        let mut classifier = AnagramClassifier::new();
        let mut grouped: HashSet<String> = HashSet::new();

        for word in &words {
            classifier.feed(word);
            for signature in &grouped {
                prop_assert!(classifier.find(signature).is_some());
            }
            if let Some(group) = classifier.find(word) {
                grouped.insert(group.signature.to_string());
            }
        }
    }

    #[test]
    fn prop_extremes_are_maximal(words in prop::collection::vec("[a-c]{0,5}", 0..50)) {
        let mut classifier = AnagramClassifier::new();
        classifier.feed_all(&words);

        let groups = classifier.groups();
        match (classifier.largest_group(), classifier.longest_group()) {
            (Some(largest), Some(longest)) => {
                prop_assert_eq!(largest.len(), groups.iter().map(|g| g.len()).max().unwrap());
                prop_assert_eq!(
                    longest.signature.len(),
                    groups.iter().map(|g| g.signature.len()).max().unwrap()
                );
            }
            (None, None) => prop_assert!(groups.is_empty()),
            _ => prop_assert!(false, "extremes must be set together"),
        }
    }
}

#[test]
fn test_anagram_ratio() {
    assert_eq!(AnagramClassifier::new().stats().anagram_ratio(), 0.0);

    let classifier = classify(&["listen", "silent", "enlist", "banana"]);
    assert_eq!(classifier.stats().anagram_ratio(), 75.0);

    let classifier = classify(&["cat", "dog"]);
    assert_eq!(classifier.stats().anagram_ratio(), 0.0);
}
