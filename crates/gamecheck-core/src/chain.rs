use crate::word::normalize;
use std::collections::HashSet;

/// Word-list membership, supplied by the caller. The engine ships no
/// dictionary of its own.
pub trait Dictionary {
    fn contains(&self, word: &str) -> bool;
}

impl Dictionary for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, &normalize(word))
    }
}

impl Dictionary for Vec<String> {
    fn contains(&self, word: &str) -> bool {
        let word = normalize(word);
        self.iter().any(|w| normalize(w) == word)
    }
}

/// Whether two equal-length words differ in exactly one letter
/// position. Words of different lengths never qualify.
pub fn one_letter_apart(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len() != b.len() {
        return false;
    }
    let mismatches = a.iter().zip(b.iter()).filter(|(x, y)| x != y).count();
    mismatches == 1
}

/// Validate a word chain bridging `start` to `end`.
///
/// Every candidate must be a dictionary word one letter away from its
/// predecessor, and the chain must land on the end word: either the
/// last candidate is the end word itself, or it sits one letter away
/// from it. Candidate count must fit the puzzle shape (word length
/// minus one intermediates, or one more when the end word is typed as
/// the final row). Any failed step invalidates the whole chain.
pub fn chain_check(
    start: &str,
    end: &str,
    candidates: &[String],
    dictionary: &dyn Dictionary,
) -> bool {
    let start = normalize(start);
    let end = normalize(end);
    let length = start.chars().count();
    if length == 0 || end.chars().count() != length {
        return false;
    }

    let candidates: Vec<String> = candidates.iter().map(|w| normalize(w)).collect();
    let ends_with_target = candidates.last() == Some(&end);
    let expected = if ends_with_target { length } else { length - 1 };
    if candidates.len() != expected {
        return false;
    }

    let mut prev = start;
    for (i, word) in candidates.iter().enumerate() {
        let is_final_target = ends_with_target && i == candidates.len() - 1;
        // The end word itself is given by the puzzle; everything the
        // player typed must be in the accepted-word set
        if !is_final_target && !dictionary.contains(word) {
            return false;
        }
        if !one_letter_apart(&prev, word) {
            return false;
        }
        prev = word.clone();
    }

    ends_with_target || one_letter_apart(&prev, &end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_valid_chain_ending_on_target() {
        let d = dict(&["CORD", "CARD", "WARD", "WARM"]);
        assert!(chain_check(
            "COLD",
            "WARM",
            &words(&["CORD", "CARD", "WARD", "WARM"]),
            &d
        ));
    }

    #[test]
    fn test_valid_chain_of_intermediates() {
        let d = dict(&["CORD", "CARD", "WARD"]);
        assert!(chain_check(
            "COLD",
            "WARM",
            &words(&["CORD", "CARD", "WARD"]),
            &d
        ));
    }

    #[test]
    fn test_non_dictionary_word_rejected() {
        let d = dict(&["CORD", "WARD"]);
        assert!(!chain_check(
            "COLD",
            "WARM",
            &words(&["CORD", "CARD", "WARD"]),
            &d
        ));
    }

    #[test]
    fn test_broken_step_rejected() {
        // CORD to WARD changes two letters
        let d = dict(&["CORD", "WARD", "WARE"]);
        assert!(!chain_check(
            "COLD",
            "WARM",
            &words(&["CORD", "WARD", "WARE"]),
            &d
        ));
    }

    #[test]
    fn test_chain_must_reach_end() {
        let d = dict(&["CORD", "CARD", "CART"]);
        assert!(!chain_check(
            "COLD",
            "WARM",
            &words(&["CORD", "CARD", "CART"]),
            &d
        ));
    }

    #[test]
    fn test_wrong_candidate_count_rejected() {
        let d = dict(&["CORD", "CARD", "WARD"]);
        assert!(!chain_check("COLD", "WARM", &words(&["CORD", "CARD"]), &d));
    }

    #[test]
    fn test_case_insensitive() {
        let d = dict(&["CORD", "CARD", "WARD"]);
        assert!(chain_check(
            "cold",
            "warm",
            &words(&["cord", "card", "ward"]),
            &d
        ));
    }

    #[test]
    fn test_one_letter_apart() {
        assert!(one_letter_apart("COLD", "CORD"));
        assert!(!one_letter_apart("COLD", "COLD"));
        assert!(!one_letter_apart("COLD", "WARD"));
        assert!(!one_letter_apart("COLD", "COLDS"));
    }
}
