use crate::verdict::LetterStatus;

/// Canonical form of raw player text: trimmed and uppercased
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Score a guess against the secret word, Wordle-style.
///
/// Two passes so repeated letters are never double-counted: the first
/// marks exact positions and withholds those secret letters from the
/// pool, the second spends the pool on `Present` marks left to right.
/// Comparison is case-insensitive. A length mismatch yields an empty
/// status list and `false`.
pub fn word_feedback(guess: &str, secret: &str) -> (Vec<LetterStatus>, bool) {
    let guess: Vec<char> = normalize(guess).chars().collect();
    let secret: Vec<char> = normalize(secret).chars().collect();
    if guess.len() != secret.len() {
        return (Vec::new(), false);
    }

    let mut status = vec![LetterStatus::Absent; guess.len()];
    let mut pool: Vec<char> = Vec::with_capacity(secret.len());
    for i in 0..guess.len() {
        if guess[i] == secret[i] {
            status[i] = LetterStatus::Correct;
        } else {
            pool.push(secret[i]);
        }
    }

    for i in 0..guess.len() {
        if status[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(slot) = pool.iter().position(|&c| c == guess[i]) {
            pool.swap_remove(slot);
            status[i] = LetterStatus::Present;
        }
    }

    let is_correct = status.iter().all(|s| *s == LetterStatus::Correct);
    (status, is_correct)
}

/// Whether two strings are letter-for-letter rearrangements of each
/// other, ignoring case and whitespace. Symmetric by construction.
pub fn anagram_check(a: &str, b: &str) -> bool {
    fn letters(s: &str) -> Vec<char> {
        let mut v: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(|c| c.to_uppercase())
            .collect();
        v.sort_unstable();
        v
    }
    letters(a) == letters(b)
}
