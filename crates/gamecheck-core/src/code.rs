/// Score a guessed symbol sequence against the secret, Mastermind-style.
///
/// Returns `(exact, present, is_correct)`. Exact matches are removed
/// from both sides first; the remainder is matched greedily, each
/// secret symbol consumable once, so `exact + present` never exceeds
/// the code length. A length mismatch yields `(0, 0, false)`.
pub fn code_feedback(guess: &[String], secret: &[String]) -> (usize, usize, bool) {
    if guess.len() != secret.len() {
        return (0, 0, false);
    }

    let mut exact = 0;
    let mut guess_rest: Vec<&str> = Vec::new();
    let mut secret_rest: Vec<&str> = Vec::new();
    for (g, s) in guess.iter().zip(secret.iter()) {
        if g == s {
            exact += 1;
        } else {
            guess_rest.push(g);
            secret_rest.push(s);
        }
    }

    let mut present = 0;
    for g in guess_rest {
        if let Some(slot) = secret_rest.iter().position(|s| *s == g) {
            secret_rest.swap_remove(slot);
            present += 1;
        }
    }

    (exact, present, exact == secret.len())
}
