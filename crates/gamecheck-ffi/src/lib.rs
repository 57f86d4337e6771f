use gamecheck_core::{
    code_feedback as core_code_feedback, eval, normalize, word_feedback as core_word_feedback,
    Feedback, PlayerInput, PuzzleSpec, Validator, Verdict,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

uniffi::setup_scaffolding!();

/// Status of one guessed letter, for keyboard and tile coloring
#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum LetterMark {
    Correct,
    Present,
    Absent,
}

impl From<gamecheck_core::LetterStatus> for LetterMark {
    fn from(status: gamecheck_core::LetterStatus) -> Self {
        match status {
            gamecheck_core::LetterStatus::Correct => LetterMark::Correct,
            gamecheck_core::LetterStatus::Present => LetterMark::Present,
            gamecheck_core::LetterStatus::Absent => LetterMark::Absent,
        }
    }
}

/// Flattened verdict for mobile callers. Only the fields matching the
/// puzzle kind are populated; the rest stay empty.
#[derive(Debug, Clone, uniffi::Record)]
pub struct PuzzleVerdict {
    /// Whether the input solves the puzzle
    pub is_correct: bool,
    /// Per-letter statuses (word puzzles)
    pub letters: Vec<LetterMark>,
    /// Whether peg counts apply (code puzzles)
    pub has_pegs: bool,
    /// Right symbol, right position
    pub exact_pegs: u32,
    /// Right symbol, wrong position
    pub present_pegs: u32,
    /// Per-cell pass/fail, row-major (grid puzzles)
    pub cells: Vec<bool>,
    /// Human-readable path violations (path puzzles)
    pub path_failures: Vec<String>,
    /// Matched partition tag (group puzzles)
    pub group_tag: Option<String>,
}

impl PuzzleVerdict {
    fn rejected() -> Self {
        Verdict::rejected().into()
    }
}

impl From<Verdict> for PuzzleVerdict {
    fn from(verdict: Verdict) -> Self {
        let mut out = PuzzleVerdict {
            is_correct: verdict.is_correct,
            letters: Vec::new(),
            has_pegs: false,
            exact_pegs: 0,
            present_pegs: 0,
            cells: Vec::new(),
            path_failures: Vec::new(),
            group_tag: None,
        };
        match verdict.feedback {
            Feedback::None => {}
            Feedback::Letters(statuses) => {
                out.letters = statuses.into_iter().map(LetterMark::from).collect();
            }
            Feedback::Pegs { exact, present } => {
                out.has_pegs = true;
                out.exact_pegs = exact as u32;
                out.present_pegs = present as u32;
            }
            Feedback::Cells(flags) => out.cells = flags,
            Feedback::Path(failures) => {
                out.path_failures = failures.iter().map(|f| f.to_string()).collect();
            }
            Feedback::Group { tag } => out.group_tag = tag,
        }
        out
    }
}

/// The verification entry point for the mobile app.
///
/// Holds the accepted-word set for chain puzzles; everything else is
/// judged statelessly from the JSON payloads the app fetched from
/// content storage.
#[derive(uniffi::Object)]
pub struct PuzzleJudge {
    validator: Mutex<Validator>,
}

#[uniffi::export]
impl PuzzleJudge {
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            validator: Mutex::new(Validator::new()),
        })
    }

    /// Replace the accepted-word set used by chain puzzles
    pub fn set_dictionary(&self, words: Vec<String>) {
        // Canonicalize the same way the engine normalizes lookups
        let dictionary: HashSet<String> = words.iter().map(|w| normalize(w)).collect();
        *self.validator.lock().unwrap() = Validator::with_dictionary(dictionary);
    }

    /// Judge a spec/input pair, both as the JSON stored in the puzzle
    /// documents. Malformed JSON comes back as an incorrect verdict
    /// with no feedback, never a crash.
    pub fn evaluate_json(&self, spec_json: String, input_json: String) -> PuzzleVerdict {
        let spec: PuzzleSpec = match serde_json::from_str(&spec_json) {
            Ok(spec) => spec,
            Err(_) => return PuzzleVerdict::rejected(),
        };
        let input: PlayerInput = match serde_json::from_str(&input_json) {
            Ok(input) => input,
            Err(_) => return PuzzleVerdict::rejected(),
        };
        self.validator.lock().unwrap().evaluate(&spec, &input).into()
    }
}

/// Score a word guess directly; the hot path for per-keystroke tiles
#[uniffi::export]
pub fn word_feedback(guess: String, secret: String) -> PuzzleVerdict {
    let (statuses, is_correct) = core_word_feedback(&guess, &secret);
    if statuses.is_empty() {
        return PuzzleVerdict::rejected();
    }
    Verdict::new(is_correct, Feedback::Letters(statuses)).into()
}

/// Score a code guess directly
#[uniffi::export]
pub fn code_feedback(guess: Vec<String>, secret: Vec<String>) -> PuzzleVerdict {
    if guess.len() != secret.len() {
        return PuzzleVerdict::rejected();
    }
    let (exact, present, is_correct) = core_code_feedback(&guess, &secret);
    Verdict::new(is_correct, Feedback::Pegs { exact, present }).into()
}

/// Evaluate a quick-math expression; `None` when it does not parse or
/// divides by zero
#[uniffi::export]
pub fn arith_eval(expression: String) -> Option<f64> {
    eval(&expression)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_json_word() {
        let judge = PuzzleJudge::new();
        let verdict = judge.evaluate_json(
            r#"{"Word":{"secret":"CRANE"}}"#.to_string(),
            r#"{"Text":"CRANE"}"#.to_string(),
        );
        assert!(verdict.is_correct);
        assert_eq!(verdict.letters.len(), 5);
    }

    #[test]
    fn test_evaluate_json_malformed() {
        let judge = PuzzleJudge::new();
        let verdict = judge.evaluate_json("not json".to_string(), r#"{"Text":"A"}"#.to_string());
        assert!(!verdict.is_correct);
        assert!(verdict.letters.is_empty());
    }

    #[test]
    fn test_chain_via_dictionary() {
        let judge = PuzzleJudge::new();
        judge.set_dictionary(vec!["CORD".into(), "CARD".into(), "WARD".into()]);
        let verdict = judge.evaluate_json(
            r#"{"Chain":{"start":"COLD","end":"WARM"}}"#.to_string(),
            r#"{"Words":["CORD","CARD","WARD"]}"#.to_string(),
        );
        assert!(verdict.is_correct);
    }

    #[test]
    fn test_dictionary_canonicalized_like_lookups() {
        // Messy casing and padding in the word list must still match
        // the normalized chain words
        let judge = PuzzleJudge::new();
        judge.set_dictionary(vec![" cord ".into(), "Card".into(), "warD".into()]);
        let verdict = judge.evaluate_json(
            r#"{"Chain":{"start":"COLD","end":"WARM"}}"#.to_string(),
            r#"{"Words":["CORD","CARD","WARD"]}"#.to_string(),
        );
        assert!(verdict.is_correct);
    }

    #[test]
    fn test_direct_code_feedback() {
        let verdict = code_feedback(
            vec!["red".into(), "green".into(), "blue".into(), "yellow".into()],
            vec!["red".into(), "blue".into(), "green".into(), "yellow".into()],
        );
        assert!(verdict.has_pegs);
        assert_eq!((verdict.exact_pegs, verdict.present_pegs), (2, 2));
        assert!(!verdict.is_correct);
    }

    #[test]
    fn test_arith_eval_export() {
        assert_eq!(arith_eval("12 / 4 * 3".to_string()), Some(9.0));
        assert_eq!(arith_eval("5 / 0".to_string()), None);
    }
}
