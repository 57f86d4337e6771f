use crate::arith;
use crate::chain::{chain_check, Dictionary};
use crate::code::code_feedback;
use crate::grid::grid_feedback;
use crate::group::group_match;
use crate::path::path_diagnose;
use crate::sequence::sequence_check;
use crate::spec::{PlayerInput, PuzzleSpec};
use crate::verdict::{Feedback, Verdict};
use crate::word::{anagram_check, word_feedback};

/// Tolerance when grading numeric answers; absorbs float division.
const ANSWER_EPSILON: f64 = 1e-9;

/// Single dispatch point for all puzzle kinds.
///
/// Holds the one collaborator the engine consumes, the word-list
/// membership predicate used by chain puzzles. Everything else is
/// judged purely from the spec and input.
#[derive(Default)]
pub struct Validator {
    dictionary: Option<Box<dyn Dictionary + Send + Sync>>,
}

impl Validator {
    pub fn new() -> Self {
        Validator { dictionary: None }
    }

    /// Attach the accepted-word set used by chain puzzles
    pub fn with_dictionary(dictionary: impl Dictionary + Send + Sync + 'static) -> Self {
        Validator {
            dictionary: Some(Box::new(dictionary)),
        }
    }

    /// Judge the player's input against the puzzle spec.
    ///
    /// Called once per relevant player action; always returns a fresh
    /// verdict. An input whose shape does not match the spec's kind, a
    /// chain puzzle with no dictionary attached, and an unparseable
    /// arithmetic target all come back as [`Verdict::rejected`] rather
    /// than panicking, since specs arrive from an external content
    /// source.
    pub fn evaluate(&self, spec: &PuzzleSpec, input: &PlayerInput) -> Verdict {
        match spec {
            PuzzleSpec::Word { secret } => match input {
                PlayerInput::Text(guess) => {
                    let (status, correct) = word_feedback(guess, secret);
                    if status.is_empty() {
                        return Verdict::rejected();
                    }
                    Verdict::new(correct, Feedback::Letters(status))
                }
                _ => Verdict::rejected(),
            },
            PuzzleSpec::Code { secret } => match input {
                PlayerInput::Symbols(guess) => {
                    if guess.len() != secret.len() {
                        return Verdict::rejected();
                    }
                    let (exact, present, correct) = code_feedback(guess, secret);
                    Verdict::new(correct, Feedback::Pegs { exact, present })
                }
                _ => Verdict::rejected(),
            },
            PuzzleSpec::Sequence { solution } => match input {
                PlayerInput::Order(arrangement) => {
                    Verdict::plain(sequence_check(arrangement, solution))
                }
                _ => Verdict::rejected(),
            },
            PuzzleSpec::Path {
                rows,
                cols,
                waypoints,
                adjacency,
            } => match input {
                PlayerInput::Trail(path) => {
                    let failures = path_diagnose(path, *rows, *cols, waypoints, *adjacency);
                    Verdict::new(failures.is_empty(), Feedback::Path(failures))
                }
                _ => Verdict::rejected(),
            },
            PuzzleSpec::Grid(grid) => match input {
                PlayerInput::Cells(cells) => {
                    let (correct, flags) = grid_feedback(grid, cells);
                    if flags.is_empty() {
                        return Verdict::rejected();
                    }
                    Verdict::new(correct, Feedback::Cells(flags))
                }
                _ => Verdict::rejected(),
            },
            PuzzleSpec::Chain { start, end } => match (input, &self.dictionary) {
                (PlayerInput::Words(words), Some(dictionary)) => {
                    Verdict::plain(chain_check(start, end, words, dictionary.as_ref()))
                }
                _ => Verdict::rejected(),
            },
            PuzzleSpec::Group {
                catalog,
                group_size,
            } => match input {
                PlayerInput::Selection(ids) => {
                    let tag = group_match(ids, catalog, *group_size);
                    Verdict::new(tag.is_some(), Feedback::Group { tag })
                }
                _ => Verdict::rejected(),
            },
            PuzzleSpec::Arithmetic { expression } => match input {
                PlayerInput::Number(answer) => match arith::eval(expression) {
                    Some(value) => Verdict::plain((value - answer).abs() < ANSWER_EPSILON),
                    None => Verdict::rejected(),
                },
                _ => Verdict::rejected(),
            },
            PuzzleSpec::Anagram { target } => match input {
                PlayerInput::Text(text) => Verdict::plain(anagram_check(text, target)),
                _ => Verdict::rejected(),
            },
        }
    }
}
