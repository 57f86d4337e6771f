use crate::spec::Position;
use serde::{Deserialize, Serialize};

/// Status of one guessed letter against the secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterStatus {
    /// Right letter, right position
    Correct,
    /// Letter occurs elsewhere in the secret
    Present,
    /// Letter does not occur (or its occurrences are used up)
    Absent,
}

impl std::fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LetterStatus::Correct => write!(f, "correct"),
            LetterStatus::Present => write!(f, "present"),
            LetterStatus::Absent => write!(f, "absent"),
        }
    }
}

/// A rule a claimed path breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathFailure {
    /// A step left the grid
    OutOfBounds { pos: Position },
    /// A cell was visited more than once
    RepeatedVisit { pos: Position },
    /// The path does not cover every cell exactly once
    IncompleteCoverage { visited: usize, expected: usize },
    /// Two consecutive steps are not neighbors
    BrokenStep { from: Position, to: Position },
    /// Numbered cells were not reached as 1, 2, 3, ...
    NumberingViolation { expected: u32, found: u32 },
}

impl std::fmt::Display for PathFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathFailure::OutOfBounds { pos } => {
                write!(f, "position ({}, {}) is outside the grid", pos.row, pos.col)
            }
            PathFailure::RepeatedVisit { pos } => {
                write!(f, "cell ({}, {}) visited more than once", pos.row, pos.col)
            }
            PathFailure::IncompleteCoverage { visited, expected } => {
                write!(f, "path covers {} of {} cells", visited, expected)
            }
            PathFailure::BrokenStep { from, to } => write!(
                f,
                "({}, {}) to ({}, {}) is not an adjacent step",
                from.row, from.col, to.row, to.col
            ),
            PathFailure::NumberingViolation { expected, found } => {
                write!(f, "reached number {} while expecting {}", found, expected)
            }
        }
    }
}

/// Variant-specific feedback attached to a verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Feedback {
    /// No partial feedback for this puzzle kind
    None,
    /// Per-letter statuses, one per guess position
    Letters(Vec<LetterStatus>),
    /// Mastermind-style peg counts
    Pegs { exact: usize, present: usize },
    /// Per-cell pass/fail, row-major
    Cells(Vec<bool>),
    /// Every rule the claimed path breaks (empty when valid)
    Path(Vec<PathFailure>),
    /// The partition tag the selection matched, if any
    Group { tag: Option<String> },
}

/// The engine's answer for one player action. Freshly computed on every
/// call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub is_correct: bool,
    pub feedback: Feedback,
}

impl Verdict {
    pub fn new(is_correct: bool, feedback: Feedback) -> Self {
        Verdict {
            is_correct,
            feedback,
        }
    }

    /// A bare verdict with no partial feedback
    pub fn plain(is_correct: bool) -> Self {
        Verdict::new(is_correct, Feedback::None)
    }

    /// The defined failure for shape mismatches, missing collaborators
    /// and unparseable input: incorrect, no feedback
    pub fn rejected() -> Self {
        Verdict::plain(false)
    }
}
