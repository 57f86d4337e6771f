//! Verification engine for the daily mini-games.
//!
//! Every puzzle kind the app ships reduces to a pure check: given the
//! puzzle's spec (from content storage) and the player's current input,
//! decide correctness and, where the UI wants it, produce per-element
//! feedback. Nothing here performs I/O, reads the clock, or keeps state
//! between calls, so the UI layer can invoke these checks on every
//! keystroke or cell placement.

mod arith;
mod chain;
mod code;
mod grid;
mod group;
mod path;
mod sequence;
mod spec;
mod validate;
mod verdict;
mod word;

pub use arith::eval;
pub use chain::{chain_check, one_letter_apart, Dictionary};
pub use code::code_feedback;
pub use grid::{grid_check, grid_feedback};
pub use group::group_match;
pub use path::{path_check, path_diagnose};
pub use sequence::sequence_check;
pub use spec::{
    AdjacencyMode, Given, GridRule, GridSpec, Inequality, PlayerInput, Position, PuzzleSpec,
    Waypoint,
};
pub use validate::Validator;
pub use verdict::{Feedback, LetterStatus, PathFailure, Verdict};
pub use word::{anagram_check, normalize, word_feedback};
