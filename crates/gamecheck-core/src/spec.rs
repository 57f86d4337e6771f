use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A cell position on a rectangular grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Flat index of this position on a grid with the given column count
    pub fn index(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }
}

/// Neighbor relation used by path puzzles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdjacencyMode {
    /// Orthogonal neighbors only
    FourWay,
    /// Orthogonal and diagonal neighbors
    EightWay,
}

impl AdjacencyMode {
    /// Whether two distinct positions are neighbors under this mode
    pub fn adjacent(&self, a: Position, b: Position) -> bool {
        let dr = a.row.abs_diff(b.row);
        let dc = a.col.abs_diff(b.col);
        match self {
            AdjacencyMode::FourWay => dr + dc == 1,
            AdjacencyMode::EightWay => dr <= 1 && dc <= 1 && (dr, dc) != (0, 0),
        }
    }
}

/// A numbered cell a path must reach in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waypoint {
    pub pos: Position,
    pub number: u32,
}

/// A cell pre-filled by the puzzle, immutable to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Given {
    /// Flat index into the grid
    pub index: usize,
    pub value: u32,
}

/// A pairwise ordering constraint between two cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inequality {
    /// Flat index of the cell holding the smaller value
    pub lesser: usize,
    /// Flat index of the cell holding the larger value
    pub greater: usize,
}

/// Which constraint family a numeric grid is judged against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridRule {
    /// Rows, columns and both diagonals sum to a magic constant,
    /// and the filled values are exactly 1..=N*N
    MagicSums { target: u32 },
    /// Pairwise less-than relations, with values 1..=N distinct per
    /// row and per column
    Inequalities { relations: Vec<Inequality> },
    /// Cellwise equality against a known solution; a 0 in the
    /// solution means any value is accepted there
    Solution { cells: Vec<u32> },
}

/// An N x N numeric grid puzzle, stored flattened row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub size: usize,
    pub givens: Vec<Given>,
    pub rule: GridRule,
}

/// A puzzle, as delivered by content storage. Carries exactly the data
/// needed to judge correctness; targets are assumed internally valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PuzzleSpec {
    /// Guess a secret word; per-letter feedback
    Word { secret: String },
    /// Guess a secret symbol sequence; exact/present peg feedback
    Code { secret: Vec<String> },
    /// Arrange items into one exact order
    Sequence { solution: Vec<u32> },
    /// Trace every cell of a grid, hitting numbered cells in order
    Path {
        rows: usize,
        cols: usize,
        waypoints: Vec<Waypoint>,
        adjacency: AdjacencyMode,
    },
    /// Fill a numeric grid subject to a constraint rule
    Grid(GridSpec),
    /// Bridge a start word to an end word, one letter at a time
    Chain { start: String, end: String },
    /// Pick the items that form one partition of the catalog
    Group {
        catalog: HashMap<String, String>,
        group_size: usize,
    },
    /// Answer a restricted arithmetic expression
    Arithmetic { expression: String },
    /// Rearrange letters into the target word
    Anagram { target: String },
}

impl PuzzleSpec {
    /// Short name of the puzzle kind, for logs and CLI output
    pub fn kind_name(&self) -> &'static str {
        match self {
            PuzzleSpec::Word { .. } => "word",
            PuzzleSpec::Code { .. } => "code",
            PuzzleSpec::Sequence { .. } => "sequence",
            PuzzleSpec::Path { .. } => "path",
            PuzzleSpec::Grid(_) => "grid",
            PuzzleSpec::Chain { .. } => "chain",
            PuzzleSpec::Group { .. } => "group",
            PuzzleSpec::Arithmetic { .. } => "arithmetic",
            PuzzleSpec::Anagram { .. } => "anagram",
        }
    }
}

/// The player's candidate answer, rebuilt on every action. Its variant
/// must match the shape the spec expects; a mismatch is judged
/// incorrect rather than treated as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerInput {
    /// A typed word (Word, Anagram)
    Text(String),
    /// An ordered symbol sequence (Code)
    Symbols(Vec<String>),
    /// An arrangement of item indices (Sequence)
    Order(Vec<u32>),
    /// An ordered list of visited cells (Path)
    Trail(Vec<Position>),
    /// A flattened grid, 0 for empty cells (Grid)
    Cells(Vec<u32>),
    /// Intermediate words of a chain, in order (Chain)
    Words(Vec<String>),
    /// Selected item identifiers (Group)
    Selection(Vec<String>),
    /// A numeric answer (Arithmetic)
    Number(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_four_way() {
        let mode = AdjacencyMode::FourWay;
        let p = Position::new(1, 1);
        assert!(mode.adjacent(p, Position::new(0, 1)));
        assert!(mode.adjacent(p, Position::new(1, 2)));
        assert!(!mode.adjacent(p, Position::new(0, 0)));
        assert!(!mode.adjacent(p, p));
    }

    #[test]
    fn test_adjacency_eight_way() {
        let mode = AdjacencyMode::EightWay;
        let p = Position::new(1, 1);
        assert!(mode.adjacent(p, Position::new(0, 0)));
        assert!(mode.adjacent(p, Position::new(2, 2)));
        assert!(!mode.adjacent(p, Position::new(1, 3)));
        assert!(!mode.adjacent(p, p));
    }

    #[test]
    fn test_position_index() {
        assert_eq!(Position::new(0, 0).index(4), 0);
        assert_eq!(Position::new(2, 3).index(4), 11);
    }

    #[test]
    fn test_spec_round_trip() {
        let spec = PuzzleSpec::Grid(GridSpec {
            size: 3,
            givens: vec![Given { index: 4, value: 5 }],
            rule: GridRule::MagicSums { target: 15 },
        });
        let json = serde_json::to_string(&spec).unwrap();
        let back: PuzzleSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, back);
    }

    #[test]
    fn test_input_round_trip() {
        let input = PlayerInput::Trail(vec![Position::new(0, 0), Position::new(0, 1)]);
        let json = serde_json::to_string(&input).unwrap();
        let back: PlayerInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, back);
    }
}
