use crate::spec::{AdjacencyMode, Position, Waypoint};
use crate::verdict::PathFailure;
use std::collections::HashMap;

/// Whether a claimed traversal is valid: covers every cell exactly
/// once, moves only between neighbors under the given mode, and meets
/// numbered cells as 1, 2, 3, ... with no gaps.
///
/// Stops at the first violated rule; use [`path_diagnose`] when the
/// caller wants every violation.
pub fn path_check(
    path: &[Position],
    rows: usize,
    cols: usize,
    waypoints: &[Waypoint],
    adjacency: AdjacencyMode,
) -> bool {
    if path.len() != rows * cols {
        return false;
    }

    let mut seen = vec![false; rows * cols];
    for pos in path {
        if pos.row >= rows || pos.col >= cols {
            return false;
        }
        let idx = pos.index(cols);
        if seen[idx] {
            return false;
        }
        seen[idx] = true;
    }

    for pair in path.windows(2) {
        if !adjacency.adjacent(pair[0], pair[1]) {
            return false;
        }
    }

    let numbers = number_map(waypoints, cols);
    let mut expected = 1;
    for pos in path {
        if let Some(&n) = numbers.get(&pos.index(cols)) {
            if n != expected {
                return false;
            }
            expected += 1;
        }
    }
    expected == waypoints.len() as u32 + 1
}

/// Every rule the claimed traversal breaks, in check order. An empty
/// result means the path is valid. Unlike [`path_check`] this does not
/// stop at the first violation, so the UI can report all of them.
pub fn path_diagnose(
    path: &[Position],
    rows: usize,
    cols: usize,
    waypoints: &[Waypoint],
    adjacency: AdjacencyMode,
) -> Vec<PathFailure> {
    let mut failures = Vec::new();

    let mut seen = vec![false; rows * cols];
    let mut visited = 0;
    for pos in path {
        if pos.row >= rows || pos.col >= cols {
            failures.push(PathFailure::OutOfBounds { pos: *pos });
            continue;
        }
        let idx = pos.index(cols);
        if seen[idx] {
            failures.push(PathFailure::RepeatedVisit { pos: *pos });
        } else {
            seen[idx] = true;
            visited += 1;
        }
    }
    if visited != rows * cols {
        failures.push(PathFailure::IncompleteCoverage {
            visited,
            expected: rows * cols,
        });
    }

    for pair in path.windows(2) {
        if !adjacency.adjacent(pair[0], pair[1]) {
            failures.push(PathFailure::BrokenStep {
                from: pair[0],
                to: pair[1],
            });
        }
    }

    let numbers = number_map(waypoints, cols);
    let mut expected = 1;
    for pos in path {
        if pos.row >= rows || pos.col >= cols {
            continue;
        }
        if let Some(&n) = numbers.get(&pos.index(cols)) {
            if n != expected {
                failures.push(PathFailure::NumberingViolation {
                    expected,
                    found: n,
                });
            }
            expected = n.max(expected) + 1;
        }
    }

    failures
}

fn number_map(waypoints: &[Waypoint], cols: usize) -> HashMap<usize, u32> {
    waypoints
        .iter()
        .map(|w| (w.pos.index(cols), w.number))
        .collect()
}
