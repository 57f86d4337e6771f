use crate::spec::{GridRule, GridSpec};

/// Whether a flattened player grid satisfies its spec.
pub fn grid_check(spec: &GridSpec, cells: &[u32]) -> bool {
    grid_feedback(spec, cells).0
}

/// Judge a flattened row-major player grid against its spec, returning
/// overall correctness plus a per-cell pass/fail map.
///
/// A cell fails when it is empty (0), contradicts a given, falls
/// outside the rule's value range, repeats where values must be
/// distinct, sits on a line whose sum misses the target, or disagrees
/// with the solution cell. A grid whose length does not match the
/// declared size is rejected outright with no per-cell map, as is a
/// spec carrying malformed rule data (a wrong-length solution or a
/// relation pointing outside the grid).
pub fn grid_feedback(spec: &GridSpec, cells: &[u32]) -> (bool, Vec<bool>) {
    let n = spec.size;
    let total = n * n;
    if cells.len() != total {
        return (false, Vec::new());
    }

    let mut ok = vec![true; total];

    // completeness
    for (i, &v) in cells.iter().enumerate() {
        if v == 0 {
            ok[i] = false;
        }
    }

    // given-cell fidelity
    for given in &spec.givens {
        if given.index < total && cells[given.index] != given.value {
            ok[given.index] = false;
        }
    }

    match &spec.rule {
        GridRule::MagicSums { target } => {
            mark_range_and_duplicates(cells, total as u32, &mut ok);
            for r in 0..n {
                mark_line_sum(cells, &mut ok, *target, (0..n).map(|c| r * n + c));
            }
            for c in 0..n {
                mark_line_sum(cells, &mut ok, *target, (0..n).map(|r| r * n + c));
            }
            mark_line_sum(cells, &mut ok, *target, (0..n).map(|i| i * n + i));
            mark_line_sum(cells, &mut ok, *target, (0..n).map(|i| i * n + (n - 1 - i)));
        }
        GridRule::Inequalities { relations } => {
            mark_range_and_duplicates_per_line(cells, n, &mut ok);
            for rel in relations {
                // A relation pointing outside the grid is malformed
                // content; reject outright rather than let it pass
                if rel.lesser >= total || rel.greater >= total {
                    return (false, Vec::new());
                }
                let (lo, hi) = (cells[rel.lesser], cells[rel.greater]);
                if lo != 0 && hi != 0 && lo >= hi {
                    ok[rel.lesser] = false;
                    ok[rel.greater] = false;
                }
            }
        }
        GridRule::Solution { cells: solution } => {
            if solution.len() != total {
                return (false, Vec::new());
            }
            for i in 0..total {
                // 0 in the solution accepts any value
                if solution[i] != 0 && cells[i] != solution[i] {
                    ok[i] = false;
                }
            }
        }
    }

    (ok.iter().all(|&c| c), ok)
}

/// Mark cells outside 1..=max or holding a value that appears more
/// than once anywhere in the grid.
fn mark_range_and_duplicates(cells: &[u32], max: u32, ok: &mut [bool]) {
    let mut counts = vec![0usize; max as usize + 1];
    for &v in cells {
        if (1..=max).contains(&v) {
            counts[v as usize] += 1;
        }
    }
    for (i, &v) in cells.iter().enumerate() {
        if v == 0 {
            continue;
        }
        if v > max || counts[v as usize] > 1 {
            ok[i] = false;
        }
    }
}

/// Mark cells outside 1..=n or repeating a value within their row or
/// column (Latin-square discipline for inequality grids).
fn mark_range_and_duplicates_per_line(cells: &[u32], n: usize, ok: &mut [bool]) {
    for (i, &v) in cells.iter().enumerate() {
        if v > n as u32 {
            ok[i] = false;
        }
    }
    for r in 0..n {
        mark_line_duplicates(cells, ok, (0..n).map(|c| r * n + c));
    }
    for c in 0..n {
        mark_line_duplicates(cells, ok, (0..n).map(|r| r * n + c));
    }
}

fn mark_line_duplicates(cells: &[u32], ok: &mut [bool], line: impl Iterator<Item = usize>) {
    let indices: Vec<usize> = line.collect();
    for (a, &i) in indices.iter().enumerate() {
        if cells[i] == 0 {
            continue;
        }
        for &j in &indices[a + 1..] {
            if cells[j] == cells[i] {
                ok[i] = false;
                ok[j] = false;
            }
        }
    }
}

fn mark_line_sum(cells: &[u32], ok: &mut [bool], target: u32, line: impl Iterator<Item = usize>) {
    let indices: Vec<usize> = line.collect();
    // Wide accumulation: player cells can hold arbitrary u32 values
    let sum: u64 = indices.iter().map(|&i| cells[i] as u64).sum();
    if sum != target as u64 {
        for &i in &indices {
            ok[i] = false;
        }
    }
}
