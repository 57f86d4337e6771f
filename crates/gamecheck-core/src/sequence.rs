/// Whether an arrangement matches the solution order exactly.
///
/// Used by placement puzzles with a single canonical order; slices of
/// different lengths never match.
pub fn sequence_check(arrangement: &[u32], solution: &[u32]) -> bool {
    arrangement.len() == solution.len()
        && arrangement.iter().zip(solution.iter()).all(|(a, s)| a == s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_order_matches() {
        assert!(sequence_check(&[2, 0, 1], &[2, 0, 1]));
    }

    #[test]
    fn test_wrong_order_rejected() {
        assert!(!sequence_check(&[0, 1, 2], &[2, 0, 1]));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert!(!sequence_check(&[2, 0], &[2, 0, 1]));
        assert!(!sequence_check(&[2, 0, 1, 3], &[2, 0, 1]));
    }

    #[test]
    fn test_empty_matches_empty() {
        assert!(sequence_check(&[], &[]));
    }
}
