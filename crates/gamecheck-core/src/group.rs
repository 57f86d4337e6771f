use std::collections::{HashMap, HashSet};

/// Resolve a selection of item ids against the catalog's partitions.
///
/// Returns the shared partition tag iff the selection has exactly the
/// required size, contains no duplicates, and every selected id maps to
/// the same tag. Unknown ids, mixed tags, or a zero required size all
/// yield `None`.
pub fn group_match(
    selection: &[String],
    catalog: &HashMap<String, String>,
    group_size: usize,
) -> Option<String> {
    if group_size == 0 || selection.len() != group_size {
        return None;
    }

    let mut seen = HashSet::new();
    let mut shared: Option<&String> = None;
    for id in selection {
        if !seen.insert(id) {
            return None;
        }
        let tag = catalog.get(id)?;
        match shared {
            None => shared = Some(tag),
            Some(t) if t != tag => return None,
            Some(_) => {}
        }
    }
    shared.cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> HashMap<String, String> {
        [
            ("lion", "animals"),
            ("tiger", "animals"),
            ("bear", "animals"),
            ("oak", "trees"),
            ("elm", "trees"),
            ("ash", "trees"),
        ]
        .iter()
        .map(|(id, tag)| (id.to_string(), tag.to_string()))
        .collect()
    }

    fn pick(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_group_matches() {
        let tag = group_match(&pick(&["lion", "tiger", "bear"]), &catalog(), 3);
        assert_eq!(tag.as_deref(), Some("animals"));
    }

    #[test]
    fn test_mixed_tags_rejected() {
        assert_eq!(group_match(&pick(&["lion", "oak", "elm"]), &catalog(), 3), None);
    }

    #[test]
    fn test_wrong_size_rejected() {
        assert_eq!(group_match(&pick(&["lion", "tiger"]), &catalog(), 3), None);
        assert_eq!(
            group_match(&pick(&["oak", "elm", "ash"]), &catalog(), 4),
            None
        );
    }

    #[test]
    fn test_unknown_id_rejected() {
        assert_eq!(
            group_match(&pick(&["lion", "tiger", "griffin"]), &catalog(), 3),
            None
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        assert_eq!(
            group_match(&pick(&["lion", "lion", "tiger"]), &catalog(), 3),
            None
        );
    }
}
