// Stable duplicate removal.

use std::collections::HashSet;
use std::hash::Hash;

/// Keep the first occurrence of each distinct value, in order.
///
/// Pure and idempotent: `dedup(dedup(x)) == dedup(x)`.
pub fn dedup<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;

    #[test]
    fn keeps_first_occurrence_order() {
        assert_eq!(dedup(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let out: Vec<i32> = dedup(Vec::new());
        assert!(out.is_empty());
    }

    #[test]
    fn idempotent() {
        let inputs = [
            vec!["a", "b", "a", "c", "b"],
            vec!["x"],
            vec!["y", "y", "y"],
            vec![],
        ];
        for input in inputs {
            let once = dedup(input.clone());
            let twice = dedup(once.clone());
            assert_eq!(once, twice, "dedup not idempotent for {:?}", input);
        }
    }

    #[test]
    fn result_has_no_repeats() {
        let out = dedup(vec![5, 5, 4, 4, 3, 5, 4]);
        let unique: HashSet<_> = out.iter().collect();
        assert_eq!(unique.len(), out.len());
    }

    #[test]
    fn entries_compare_by_value_and_kind() {
        let out = dedup(vec![
            Entry::Number(1),
            Entry::text("1"),
            Entry::Number(1),
            Entry::text("1"),
        ]);
        assert_eq!(out, vec![Entry::Number(1), Entry::text("1")]);
    }
}
