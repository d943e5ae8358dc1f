use std::collections::HashMap;

/// Insertion-ordered occurrence counter.
///
/// Sorting the result is stable, so entries with equal counts keep the order
/// in which they were first seen.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    index: HashMap<String, usize>,
    entries: Vec<(String, u32)>,
}

impl Tally {
    pub(crate) fn add(&mut self, key: String) {
        if let Some(&i) = self.index.get(&key) {
            self.entries[i].1 = self.entries[i].1.saturating_add(1);
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, 1));
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Consumes the tally, returning entries sorted by count, highest first.
    pub(crate) fn into_sorted_desc(self) -> Vec<(String, u32)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_sorts_descending() {
        let mut tally = Tally::default();
        for key in ["a", "b", "b", "c", "b", "c"] {
            tally.add(key.to_string());
        }
        assert_eq!(tally.len(), 3);
        assert_eq!(
            tally.into_sorted_desc(),
            vec![
                ("b".to_string(), 3),
                ("c".to_string(), 2),
                ("a".to_string(), 1)
            ]
        );
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let mut tally = Tally::default();
        for key in ["z", "y", "x", "y", "z", "x"] {
            tally.add(key.to_string());
        }
        let keys: Vec<String> = tally.into_sorted_desc().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "y", "x"]);
    }

    #[test]
    fn empty_tally_is_empty() {
        assert!(Tally::default().into_sorted_desc().is_empty());
    }
}
