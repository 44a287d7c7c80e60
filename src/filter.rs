//! Fuzzy filter index over item filter keys.
//!
//! Pure: the index caches the keys once, and `visible()` maps a query to
//! the ranked set of matching item indices. No terminal, no state.

use frizbee::{Config, match_list};

use crate::item::InfoItem;

// ============================================================================
// FILTER INDEX
// ============================================================================

/// Cached filter keys for a slice of items.
#[derive(Debug, Clone)]
pub struct FilterIndex {
    keys: Vec<String>,
}

impl FilterIndex {
    /// Collect filter keys from the caller's items, in order.
    pub fn new<I: InfoItem>(items: &[I]) -> Self {
        FilterIndex {
            keys: items.iter().map(|item| item.filter_key()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Item indices visible under `query`, best match first.
    ///
    /// An empty query shows everything in original order. Otherwise the
    /// keys are fuzzy matched; zero-score entries are dropped and the rest
    /// sorted by score descending, ties broken by original position.
    pub fn visible(&self, query: &str) -> Vec<usize> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return (0..self.keys.len()).collect();
        }

        // Strict matching: a picker filter should narrow the set, so no
        // typo tolerance.
        let config = Config {
            max_typos: Some(0),
            sort: false,
            ..Config::default()
        };

        let mut scored: Vec<(u16, usize)> = match_list(trimmed, &self.keys, &config)
            .into_iter()
            .filter(|entry| entry.score > 0)
            .map(|entry| (entry.score, entry.index as usize))
            .collect();
        scored.sort_unstable_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        scored.into_iter().map(|(_, index)| index).collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::StringItem;

    fn index_of(names: &[&str]) -> FilterIndex {
        let items: Vec<StringItem> = names.iter().map(|n| StringItem::from(*n)).collect();
        FilterIndex::new(&items)
    }

    #[test]
    fn empty_query_shows_everything_in_order() {
        let index = index_of(&["alpha", "beta", "gamma"]);
        assert_eq!(index.visible(""), vec![0, 1, 2]);
        assert_eq!(index.visible("   "), vec![0, 1, 2]);
    }

    #[test]
    fn query_narrows_to_matching_items() {
        let index = index_of(&["alpha", "beta", "gamma"]);
        assert_eq!(index.visible("be"), vec![1]);
    }

    #[test]
    fn unmatched_query_yields_empty_set() {
        let index = index_of(&["alpha", "beta", "gamma"]);
        assert!(index.visible("zzz").is_empty());
    }

    #[test]
    fn prefix_match_outranks_scattered_match() {
        // "ga" appears contiguously at the start of "gamma" but only as a
        // scattered subsequence in "grand-alpha".
        let index = index_of(&["grand-alpha", "gamma"]);
        let visible = index.visible("gam");
        assert_eq!(visible.first(), Some(&1));
    }

    #[test]
    fn empty_index_is_empty_for_any_query() {
        let index = index_of(&[]);
        assert!(index.is_empty());
        assert!(index.visible("").is_empty());
        assert!(index.visible("a").is_empty());
    }

    #[test]
    fn len_reports_item_count() {
        let index = index_of(&["a", "b"]);
        assert_eq!(index.len(), 2);
    }
}
