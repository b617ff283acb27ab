use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

use crate::config::TokenRetention;

/// Ordered autocomplete vocabulary.
///
/// Kept sorted so a prefix lookup is a range scan. Every token carries the
/// number of live entries that contributed it; under
/// [`TokenRetention::Monotonic`] the count is never decremented.
#[derive(Debug, Default)]
pub(crate) struct TokenSet {
    counts: BTreeMap<String, usize>,
    retention: TokenRetention,
}

impl TokenSet {
    pub(crate) fn new(retention: TokenRetention) -> Self {
        Self {
            counts: BTreeMap::new(),
            retention,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.counts.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.counts.len()
    }

    /// Register the distinct tokens of one entry.
    pub(crate) fn add(&mut self, tokens: &BTreeSet<&str>) {
        for token in tokens {
            match self.counts.get_mut(*token) {
                Some(count) => *count += 1,
                None => {
                    self.counts.insert((*token).to_string(), 1);
                }
            }
        }
    }

    /// Withdraw the distinct tokens of one entry. No-op under monotonic
    /// retention.
    pub(crate) fn retract(&mut self, tokens: &BTreeSet<&str>) {
        if self.retention == TokenRetention::Monotonic {
            return;
        }
        for token in tokens {
            if let Some(count) = self.counts.get_mut(*token) {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(*token);
                }
            }
        }
    }

    /// Up to `limit` tokens starting with `prefix`, in lexicographic order.
    pub(crate) fn with_prefix(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.counts
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .map(|(token, _)| token)
            .take_while(|token| token.starts_with(prefix))
            .take(limit)
            .cloned()
            .collect()
    }
}
