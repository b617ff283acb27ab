use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;

use canonical::{tokenize, Normalizer};
use index::{IndexedEntry, Product, SearchIndex};

use crate::metrics::metrics_recorder;
use crate::similarity::is_similar;
use crate::types::{MatchConfig, MatchError, SearchFilters, SearchHit};


/// Query text and filters, normalized once per request.
struct PreparedQuery<'q> {
    normalized: String,
    tokens: Vec<String>,
    color: Option<String>,
    size: Option<String>,
    category: Option<&'q str>,
}

impl<'q> PreparedQuery<'q> {
    fn new(query: &str, filters: &'q SearchFilters, normalizer: &Normalizer) -> Self {
        let normalized = normalizer.normalize_text(query);
        let tokens = tokenize(&normalized).into_iter().map(str::to_string).collect();
        Self {
            normalized,
            tokens,
            color: present(&filters.color).map(|c| normalizer.normalize_color(c)),
            size: present(&filters.size).map(|s| normalizer.normalize_size(s)),
            category: present(&filters.category_id),
        }
    }
}

/// Blank filter values count as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Scores every indexed product against a query and ranks the results.
#[derive(Debug)]
pub struct Matcher {
    index: Arc<SearchIndex>,
    cfg: MatchConfig,
}

impl Matcher {
    /// Construct a matcher over a shared index handle.
    pub fn new(index: Arc<SearchIndex>, cfg: MatchConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        Ok(Self { index, cfg })
    }

    /// Matcher with the default scoring configuration.
    pub fn with_defaults(index: Arc<SearchIndex>) -> Self {
        Self {
            index,
            cfg: MatchConfig::default(),
        }
    }

    pub fn index(&self) -> &Arc<SearchIndex> {
        &self.index
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Ranked products for `query`, best first.
    pub fn search(&self, query: &str, filters: &SearchFilters) -> Vec<Product> {
        self.search_scored(query, filters)
            .into_iter()
            .map(|hit| hit.product)
            .collect()
    }

    /// Ranked products with their final scores.
    ///
    /// A blank query returns nothing; filters alone never produce results.
    pub fn search_scored(&self, query: &str, filters: &SearchFilters) -> Vec<SearchHit> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let start = Instant::now();
        let prepared = PreparedQuery::new(query, filters, self.index.normalizer());
        let max_results = filters.effective_max_results(&self.cfg);

        let (candidates, hits) = self.index.with_entries(|entries| {
            let mut candidates = 0usize;
            let mut scored: Vec<(f64, &IndexedEntry)> = Vec::new();
            for entry in entries {
                if !entry.is_searchable() {
                    continue;
                }
                candidates += 1;
                let score = self.score(entry, &prepared);
                if score > 0.0 {
                    scored.push((score, entry));
                }
            }

            // Equal scores keep encounter order, so output is deterministic.
            scored.sort_by(|(score_a, a), (score_b, b)| {
                score_b
                    .partial_cmp(score_a)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.sequence.cmp(&b.sequence))
            });
            scored.truncate(max_results);

            let hits: Vec<SearchHit> = scored
                .into_iter()
                .map(|(score, entry)| SearchHit {
                    product: entry.product.clone(),
                    score,
                })
                .collect();
            (candidates, hits)
        });

        let latency = start.elapsed();
        tracing::debug!(
            query_tokens = prepared.tokens.len(),
            candidates,
            hits = hits.len(),
            max_results,
            latency_us = latency.as_micros() as u64,
            "search completed"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_search(prepared.tokens.len(), latency, hits.len());
        }

        hits
    }

    fn score(&self, entry: &IndexedEntry, query: &PreparedQuery<'_>) -> f64 {
        let weights = &self.cfg.weights;
        let threshold = self.cfg.fuzzy_threshold;
        let name = entry.normalized_name.as_str();
        let mut score = 0.0;

        if name == query.normalized {
            score += weights.exact_name;
        }
        if name.contains(query.normalized.as_str()) {
            score += weights.name_contains_query;
        }

        for token in &query.tokens {
            if name.contains(token.as_str()) {
                score += weights.name_contains_token;
            }
            // Compared against the whole name, not its tokens.
            if is_similar(token, name, threshold) {
                score += weights.fuzzy_name;
            }
            if entry.normalized_description.contains(token.as_str()) {
                score += weights.description_contains_token;
            }
        }

        if let Some(color) = &query.color {
            if matches_any(&entry.normalized_colors, color, threshold) {
                score += weights.color_filter;
            }
        }
        if let Some(size) = &query.size {
            if matches_any(&entry.normalized_sizes, size, threshold) {
                score += weights.size_filter;
            }
        }
        if let Some(category) = query.category {
            if entry.product.category_id.as_deref() == Some(category) {
                score += weights.category_filter;
            }
        }

        if entry.is_featured() {
            score *= self.cfg.featured_boost;
        }
        score
    }
}

fn matches_any(keys: &[String], wanted: &str, threshold: usize) -> bool {
    keys.iter()
        .any(|key| key == wanted || is_similar(key, wanted, threshold))
}
