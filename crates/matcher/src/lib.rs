//! # Catalog Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` answers free-text product queries over a [`index::SearchIndex`].
//! Every searchable entry is scored against the normalized query; positive
//! scores are ranked, capped, and returned best first.
//!
//! ## Scoring
//!
//! Contributions are additive and configured through [`ScoreWeights`]:
//!
//! | Signal | Default |
//! |--------|---------|
//! | normalized name equals the query | 1000 |
//! | name contains the whole query | 500 |
//! | per token: name contains the token | 100 |
//! | per token: token within edit distance 2 of the whole name | 50 |
//! | per token: description contains the token | 30 |
//! | color filter matches a product color | 150 |
//! | size filter matches a product size | 100 |
//! | category filter equals the raw category id | 200 |
//!
//! Featured products have their total multiplied by
//! [`MatchConfig::featured_boost`]. Products that are out of stock and not
//! featured are skipped before scoring. Filters only boost; they never
//! exclude a product, and a blank query returns nothing regardless of
//! filters.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use index::{Product, SearchIndex};
//! use matcher::{Matcher, SearchFilters};
//!
//! let index = Arc::new(SearchIndex::default());
//! index.initialize(vec![
//!     Product::new("p-1", "Vestido Negro Elegante").with_stock(4),
//!     Product::new("p-2", "Vestido Negro").with_stock(2),
//! ]);
//!
//! let matcher = Matcher::with_defaults(index);
//! let results = matcher.search("vestido negro", &SearchFilters::new());
//! assert_eq!(results[0].id, "p-2");
//! ```
//!
//! ## Observability
//!
//! Install a [`SearchMetrics`] implementation via [`set_search_metrics`] to
//! record per-search latency and hit counts. Each search also emits a
//! `tracing` debug event with the same figures.

pub mod engine;
pub mod metrics;
pub mod similarity;
pub mod types;

pub use crate::engine::Matcher;
pub use crate::metrics::{set_search_metrics, SearchMetrics};
pub use crate::similarity::{is_similar, levenshtein};
pub use crate::types::{MatchConfig, MatchError, ScoreWeights, SearchFilters, SearchHit};
