//! Workspace umbrella crate for catalog search.
//!
//! This crate wires text normalization (`canonical`), the product index
//! (`index`) and relevance ranking (`matcher`) behind one [`SearchEngine`]
//! so callers can load a catalog, keep it current, and query it through a
//! single entry point.
//!
//! ```
//! use catalog_search::{Product, SearchEngine, SearchFilters};
//!
//! let engine = SearchEngine::default();
//! engine.initialize(vec![
//!     Product::new("p-1", "Vestido Negro").with_stock(3),
//!     Product::new("p-2", "Camisa Azul").with_stock(0),
//! ]);
//!
//! let hits = engine.search("vestido", &SearchFilters::new());
//! assert_eq!(hits[0].id, "p-1");
//! assert_eq!(engine.get_autocomplete("cam", 10), vec!["camisa"]);
//! ```

pub mod config;

pub use canonical::{
    CanonicalError, Normalizer, SynonymGroup, SynonymTable, normalize_text, tokenize,
};
pub use config::{ConfigLoadError, SearchEngineConfig};
pub use index::{
    FieldDecode, IndexConfig, IndexError, IndexStats, IndexedEntry, Product, SearchIndex, Tag,
    TokenRetention, decode_colors, decode_sizes,
};
pub use matcher::{
    MatchConfig, MatchError, Matcher, ScoreWeights, SearchFilters, SearchHit, SearchMetrics,
    levenshtein, set_search_metrics,
};

use std::sync::Arc;

use thiserror::Error;

/// Suggestion count used when the caller does not pick one.
pub const DEFAULT_AUTOCOMPLETE_LIMIT: usize = 10;

/// Errors raised while assembling a [`SearchEngine`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("synonym table failure: {0}")]
    Canonical(#[from] CanonicalError),
    #[error("index setup failure: {0}")]
    Index(#[from] IndexError),
    #[error("matcher setup failure: {0}")]
    Match(#[from] MatchError),
}

/// Search engine over one mutable product catalog.
///
/// All methods take `&self`; share the engine as `Arc<SearchEngine>` across
/// threads. Mutations and searches never fail.
#[derive(Debug)]
pub struct SearchEngine {
    index: Arc<SearchIndex>,
    matcher: Matcher,
}

impl SearchEngine {
    /// Build an empty engine from configuration.
    pub fn new(cfg: SearchEngineConfig) -> Result<Self, EngineError> {
        let normalizer = Arc::new(Normalizer::from_groups(cfg.colors, cfg.sizes)?);
        let index = Arc::new(SearchIndex::new(cfg.index, normalizer)?);
        let matcher = Matcher::new(Arc::clone(&index), cfg.matcher)?;
        tracing::debug!(name = ?cfg.name, "search engine created");
        Ok(Self { index, matcher })
    }

    /// Clear the engine and index a full catalog.
    pub fn initialize<I>(&self, products: I)
    where
        I: IntoIterator<Item = Product>,
    {
        self.index.initialize(products);
        let stats = self.index.stats();
        tracing::info!(
            indexed_products = stats.indexed_products,
            total_tokens = stats.total_tokens,
            "catalog loaded"
        );
    }

    /// Add a product, or overwrite the entry with the same id.
    pub fn index_product(&self, product: Product) {
        self.index.index_product(product);
    }

    /// Replace a product's entry wholesale.
    pub fn update_product(&self, product: Product) {
        self.index.update_product(product);
    }

    /// Drop a product. Unknown ids are ignored; returns whether one existed.
    pub fn remove_product(&self, id: &str) -> bool {
        self.index.remove_product(id)
    }

    /// Ranked products for a query, best first.
    pub fn search(&self, query: &str, filters: &SearchFilters) -> Vec<Product> {
        self.matcher.search(query, filters)
    }

    /// Ranked products together with their scores.
    pub fn search_scored(&self, query: &str, filters: &SearchFilters) -> Vec<SearchHit> {
        self.matcher.search_scored(query, filters)
    }

    /// Up to `limit` indexed tokens starting with `prefix`, in lexicographic
    /// order.
    pub fn get_autocomplete(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.index.autocomplete(prefix, limit)
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    pub fn index(&self) -> &Arc<SearchIndex> {
        &self.index
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        let index = Arc::new(SearchIndex::default());
        let matcher = Matcher::with_defaults(Arc::clone(&index));
        Self { index, matcher }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_engine_is_empty() {
        let engine = SearchEngine::default();
        assert_eq!(engine.stats(), IndexStats::default());
        assert!(engine.search("algo", &SearchFilters::new()).is_empty());
        assert!(engine.get_autocomplete("", DEFAULT_AUTOCOMPLETE_LIMIT).is_empty());
    }

    #[test]
    fn config_synonyms_reach_the_matcher() {
        let cfg = SearchEngineConfig {
            colors: Some(vec![SynonymGroup::new("celeste", ["cielo"])]),
            ..SearchEngineConfig::default()
        };
        let engine = SearchEngine::new(cfg).expect("valid config");
        engine.initialize(vec![
            Product::new("a", "Remera Lisa").with_stock(2).with_colors(["Celeste"]),
            Product::new("b", "Remera Lisa").with_stock(2).with_colors(["Azul"]),
        ]);

        let hits = engine.search_scored("remera", &SearchFilters::new().with_color("Cielo"));
        assert_eq!(hits[0].product.id, "a");
        assert!(hits[0].score > hits[1].score);
    }

    #[test]
    fn invalid_synonyms_rejected() {
        let cfg = SearchEngineConfig {
            sizes: Some(vec![SynonymGroup::new("", ["x"])]),
            ..SearchEngineConfig::default()
        };
        assert!(matches!(
            SearchEngine::new(cfg),
            Err(EngineError::Canonical(CanonicalError::EmptySynonymKey(0)))
        ));
    }

    #[test]
    fn invalid_index_config_rejected() {
        let cfg = SearchEngineConfig {
            index: IndexConfig::new().with_min_token_chars(0),
            ..SearchEngineConfig::default()
        };
        assert!(matches!(SearchEngine::new(cfg), Err(EngineError::Index(_))));
    }

    #[test]
    fn mutations_are_visible_to_search() {
        let engine = SearchEngine::default();
        engine.index_product(Product::new("a", "Mochila Escolar").with_stock(4));
        assert_eq!(engine.search("mochila", &SearchFilters::new()).len(), 1);

        engine.update_product(Product::new("a", "Mochila Escolar").with_stock(0));
        assert!(engine.search("mochila", &SearchFilters::new()).is_empty());

        assert!(engine.remove_product("a"));
        assert!(!engine.remove_product("a"));
        assert_eq!(engine.stats().indexed_products, 0);
    }
}
