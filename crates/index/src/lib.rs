//! # Catalog Index
//!
//! In-memory index over a mutable product catalog. It turns each
//! [`Product`] into an [`IndexedEntry`] (normalized text, canonical color and
//! size keys, derived tags) and maintains the vocabulary used for prefix
//! autocomplete.
//!
//! ## Core Features
//!
//! - **Incremental mutation**: [`SearchIndex::index_product`],
//!   [`SearchIndex::update_product`] and [`SearchIndex::remove_product`] keep
//!   the index current without full rebuilds; [`SearchIndex::initialize`]
//!   resets it from a full catalog load.
//! - **Tolerant decoding**: `colors` / `sizes` accept JSON text or decoded
//!   arrays; malformed data becomes an empty list (see [`FieldDecode`]).
//! - **Autocomplete**: an ordered token set answers prefix lookups with a
//!   range scan.
//! - **Consistent reads**: entries and tokens live behind one `RwLock`, so a
//!   [`SearchIndex::with_entries`] never observes a half-applied mutation.
//!
//! ## Example Usage
//!
//! ```
//! use index::{Product, SearchIndex};
//!
//! let index = SearchIndex::default();
//! index.initialize(vec![
//!     Product::new("p-1", "Vestido Negro").with_stock(3),
//!     Product::new("p-2", "Vestido Rojo Largo").with_stock(8),
//! ]);
//!
//! assert_eq!(index.len(), 2);
//! assert_eq!(index.autocomplete("Vest", 10), vec!["vestido"]);
//!
//! index.remove_product("p-1");
//! assert!(index.entry("p-1").is_none());
//! ```

mod config;
mod decode;
mod entry;
mod error;
mod product;
mod tokens;

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use canonical::{tokens_at_least, Normalizer};
use serde::{Deserialize, Serialize};

pub use crate::config::{IndexConfig, TokenRetention};
pub use crate::decode::{decode_colors, decode_sizes, FieldDecode};
pub use crate::entry::{IndexedEntry, Tag, LOW_STOCK_THRESHOLD};
pub use crate::error::IndexError;
pub use crate::product::Product;

use crate::tokens::TokenSet;

/// Point-in-time index counters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct IndexStats {
    pub indexed_products: usize,
    pub total_tokens: usize,
}

/// Mutable state guarded by the index lock.
#[derive(Debug, Default)]
struct IndexState {
    entries: hashbrown::HashMap<String, IndexedEntry>,
    tokens: TokenSet,
    next_sequence: u64,
}

/// Index structure
pub struct SearchIndex {
    /// Shared with the matcher so query text is normalized identically.
    normalizer: Arc<Normalizer>,
    cfg: IndexConfig,
    state: RwLock<IndexState>,
}

impl SearchIndex {
    /// Create an empty index. Fails only if the config is invalid.
    pub fn new(cfg: IndexConfig, normalizer: Arc<Normalizer>) -> Result<Self, IndexError> {
        cfg.validate()?;
        let state = IndexState {
            tokens: TokenSet::new(cfg.token_retention),
            ..IndexState::default()
        };
        Ok(Self {
            normalizer,
            cfg,
            state: RwLock::new(state),
        })
    }

    pub fn normalizer(&self) -> &Arc<Normalizer> {
        &self.normalizer
    }

    pub fn config(&self) -> &IndexConfig {
        &self.cfg
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clear the index and rebuild it from a full catalog.
    pub fn initialize<I>(&self, products: I)
    where
        I: IntoIterator<Item = Product>,
    {
        // A single write lock is held for the entire rebuild.
        let mut state = self.write();
        state.entries.clear();
        state.tokens.clear();
        state.next_sequence = 0;
        for product in products {
            self.insert_locked(&mut state, product);
        }
        tracing::debug!(
            indexed_products = state.entries.len(),
            total_tokens = state.tokens.len(),
            "index initialized"
        );
    }

    /// Index a product, overwriting any entry with the same id. An
    /// overwritten entry keeps its encounter order; use
    /// [`SearchIndex::update_product`] to move it to the end.
    pub fn index_product(&self, product: Product) {
        let mut state = self.write();
        self.insert_locked(&mut state, product);
    }

    /// Replace a product's entry wholesale: delete, then index from scratch.
    pub fn update_product(&self, product: Product) {
        let mut state = self.write();
        self.remove_locked(&mut state, &product.id);
        self.insert_locked(&mut state, product);
    }

    /// Delete a product's entry. Returns whether an entry existed.
    pub fn remove_product(&self, id: &str) -> bool {
        let mut state = self.write();
        let removed = self.remove_locked(&mut state, id);
        if !removed {
            tracing::debug!(product_id = id, "remove requested for unknown product");
        }
        removed
    }

    fn insert_locked(&self, state: &mut IndexState, product: Product) {
        // Overwriting a live id keeps its place in encounter order.
        let sequence = match state.entries.get(product.id.as_str()) {
            Some(existing) => existing.sequence,
            None => {
                let sequence = state.next_sequence;
                state.next_sequence += 1;
                sequence
            }
        };

        let entry = IndexedEntry::build(product, &self.normalizer, sequence);
        {
            let tokens = self.entry_tokens(&entry);
            state.tokens.add(&tokens);
        }
        tracing::trace!(product_id = entry.id(), sequence, "product indexed");

        // An overwritten entry hands its tokens back first.
        if let Some(previous) = state.entries.insert(entry.product.id.clone(), entry) {
            let tokens = self.entry_tokens(&previous);
            state.tokens.retract(&tokens);
        }
    }

    fn remove_locked(&self, state: &mut IndexState, id: &str) -> bool {
        match state.entries.remove(id) {
            Some(entry) => {
                let tokens = self.entry_tokens(&entry);
                state.tokens.retract(&tokens);
                tracing::trace!(product_id = id, "product removed");
                true
            }
            None => false,
        }
    }

    /// Distinct autocomplete tokens contributed by an entry.
    fn entry_tokens<'e>(&self, entry: &'e IndexedEntry) -> BTreeSet<&'e str> {
        let min = self.cfg.min_token_chars;
        tokens_at_least(&entry.normalized_name, min)
            .chain(tokens_at_least(&entry.normalized_description, min))
            .collect()
    }

    /// Run `f` over all entries while holding the read lock once.
    ///
    /// Entries come in map order; callers that need encounter order should
    /// use [`IndexedEntry::sequence`]. Used by the matcher to score and rank without cloning entries that do
    /// not make the cut.
    pub fn with_entries<R>(&self, f: impl FnOnce(&mut dyn Iterator<Item = &IndexedEntry>) -> R) -> R {
        let state = self.read();
        let mut entries = state.entries.values();
        f(&mut entries)
    }

    /// Up to `limit` distinct tokens starting with the normalized `prefix`.
    pub fn autocomplete(&self, prefix: &str, limit: usize) -> Vec<String> {
        let prefix = self.normalizer.normalize_text(prefix);
        self.read().tokens.with_prefix(&prefix, limit)
    }

    /// Snapshot of a single entry.
    pub fn entry(&self, id: &str) -> Option<IndexedEntry> {
        self.read().entries.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read().entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> IndexStats {
        let state = self.read();
        IndexStats {
            indexed_products: state.entries.len(),
            total_tokens: state.tokens.len(),
        }
    }
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self {
            normalizer: Arc::new(Normalizer::default()),
            cfg: IndexConfig::default(),
            state: RwLock::new(IndexState::default()),
        }
    }
}

impl std::fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchIndex")
            .field("cfg", &self.cfg)
            .field("stats", &self.stats())
            .finish()
    }
}
