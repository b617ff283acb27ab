//! Catalog canonical text layer.
//!
//! Everything the search index compares goes through this crate first, so
//! index-time and query-time text always agree.
//!
//! ## What we do
//!
//! - Lowercasing, canonical decomposition (NFD) and diacritic stripping
//! - Color and size canonicalization through static synonym tables
//! - Whitespace tokenization
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. `normalize_text` is
//! idempotent: normalizing its output again returns the same string.
//!
//! Synonym tables are data, not code. Swapping or extending them (see
//! [`SynonymGroup`]) never touches the resolution algorithm.

mod error;
mod normalizer;
mod synonyms;
mod text;
mod token;

pub use crate::error::CanonicalError;
pub use crate::normalizer::Normalizer;
pub use crate::synonyms::{SynonymGroup, SynonymTable, COLOR_SYNONYMS, SIZE_ALIASES};
pub use crate::text::normalize_text;
pub use crate::token::{tokenize, tokens_at_least};
