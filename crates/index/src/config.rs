use serde::{Deserialize, Serialize};

use crate::IndexError;

/// What happens to autocomplete tokens when the entry that contributed them
/// is updated or removed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TokenRetention {
    /// Tokens are never retracted; suggestions may mention vocabulary of
    /// removed or renamed products until the next `initialize`.
    #[default]
    Monotonic,
    /// Tokens are reference-counted and disappear once no live entry
    /// contributes them.
    LiveOnly,
}

/// Config for initializing the search index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexConfig {
    /// Minimum token length, in characters, kept for autocomplete.
    #[serde(default = "IndexConfig::default_min_token_chars")]
    pub min_token_chars: usize,
    #[serde(default)]
    pub token_retention: TokenRetention,
}

impl IndexConfig {
    pub(crate) fn default_min_token_chars() -> usize {
        3
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_token_chars(mut self, min_token_chars: usize) -> Self {
        self.min_token_chars = min_token_chars;
        self
    }

    pub fn with_token_retention(mut self, token_retention: TokenRetention) -> Self {
        self.token_retention = token_retention;
        self
    }

    pub fn validate(&self) -> Result<(), IndexError> {
        if self.min_token_chars == 0 {
            return Err(IndexError::InvalidConfig(
                "min_token_chars must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            min_token_chars: Self::default_min_token_chars(),
            token_retention: TokenRetention::default(),
        }
    }
}
