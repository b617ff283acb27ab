use thiserror::Error;

/// Errors that can occur while building normalization tables.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("synonym group #{0} has an empty canonical key")]
    EmptySynonymKey(usize),
    #[error("synonym group `{key}` contains an empty alias")]
    EmptyAlias { key: String },
}
