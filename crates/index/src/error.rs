use thiserror::Error;

/// Errors produced while configuring the index.
///
/// Index mutations and reads never fail; bad product data degrades to empty
/// fields instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("invalid index config: {0}")]
    InvalidConfig(String),
}
