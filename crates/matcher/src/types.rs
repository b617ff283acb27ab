use index::Product;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Additive score contributions for each matching signal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoreWeights {
    /// Normalized name equals the normalized query.
    pub exact_name: f64,
    /// Normalized name contains the whole normalized query.
    pub name_contains_query: f64,
    /// Per query token: name contains the token.
    pub name_contains_token: f64,
    /// Per query token: token is within the fuzzy threshold of the whole name.
    pub fuzzy_name: f64,
    /// Per query token: description contains the token.
    pub description_contains_token: f64,
    pub color_filter: f64,
    pub size_filter: f64,
    pub category_filter: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            exact_name: 1000.0,
            name_contains_query: 500.0,
            name_contains_token: 100.0,
            fuzzy_name: 50.0,
            description_contains_token: 30.0,
            color_filter: 150.0,
            size_filter: 100.0,
            category_filter: 200.0,
        }
    }
}

impl ScoreWeights {
    fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("exact_name", self.exact_name),
            ("name_contains_query", self.name_contains_query),
            ("name_contains_token", self.name_contains_token),
            ("fuzzy_name", self.fuzzy_name),
            ("description_contains_token", self.description_contains_token),
            ("color_filter", self.color_filter),
            ("size_filter", self.size_filter),
            ("category_filter", self.category_filter),
        ]
        .into_iter()
    }
}

/// Configuration for the matcher.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Result cap used when a request does not set a positive `max_results`.
    #[serde(default = "MatchConfig::default_max_results")]
    pub max_results: usize,
    /// Maximum edit distance for two strings to count as similar.
    #[serde(default = "MatchConfig::default_fuzzy_threshold")]
    pub fuzzy_threshold: usize,
    /// Multiplier applied to the score of featured products.
    #[serde(default = "MatchConfig::default_featured_boost")]
    pub featured_boost: f64,
    #[serde(default)]
    pub weights: ScoreWeights,
}

impl MatchConfig {
    pub(crate) fn default_max_results() -> usize {
        50
    }

    pub(crate) fn default_fuzzy_threshold() -> usize {
        2
    }

    pub(crate) fn default_featured_boost() -> f64 {
        1.2
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.max_results == 0 {
            return Err(MatchError::InvalidConfig(
                "max_results must be greater than zero".into(),
            ));
        }
        if !(self.featured_boost.is_finite() && self.featured_boost > 0.0) {
            return Err(MatchError::InvalidConfig(
                "featured_boost must be a positive number".into(),
            ));
        }
        for (name, weight) in self.weights.iter() {
            if !(weight.is_finite() && weight >= 0.0) {
                return Err(MatchError::InvalidConfig(format!(
                    "weights.{name} must be a non-negative number"
                )));
            }
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_results: Self::default_max_results(),
            fuzzy_threshold: Self::default_fuzzy_threshold(),
            featured_boost: Self::default_featured_boost(),
            weights: ScoreWeights::default(),
        }
    }
}

/// Optional per-request filters. Each one boosts matching products; none of
/// them excludes anything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Exact match against the product's raw category id.
    #[serde(default)]
    pub category_id: Option<String>,
    /// Color name; resolved through the color synonym table.
    #[serde(default)]
    pub color: Option<String>,
    /// Size label; resolved through the size alias table.
    #[serde(default)]
    pub size: Option<String>,
    /// Result cap; absent or zero falls back to [`MatchConfig::max_results`].
    #[serde(default)]
    pub max_results: Option<usize>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub(crate) fn effective_max_results(&self, cfg: &MatchConfig) -> usize {
        self.max_results
            .filter(|n| *n > 0)
            .unwrap_or(cfg.max_results)
    }
}

/// A ranked product with its final score.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchHit {
    pub product: Product,
    pub score: f64,
}

/// Errors produced by the matching layer.
///
/// Searches themselves never fail; only configuration is validated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    /// Invalid matcher configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
