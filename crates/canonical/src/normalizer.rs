use crate::error::CanonicalError;
use crate::synonyms::{SynonymGroup, SynonymTable};
use crate::text::normalize_text;

/// Text normalizer bundling the color and size synonym tables.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
#[derive(Debug, Clone)]
pub struct Normalizer {
    colors: SynonymTable,
    sizes: SynonymTable,
}

impl Normalizer {
    pub fn new(colors: SynonymTable, sizes: SynonymTable) -> Self {
        Self { colors, sizes }
    }

    /// Build a normalizer from configured groups. `None` keeps the built-in
    /// table for that field.
    pub fn from_groups(
        colors: Option<Vec<SynonymGroup>>,
        sizes: Option<Vec<SynonymGroup>>,
    ) -> Result<Self, CanonicalError> {
        let colors = match colors {
            Some(groups) => SynonymTable::new(groups)?,
            None => SynonymTable::colors(),
        };
        let sizes = match sizes {
            Some(groups) => SynonymTable::new(groups)?,
            None => SynonymTable::sizes(),
        };
        Ok(Self::new(colors, sizes))
    }

    pub fn normalize_text(&self, input: &str) -> String {
        normalize_text(input)
    }

    /// Canonical color key for a raw color name.
    pub fn normalize_color(&self, raw: &str) -> String {
        self.colors.resolve(raw)
    }

    /// Canonical size key for a raw size label.
    pub fn normalize_size(&self, raw: &str) -> String {
        self.sizes.resolve(raw)
    }

    pub fn colors(&self) -> &SynonymTable {
        &self.colors
    }

    pub fn sizes(&self) -> &SynonymTable {
        &self.sizes
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(SynonymTable::colors(), SynonymTable::sizes())
    }
}
