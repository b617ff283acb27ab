//! Synonym tables for color and size canonicalization.
//!
//! A table is a flat list of groups, each group being a canonical key and the
//! alias phrases that fold into it. Resolution goes through a reverse lookup
//! (normalized alias -> key) that is built once when the table is created.
//!
//! # Precedence
//!
//! Groups are scanned in declaration order and, inside a group, the key comes
//! before its aliases. When the same phrase shows up in several groups the
//! first occurrence wins. The size table relies on this: `"32"` is both a key
//! and an alias of `"36"`, and resolves to `"32"`. Letter groups are declared
//! before numeric ones, so `"m"` stays `"m"` even though it is also an alias
//! of `"36"`.
//!
//! # Examples
//!
//! ```rust
//! use canonical::SynonymTable;
//!
//! let table = SynonymTable::colors();
//! assert_eq!(table.resolve("Azul Marino"), "azul");
//! assert_eq!(table.resolve("Púrpura"), "morado");
//! // Unknown values pass through normalized.
//! assert_eq!(table.resolve("Ocre"), "ocre");
//! ```

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;
use crate::text::normalize_text;

/// Built-in color groups: canonical key followed by its aliases.
pub static COLOR_SYNONYMS: &[(&str, &[&str])] = &[
    ("azul", &["azul marino", "azul oscuro", "azul claro", "azul cielo", "turquesa"]),
    ("rojo", &["rojo oscuro", "bordo", "vino", "carmesí"]),
    ("verde", &["verde oscuro", "verde claro", "verde militar", "verde oliva"]),
    ("blanco", &["crema", "hueso", "ivory"]),
    ("negro", &["negro profundo", "carbón"]),
    ("gris", &["gris claro", "gris oscuro", "plateado", "antracita"]),
    ("amarillo", &["dorado", "oro", "amarillo oscuro"]),
    ("rosa", &["rosado", "magenta", "fucsia", "coral"]),
    ("naranja", &["naranja oscuro", "salmón"]),
    ("marrón", &["café", "chocolate", "castaño", "tan", "beige"]),
    ("morado", &["púrpura", "violeta", "lavanda"]),
];

/// Built-in size groups. Numeric sizes map across regional numbering and
/// letter sizes.
pub static SIZE_ALIASES: &[(&str, &[&str])] = &[
    ("xs", &["xsmall", "extra small", "xs", "muy pequeño"]),
    ("s", &["small", "s", "pequeño"]),
    ("m", &["medium", "m", "mediano"]),
    ("l", &["large", "l", "grande"]),
    ("xl", &["xlarge", "extra large", "xl", "muy grande"]),
    ("xxl", &["xxlarge", "2xl", "xxl"]),
    ("32", &["32", "28", "xs"]),
    ("34", &["34", "30", "s"]),
    ("36", &["36", "32", "m"]),
    ("38", &["38", "34", "l"]),
    ("40", &["40", "36", "xl"]),
    ("42", &["42", "38", "xxl"]),
];

/// A single synonym group as it appears in configuration files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SynonymGroup {
    /// Canonical key the group folds into.
    pub key: String,
    /// Alias phrases; normalized before comparison.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl SynonymGroup {
    pub fn new<K, I, A>(key: K, aliases: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            key: key.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }

    /// Convert a static table into owned groups, e.g. to extend it.
    pub fn from_static(groups: &[(&str, &[&str])]) -> Vec<SynonymGroup> {
        groups
            .iter()
            .map(|(key, aliases)| SynonymGroup::new(*key, aliases.iter().copied()))
            .collect()
    }
}

/// Canonical-key table with a precomputed reverse lookup.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    groups: Vec<SynonymGroup>,
    lookup: FxHashMap<String, String>,
}

impl SynonymTable {
    /// Build a table from groups, validating that keys and aliases survive
    /// normalization.
    pub fn new(groups: Vec<SynonymGroup>) -> Result<Self, CanonicalError> {
        let mut lookup: FxHashMap<String, String> = FxHashMap::default();

        for (idx, group) in groups.iter().enumerate() {
            let key = normalize_text(&group.key);
            if key.is_empty() {
                return Err(CanonicalError::EmptySynonymKey(idx));
            }
            lookup.entry(key.clone()).or_insert_with(|| key.clone());

            for alias in &group.aliases {
                let alias = normalize_text(alias);
                if alias.is_empty() {
                    return Err(CanonicalError::EmptyAlias {
                        key: group.key.clone(),
                    });
                }
                lookup.entry(alias).or_insert_with(|| key.clone());
            }
        }

        Ok(Self { groups, lookup })
    }

    /// Built-in color table.
    pub fn colors() -> Self {
        Self::from_static(COLOR_SYNONYMS)
    }

    /// Built-in size table.
    pub fn sizes() -> Self {
        Self::from_static(SIZE_ALIASES)
    }

    fn from_static(groups: &[(&str, &[&str])]) -> Self {
        // Static tables are non-empty literals; validation cannot fail.
        Self::new(SynonymGroup::from_static(groups))
            .unwrap_or_else(|err| unreachable!("built-in synonym table is invalid: {err}"))
    }

    /// Resolve raw text to its canonical key. Unknown values come back as
    /// their normalized text.
    pub fn resolve(&self, raw: &str) -> String {
        let normalized = normalize_text(raw);
        match self.lookup.get(&normalized) {
            Some(key) => key.clone(),
            None => normalized,
        }
    }

    /// Canonical key for an already-normalized value, if the table knows it.
    pub fn lookup(&self, normalized: &str) -> Option<&str> {
        self.lookup.get(normalized).map(String::as_str)
    }

    pub fn groups(&self) -> &[SynonymGroup] {
        &self.groups
    }

    /// Number of distinct phrases (keys and aliases) the table recognizes.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}
