use serde::{Deserialize, Serialize};
use serde_json::Value;

mod price_serde {
    use serde::{Deserialize, Deserializer};
    use serde_json::Number;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(Number),
    }

    /// Prices arrive as decimal strings from the catalog store, but some
    /// producers send plain JSON numbers.
    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawPrice>::deserialize(deserializer)? {
            Some(RawPrice::Text(text)) => text,
            Some(RawPrice::Number(number)) => number.to_string(),
            None => String::new(),
        })
    }
}

/// Product record as supplied by the catalog store.
///
/// The index keeps its own copy for scoring and for returning results; it is
/// never the source of truth. `colors` and `sizes` are kept in their loose
/// wire shape (JSON text or an already-decoded array) and only decoded at
/// index time, see [`crate::decode_colors`] and [`crate::decode_sizes`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable unique identifier; the index key.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Decimal price as text, e.g. `"129.90"`.
    #[serde(default, deserialize_with = "price_serde::deserialize")]
    pub price: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub category_id: Option<String>,
    /// JSON string list, either encoded as text or already decoded.
    #[serde(default)]
    pub colors: Option<Value>,
    /// JSON list of `{size, quantity}` objects (or plain labels), encoded as
    /// text or already decoded.
    #[serde(default)]
    pub sizes: Option<Value>,
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price: "0".to_string(),
            stock: 0,
            category_id: None,
            colors: None,
            sizes: None,
            featured: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Set colors as an already-decoded list.
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(Value::Array(
            colors.into_iter().map(|c| Value::String(c.into())).collect(),
        ));
        self
    }

    /// Set sizes as an already-decoded list of `{size, quantity}` objects.
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        self.sizes = Some(Value::Array(
            sizes
                .into_iter()
                .map(|(size, quantity)| serde_json::json!({ "size": size.into(), "quantity": quantity }))
                .collect(),
        ));
        self
    }

    /// Set colors from their JSON text encoding, as stored by the catalog.
    pub fn with_colors_json(mut self, text: impl Into<String>) -> Self {
        self.colors = Some(Value::String(text.into()));
        self
    }

    /// Set sizes from their JSON text encoding, as stored by the catalog.
    pub fn with_sizes_json(mut self, text: impl Into<String>) -> Self {
        self.sizes = Some(Value::String(text.into()));
        self
    }
}
