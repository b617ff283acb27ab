//! Decoding of the loosely-typed `colors` / `sizes` product fields.
//!
//! Both fields reach the index either as JSON text or as an already-decoded
//! JSON array. Anything that does not decode into the expected list shape is
//! reported as [`FieldDecode::Empty`]; one product with bad metadata never
//! stops the rest of the catalog from being indexed.

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::{Number, Value};

/// Outcome of decoding a list-valued product field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDecode {
    /// The field held a well-formed, non-empty list.
    Parsed(Vec<String>),
    /// Absent, null, malformed, or an empty list.
    Empty,
}

impl FieldDecode {
    fn from_list(list: Vec<String>) -> Self {
        if list.is_empty() {
            FieldDecode::Empty
        } else {
            FieldDecode::Parsed(list)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldDecode::Empty)
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            FieldDecode::Parsed(list) => list,
            FieldDecode::Empty => Vec::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SizeLabel {
    Text(String),
    Number(Number),
}

impl SizeLabel {
    fn into_string(self) -> String {
        match self {
            SizeLabel::Text(text) => text,
            SizeLabel::Number(number) => number.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SizeItem {
    Label(SizeLabel),
    Entry {
        #[serde(default)]
        size: Option<SizeLabel>,
    },
    Other(serde::de::IgnoredAny),
}

/// Resolve the wire value to a JSON document: text is parsed, arrays are
/// borrowed as-is.
fn document<'a>(field: &'static str, raw: Option<&'a Value>) -> Option<Cow<'a, Value>> {
    match raw? {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Null) => None,
            Ok(value) => Some(Cow::Owned(value)),
            Err(err) => {
                tracing::warn!(field, error = %err, "malformed JSON in product field");
                None
            }
        },
        other => Some(Cow::Borrowed(other)),
    }
}

/// Decode a product's `colors` field into raw color names.
///
/// Expects a list of strings; any other shape yields [`FieldDecode::Empty`].
pub fn decode_colors(raw: Option<&Value>) -> FieldDecode {
    let Some(doc) = document("colors", raw) else {
        return FieldDecode::Empty;
    };
    match Vec::<String>::deserialize(doc.as_ref()) {
        Ok(colors) => FieldDecode::from_list(colors),
        Err(err) => {
            tracing::warn!(error = %err, "colors field is not a list of strings");
            FieldDecode::Empty
        }
    }
}

/// Decode a product's `sizes` field into raw size labels.
///
/// List items may be `{size, quantity}` objects or bare labels. Items without
/// a usable size are dropped; a value that is not a list yields
/// [`FieldDecode::Empty`].
pub fn decode_sizes(raw: Option<&Value>) -> FieldDecode {
    let Some(doc) = document("sizes", raw) else {
        return FieldDecode::Empty;
    };
    match Vec::<SizeItem>::deserialize(doc.as_ref()) {
        Ok(items) => FieldDecode::from_list(
            items
                .into_iter()
                .filter_map(|item| match item {
                    SizeItem::Label(label) => Some(label.into_string()),
                    SizeItem::Entry { size } => size.map(SizeLabel::into_string),
                    SizeItem::Other(_) => None,
                })
                .filter(|label| !label.trim().is_empty())
                .collect(),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "sizes field is not a list");
            FieldDecode::Empty
        }
    }
}
