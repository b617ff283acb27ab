use canonical::Normalizer;
use serde::{Deserialize, Serialize};

use crate::decode::{decode_colors, decode_sizes};
use crate::product::Product;

/// Upper bound (inclusive) of the stock range tagged as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Derived label attached to an indexed entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Tag {
    Featured,
    OutOfStock,
    LowStock,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Featured => "featured",
            Tag::OutOfStock => "out-of-stock",
            Tag::LowStock => "low-stock",
        }
    }

    /// Tags for a product, in a fixed order.
    pub fn derive(product: &Product) -> Vec<Tag> {
        let mut tags = Vec::with_capacity(2);
        if product.featured {
            tags.push(Tag::Featured);
        }
        if product.stock == 0 {
            tags.push(Tag::OutOfStock);
        }
        if product.stock > 0 && product.stock <= LOW_STOCK_THRESHOLD {
            tags.push(Tag::LowStock);
        }
        tags
    }
}

/// Per-product cached representation used for scoring.
///
/// Always rebuilt from the product as a whole; no field is ever patched in
/// place.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IndexedEntry {
    pub product: Product,
    pub normalized_name: String,
    pub normalized_description: String,
    /// Canonical color keys, in product order.
    pub normalized_colors: Vec<String>,
    /// Canonical size keys, in product order.
    pub normalized_sizes: Vec<String>,
    pub normalized_category: String,
    pub tags: Vec<Tag>,
    /// 1 for featured products, 0 otherwise.
    pub popularity: u8,
    /// Insertion order; ties in ranking resolve to the lower sequence.
    pub sequence: u64,
}

impl IndexedEntry {
    pub fn build(product: Product, normalizer: &Normalizer, sequence: u64) -> Self {
        let normalized_colors = decode_colors(product.colors.as_ref())
            .into_vec()
            .iter()
            .map(|color| normalizer.normalize_color(color))
            .filter(|key| !key.is_empty())
            .collect();
        let normalized_sizes = decode_sizes(product.sizes.as_ref())
            .into_vec()
            .iter()
            .map(|size| normalizer.normalize_size(size))
            .filter(|key| !key.is_empty())
            .collect();

        Self {
            normalized_name: normalizer.normalize_text(&product.name),
            normalized_description: normalizer
                .normalize_text(product.description.as_deref().unwrap_or_default()),
            normalized_colors,
            normalized_sizes,
            normalized_category: normalizer
                .normalize_text(product.category_id.as_deref().unwrap_or_default()),
            tags: Tag::derive(&product),
            popularity: u8::from(product.featured),
            sequence,
            product,
        }
    }

    pub fn id(&self) -> &str {
        &self.product.id
    }

    pub fn is_featured(&self) -> bool {
        self.popularity > 0
    }

    /// Out-of-stock products that are not featured never reach scoring.
    pub fn is_searchable(&self) -> bool {
        !(self.product.stock == 0 && self.popularity == 0)
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(product: Product) -> IndexedEntry {
        IndexedEntry::build(product, &Normalizer::default(), 0)
    }

    #[test]
    fn normalizes_all_fields() {
        let entry = build(
            Product::new("p-1", "Pantalón Cargo")
                .with_description("Algodón  Orgánico")
                .with_category("Cat-Pantalones")
                .with_stock(12)
                .with_colors(["Azul Marino", "Carbón", "Ocre"])
                .with_sizes([("Small", 2), ("36", 1)]),
        );
        assert_eq!(entry.normalized_name, "pantalon cargo");
        assert_eq!(entry.normalized_description, "algodon  organico");
        assert_eq!(entry.normalized_category, "cat-pantalones");
        assert_eq!(entry.normalized_colors, vec!["azul", "negro", "ocre"]);
        assert_eq!(entry.normalized_sizes, vec!["s", "36"]);
        assert!(entry.tags.is_empty());
        assert_eq!(entry.popularity, 0);
    }

    #[test]
    fn tags_follow_stock_and_featured() {
        let featured_empty = build(Product::new("a", "A").with_featured(true));
        assert_eq!(featured_empty.tags, vec![Tag::Featured, Tag::OutOfStock]);
        assert_eq!(featured_empty.popularity, 1);

        let low = build(Product::new("b", "B").with_stock(5));
        assert_eq!(low.tags, vec![Tag::LowStock]);

        let plenty = build(Product::new("c", "C").with_stock(6));
        assert!(plenty.tags.is_empty());

        let one = build(Product::new("d", "D").with_stock(1));
        assert!(one.has_tag(Tag::LowStock));
    }

    #[test]
    fn searchable_unless_empty_and_unfeatured() {
        assert!(!build(Product::new("a", "A")).is_searchable());
        assert!(build(Product::new("b", "B").with_featured(true)).is_searchable());
        assert!(build(Product::new("c", "C").with_stock(3)).is_searchable());
    }

    #[test]
    fn malformed_fields_do_not_abort() {
        let entry = build(
            Product::new("p", "Camisa")
                .with_stock(1)
                .with_colors_json("not json")
                .with_sizes_json(r#"[{"size": "M"}]"#),
        );
        assert!(entry.normalized_colors.is_empty());
        assert_eq!(entry.normalized_sizes, vec!["m"]);
        assert_eq!(entry.normalized_name, "camisa");
    }

    #[test]
    fn tag_serializes_kebab_case() {
        let json = serde_json::to_string(&Tag::OutOfStock).unwrap();
        assert_eq!(json, "\"out-of-stock\"");
        assert_eq!(Tag::LowStock.as_str(), "low-stock");
    }
}
