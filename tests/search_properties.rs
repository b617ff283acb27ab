//! End-to-end behaviour of the search engine over a small catalog.

use catalog_search::{
    Product, SearchEngine, SearchEngineConfig, SearchFilters, TokenRetention, levenshtein,
    normalize_text,
};
use proptest::prelude::*;
use serde_json::json;

fn catalog() -> Vec<Product> {
    vec![
        Product::new("p-1", "Vestido Negro Elegante")
            .with_description("Vestido largo de fiesta")
            .with_stock(4)
            .with_colors(["Negro", "Carbón"])
            .with_sizes([("S", 1), ("M", 2)])
            .with_category("cat-vestidos"),
        Product::new("p-2", "Vestido Negro")
            .with_stock(2)
            .with_colors(["Negro"])
            .with_sizes([("L", 1)])
            .with_category("cat-vestidos"),
        Product::new("p-3", "Camisa Rosa")
            .with_description("Algodón peinado")
            .with_stock(0)
            .with_colors(["Fucsia"]),
        Product::new("p-4", "Pantalón Cargo")
            .with_stock(9)
            .with_colors(["Verde Militar"])
            .with_sizes([("Large", 3), ("38", 1)]),
        Product::new("p-5", "Remera Básica")
            .with_stock(0)
            .with_featured(true),
    ]
}

fn engine() -> SearchEngine {
    let engine = SearchEngine::default();
    engine.initialize(catalog());
    engine
}

fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn accents_and_case_fold_away() {
    assert_eq!(normalize_text("Pantalón"), "pantalon");
    assert_eq!(normalize_text("Pantalón"), normalize_text("Pantalon"));

    let engine = engine();
    assert_eq!(ids(&engine.search("PANTALON", &SearchFilters::new())), vec!["p-4"]);
    assert_eq!(ids(&engine.search("pantalón", &SearchFilters::new())), vec!["p-4"]);
}

#[test]
fn exact_match_ranks_first() {
    let results = engine().search("Vestido Negro", &SearchFilters::new());
    assert_eq!(ids(&results)[..2], ["p-2", "p-1"]);
}

#[test]
fn out_of_stock_unfeatured_is_hidden() {
    let engine = engine();
    assert!(engine.search("camisa rosa", &SearchFilters::new()).is_empty());
    assert!(
        engine
            .search("camisa", &SearchFilters::new().with_color("rosado"))
            .is_empty()
    );
    // Featured products stay visible with no stock.
    assert_eq!(ids(&engine.search("remera", &SearchFilters::new())), vec!["p-5"]);
}

#[test]
fn misspelled_query_still_matches() {
    let engine = SearchEngine::default();
    engine.initialize(vec![Product::new("v", "Vestido").with_stock(1)]);
    assert_eq!(ids(&engine.search("vestdo", &SearchFilters::new())), vec!["v"]);
}

#[test]
fn blank_query_returns_nothing() {
    let engine = engine();
    let filters = SearchFilters::new()
        .with_category("cat-vestidos")
        .with_color("negro")
        .with_size("m");
    assert!(engine.search("", &filters).is_empty());
    assert!(engine.search("  ", &filters).is_empty());
}

#[test]
fn filters_boost_without_excluding() {
    let engine = engine();
    // A matching color alone is enough to surface a product.
    let results = engine.search("pantalon", &SearchFilters::new().with_color("negro"));
    assert_eq!(ids(&results), vec!["p-4", "p-1", "p-2"]);

    let results = engine.search("vestido", &SearchFilters::new().with_category("cat-otros"));
    assert_eq!(results.len(), 2);

    // "grande" folds into size "l", which p-4 lists as "Large".
    let hits = engine.search_scored("cargo", &SearchFilters::new().with_size("grande"));
    assert_eq!(hits[0].product.id, "p-4");
    assert_eq!(hits[0].score, 700.0);
}

#[test]
fn results_are_capped_in_stable_order() {
    let engine = SearchEngine::default();
    engine.initialize((0..100).map(|i| {
        Product::new(format!("p-{i:03}"), format!("Medias Algodón {i}")).with_stock(1)
    }));

    let first = engine.search("medias", &SearchFilters::new().with_max_results(10));
    let expected: Vec<String> = (0..10).map(|i| format!("p-{i:03}")).collect();
    assert_eq!(ids(&first), expected.iter().map(String::as_str).collect::<Vec<_>>());

    let second = engine.search("medias", &SearchFilters::new().with_max_results(10));
    assert_eq!(first, second);
}

#[test]
fn autocomplete_respects_prefix_and_limit() {
    let engine = engine();
    let suggestions = engine.get_autocomplete("VES", 10);
    assert_eq!(suggestions, vec!["vestido"]);

    let all = engine.get_autocomplete("", 3);
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|pair| pair[0] < pair[1]));

    for token in engine.get_autocomplete("ca", 50) {
        assert!(token.starts_with("ca"), "{token} lacks the prefix");
    }
    assert!(engine.get_autocomplete("ves", 0).is_empty());
    assert!(engine.get_autocomplete("zzz", 10).is_empty());
}

#[test]
fn update_replaces_and_removal_excludes() {
    let engine = engine();
    engine.update_product(Product::new("p-4", "Bermuda Cargo").with_stock(2));

    assert!(engine.search("pantalon", &SearchFilters::new()).is_empty());
    assert_eq!(ids(&engine.search("bermuda", &SearchFilters::new())), vec!["p-4"]);

    // Colors from the previous version no longer boost the product.
    let hits = engine.search_scored("cargo", &SearchFilters::new().with_color("verde"));
    assert_eq!(hits[0].score, 600.0);

    assert!(engine.remove_product("p-2"));
    assert!(!ids(&engine.search("Vestido Negro", &SearchFilters::new())).contains(&"p-2"));
    assert!(!engine.remove_product("missing"));
}

#[test]
fn token_retention_controls_stale_suggestions() {
    let monotonic = engine();
    monotonic.remove_product("p-4");
    assert_eq!(monotonic.get_autocomplete("panta", 10), vec!["pantalon"]);

    let cfg = SearchEngineConfig::from_yaml("version: \"1.0\"\nindex:\n  token_retention: live_only\n")
        .expect("valid config");
    assert_eq!(cfg.index.token_retention, TokenRetention::LiveOnly);
    let live = SearchEngine::new(cfg).expect("valid engine");
    live.initialize(catalog());
    live.remove_product("p-4");
    assert!(live.get_autocomplete("panta", 10).is_empty());
    assert_eq!(live.get_autocomplete("carg", 10), Vec::<String>::new());
}

#[test]
fn malformed_metadata_is_tolerated() {
    let products: Vec<Product> = serde_json::from_value(json!([
        {"id": "a", "name": "Buzo Canguro", "stock": 3, "colors": "not json", "sizes": "{{"},
        {"id": "b", "name": "Buzo Liso", "stock": 3, "colors": "[\"Gris\"]",
         "sizes": "[{\"size\": \"XL\", \"quantity\": 2}]", "price": 1999.5}
    ]))
    .expect("valid catalog json");

    let engine = SearchEngine::default();
    engine.initialize(products);
    assert_eq!(engine.stats().indexed_products, 2);

    let entry = engine.index().entry("a").expect("indexed");
    assert!(entry.normalized_colors.is_empty());
    assert!(entry.normalized_sizes.is_empty());

    let hits = engine.search("buzo", &SearchFilters::new().with_color("plateado").with_size("xlarge"));
    assert_eq!(ids(&hits), vec!["b", "a"]);
    assert_eq!(hits[0].price, "1999.5");
}

#[test]
fn levenshtein_classic_values() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert_eq!(levenshtein("flaw", "lawn"), 2);
    assert_eq!(levenshtein("", "abc"), 3);
    assert_eq!(levenshtein("same", "same"), 0);
}

proptest! {
    #[test]
    fn autocomplete_never_exceeds_limit(prefix in "[a-z]{0,3}", limit in 0usize..8) {
        let engine = engine();
        let suggestions = engine.get_autocomplete(&prefix, limit);
        prop_assert!(suggestions.len() <= limit);
        for token in &suggestions {
            prop_assert!(token.starts_with(&prefix));
        }
    }

    #[test]
    fn search_never_returns_hidden_products(query in "[a-zA-Z ]{0,20}") {
        let engine = engine();
        for product in engine.search(&query, &SearchFilters::new()) {
            prop_assert!(product.stock > 0 || product.featured);
        }
    }
}
