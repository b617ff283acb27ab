use std::error::Error;
use std::fs;
use std::path::PathBuf;

use catalog_search::{
    DEFAULT_AUTOCOMPLETE_LIMIT, Product, SearchEngine, SearchEngineConfig, SearchFilters,
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: catalog-search <catalog.json> <query> [--config <file.yaml>] \
[--color <c>] [--size <s>] [--category <id>] [--limit <n>]";

struct Args {
    catalog: PathBuf,
    query: String,
    config: Option<PathBuf>,
    filters: SearchFilters,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut positional = Vec::new();
    let mut config = None;
    let mut filters = SearchFilters::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}\n{USAGE}"))
        };
        match arg.as_str() {
            "--config" => config = Some(PathBuf::from(value("--config")?)),
            "--color" => filters = filters.with_color(value("--color")?),
            "--size" => filters = filters.with_size(value("--size")?),
            "--category" => filters = filters.with_category(value("--category")?),
            "--limit" => filters = filters.with_max_results(value("--limit")?.parse()?),
            "-h" | "--help" => return Err(USAGE.into()),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let (Some(catalog), Some(query)) = (positional.next(), positional.next()) else {
        return Err(USAGE.into());
    };
    Ok(Args {
        catalog: PathBuf::from(catalog),
        query,
        config,
        filters,
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;

    let cfg = match &args.config {
        Some(path) => SearchEngineConfig::from_file(path)?,
        None => SearchEngineConfig::default(),
    };
    let engine = SearchEngine::new(cfg)?;

    let products: Vec<Product> = serde_json::from_str(&fs::read_to_string(&args.catalog)?)?;
    engine.initialize(products);

    let hits = engine.search_scored(&args.query, &args.filters);
    println!("{} result(s) for {:?}", hits.len(), args.query);
    for (rank, hit) in hits.iter().enumerate() {
        println!(
            "{:>3}. {:<40} score={:<8.1} stock={:<4} id={}",
            rank + 1,
            hit.product.name,
            hit.score,
            hit.product.stock,
            hit.product.id
        );
    }

    if let Some(last_word) = args.query.split_whitespace().last() {
        let suggestions = engine.get_autocomplete(last_word, DEFAULT_AUTOCOMPLETE_LIMIT);
        if !suggestions.is_empty() {
            println!("suggestions: {}", suggestions.join(", "));
        }
    }

    Ok(())
}
