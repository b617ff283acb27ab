use catalog_search::{Product, SearchEngine, SearchFilters};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const NAMES: &[&str] = &[
    "Vestido", "Camisa", "Pantalón", "Remera", "Campera", "Zapatilla", "Bolso", "Gorro",
];
const COLORS: &[&str] = &["Negro", "Azul Marino", "Fucsia", "Verde Oliva", "Beige"];

/// Catalog of `count` products with rotating names, colors and stock.
fn setup_engine(count: usize) -> SearchEngine {
    let engine = SearchEngine::default();
    engine.initialize((0..count).map(|i| {
        Product::new(
            format!("p-{i}"),
            format!("{} Modelo {i}", NAMES[i % NAMES.len()]),
        )
        .with_description("Prenda de temporada con terminaciones a mano")
        .with_stock((i % 7) as i64)
        .with_featured(i % 13 == 0)
        .with_colors([COLORS[i % COLORS.len()]])
        .with_sizes([("M", 2), ("Large", 1)])
        .with_category(format!("cat-{}", i % 5))
    }));
    engine
}

/// Benchmark search across catalog sizes
fn bench_search_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_scale");

    for size in [1_000usize, 10_000, 50_000] {
        let engine = setup_engine(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &engine, |b, engine| {
            b.iter(|| engine.search(black_box("vestido negro"), &SearchFilters::new()))
        });
    }

    group.finish();
}

/// Benchmark the cost of filters and fuzzy-only queries
fn bench_search_shapes(c: &mut Criterion) {
    let engine = setup_engine(10_000);
    let filters = SearchFilters::new()
        .with_color("rosado")
        .with_size("grande")
        .with_category("cat-2");

    let mut group = c.benchmark_group("search_shapes");
    group.bench_function("plain", |b| {
        b.iter(|| engine.search(black_box("campera"), &SearchFilters::new()))
    });
    group.bench_function("filtered", |b| {
        b.iter(|| engine.search(black_box("campera"), black_box(&filters)))
    });
    group.bench_function("misspelled", |b| {
        b.iter(|| engine.search(black_box("zapatila"), &SearchFilters::new()))
    });
    group.finish();
}

fn bench_autocomplete(c: &mut Criterion) {
    let engine = setup_engine(10_000);
    c.bench_function("get_autocomplete", |b| {
        b.iter(|| engine.get_autocomplete(black_box("cam"), 10))
    });
}

criterion_group!(benches, bench_search_scale, bench_search_shapes, bench_autocomplete);
criterion_main!(benches);
