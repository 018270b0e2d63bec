use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shopfront_catalog::{
    CartStore, CartStoreError, CatalogPipeline, CatalogSettings, FilterState, Product, RenderMode,
    SortMode, apply_filters, apply_sort,
};
use shopfront_core::{Price, ProductId};

/// The benchmarks never touch the cart.
struct NullCartStore;

impl CartStore for NullCartStore {
    fn read(&self) -> Result<Vec<ProductId>, CartStoreError> {
        Ok(Vec::new())
    }

    fn write(&self, _items: &[ProductId]) -> Result<(), CartStoreError> {
        Ok(())
    }
}

fn synthetic_catalog(size: usize) -> Vec<Product> {
    const CATEGORIES: [&str; 6] = ["Audio", "Books", "Garden", "Home", "Kitchen", "Toys"];

    (0..size)
        .map(|i| {
            let actual = 10.0 + (i * 37 % 990) as f64;
            let discount = (i % 3 == 0).then(|| actual * 0.8);
            Product {
                id: ProductId::new(i as u64),
                name: format!("Product {i}"),
                image_url: format!("/img/{i}.png"),
                main_category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                actual_price: Price::new(actual).unwrap(),
                discount_price: discount.map(|d| Price::new(d).unwrap()),
                rating: (i % 11) as f64 / 2.0,
            }
        })
        .collect()
}

fn bench_filter_and_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_and_sort");

    let filters = FilterState {
        categories: ["Home".to_string(), "Kitchen".to_string()].into_iter().collect(),
        price_from: Some(50.0),
        price_to: Some(700.0),
        discount_only: false,
    };

    for size in [100usize, 1_000, 10_000].iter() {
        let products = synthetic_catalog(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("price_ascending", size), &products, |b, products| {
            b.iter(|| {
                let filtered = apply_filters(black_box(products), &filters);
                apply_sort(&filtered, SortMode::PriceAscending)
            });
        });
        group.bench_with_input(BenchmarkId::new("rating_descending", size), &products, |b, products| {
            b.iter(|| {
                let filtered = apply_filters(black_box(products), &filters);
                apply_sort(&filtered, SortMode::RatingDescending)
            });
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let pipeline = CatalogPipeline::with_products(
        synthetic_catalog(5_000),
        NullCartStore,
        CatalogSettings::default(),
    );

    group.bench_function("first_page", |b| {
        b.iter(|| pipeline.render(black_box(RenderMode::Replace)));
    });

    group.finish();
}

criterion_group!(benches, bench_filter_and_sort, bench_render);
criterion_main!(benches);
