//! Estimator benchmarks over the catalog designs and synthetic schemas.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use docsize_bench::{synthetic_config, synthetic_node_count, synthetic_schema, synthetic_statistics};
use docsize_lib::prelude::*;
use std::hint::black_box;

fn catalog_benchmark(c: &mut Criterion) {
    let catalog = Catalog::global();
    let estimator = SizeEstimator::new(catalog.size_config().clone());
    let stats = catalog.statistics();

    let mut group = c.benchmark_group("catalog");

    group.bench_function("compare_databases", |b| {
        b.iter(|| estimator.compare_databases(black_box(catalog.designs()), stats))
    });

    for name in ["product", "product_with_stock", "product_with_orderlines"] {
        let Some(schema) = catalog.schema(name) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("analyze_document", name), schema, |b, schema| {
            b.iter(|| estimator.analyze_document(black_box(schema), stats))
        });
    }

    group.finish();
}

fn synthetic_benchmark(c: &mut Criterion) {
    let estimator = SizeEstimator::new(synthetic_config());
    let stats = synthetic_statistics(4.0);

    let mut group = c.benchmark_group("document_size");

    for (width, depth) in [(8, 2), (32, 4), (128, 8)] {
        let schema = synthetic_schema(width, depth);
        group.throughput(Throughput::Elements(synthetic_node_count(width, depth) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{depth}")),
            &schema,
            |b, schema| b.iter(|| estimator.document_size(black_box(schema), &stats)),
        );
    }

    group.finish();
}

criterion_group!(benches, catalog_benchmark, synthetic_benchmark);
criterion_main!(benches);
