//! Benchmarks for tabvec-encode operations.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;
use tabvec_encode::DictEncoder;
use tabvec_primitives::{RowMap, Value};
use tabvec_traits::DictVectorize;

fn random_records(n_rows: usize, n_categories: usize) -> Vec<RowMap> {
    let mut rng = rand::thread_rng();
    (0..n_rows)
        .map(|_| {
            let mut row = RowMap::new();
            row.insert(
                "school".to_string(),
                Value::Str(format!("s{}", rng.gen_range(0..n_categories))),
            );
            row.insert("gpa".to_string(), Value::Num(rng.r#gen::<f64>() * 4.0));
            row.insert("credits".to_string(), Value::Num(rng.gen_range(0..200) as f64));
            row
        })
        .collect()
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");

    for size in [100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let records = random_records(size, 50);
            b.iter(|| {
                let mut enc = DictEncoder::new();
                enc.fit(black_box(&records)).unwrap();
                enc
            });
        });
    }

    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for size in [100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let records = random_records(size, 50);
            let mut enc = DictEncoder::new();
            enc.fit(&records).unwrap();
            b.iter(|| enc.transform(black_box(&records)).unwrap());
        });
    }

    group.finish();
}

fn bench_inverse_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse_transform");

    for size in [100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let records = random_records(size, 50);
            let mut enc = DictEncoder::new();
            enc.fit(&records).unwrap();
            let matrix = enc.transform(&records).unwrap();
            b.iter(|| enc.inverse_transform(black_box(matrix.view())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fit, bench_transform, bench_inverse_transform);

criterion_main!(benches);
