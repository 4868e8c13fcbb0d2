//! Insight engine performance benchmarks.
//!
//! Measures per-dataset analysis cost, from in-memory datasets up to
//! full file loading.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use tempfile::NamedTempFile;
use vizora::{Dataset, EngineConfig, InsightEngine, Record, Value, Vizora};

/// Generate a dataset with a trending, a noisy and a sparse numeric column
/// plus a label column. `extra` adds further noisy numeric columns.
fn generate_dataset(rows: usize, extra: usize) -> Dataset {
    let mut rng = StdRng::seed_from_u64(42);

    let mut columns = vec![
        "label".to_string(),
        "trend".to_string(),
        "noise".to_string(),
        "sparse".to_string(),
    ];
    columns.extend((0..extra).map(|i| format!("metric_{}", i)));

    let records: Vec<Record> = (0..rows)
        .map(|row| {
            let mut record = Record::new();
            record.insert("label".to_string(), Value::Text(format!("row_{}", row)));
            record.insert(
                "trend".to_string(),
                Value::Number(row as f64 * 2.5 + rng.gen_range(-1.0..1.0)),
            );
            // Occasional spikes give the outlier rule something to find
            let noise = if row % 97 == 0 { 500.0 } else { rng.gen_range(0.0..50.0) };
            record.insert("noise".to_string(), Value::Number(noise));
            if row % 4 != 0 {
                record.insert("sparse".to_string(), Value::Number(rng.gen_range(0.0..10.0)));
            }
            for i in 0..extra {
                record.insert(
                    format!("metric_{}", i),
                    Value::Number(rng.gen_range(-100.0..100.0)),
                );
            }
            record
        })
        .collect();

    Dataset::new(columns, records).unwrap()
}

/// Render a dataset as CSV text.
fn to_csv(dataset: &Dataset) -> String {
    let mut data = dataset.columns().join(",");
    data.push('\n');
    for record in dataset.records() {
        let cells: Vec<String> = dataset
            .columns()
            .iter()
            .map(|c| record.get(c).map(|v| v.to_string()).unwrap_or_default())
            .collect();
        data.push_str(&cells.join(","));
        data.push('\n');
    }
    data
}

/// Benchmark engine analysis over in-memory datasets.
fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    for rows in [10, 100, 1_000, 10_000].iter() {
        let dataset = generate_dataset(*rows, 0);

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &dataset, |b, ds| {
            let engine = InsightEngine::new();
            b.iter(|| black_box(engine.analyze(ds).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark wide datasets, where correlation pairs dominate.
fn bench_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide");
    group.sample_size(20);

    for extra in [4, 16, 32].iter() {
        let dataset = generate_dataset(2_000, *extra);

        group.bench_with_input(BenchmarkId::new("sequential", extra), &dataset, |b, ds| {
            let engine = InsightEngine::new();
            b.iter(|| black_box(engine.analyze(ds).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("parallel", extra), &dataset, |b, ds| {
            let engine =
                InsightEngine::with_config(EngineConfig::default().with_parallel_threshold(2));
            b.iter(|| black_box(engine.analyze(ds).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark loading and analyzing a file end to end.
fn bench_full_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_analysis");

    for rows in [100, 1_000, 10_000].iter() {
        let data = to_csv(&generate_dataset(*rows, 2));

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("csv_rows", rows), &data, |b, data| {
            b.iter_with_setup(
                || {
                    let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
                    temp.write_all(data.as_bytes()).unwrap();
                    temp
                },
                |temp| black_box(Vizora::new().analyze_file(temp.path()).unwrap()),
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_engine, bench_wide, bench_full_analysis);
criterion_main!(benches);
