// Build-phase benchmarks for lastrec

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lastrec::record::{Row, Value};
use lastrec::{ColumnMetadata, ColumnType, LastRecordMap, Options, RecordMetadata};
use rand::Rng;
use std::hint::black_box;

fn metadata() -> RecordMetadata {
    RecordMetadata::new(vec![
        ColumnMetadata::new("id", ColumnType::Long),
        ColumnMetadata::new("price", ColumnType::Double),
        ColumnMetadata::new("qty", ColumnType::Int),
        ColumnMetadata::new("ts", ColumnType::Date),
    ])
    .unwrap()
}

fn rows(count: usize, distinct: i64) -> Vec<Row> {
    let mut rng = rand::rng();
    (0..count)
        .map(|i| {
            Row::new(vec![
                Value::Long(rng.random_range(0..distinct)),
                Value::Double(rng.random::<f64>() * 100.0),
                Value::Int(rng.random_range(1..1000)),
                Value::Date(i as i64),
            ])
        })
        .collect()
}

fn benchmark_put_distinct(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_distinct");
    let metadata = metadata();

    for size in [1000, 10000, 100000].iter() {
        let rows: Vec<Row> = (0..*size as i64)
            .map(|i| {
                Row::new(vec![Value::Long(i), Value::Double(1.0), Value::Int(1), Value::Date(i)])
            })
            .collect();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| {
                let mut map =
                    LastRecordMap::new(&metadata, &metadata, &["id"], &["id"], &Options::default())
                        .unwrap();
                for row in rows {
                    map.put(row).unwrap();
                }
                black_box(map.len());
                map.close();
            });
        });
    }

    group.finish();
}

fn benchmark_put_overwrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_overwrite");
    let metadata = metadata();

    for distinct in [10, 1000].iter() {
        let rows = rows(100_000, *distinct);

        group.throughput(Throughput::Elements(rows.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(distinct), &rows, |b, rows| {
            let mut map =
                LastRecordMap::new(&metadata, &metadata, &["id"], &["id"], &Options::default())
                    .unwrap();
            b.iter(|| {
                map.reset();
                for row in rows {
                    map.put(row).unwrap();
                }
                black_box(map.len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_put_distinct, benchmark_put_overwrite);
criterion_main!(benches);
