use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use relscope_core::catalog::{decode, resolve};
use relscope_core::connect::RawRow;

fn column_row() -> RawRow {
    vec![
        Some("appdb".to_string()),
        Some("public".to_string()),
        Some("users".to_string()),
        Some("email".to_string()),
        Some("2".to_string()),
        None,
        Some("NO".to_string()),
        Some("255".to_string()),
        Some("1020".to_string()),
        None,
        Some("varchar".to_string()),
        Some("2".to_string()),
    ]
}

fn bench_split_qualified(c: &mut Criterion) {
    c.bench_function("split_qualified bare", |b| {
        b.iter(|| resolve::split_qualified(black_box("users")))
    });
    c.bench_function("split_qualified qualified", |b| {
        b.iter(|| resolve::split_qualified(black_box("analytics.events")))
    });
}

fn bench_decode_column(c: &mut Criterion) {
    let row = column_row();
    c.bench_function("decode column row", |b| {
        b.iter(|| decode::column(black_box(&row)).unwrap())
    });
}

criterion_group!(benches, bench_split_qualified, bench_decode_column);
criterion_main!(benches);
