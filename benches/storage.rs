//! Benchmarks for the newline-delimited file format.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use linewise::storage::{decode, encode};

fn bench_encode(c: &mut Criterion) {
    let lines: Vec<String> = (0..10_000).map(|i| format!("line number {i}")).collect();
    c.bench_function("encode_10k", |b| b.iter(|| encode(black_box(lines.as_slice()))));
}

fn bench_decode(c: &mut Criterion) {
    let lines: Vec<String> = (0..10_000).map(|i| format!("line number {i}")).collect();
    let raw = encode(lines.as_slice()).into_bytes();
    c.bench_function("decode_10k", |b| {
        b.iter(|| decode(black_box(&raw)).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
