//! Round-trip benchmarks for the classic codec.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Text-like data with plenty of back-references.
fn text_like(size: usize) -> Vec<u8> {
    let text = b"The quick brown fox jumps over the lazy dog. ";
    let mut data = Vec::with_capacity(size);
    while data.len() < size {
        let chunk = (size - data.len()).min(text.len());
        data.extend_from_slice(&text[..chunk]);
    }
    data
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz77_compress");

    for &size in &[4 * 1024usize, 64 * 1024] {
        let data = text_like(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("{}KB", size / 1024), |b| {
            b.iter(|| black_box(oxilz_lz77::compress(black_box(&data), 4096, 32).unwrap()));
        });
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz77_decompress");

    for &size in &[4 * 1024usize, 64 * 1024] {
        let data = text_like(size);
        let compressed = oxilz_lz77::compress(&data, 4096, 32).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("{}KB", size / 1024), |b| {
            b.iter(|| black_box(oxilz_lz77::decompress(black_box(&compressed)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
