//! Benchmarks for the MSB-first bit stream codec.
//!
//! Measures throughput of field packing/unpacking across a mix of widths,
//! which is the hot path of the classic token codec.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use oxilz_core::bitstream::{BitReader, BitWriter};
use std::hint::black_box;

/// Widths that mirror the classic token layout (16 + 8 + 8).
const TOKEN_WIDTHS: [u8; 3] = [16, 8, 8];

fn bench_writer(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitwriter");

    for &tokens in &[1_000usize, 100_000] {
        group.throughput(Throughput::Bytes((tokens * 4) as u64));
        group.bench_function(format!("{tokens}_tokens"), |b| {
            b.iter(|| {
                let mut writer = BitWriter::with_capacity(tokens * 4);
                for i in 0..tokens {
                    for &w in &TOKEN_WIDTHS {
                        writer.write_bits(black_box(i as u32), w);
                    }
                }
                black_box(writer.into_vec());
            });
        });
    }

    group.finish();
}

fn bench_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitreader");

    for &tokens in &[1_000usize, 100_000] {
        let mut writer = BitWriter::with_capacity(tokens * 4);
        for i in 0..tokens {
            for &w in &TOKEN_WIDTHS {
                writer.write_bits(i as u32, w);
            }
        }
        let data = writer.into_vec();

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_function(format!("{tokens}_tokens"), |b| {
            b.iter(|| {
                let mut reader = BitReader::new(black_box(&data));
                while reader.has_remaining() {
                    for &w in &TOKEN_WIDTHS {
                        black_box(reader.read_bits(w).unwrap());
                    }
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_writer, bench_reader);
criterion_main!(benches);
