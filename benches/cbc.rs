// benches/cbc.rs
//! AES-256-CBC throughput — encrypt and decrypt over a fixed 1 MiB buffer

use aesbench_rs::consts::BENCH_DATA_SIZE;
use aesbench_rs::crypto::rng::fill_random;
use aesbench_rs::{decrypt_cbc, encrypt_cbc, BenchContext};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

fn bench_cbc(c: &mut Criterion) {
    // One context for the whole run — key schedule setup still happens
    // inside each timed call, matching the measured workload.
    let ctx = BenchContext::generate().expect("random source unavailable");

    let mut data = vec![0u8; BENCH_DATA_SIZE];
    fill_random(&mut data).expect("random source unavailable");

    // Pre-encrypt once, outside the timed loop, for the decrypt side.
    let encrypted = encrypt_cbc(&ctx, &data).expect("pre-encryption failed");

    let mut group = c.benchmark_group("cbc");
    group.throughput(Throughput::Bytes(BENCH_DATA_SIZE as u64));

    group.bench_function("encrypt", |b| {
        b.iter(|| encrypt_cbc(black_box(&ctx), black_box(&data)).unwrap())
    });

    group.bench_function("decrypt", |b| {
        b.iter(|| decrypt_cbc(black_box(&ctx), black_box(&encrypted)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_cbc);
criterion_main!(benches);
