// benches/gcm.rs
//! AES-256-GCM throughput — seal and the second-seal "decrypt" pass over a
//! fixed 1 MiB buffer
//!
//! The decrypt side reuses `decrypt_gcm`, which re-seals its input under a
//! fresh nonce instead of opening it. That keeps the decrypt-side numbers
//! comparable to the encrypt side; see `modes::gcm` for the full caveat.

use aesbench_rs::consts::BENCH_DATA_SIZE;
use aesbench_rs::crypto::rng::fill_random;
use aesbench_rs::{decrypt_gcm, encrypt_gcm, BenchContext};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

fn bench_gcm(c: &mut Criterion) {
    let ctx = BenchContext::generate().expect("random source unavailable");

    let mut data = vec![0u8; BENCH_DATA_SIZE];
    fill_random(&mut data).expect("random source unavailable");

    // Pre-seal once for the decrypt-side input (1 MiB + 16-byte tag).
    let sealed = encrypt_gcm(&ctx, &data).expect("pre-seal failed");

    let mut group = c.benchmark_group("gcm");
    group.throughput(Throughput::Bytes(BENCH_DATA_SIZE as u64));

    group.bench_function("encrypt", |b| {
        b.iter(|| encrypt_gcm(black_box(&ctx), black_box(&data)).unwrap())
    });

    group.bench_function("decrypt", |b| {
        b.iter(|| decrypt_gcm(black_box(&ctx), black_box(&sealed)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_gcm);
criterion_main!(benches);
