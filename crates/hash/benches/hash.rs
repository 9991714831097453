// Copyright 2025 Batchsha Contributors.

use batchsha_hash::{digest::Digest, Sha256};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{thread_rng, RngCore};

fn bench_sha256(c: &mut Criterion) {
	let mut group = c.benchmark_group("SHA-256");

	let mut rng = thread_rng();

	const N: usize = 1 << 16;
	let mut data = vec![0u8; N];
	rng.fill_bytes(&mut data);

	group.throughput(Throughput::Bytes(N as u64));
	group.bench_function("Sha256", |bench| bench.iter(|| Sha256::digest(&data)));

	group.finish()
}

criterion_group!(hash, bench_sha256);
criterion_main!(hash);
