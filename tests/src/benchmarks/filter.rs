//! # Filter Benchmarks
//!
//! - Hash derivation per element length
//! - `add` / `might_contain` across hash counts
//! - `might_contain` across filter sizes (should be flat)

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use rand::Rng;

use checksum_bloom::hash_functions::hash_codes;
use checksum_bloom::BloomFilter;

fn random_keys(count: usize, len: usize) -> Vec<Vec<u8>> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| (0..len).map(|_| rng.gen()).collect())
        .collect()
}

pub fn bench_hash_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("checksum-bloom-hash-codes");

    for len in [8usize, 64, 512] {
        let key = random_keys(1, len).remove(0);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("k7", len), &key, |b, key| {
            b.iter(|| black_box(hash_codes(black_box(key), 7)))
        });
    }

    group.finish();
}

pub fn bench_insert_and_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("checksum-bloom-ops");
    let keys = random_keys(1000, 32);

    for k in [1usize, 3, 7, 16] {
        group.throughput(Throughput::Elements(keys.len() as u64));

        group.bench_with_input(BenchmarkId::new("add", k), &k, |b, &k| {
            b.iter(|| {
                let mut filter = BloomFilter::new(1 << 16, k).unwrap();
                for key in &keys {
                    filter.add(key);
                }
                black_box(filter.bits_set())
            })
        });

        let mut filter = BloomFilter::new(1 << 16, k).unwrap();
        for key in &keys {
            filter.add(key);
        }
        group.bench_with_input(BenchmarkId::new("might_contain", k), &filter, |b, filter| {
            b.iter(|| keys.iter().filter(|key| filter.might_contain(*key)).count())
        });
    }

    group.finish();
}

pub fn bench_query_vs_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("checksum-bloom-size");
    let keys = random_keys(100, 32);

    for m in [1_000usize, 100_000, 10_000_000] {
        let mut filter = BloomFilter::new(m, 3).unwrap();
        for key in &keys {
            filter.add(key);
        }
        group.bench_with_input(BenchmarkId::new("might_contain", m), &filter, |b, filter| {
            b.iter(|| black_box(filter.might_contain(&keys[0])))
        });
    }

    group.finish();
}
