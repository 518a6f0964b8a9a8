//! # checksum-bloom Benchmarks
//!
//! | Operation | Claim |
//! |-----------|-------|
//! | `add` | O(k), independent of m |
//! | `might_contain` | O(k), short-circuits on first clear bit |

use criterion::{criterion_group, criterion_main};

use checksum_bloom_tests::benchmarks::filter::{
    bench_hash_derivation, bench_insert_and_query, bench_query_vs_size,
};

criterion_group!(
    benches,
    bench_hash_derivation,
    bench_insert_and_query,
    bench_query_vs_size,
);

criterion_main!(benches);
