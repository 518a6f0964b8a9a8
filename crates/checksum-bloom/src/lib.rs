//! # checksum-bloom
//!
//! Fixed-size Bloom filter used as a cheap pre-filter in front of an
//! expensive exact lookup.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure filter logic
//!   - `BloomFilter`: Bit array plus insert/query operations
//!   - `hash_functions`: FNV-1a, CRC-32 and Adler-32 with multiply-add mixing
//!   - `Element`: Byte rendering for anything that can be inserted
//!   - `BloomConfig`: Configuration with validation
//!   - `BloomConfigBuilder`: Fluent builder for configuration
//!
//! - **Metrics** (`metrics`): `FilterStats` occupancy snapshots
//!
//! ## Invariants
//!
//! - **No false negatives**: if inserted, `might_contain()` MUST return true
//! - Bits are never cleared; there is no delete, resize or merge
//! - `m > 0` and `k >= 1`, checked at construction
//!
//! ## Hash Overflow Policy
//!
//! Bit positions are `|h| mod m`. A derived hash of `i32::MIN` has no
//! positive `i32` magnitude, so positions use `i32::unsigned_abs`, which maps
//! it to `2^31 mod m`.
//!
//! ## Usage Example
//!
//! ```
//! use checksum_bloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new(1000, 3)?;
//! filter.add("hello");
//! filter.add("world");
//!
//! assert!(filter.might_contain("hello"));
//! assert!(filter.might_contain("world"));
//! assert!(!filter.might_contain("goodbye"));
//! # Ok::<(), checksum_bloom::FilterError>(())
//! ```

pub mod domain;
pub mod error;
pub mod metrics;

// Re-exports for convenience
pub use domain::hash_functions;
pub use domain::{BloomConfig, BloomConfigBuilder, BloomFilter, Element};
pub use error::{FilterError, Result};
pub use metrics::FilterStats;
