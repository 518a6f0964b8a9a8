//! Occupancy snapshots for Bloom filters
//!
//! ## Usage
//!
//! ```
//! use checksum_bloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new(1000, 3).unwrap();
//! filter.add("hello");
//!
//! let stats = filter.stats();
//! assert_eq!(stats.insertions, 1);
//! println!("{}", stats.to_json());
//! ```

use serde::Serialize;

use crate::domain::parameters::{calculate_fpr, fill_ratio};

/// Point-in-time view of a filter's occupancy
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilterStats {
    /// Filter size in bits (m)
    pub size_bits: usize,
    /// Number of hash functions (k)
    pub hash_count: usize,
    /// Number of `add` calls (n)
    pub insertions: usize,
    /// Bits currently set
    pub bits_set: usize,
    /// `bits_set / size_bits`
    pub fill_ratio: f64,
    /// (1 - e^(-kn/m))^k
    pub estimated_fpr: f64,
}

impl FilterStats {
    pub(crate) fn new(
        size_bits: usize,
        hash_count: usize,
        insertions: usize,
        bits_set: usize,
    ) -> Self {
        Self {
            size_bits,
            hash_count,
            insertions,
            bits_set,
            fill_ratio: fill_ratio(bits_set, size_bits),
            estimated_fpr: calculate_fpr(size_bits, insertions, hash_count),
        }
    }

    /// Render the snapshot as a JSON object
    pub fn to_json(&self) -> String {
        // Plain numeric fields cannot fail to serialize
        serde_json::to_string(self).unwrap_or_default()
    }
}
