//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - `m > 0` and `k >= 1` for the lifetime of a filter
//! - Bits are only ever set, never cleared
//! - No false negatives: if inserted, `might_contain()` MUST return true

use std::fmt::Display;

use bitvec::prelude::*;
use tracing::debug;

use super::config::BloomConfig;
use super::element::Element;
use super::hash_functions::{bit_index, hash_codes};
use super::parameters::calculate_fpr;
use crate::error::Result;
use crate::metrics::FilterStats;

/// Bloom filter for probabilistic membership testing
///
/// A fixed-size bit array plus a fixed hash family (FNV-1a, CRC-32,
/// Adler-32 and multiply-add mixes of those). False positives are possible,
/// false negatives are not.
///
/// There is no internal locking. `add` needs `&mut self`; share a filter
/// across threads behind a lock such as `RwLock`.
#[derive(Debug)]
pub struct BloomFilter {
    /// Bit array storing the filter state
    bits: BitVec<u64, Lsb0>,
    /// Number of hash functions (k)
    k: usize,
    /// Size in bits (m)
    m: usize,
    /// Number of `add` calls (n), reporting only
    n: usize,
}

impl BloomFilter {
    /// Create a new Bloom filter
    ///
    /// # Arguments
    /// * `capacity` - Size in bits (m), must be positive
    /// * `num_hash_functions` - Number of hash codes per element (k), must be >= 1
    ///
    /// # Errors
    /// `FilterError::InvalidConfiguration` if either argument is out of range.
    pub fn new<C, K>(capacity: C, num_hash_functions: K) -> Result<Self>
    where
        C: TryInto<usize> + Display + Copy,
        K: TryInto<usize> + Display + Copy,
    {
        let config = BloomConfig::new(capacity, num_hash_functions)?;
        Self::from_config(&config)
    }

    /// Create a Bloom filter from a configuration
    pub fn from_config(config: &BloomConfig) -> Result<Self> {
        config.validate()?;

        let m = config.capacity;
        let k = config.num_hash_functions;
        debug!(size_bits = m, hash_count = k, "Created Bloom filter");

        Ok(Self {
            bits: bitvec![u64, Lsb0; 0; m],
            k,
            m,
            n: 0,
        })
    }

    /// Insert an element into the filter
    ///
    /// After insertion, `might_contain(element)` is guaranteed to return true.
    /// Inserting the same element again leaves the bits unchanged.
    pub fn add<E: Element + ?Sized>(&mut self, element: &E) {
        let bytes = element.element_bytes();
        for hash in hash_codes(&bytes, self.k) {
            self.bits.set(bit_index(hash, self.m), true);
        }
        self.n = self.n.saturating_add(1);
    }

    /// Test if an element might be in the filter
    ///
    /// Returns:
    /// - `true` if the element might be in the set (could be false positive)
    /// - `false` if the element is definitely NOT in the set
    ///
    /// Stops at the first unset bit.
    pub fn might_contain<E: Element + ?Sized>(&self, element: &E) -> bool {
        let bytes = element.element_bytes();
        hash_codes(&bytes, self.k)
            .into_iter()
            .all(|hash| self.bits[bit_index(hash, self.m)])
    }

    /// Get the filter size in bits
    pub fn size_bits(&self) -> usize {
        self.m
    }

    /// Get the number of hash functions
    pub fn hash_count(&self) -> usize {
        self.k
    }

    /// Get the number of `add` calls, duplicates included
    pub fn insertions(&self) -> usize {
        self.n
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Estimated false positive rate for the current insertion count
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k
    pub fn estimated_false_positive_rate(&self) -> f64 {
        calculate_fpr(self.m, self.n, self.k)
    }

    /// Snapshot of the filter's occupancy
    pub fn stats(&self) -> FilterStats {
        FilterStats::new(self.m, self.k, self.n, self.bits_set())
    }
}
