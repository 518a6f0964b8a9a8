//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```
//! use checksum_bloom::{BloomConfigBuilder, BloomFilter};
//!
//! let config = BloomConfigBuilder::new()
//!     .capacity(4096)
//!     .num_hash_functions(5)
//!     .build()
//!     .expect("valid config");
//!
//! let filter = BloomFilter::from_config(&config).expect("valid filter");
//! assert_eq!(filter.size_bits(), 4096);
//! ```

use std::fmt::Display;
use std::fs;
use std::path::Path;

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{FilterError, Result};

/// Default bit-array length
pub const DEFAULT_CAPACITY: usize = 1000;

/// Default number of hash functions
pub const DEFAULT_NUM_HASH_FUNCTIONS: usize = 3;

/// Largest bit-array length the backing storage can address
pub const MAX_CAPACITY: usize = BitSlice::<u64, Lsb0>::MAX_BITS;

/// Bloom filter configuration
///
/// `capacity` is the raw bit-array length, not an expected element count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    /// Number of addressable bits (m)
    pub capacity: usize,
    /// Hash codes derived per element (k)
    pub num_hash_functions: usize,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            num_hash_functions: DEFAULT_NUM_HASH_FUNCTIONS,
        }
    }
}

impl BloomConfig {
    /// Create a validated configuration from any integer types
    ///
    /// Negative or zero capacities, capacities above `MAX_CAPACITY` and
    /// hash counts below one are rejected.
    pub fn new<C, K>(capacity: C, num_hash_functions: K) -> Result<Self>
    where
        C: TryInto<usize> + Display + Copy,
        K: TryInto<usize> + Display + Copy,
    {
        let capacity = to_positive("capacity", capacity)?;
        let num_hash_functions = to_positive("num_hash_functions", num_hash_functions)?;
        let config = Self {
            capacity,
            num_hash_functions,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate an already-built configuration
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            warn!("Rejected filter configuration: capacity is 0");
            return Err(FilterError::invalid("capacity must be > 0, got 0"));
        }
        if self.capacity > MAX_CAPACITY {
            warn!(capacity = self.capacity, "Rejected filter configuration: capacity too large");
            return Err(FilterError::invalid(format!(
                "capacity must be <= {}, got {}",
                MAX_CAPACITY, self.capacity
            )));
        }
        if self.num_hash_functions == 0 {
            warn!("Rejected filter configuration: num_hash_functions is 0");
            return Err(FilterError::invalid("num_hash_functions must be >= 1, got 0"));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    ///
    /// Missing fields fall back to the defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: BloomConfig =
            serde_json::from_str(json).map_err(|e| FilterError::ConfigLoad(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| FilterError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }
}

fn to_positive<T>(name: &str, value: T) -> Result<usize>
where
    T: TryInto<usize> + Display + Copy,
{
    match value.try_into() {
        Ok(v) if v > 0 => Ok(v),
        _ => {
            warn!(field = name, value = %value, "Rejected filter configuration");
            Err(FilterError::invalid(format!(
                "{} must be a positive integer, got {}",
                name, value
            )))
        }
    }
}

/// Builder for BloomConfig with validation
#[derive(Default)]
pub struct BloomConfigBuilder {
    capacity: Option<usize>,
    num_hash_functions: Option<usize>,
}

impl BloomConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bit-array length
    pub fn capacity(mut self, bits: usize) -> Self {
        self.capacity = Some(bits);
        self
    }

    /// Set the number of hash functions
    pub fn num_hash_functions(mut self, k: usize) -> Self {
        self.num_hash_functions = Some(k);
        self
    }

    /// Build the BloomConfig, validating all parameters
    pub fn build(self) -> Result<BloomConfig> {
        let defaults = BloomConfig::default();

        let config = BloomConfig {
            capacity: self.capacity.unwrap_or(defaults.capacity),
            num_hash_functions: self
                .num_hash_functions
                .unwrap_or(defaults.num_hash_functions),
        };

        config.validate()?;
        Ok(config)
    }
}
