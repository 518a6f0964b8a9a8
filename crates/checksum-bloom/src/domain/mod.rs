//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Core Bloom filter implementation
//! - Hash family (FNV-1a, CRC-32, Adler-32, multiply-add mixing)
//! - Element byte rendering
//! - Configuration
//! - False positive rate estimation
//!
//! RULES:
//! - No I/O outside config loading
//! - No async code

pub mod bloom_filter;
pub mod config;
pub mod element;
pub mod hash_functions;
pub mod parameters;

pub use bloom_filter::BloomFilter;
pub use config::{
    BloomConfig, BloomConfigBuilder, DEFAULT_CAPACITY, DEFAULT_NUM_HASH_FUNCTIONS, MAX_CAPACITY,
};
pub use element::Element;
pub use parameters::calculate_fpr;
