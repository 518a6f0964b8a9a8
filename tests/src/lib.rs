//! # checksum-bloom Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmark bodies
//! │   └── filter.rs
//! │
//! └── integration/      # End-to-end scenarios
//!     ├── flows.rs          # Demo run, config files, element types
//!     └── false_positives.rs# Statistical regression guards
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p checksum-bloom-tests
//!
//! # By category
//! cargo test -p checksum-bloom-tests integration::
//!
//! # Benchmarks
//! cargo bench -p checksum-bloom-tests
//! ```
