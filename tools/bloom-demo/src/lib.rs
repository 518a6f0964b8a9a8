//! bloom-demo: one demonstration run of the checksum-bloom filter
//!
//! Builds a filter, adds a few elements, queries a few elements, and prints
//! one boolean per query on stdout.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use checksum_bloom::{BloomConfig, BloomFilter};

/// bloom-demo: checksum-bloom demonstration run
#[derive(Parser, Debug)]
#[command(name = "bloom-demo")]
#[command(about = "Add elements to a Bloom filter and print membership answers")]
pub struct Args {
    /// Bit-array length (overrides the config file)
    #[arg(short, long, allow_negative_numbers = true)]
    pub capacity: Option<i64>,

    /// Number of hash functions (overrides the config file)
    #[arg(short = 'k', long = "hashes", allow_negative_numbers = true)]
    pub num_hash_functions: Option<i64>,

    /// JSON config file with `capacity` and `num_hash_functions`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Elements to add
    #[arg(short, long = "add", num_args = 1.., default_values = ["hello", "world"])]
    pub add: Vec<String>,

    /// Elements to query
    #[arg(short, long = "query", num_args = 1.., default_values = ["hello", "world", "goodbye"])]
    pub query: Vec<String>,

    /// Print a JSON stats line after the answers
    #[arg(long)]
    pub stats: bool,
}

/// Resolve the effective configuration: defaults, then file, then flags
pub fn resolve_config(args: &Args) -> Result<BloomConfig> {
    let base = match &args.config {
        Some(path) => BloomConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => BloomConfig::default(),
    };

    // Only flags that were given replace file values.
    let mut config = base;
    if let Some(capacity) = args.capacity {
        config = BloomConfig::new(capacity, config.num_hash_functions)
            .context("invalid filter parameters")?;
    }
    if let Some(num_hash_functions) = args.num_hash_functions {
        config = BloomConfig::new(config.capacity, num_hash_functions)
            .context("invalid filter parameters")?;
    }

    Ok(config)
}

/// Run the demonstration, writing one answer per query to `out`
pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let config = resolve_config(args)?;
    let mut filter = BloomFilter::from_config(&config)?;
    info!(
        capacity = config.capacity,
        num_hash_functions = config.num_hash_functions,
        adds = args.add.len(),
        queries = args.query.len(),
        "Running demo"
    );

    for element in &args.add {
        filter.add(element);
    }

    for element in &args.query {
        writeln!(out, "{}", filter.might_contain(element))?;
    }

    if args.stats {
        writeln!(out, "{}", filter.stats().to_json())?;
    }

    Ok(())
}
