//! bloom-demo: checksum-bloom demonstration run
//!
//! Logs go to stderr (`RUST_LOG` to adjust), answers go to stdout.

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bloom_demo::{run, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let stdout = io::stdout();
    run(&args, &mut stdout.lock())
}
