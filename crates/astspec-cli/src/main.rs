#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;

mod args;
mod driver;
mod tracing_config;

fn main() -> Result<()> {
    // Initialize tracing if ASTSPEC_LOG or RUST_LOG is set (zero cost
    // otherwise).
    tracing_config::init_tracing();

    let args = args::CliArgs::parse();
    driver::run(&args)
}
