// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! EC memory map generator CLI
//!
//! ```bash
//! # Writes structure.rs and ecmemory.h into the current directory
//! ec-memory-gen schemas/ec_memory.yaml
//!
//! # Show per-record sizes
//! RUST_LOG=ec_memory_gen=debug ec-memory-gen schemas/ec_memory.yaml
//! ```

use clap::Parser;
use ec_memory_gen::{GeneratorConfig, RunReport};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "ec-memory-gen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate packed Rust and C structs from an EC memory map schema")]
struct Cli {
    /// YAML schema describing the memory map records
    #[arg(value_name = "SCHEMA")]
    schema: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ec_memory_gen=error"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match generate(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns whether every output was written.
fn generate(cli: &Cli) -> anyhow::Result<bool> {
    let config = GeneratorConfig::default();
    let report = ec_memory_gen::run(&config, &cli.schema)?;
    print_report(&report);
    Ok(report.all_written())
}

fn print_report(report: &RunReport) {
    for warning in report.alignment.warnings() {
        println!("{warning}");
    }

    for outcome in &report.writes {
        match &outcome.result {
            Ok(()) => println!(
                "[OK] {} code has been written to {}",
                outcome.target.profile().language(),
                outcome.path.display()
            ),
            Err(e) => eprintln!("[ERROR] {e}"),
        }
    }
}
