// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! EC memory map generator
//!
//! Turns a YAML schema of record layouts into packed struct definitions for
//! Rust (`structure.rs`) and C (`ecmemory.h`), both stamped with the same
//! `EC_MEMMAP_VERSION`.
//!
//! # Pipeline
//!
//! 1. **Load**: parse the schema, preserving record and field order
//! 2. **Check**: warn about records whose size is not a multiple of 4 bytes
//! 3. **Render**: one pass per target language
//! 4. **Write**: each output file independently
//!
//! # Example
//!
//! ```rust,ignore
//! use ec_memory_gen::{run, GeneratorConfig};
//!
//! let report = run(&GeneratorConfig::default(), "ec_memory.yaml")?;
//! for warning in report.alignment.warnings() {
//!     println!("{warning}");
//! }
//! ```

pub mod alignment;
pub mod codegen;
pub mod config;
pub mod error;
pub mod schema;
pub mod writer;

pub use alignment::{
    check_alignment, AlignmentChecker, AlignmentReport, AlignmentWarning, NestedSizing,
};
pub use codegen::{generate, render, GeneratedFile, LanguageProfile, Target};
pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use error::{GenError, Result};
pub use schema::{Field, PrimitiveType, Record, Schema, TypeToken};
pub use writer::{write_outputs, WriteOutcome};

use std::path::Path;

/// Outcome of a full generation run.
#[derive(Debug)]
pub struct RunReport {
    pub alignment: AlignmentReport,
    pub writes: Vec<WriteOutcome>,
}

impl RunReport {
    pub fn all_written(&self) -> bool {
        self.writes.iter().all(WriteOutcome::is_ok)
    }
}

/// Load `schema_path`, check alignment, render and write both outputs.
///
/// A load failure returns before anything is written. Write failures are
/// reported per file in [`RunReport::writes`].
pub fn run<P: AsRef<Path>>(config: &GeneratorConfig, schema_path: P) -> Result<RunReport> {
    let schema = Schema::load(schema_path)?;

    tracing::info!("Checking alignment");
    let alignment = AlignmentChecker::new(config.nested_sizing).check(&schema);

    let files = generate(&schema);

    tracing::info!("Writing outputs to {:?}", config.output_dir);
    let writes = write_outputs(config, &files);

    Ok(RunReport { alignment, writes })
}
