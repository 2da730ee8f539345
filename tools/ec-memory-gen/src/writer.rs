// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Output writer. Each file is attempted on its own; one failure never skips
//! the others.

use crate::codegen::{GeneratedFile, Target};
use crate::config::GeneratorConfig;
use crate::error::GenError;
use std::fs;
use std::path::PathBuf;

/// Result of writing one generated file.
#[derive(Debug)]
pub struct WriteOutcome {
    pub target: Target,
    pub path: PathBuf,
    pub result: Result<(), GenError>,
}

impl WriteOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Write every generated file into `config.output_dir`.
pub fn write_outputs(config: &GeneratorConfig, files: &[GeneratedFile]) -> Vec<WriteOutcome> {
    files
        .iter()
        .map(|file| {
            let path = config.output_dir.join(file.target.file_name(config));
            let result = fs::write(&path, &file.source).map_err(|source| GenError::Write {
                path: path.clone(),
                source,
            });

            match &result {
                Ok(()) => tracing::info!(
                    path = %path.display(),
                    bytes = file.source.len(),
                    "Wrote output"
                ),
                Err(e) => tracing::warn!("{}", e),
            }

            WriteOutcome {
                target: file.target,
                path,
                result,
            }
        })
        .collect()
}
