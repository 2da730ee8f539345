// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Generator errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a schema or writing generated sources.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("File not found: {}", path.display())]
    SchemaNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    SchemaRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    SchemaParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    #[error("An error occurred while writing to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GenError>;
