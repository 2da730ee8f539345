// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Generator configuration.
//!
//! The CLI always runs with [`GeneratorConfig::default`]; the builder exists
//! for library callers and tests that need another output directory.

use crate::alignment::NestedSizing;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the generated Rust module.
pub const RUST_OUTPUT_FILE: &str = "structure.rs";
/// File name of the generated C header.
pub const C_OUTPUT_FILE: &str = "ecmemory.h";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory receiving both generated files.
    pub output_dir: PathBuf,
    pub rust_file_name: String,
    pub c_file_name: String,
    /// Nested-record policy of the alignment check.
    pub nested_sizing: NestedSizing,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            rust_file_name: RUST_OUTPUT_FILE.to_string(),
            c_file_name: C_OUTPUT_FILE.to_string(),
            nested_sizing: NestedSizing::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }
}

/// Builder for GeneratorConfig.
#[derive(Debug, Default)]
pub struct GeneratorConfigBuilder {
    output_dir: Option<PathBuf>,
    rust_file_name: Option<String>,
    c_file_name: Option<String>,
    nested_sizing: Option<NestedSizing>,
}

impl GeneratorConfigBuilder {
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn rust_file_name(mut self, name: impl Into<String>) -> Self {
        self.rust_file_name = Some(name.into());
        self
    }

    pub fn c_file_name(mut self, name: impl Into<String>) -> Self {
        self.c_file_name = Some(name.into());
        self
    }

    pub fn nested_sizing(mut self, policy: NestedSizing) -> Self {
        self.nested_sizing = Some(policy);
        self
    }

    pub fn build(self) -> GeneratorConfig {
        let defaults = GeneratorConfig::default();
        GeneratorConfig {
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            rust_file_name: self.rust_file_name.unwrap_or(defaults.rust_file_name),
            c_file_name: self.c_file_name.unwrap_or(defaults.c_file_name),
            nested_sizing: self.nested_sizing.unwrap_or(defaults.nested_sizing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_fixed_file_names() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.rust_file_name, "structure.rs");
        assert_eq!(config.c_file_name, "ecmemory.h");
        assert_eq!(config.nested_sizing, NestedSizing::Resolve);
    }

    #[test]
    fn test_builder_overrides_only_what_is_set() {
        let config = GeneratorConfig::builder()
            .output_dir("/tmp/out")
            .nested_sizing(NestedSizing::Skip)
            .build();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.rust_file_name, RUST_OUTPUT_FILE);
        assert_eq!(config.nested_sizing, NestedSizing::Skip);
    }

    #[test]
    fn test_config_yaml_round_trip() {
        let config = GeneratorConfig::builder()
            .output_dir("generated")
            .c_file_name("ec_map.h")
            .nested_sizing(NestedSizing::Skip)
            .build();

        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("nested_sizing: skip"));

        let back: GeneratorConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.output_dir, PathBuf::from("generated"));
        assert_eq!(back.rust_file_name, RUST_OUTPUT_FILE);
        assert_eq!(back.c_file_name, "ec_map.h");
        assert_eq!(back.nested_sizing, NestedSizing::Skip);
    }

    #[test]
    fn test_nested_sizing_parses_snake_case() {
        let policy: NestedSizing = serde_yaml::from_str("resolve").unwrap();
        assert_eq!(policy, NestedSizing::Resolve);
    }
}
