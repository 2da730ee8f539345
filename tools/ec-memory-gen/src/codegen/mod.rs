// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Struct renderers.
//!
//! One walk over the schema ([`render`]) drives every target language; a
//! [`LanguageProfile`] supplies the syntax. Rendering never mutates the schema,
//! so targets can be rendered in any order.

pub mod c_backend;
pub mod rust_backend;
pub mod version;

pub use c_backend::CProfile;
pub use rust_backend::RustProfile;
pub use version::{MemmapVersion, EC_MEMMAP_VERSION};

use crate::config::GeneratorConfig;
use crate::schema::{Schema, TypeToken};

/// Syntax of one target language.
pub trait LanguageProfile {
    /// Human-readable language name, used in status lines.
    fn language(&self) -> &'static str;

    /// Text before the first struct.
    fn prologue(&self, version: &MemmapVersion) -> String;

    /// Target spelling of a field type. Must be total.
    fn type_name<'a>(&self, ty: &'a TypeToken) -> &'a str;

    fn open_struct(&self, name: &str) -> String;

    fn field(&self, name: &str, type_name: &str) -> String;

    fn close_struct(&self, name: &str) -> String;

    /// Text after the last struct.
    fn epilogue(&self, version: &MemmapVersion) -> String;
}

/// Render every record of `schema`, in order, with `profile`.
pub fn render(schema: &Schema, profile: &dyn LanguageProfile) -> String {
    let mut out = profile.prologue(&EC_MEMMAP_VERSION);

    for record in schema.records() {
        out.push_str(&profile.open_struct(&record.name));
        for field in &record.fields {
            out.push_str(&profile.field(&field.name, profile.type_name(&field.ty)));
        }
        out.push_str(&profile.close_struct(&record.name));
    }

    out.push_str(&profile.epilogue(&EC_MEMMAP_VERSION));
    out
}

/// Built-in output targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Rust,
    C,
}

impl Target {
    /// Generation order.
    pub const ALL: [Target; 2] = [Target::Rust, Target::C];

    pub fn profile(self) -> &'static dyn LanguageProfile {
        match self {
            Target::Rust => &RustProfile,
            Target::C => &CProfile,
        }
    }

    pub fn file_name(self, config: &GeneratorConfig) -> &str {
        match self {
            Target::Rust => &config.rust_file_name,
            Target::C => &config.c_file_name,
        }
    }
}

/// Rendered source for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub target: Target,
    pub source: String,
}

/// Render all built-in targets.
pub fn generate(schema: &Schema) -> Vec<GeneratedFile> {
    Target::ALL
        .iter()
        .map(|&target| {
            tracing::info!(language = target.profile().language(), "Rendering structs");
            GeneratedFile {
                target,
                source: render(schema, target.profile()),
            }
        })
        .collect()
}
