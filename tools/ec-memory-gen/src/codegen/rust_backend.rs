// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use crate::codegen::{LanguageProfile, MemmapVersion};
use crate::schema::TypeToken;

/// Packed `#[repr(C)]` Rust structs.
///
/// Schema primitives already use Rust spelling, so every token is emitted
/// verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustProfile;

impl LanguageProfile for RustProfile {
    fn language(&self) -> &'static str {
        "Rust"
    }

    fn prologue(&self, version: &MemmapVersion) -> String {
        let mut out = String::from("//! EC Internal Data Structures\n\n");
        out.push_str("#[allow(missing_docs)]\n");
        out.push_str(&format!(
            "pub const {name}: {ty} = {ty} {{major: {}, minor: {}, spin: {}, res0: {}}};\n\n",
            version.major,
            version.minor,
            version.spin,
            version.res0,
            name = MemmapVersion::CONST_NAME,
            ty = MemmapVersion::TYPE_NAME,
        ));
        out
    }

    fn type_name<'a>(&self, ty: &'a TypeToken) -> &'a str {
        ty.as_str()
    }

    fn open_struct(&self, name: &str) -> String {
        format!(
            "#[allow(missing_docs)]\n#[repr(C, packed)]\n#[derive(Clone, Copy, Debug, Default)]\npub struct {name} {{\n"
        )
    }

    fn field(&self, name: &str, type_name: &str) -> String {
        format!("    pub {name}: {type_name},\n")
    }

    fn close_struct(&self, _name: &str) -> String {
        "}\n\n".to_string()
    }

    fn epilogue(&self, _version: &MemmapVersion) -> String {
        String::new()
    }
}
