// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use crate::codegen::{LanguageProfile, MemmapVersion};
use crate::schema::{PrimitiveType, TypeToken};

/// Byte-packed C typedefs using `<stdint.h>` types.
#[derive(Debug, Clone, Copy, Default)]
pub struct CProfile;

impl CProfile {
    pub fn primitive_name(primitive: PrimitiveType) -> &'static str {
        match primitive {
            PrimitiveType::U8 => "uint8_t",
            PrimitiveType::U16 => "uint16_t",
            PrimitiveType::U32 => "uint32_t",
            PrimitiveType::I8 => "int8_t",
            PrimitiveType::I16 => "int16_t",
            PrimitiveType::I32 => "int32_t",
        }
    }
}

impl LanguageProfile for CProfile {
    fn language(&self) -> &'static str {
        "C"
    }

    fn prologue(&self, _version: &MemmapVersion) -> String {
        "#pragma once\n\n#include <stdint.h>\n\n#pragma pack(push, 1)\n\n".to_string()
    }

    fn type_name<'a>(&self, ty: &'a TypeToken) -> &'a str {
        match ty {
            TypeToken::Primitive(primitive) => Self::primitive_name(*primitive),
            TypeToken::Opaque(name) => name.as_str(),
        }
    }

    fn open_struct(&self, _name: &str) -> String {
        "typedef struct {\n".to_string()
    }

    fn field(&self, name: &str, type_name: &str) -> String {
        format!("    {type_name} {name};\n")
    }

    fn close_struct(&self, name: &str) -> String {
        format!("}} {name};\n\n")
    }

    fn epilogue(&self, version: &MemmapVersion) -> String {
        let bytes = version
            .bytes()
            .iter()
            .map(|b| format!("0x{b:02X}"))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "#pragma pack(pop)\n\nconst {} {} = {{{bytes}}};\n",
            MemmapVersion::TYPE_NAME,
            MemmapVersion::CONST_NAME,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::{render, EC_MEMMAP_VERSION};
    use crate::schema::Schema;

    #[test]
    fn test_primitive_translation() {
        let expected = [
            (PrimitiveType::U8, "uint8_t"),
            (PrimitiveType::U16, "uint16_t"),
            (PrimitiveType::U32, "uint32_t"),
            (PrimitiveType::I8, "int8_t"),
            (PrimitiveType::I16, "int16_t"),
            (PrimitiveType::I32, "int32_t"),
        ];
        for (primitive, c_name) in expected {
            assert_eq!(CProfile.type_name(&TypeToken::Primitive(primitive)), c_name);
        }
    }

    #[test]
    fn test_opaque_passes_through() {
        let ty = TypeToken::Opaque("TimeAlarm".into());
        assert_eq!(CProfile.type_name(&ty), "TimeAlarm");
    }

    #[test]
    fn test_epilogue_closes_pack_and_emits_version() {
        assert_eq!(
            CProfile.epilogue(&EC_MEMMAP_VERSION),
            "#pragma pack(pop)\n\nconst Version EC_MEMMAP_VERSION = {0x00, 0x01, 0x00, 0x00};\n"
        );
    }

    #[test]
    fn test_full_header() {
        let schema = Schema::from_yaml("Bad:\n  a: u32\n  b:\n    type: i8\n").unwrap();
        assert_eq!(
            render(&schema, &CProfile),
            "#pragma once\n\n\
             #include <stdint.h>\n\n\
             #pragma pack(push, 1)\n\n\
             typedef struct {\n    \
             uint32_t a;\n    \
             int8_t b;\n\
             } Bad;\n\n\
             #pragma pack(pop)\n\n\
             const Version EC_MEMMAP_VERSION = {0x00, 0x01, 0x00, 0x00};\n"
        );
    }
}
