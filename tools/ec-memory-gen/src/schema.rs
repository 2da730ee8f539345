// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema model and YAML loader.
//!
//! A schema is an ordered mapping of record name to an ordered mapping of
//! field name to field spec:
//!
//! ```yaml
//! Version:
//!   major: u8
//!   minor: { type: u8 }
//! ```
//!
//! Order is load-bearing: it is the declaration order of every emitted struct
//! and therefore the memory layout.

use crate::error::{GenError, Result};
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::path::Path;

/// Fixed-width primitive recognised in a type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    U8,
    U16,
    U32,
    I8,
    I16,
    I32,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 6] = [
        PrimitiveType::U8,
        PrimitiveType::U16,
        PrimitiveType::U32,
        PrimitiveType::I8,
        PrimitiveType::I16,
        PrimitiveType::I32,
    ];

    /// Parse a schema token; `None` for anything that is not a primitive.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "u8" => Some(PrimitiveType::U8),
            "u16" => Some(PrimitiveType::U16),
            "u32" => Some(PrimitiveType::U32),
            "i8" => Some(PrimitiveType::I8),
            "i16" => Some(PrimitiveType::I16),
            "i32" => Some(PrimitiveType::I32),
            _ => None,
        }
    }

    /// Schema spelling of the primitive.
    pub fn token(self) -> &'static str {
        match self {
            PrimitiveType::U8 => "u8",
            PrimitiveType::U16 => "u16",
            PrimitiveType::U32 => "u32",
            PrimitiveType::I8 => "i8",
            PrimitiveType::I16 => "i16",
            PrimitiveType::I32 => "i32",
        }
    }

    /// Width in bytes.
    pub fn size(self) -> u32 {
        match self {
            PrimitiveType::U8 | PrimitiveType::I8 => 1,
            PrimitiveType::U16 | PrimitiveType::I16 => 2,
            PrimitiveType::U32 | PrimitiveType::I32 => 4,
        }
    }
}

/// A field's type as spelled in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeToken {
    Primitive(PrimitiveType),
    /// Nested record or externally defined type, emitted verbatim.
    Opaque(String),
}

impl TypeToken {
    pub fn parse(token: &str) -> Self {
        match PrimitiveType::from_token(token) {
            Some(primitive) => TypeToken::Primitive(primitive),
            None => TypeToken::Opaque(token.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TypeToken::Primitive(primitive) => primitive.token(),
            TypeToken::Opaque(name) => name.as_str(),
        }
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub fields: Vec<Field>,
}

/// Parsed schema. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    records: Vec<Record>,
}

impl Schema {
    /// Read and parse a schema file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading schema from: {:?}", path);

        let text = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                GenError::SchemaNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                GenError::SchemaRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let document: Value =
            serde_yaml::from_str(&text).map_err(|source| GenError::SchemaParse {
                path: path.to_path_buf(),
                source,
            })?;

        let schema = Self::from_value(&document)?;
        tracing::info!(records = schema.len(), "Schema loaded");
        Ok(schema)
    }

    /// Parse a schema from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let document: Value = serde_yaml::from_str(text)?;
        Self::from_value(&document)
    }

    /// Build a schema from an already parsed YAML document.
    pub fn from_value(document: &Value) -> Result<Self> {
        let top = match document {
            Value::Mapping(mapping) => mapping,
            Value::Null => {
                return Err(GenError::InvalidSchema("schema document is empty".into()));
            }
            _ => {
                return Err(GenError::InvalidSchema(
                    "top level must be a mapping of record names".into(),
                ));
            }
        };

        let mut records = Vec::with_capacity(top.len());
        for (key, body) in top {
            let name = key_name(key, "record")?;
            let fields = match body {
                Value::Mapping(fields) => parse_fields(&name, fields)?,
                _ => {
                    return Err(GenError::InvalidSchema(format!(
                        "record `{name}` must be a mapping of fields"
                    )));
                }
            };
            records.push(Record { name, fields });
        }

        Ok(Self { records })
    }

    /// Records in declaration order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn record(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Record>> for Schema {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

fn key_name(key: &Value, what: &str) -> Result<String> {
    key.as_str()
        .map(str::to_string)
        .ok_or_else(|| GenError::InvalidSchema(format!("{what} name must be a string: {key:?}")))
}

fn parse_fields(record: &str, fields: &Mapping) -> Result<Vec<Field>> {
    let mut parsed = Vec::with_capacity(fields.len());
    for (key, spec) in fields {
        let name = key_name(key, "field")?;
        let token = field_token(record, &name, spec)?;
        parsed.push(Field {
            name,
            ty: TypeToken::parse(token),
        });
    }
    Ok(parsed)
}

/// Resolve a field spec: either a bare token or a mapping with a `type` key.
fn field_token<'a>(record: &str, field: &str, spec: &'a Value) -> Result<&'a str> {
    match spec {
        Value::String(token) => Ok(token.as_str()),
        Value::Mapping(attrs) => {
            let token = attrs.get("type").and_then(Value::as_str).ok_or_else(|| {
                GenError::InvalidSchema(format!(
                    "field `{record}.{field}` needs a string `type` key"
                ))
            })?;

            let ignored = attrs
                .keys()
                .filter_map(Value::as_str)
                .filter(|k| *k != "type")
                .collect::<Vec<_>>();
            if !ignored.is_empty() {
                tracing::debug!(record, field, ?ignored, "Ignoring extra field attributes");
            }

            Ok(token)
        }
        _ => Err(GenError::InvalidSchema(format!(
            "field `{record}.{field}` must be a type name or a mapping with `type`"
        ))),
    }
}
