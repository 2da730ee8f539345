// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! 32-bit alignment check.
//!
//! Diagnostic only: a record whose packed size is not a multiple of 4 bytes
//! produces a warning, generation proceeds regardless.

use crate::schema::{PrimitiveType, Schema, TypeToken};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

const WORD_SIZE: u32 = 4;

/// How opaque field types contribute to a record's size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NestedSizing {
    /// Use the total of a record defined earlier in the schema.
    #[default]
    Resolve,
    /// Count primitive fields only.
    Skip,
}

/// Accumulated record sizes, keyed by record name.
///
/// Kept apart from the primitive widths in [`crate::schema::PrimitiveType::size`].
#[derive(Debug, Default)]
pub struct RecordSizes {
    sizes: HashMap<String, u32>,
}

impl RecordSizes {
    pub fn get(&self, record: &str) -> Option<u32> {
        self.sizes.get(record).copied()
    }

    fn insert(&mut self, record: &str, size: u32) {
        self.sizes.insert(record.to_string(), size);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentWarning {
    pub record: String,
    pub size: u32,
}

impl fmt::Display for AlignmentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: {} is not 32-bit aligned. Size: {} bytes",
            self.record, self.size
        )
    }
}

/// Result of an alignment pass.
#[derive(Debug, Default)]
pub struct AlignmentReport {
    sizes: RecordSizes,
    warnings: Vec<AlignmentWarning>,
}

impl AlignmentReport {
    /// Misaligned records, in schema order.
    pub fn warnings(&self) -> &[AlignmentWarning] {
        &self.warnings
    }

    pub fn record_size(&self, record: &str) -> Option<u32> {
        self.sizes.get(record)
    }

    pub fn is_aligned(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlignmentChecker {
    nested: NestedSizing,
}

impl AlignmentChecker {
    pub fn new(nested: NestedSizing) -> Self {
        Self { nested }
    }

    pub fn check(&self, schema: &Schema) -> AlignmentReport {
        let mut sizes = RecordSizes::default();
        let mut order = Vec::with_capacity(schema.len());

        for record in schema.records() {
            let mut size = 0u32;
            for field in &record.fields {
                match self.field_size(&field.ty, &sizes) {
                    Some(field_size) => size = size.saturating_add(field_size),
                    None => tracing::debug!(
                        record = %record.name,
                        field = %field.name,
                        ty = %field.ty,
                        "Field size unresolved, not counted"
                    ),
                }
            }

            tracing::debug!(record = %record.name, size, "Record size");
            sizes.insert(&record.name, size);
            order.push((record.name.as_str(), size));
        }

        let warnings = order
            .into_iter()
            // Primitive names are never reported, even when declared as records.
            .filter(|(record, _)| PrimitiveType::from_token(record).is_none())
            .filter(|(_, size)| size % WORD_SIZE != 0)
            .map(|(record, size)| {
                tracing::warn!(record, size, "Record is not 32-bit aligned");
                AlignmentWarning {
                    record: record.to_string(),
                    size,
                }
            })
            .collect();

        AlignmentReport { sizes, warnings }
    }

    fn field_size(&self, ty: &TypeToken, sizes: &RecordSizes) -> Option<u32> {
        match (ty, self.nested) {
            (TypeToken::Primitive(primitive), _) => Some(primitive.size()),
            (TypeToken::Opaque(name), NestedSizing::Resolve) => sizes.get(name),
            (TypeToken::Opaque(_), NestedSizing::Skip) => None,
        }
    }
}

/// Run the alignment pass with the default nested-sizing policy.
pub fn check_alignment(schema: &Schema) -> AlignmentReport {
    AlignmentChecker::default().check(schema)
}
