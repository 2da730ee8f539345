// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

/// Memory map version stamped into both generated outputs.
///
/// Emitted as `EC_MEMMAP_VERSION` of type `Version`; the schema is expected to
/// declare a matching four-byte `Version` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemmapVersion {
    pub major: u8,
    pub minor: u8,
    pub spin: u8,
    pub res0: u8,
}

pub const EC_MEMMAP_VERSION: MemmapVersion = MemmapVersion {
    major: 0,
    minor: 1,
    spin: 0,
    res0: 0,
};

impl MemmapVersion {
    /// Name of the emitted constant.
    pub const CONST_NAME: &'static str = "EC_MEMMAP_VERSION";
    /// Type of the emitted constant.
    pub const TYPE_NAME: &'static str = "Version";

    pub fn bytes(&self) -> [u8; 4] {
        [self.major, self.minor, self.spin, self.res0]
    }
}
