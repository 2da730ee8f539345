// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fuzz target for the schema loader and both renderers.
//!
//! Any UTF-8 input either fails to load with an error or goes through the
//! alignment check and code generation. Neither path may panic.

#![no_main]

use ec_memory_gen::{check_alignment, generate, Schema};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(schema) = Schema::from_yaml(text) else {
        return;
    };

    let report = check_alignment(&schema);
    for warning in report.warnings() {
        assert!(schema.record(&warning.record).is_some());
        assert_ne!(warning.size % 4, 0);
    }

    let files = generate(&schema);
    assert_eq!(files, generate(&schema));
});
