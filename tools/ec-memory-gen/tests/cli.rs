// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use std::process::Command;

const EC_MEMORY_YAML: &str = include_str!("../schemas/ec_memory.yaml");

fn ec_memory_gen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ec-memory-gen"))
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = ec_memory_gen().output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_extra_argument_is_rejected() {
    let output = ec_memory_gen().args(["a.yaml", "b.yaml"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_missing_file_fails_without_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let output = ec_memory_gen()
        .arg("missing.yaml")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("File not found: missing.yaml"));
    assert!(!dir.path().join("structure.rs").exists());
    assert!(!dir.path().join("ecmemory.h").exists());
}

#[test]
fn test_generates_into_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("schema.yaml"),
        format!("{EC_MEMORY_YAML}\nOdd:\n  a: u8\n"),
    )
    .unwrap();

    let output = ec_memory_gen()
        .arg("schema.yaml")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Warning: Odd is not 32-bit aligned. Size: 1 bytes"));
    assert!(stdout.contains("[OK] Rust code has been written to"));
    assert!(stdout.contains("[OK] C code has been written to"));
    assert!(dir.path().join("structure.rs").exists());
    assert!(dir.path().join("ecmemory.h").exists());
}

#[test]
fn test_failed_write_still_writes_sibling() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("schema.yaml"), EC_MEMORY_YAML).unwrap();
    std::fs::create_dir(dir.path().join("structure.rs")).unwrap();

    let output = ec_memory_gen()
        .arg("schema.yaml")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("[ERROR] An error occurred while writing to"));
    assert!(dir.path().join("ecmemory.h").is_file());
}
