// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

#[parameterized(
    file = { LogTarget::File(PathBuf::from("/tmp/logs")), "info" },
    stderr = { LogTarget::Stderr, "warn" },
)]
fn test_default_directive_per_target(target: LogTarget, expected: &str) {
    assert_eq!(target.default_directive(), expected);
}

#[test]
fn test_explicit_directive_is_used() {
    let filter = build_filter(Some("mcpdeck::keys=trace"), "info");
    assert_eq!(filter.to_string(), "mcpdeck::keys=trace");
}

#[test]
fn test_missing_directive_falls_back_to_default() {
    let filter = build_filter(None, "warn");
    assert_eq!(filter.to_string(), "warn");
}

#[test]
fn test_unparseable_directive_falls_back_to_default() {
    let filter = build_filter(Some("mcpdeck=loud"), "info");
    assert_eq!(filter.to_string(), "info");
}

#[test]
fn test_file_appender_creates_the_log_dir() {
    let dir = tempfile::tempdir().unwrap();
    let logs = dir.path().join("logs");
    assert!(file_appender(&logs).is_some());
    assert!(logs.is_dir());
}
