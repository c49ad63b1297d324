// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by mcpdeck are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `MCPDECK_DATA_DIR`: Data directory override (store, backups, logs).
pub fn data_dir() -> Option<PathBuf> {
    non_empty(names::MCPDECK_DATA_DIR).map(PathBuf::from)
}

/// `MCPDECK_LOG`: Log filter directive (e.g. `debug`, `mcpdeck::keys=trace`).
pub fn log_filter() -> Option<String> {
    non_empty(names::MCPDECK_LOG)
}

/// `MCPDECK_LOCALE`: Route locale prefix, overridden by `--locale`.
pub fn locale() -> Option<String> {
    non_empty(names::MCPDECK_LOCALE)
}

/// `CARGO_BIN_EXE_mcpdeck`: Path to compiled binary (set by cargo test).
pub fn cargo_bin_exe() -> Option<String> {
    std::env::var(names::CARGO_BIN_EXE_MCPDECK).ok()
}

/// `HOME`: User's home directory.
pub fn home() -> Option<PathBuf> {
    non_empty(names::HOME).map(PathBuf::from)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
