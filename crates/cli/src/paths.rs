// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Data directory resolution and the layout beneath it.

use std::path::{Path, PathBuf};

/// Name of the data directory under `$HOME` or the working directory.
pub const DEFAULT_DIR_NAME: &str = ".mcpdeck";

/// Resolve the data directory.
///
/// Precedence: explicit flag, `MCPDECK_DATA_DIR`, `$HOME/.mcpdeck`, then
/// `./.mcpdeck`.
pub fn resolve_data_dir(flag: Option<&Path>) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Some(dir) = crate::env::data_dir() {
        return dir;
    }
    match crate::env::home() {
        Some(home) => home.join(DEFAULT_DIR_NAME),
        None => PathBuf::from(DEFAULT_DIR_NAME),
    }
}

// Free functions for path computation

/// One `<key>.json` document per store key.
pub fn store_dir(root: &Path) -> PathBuf {
    root.join("store")
}

pub fn backups_dir(root: &Path) -> PathBuf {
    root.join("backups")
}

pub fn logs_dir(root: &Path) -> PathBuf {
    root.join("logs")
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join("config.toml")
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
