// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration loaded from `<data_dir>/config.toml`.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::keys::DEFAULT_SEQUENCE_TIMEOUT_MS;
use crate::palette::MAX_RECENTS;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Dashboard settings. Every field is optional in the file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Route locale prefix (`/de/settings`).
    pub locale: Option<String>,

    /// Window for the second key of a `g` sequence.
    pub sequence_timeout_ms: u64,

    /// How many recent commands the palette remembers.
    pub recent_limit: usize,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            locale: None,
            sequence_timeout_ms: DEFAULT_SEQUENCE_TIMEOUT_MS,
            recent_limit: MAX_RECENTS,
        }
    }
}

impl DeckConfig {
    /// Load from `path`. A missing file is the default configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        let config: DeckConfig = toml::from_str(&content)?;
        Ok(config.normalized())
    }

    /// Load from `path`, falling back to defaults with a warning on error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            crate::output::print_warning(format_args!(
                "ignoring {}: {}",
                path.display(),
                e
            ));
            tracing::warn!(path = %path.display(), error = %e, "using default configuration");
            Self::default()
        })
    }

    /// Clamp out-of-range values; blank locale means none.
    pub fn normalized(mut self) -> Self {
        self.recent_limit = self.recent_limit.clamp(1, MAX_RECENTS);
        if self.sequence_timeout_ms == 0 {
            self.sequence_timeout_ms = DEFAULT_SEQUENCE_TIMEOUT_MS;
        }
        self.locale = self
            .locale
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
