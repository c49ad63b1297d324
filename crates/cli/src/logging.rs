// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structured logging setup.
//!
//! The full-screen UI owns the terminal, so interactive runs log to
//! `<data_dir>/logs/mcpdeck.log`. Headless runs log to stderr.

use std::fs;
use std::path::{Path, PathBuf};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::env;

/// Log file name inside the logs directory.
pub const LOG_FILE_NAME: &str = "mcpdeck.log";

/// Where log records go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to `mcpdeck.log` in this directory.
    File(PathBuf),
    /// Write to stderr.
    Stderr,
}

impl LogTarget {
    /// Level used when `MCPDECK_LOG` is unset.
    pub fn default_directive(&self) -> &'static str {
        match self {
            LogTarget::File(_) => "info",
            // Keep headless stdout/stderr quiet unless asked.
            LogTarget::Stderr => "warn",
        }
    }
}

/// Build the filter from an explicit directive, falling back to `default`
/// when the directive is missing or does not parse.
pub fn build_filter(directive: Option<&str>, default: &str) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed, which makes
/// repeated calls harmless.
pub fn init(target: &LogTarget) -> bool {
    let directive = env::log_filter();
    let filter = build_filter(directive.as_deref(), target.default_directive());

    let installed = match target {
        LogTarget::File(dir) => match file_appender(dir) {
            Some(appender) => tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(appender)
                        .with_ansi(false)
                        .with_target(true),
                )
                .try_init()
                .is_ok(),
            // No writable log dir: run without logging rather than draw on the UI.
            None => false,
        },
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .compact(),
            )
            .try_init()
            .is_ok(),
    };

    if installed {
        tracing::debug!(target = ?target, "logger initialized");
    }
    installed
}

fn file_appender(dir: &Path) -> Option<tracing_appender::rolling::RollingFileAppender> {
    fs::create_dir_all(dir).ok()?;
    Some(tracing_appender::rolling::never(dir, LOG_FILE_NAME))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
