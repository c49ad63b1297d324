// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Keyboard-driven dashboard for MCP servers
#[derive(Parser, Debug)]
#[command(name = "mcpdeck", version, about = "Keyboard-driven dashboard for MCP servers")]
pub struct Cli {
    /// Data directory (defaults to $MCPDECK_DATA_DIR, then ~/.mcpdeck)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print the ranked command palette for TEXT and exit
    #[arg(long, value_name = "TEXT", conflicts_with = "list_shortcuts")]
    pub query: Option<String>,

    /// Locale prefix for routes (overrides config.toml)
    #[arg(long, value_name = "TAG")]
    pub locale: Option<String>,

    /// Print the effective shortcut bindings and exit
    #[arg(long)]
    pub list_shortcuts: bool,
}

/// What the binary should do after parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Tui,
    Query(String),
    ListShortcuts,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.list_shortcuts {
            Mode::ListShortcuts
        } else if let Some(query) = &self.query {
            Mode::Query(query.clone())
        } else {
            Mode::Tui
        }
    }

    /// Headless modes log to stderr instead of the log file.
    pub fn is_headless(&self) -> bool {
        self.mode() != Mode::Tui
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
