// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mcpdeck
//!
//! A keyboard-driven terminal dashboard for MCP servers. Global chords
//! (`Ctrl+K`, `Ctrl+N`, `Shift+?`) and two-key `g` sequences (`g d`, `g c`,
//! `g s`) drive navigation; a fuzzy command palette ranks every action the
//! dashboard offers and remembers the ones used most recently.
//!
//! The binary runs full-screen by default. `--query TEXT` prints the ranked
//! palette for `TEXT` and `--list-shortcuts` prints the effective bindings,
//! both without touching the terminal.

// Internal modules - pub for binary access, hidden from docs
#[doc(hidden)]
pub mod cli;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod env;
pub mod events;
#[doc(hidden)]
pub mod headless;
pub mod keys;
#[doc(hidden)]
pub mod logging;
#[doc(hidden)]
pub mod output;
pub mod palette;
#[doc(hidden)]
pub mod paths;
pub mod routes;
pub mod servers;
#[doc(hidden)]
pub mod shell;
pub mod storage;
pub mod time;
#[doc(hidden)]
pub mod tui;
