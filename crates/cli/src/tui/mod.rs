// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal user interface for the dashboard.
//!
//! The TUI is built using the iocraft framework with a declarative component
//! model. Layout lives in the pure `screen` module; app.rs only wires
//! terminal events to the shell and prints the lines it gets back.

mod app;
mod colors;
pub mod input;
pub mod screen;
pub mod separator;

pub use app::{
    ExitReason, TuiApp, TuiAppState, DEFAULT_TERMINAL_HEIGHT, DEFAULT_TERMINAL_WIDTH,
};
