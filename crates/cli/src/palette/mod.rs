// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The fuzzy command palette.
//!
//! [`catalog::build_commands`] derives the command list from the current
//! servers and connection map; [`matcher`] scores, filters and groups it;
//! [`dialog::CommandPalette`] owns the open/close lifecycle, search state and
//! keyboard navigation; [`view`] renders it to text lines.

pub mod catalog;
pub mod command;
pub mod dialog;
pub mod matcher;
pub mod recents;
pub mod view;

pub use catalog::{build_commands, maintenance_commands};
pub use command::{ActionError, ActionSink, Category, Command, CommandAction};
pub use dialog::{CommandPalette, PaletteOutcome, SearchState};
pub use matcher::{filter_commands, group_commands, score, CommandGroup};
pub use recents::{RecencyList, MAX_RECENTS};
