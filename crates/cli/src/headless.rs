// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Non-interactive commands: `--query` and `--list-shortcuts`.
//!
//! Both read the same persisted state the interactive shell uses and write
//! plain text, so they double as a scripting surface and a smoke test.

use std::io::{self, Write};

use crate::config::DeckConfig;
use crate::keys::BindingMap;
use crate::output::write_lines;
use crate::palette::{build_commands, view, CommandPalette, RecencyList};
use crate::servers::{load_servers, ConnectionMap};
use crate::storage::KeyValueStore;

/// Print the grouped, ranked palette for `query`.
pub fn run_query<W: Write>(
    store: &dyn KeyValueStore,
    config: &DeckConfig,
    query: &str,
    out: &mut W,
) -> io::Result<()> {
    let servers = load_servers(store);
    let connections = ConnectionMap::load(store);
    let recents = RecencyList::load(store, config.recent_limit);

    let mut palette = CommandPalette::new();
    palette.set_commands(build_commands(&servers, &connections));
    palette.open();
    palette.run_deferred();
    palette.set_query(query);

    tracing::debug!(
        query,
        servers = servers.len(),
        recents = recents.len(),
        "running headless query"
    );
    write_lines(out, &view::render_plain(&palette, recents.ids()))
}

/// Print `action  chords` rows followed by any conflicts.
pub fn list_shortcuts<W: Write>(store: &dyn KeyValueStore, out: &mut W) -> io::Result<()> {
    let bindings = BindingMap::load(store);
    write_lines(out, &shortcut_lines(&bindings))
}

pub(crate) fn shortcut_lines(bindings: &BindingMap) -> Vec<String> {
    let name_width = bindings
        .iter()
        .map(|(action, _)| action.name().len())
        .max()
        .unwrap_or(0);
    let mut lines: Vec<String> = bindings
        .iter()
        .map(|(action, binding)| format!("{:<name_width$}  {}", action.name(), binding))
        .collect();
    for conflict in bindings.conflicts() {
        lines.push(format!("conflict: {conflict}"));
    }
    lines
}

#[cfg(test)]
#[path = "headless_tests.rs"]
mod tests;
