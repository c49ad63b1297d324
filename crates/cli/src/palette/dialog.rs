// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command palette dialog state and keyboard handling.

use super::command::{ActionError, ActionSink, Command};
use super::matcher::{self, CommandGroup};
use super::recents::RecencyList;
use crate::keys::{Key, KeyPress};
use crate::storage::KeyValueStore;

/// Query text and the selected row in the flattened, grouped list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub selected_index: usize,
}

/// Result of a key press delivered to the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteOutcome {
    /// Palette closed or key not meaningful to it.
    Ignored,
    /// State changed (or deliberately didn't); default handling suppressed.
    Handled,
    /// Enter on a non-empty list: run the command at this display index.
    Execute(usize),
    Closed,
}

impl PaletteOutcome {
    pub fn prevent_default(&self) -> bool {
        !matches!(self, PaletteOutcome::Ignored)
    }
}

/// The palette dialog.
///
/// Opening schedules a reset of the search state instead of applying it
/// immediately; the reset lands on [`run_deferred`](Self::run_deferred) or,
/// at the latest, before the next key is handled.
#[derive(Debug, Default)]
pub struct CommandPalette {
    open: bool,
    search: SearchState,
    commands: Vec<Command>,
    reset_pending: bool,
}

impl CommandPalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn query(&self) -> &str {
        &self.search.query
    }

    pub fn selected_index(&self) -> usize {
        self.search.selected_index
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn is_reset_pending(&self) -> bool {
        self.reset_pending
    }

    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.reset_pending = true;
            tracing::debug!("command palette opened");
        }
    }

    pub fn close(&mut self) {
        if self.open {
            self.open = false;
            tracing::debug!("command palette closed");
        }
    }

    /// Apply work deferred from the last event turn.
    pub fn run_deferred(&mut self) {
        if std::mem::take(&mut self.reset_pending) {
            self.search = SearchState::default();
        }
    }

    /// Replace the command list, keeping the selection in range.
    pub fn set_commands(&mut self, commands: Vec<Command>) {
        self.commands = commands;
        self.clamp_selection();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search.query = query.into();
        self.clamp_selection();
    }

    /// Number of rows currently shown. Recents only reorder rows, so they
    /// do not affect the count.
    pub fn visible_len(&self) -> usize {
        matcher::filter_commands(&self.commands, &self.search.query, &[]).len()
    }

    /// The grouped rows for display.
    pub fn groups<'a>(&'a self, recents: &[String]) -> Vec<CommandGroup<'a>> {
        matcher::search(&self.commands, &self.search.query, recents)
    }

    /// The command shown at `index` in display order.
    pub fn command_at(&self, index: usize, recents: &[String]) -> Option<&Command> {
        matcher::flatten(&self.groups(recents)).get(index).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if self.search.selected_index + 1 < len {
            self.search.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.search.selected_index = self.search.selected_index.saturating_sub(1);
    }

    /// Pointer hover; shares the index with keyboard selection.
    pub fn hover(&mut self, index: usize) {
        self.search.selected_index = index;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let last = self.visible_len().saturating_sub(1);
        self.search.selected_index = self.search.selected_index.min(last);
    }

    /// Keyboard handling while open. A closed palette ignores every key.
    pub fn handle_key(&mut self, press: &KeyPress) -> PaletteOutcome {
        if !self.open {
            return PaletteOutcome::Ignored;
        }
        self.run_deferred();

        match press.key {
            Key::Down => self.select_next(),
            Key::Up => self.select_prev(),
            Key::Home => self.hover(0),
            Key::End => self.hover(usize::MAX),
            Key::Enter => {
                return if self.visible_len() > 0 {
                    PaletteOutcome::Execute(self.search.selected_index)
                } else {
                    PaletteOutcome::Handled
                };
            }
            Key::Esc => {
                self.close();
                return PaletteOutcome::Closed;
            }
            Key::Backspace => {
                self.search.query.pop();
                self.clamp_selection();
            }
            _ => match press.text() {
                Some(c) => {
                    self.search.query.push(c);
                    self.clamp_selection();
                }
                None => return PaletteOutcome::Ignored,
            },
        }
        PaletteOutcome::Handled
    }

    /// Run the command at display `index`.
    ///
    /// The id is pushed to `recents` and persisted first, then the action
    /// runs. An action error is returned as is and leaves the palette open;
    /// on success the palette closes.
    pub fn execute(
        &mut self,
        index: usize,
        recents: &mut RecencyList,
        store: &dyn KeyValueStore,
        sink: &mut dyn ActionSink,
    ) -> Result<(), ActionError> {
        let Some(command) = self.command_at(index, recents.ids()).cloned() else {
            return Ok(());
        };

        recents.push(command.id.clone());
        if let Err(e) = recents.save(store) {
            tracing::warn!(error = %e, "failed to persist recent commands");
        }

        tracing::info!(command = %command.id, "executing palette command");
        sink.perform(&command.action)?;
        self.close();
        Ok(())
    }
}

#[cfg(test)]
#[path = "dialog_tests.rs"]
mod tests;
