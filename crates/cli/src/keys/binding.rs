// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named shortcut actions and their configurable key bindings.
//!
//! Bindings persist at [`SHORTCUTS_KEY`] as `{"commandPalette": "Meta+K|Ctrl+K"}`.
//! Stored entries override the defaults action by action.

use std::collections::BTreeMap;
use std::fmt;

use super::chord::{Chord, ChordParseError, KeyPress};
use crate::storage::{load_json, save_json, KeyValueStore, StorageError, SHORTCUTS_KEY};

/// A shortcut-bindable application action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    OpenPalette,
    OpenSettings,
    CreateNew,
    Save,
    ToggleShortcutsHelp,
    NextTab,
    PreviousTab,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::OpenPalette,
        Action::OpenSettings,
        Action::CreateNew,
        Action::Save,
        Action::ToggleShortcutsHelp,
        Action::NextTab,
        Action::PreviousTab,
    ];

    /// Stable name used in the persisted binding map.
    pub fn name(&self) -> &'static str {
        match self {
            Action::OpenPalette => "commandPalette",
            Action::OpenSettings => "settings",
            Action::CreateNew => "newServer",
            Action::Save => "save",
            Action::ToggleShortcutsHelp => "shortcutsHelp",
            Action::NextTab => "nextTab",
            Action::PreviousTab => "previousTab",
        }
    }

    pub fn from_name(name: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|a| a.name() == name)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Action::OpenPalette => "Open command palette",
            Action::OpenSettings => "Open settings",
            Action::CreateNew => "Add a new server",
            Action::Save => "Save",
            Action::ToggleShortcutsHelp => "Show keyboard shortcuts",
            Action::NextTab => "Next tab",
            Action::PreviousTab => "Previous tab",
        }
    }

    pub fn default_binding(&self) -> &'static str {
        match self {
            Action::OpenPalette => "Meta+K|Ctrl+K",
            Action::OpenSettings => "Meta+,|Ctrl+,",
            Action::CreateNew => "Meta+N|Ctrl+N",
            Action::Save => "Meta+S|Ctrl+S",
            Action::ToggleShortcutsHelp => "Shift+?",
            Action::NextTab => "Ctrl+Tab",
            Action::PreviousTab => "Ctrl+Shift+Tab",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One or more equivalent chords, written `Meta+K|Ctrl+K`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBinding {
    chords: Vec<Chord>,
}

impl KeyBinding {
    pub fn parse(text: &str) -> Result<KeyBinding, ChordParseError> {
        let chords = text
            .split('|')
            .map(Chord::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(KeyBinding { chords })
    }

    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    pub fn matches(&self, press: &KeyPress) -> bool {
        self.chords.iter().any(|c| c.matches(press))
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chord) in self.chords.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{chord}")?;
        }
        Ok(())
    }
}

/// Two actions that claim the same chord.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conflict {
    pub chord: Chord,
    pub first: Action,
    pub second: Action,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is bound to both {} and {}",
            self.chord, self.first, self.second
        )
    }
}

/// The effective binding for every action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingMap {
    bindings: BTreeMap<Action, KeyBinding>,
}

impl Default for BindingMap {
    fn default() -> Self {
        Self::defaults()
    }
}

impl BindingMap {
    pub fn defaults() -> Self {
        let bindings = Action::ALL
            .into_iter()
            .filter_map(|action| {
                KeyBinding::parse(action.default_binding())
                    .ok()
                    .map(|b| (action, b))
            })
            .collect();
        Self { bindings }
    }

    pub fn get(&self, action: Action) -> Option<&KeyBinding> {
        self.bindings.get(&action)
    }

    pub fn set(&mut self, action: Action, binding: KeyBinding) {
        self.bindings.insert(action, binding);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Action, &KeyBinding)> {
        self.bindings.iter().map(|(a, b)| (*a, b))
    }

    /// The first action (in [`Action::ALL`] order) bound to `press`.
    pub fn action_for(&self, press: &KeyPress) -> Option<Action> {
        self.iter()
            .find(|(_, binding)| binding.matches(press))
            .map(|(action, _)| action)
    }

    /// Every pair of distinct actions sharing a chord.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let entries: Vec<(Action, &KeyBinding)> = self.iter().collect();
        let mut conflicts = Vec::new();
        for (i, (first, a)) in entries.iter().enumerate() {
            for (second, b) in entries.iter().skip(i + 1) {
                for chord in a.chords() {
                    if b.chords().iter().any(|other| chord.same_as(other)) {
                        conflicts.push(Conflict {
                            chord: *chord,
                            first: *first,
                            second: *second,
                        });
                    }
                }
            }
        }
        conflicts
    }

    /// Defaults overlaid with whatever valid entries the store holds.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let mut map = Self::defaults();
        let Some(stored) = load_json::<BTreeMap<String, String>>(store, SHORTCUTS_KEY) else {
            return map;
        };
        for (name, text) in stored {
            let Some(action) = Action::from_name(&name) else {
                tracing::warn!(action = %name, "ignoring binding for unknown action");
                continue;
            };
            match KeyBinding::parse(&text) {
                Ok(binding) => map.set(action, binding),
                Err(e) => {
                    tracing::warn!(action = %name, binding = %text, error = %e, "ignoring invalid binding")
                }
            }
        }
        map
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        save_json(store, SHORTCUTS_KEY, &self.to_raw())?;
        tracing::info!("saved shortcut bindings");
        Ok(())
    }

    /// The persisted form: action name to binding text.
    pub fn to_raw(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(action, binding)| (action.name().to_string(), binding.to_string()))
            .collect()
    }
}

#[cfg(test)]
#[path = "binding_tests.rs"]
mod tests;
