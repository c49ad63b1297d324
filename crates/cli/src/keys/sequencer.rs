// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Global keyboard routing: direct chords and the modal `g` sequence.
//!
//! The sequencer sees every key press that reaches the application surface.
//! Presses aimed at text-entry elements are ignored outright so typing never
//! triggers a shortcut. Otherwise a press either matches a direct chord
//! (`Ctrl+K`), arms the `g` prefix, completes a `g` sequence (`g` then `d`),
//! or falls through untouched.

use super::binding::{Action, BindingMap};
use super::chord::{Key, KeyPress};
use crate::events::{AppEvent, Form, Intent};
use crate::routes::Route;
use crate::time::{Clock, ClockHandle};

/// How long an armed `g` waits for its second key.
pub const DEFAULT_SEQUENCE_TIMEOUT_MS: u64 = 1000;

/// Sequence prefix key.
pub const SEQUENCE_LEADER: char = 'g';

/// Second keys of the `g` sequence and where they lead.
pub const SEQUENCES: [(char, Route); 3] = [
    ('d', Route::Dashboard),
    ('c', Route::Chat),
    ('s', Route::Settings),
];

fn sequence_target(key: char) -> Option<Route> {
    let key = key.to_ascii_lowercase();
    SEQUENCES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, route)| route.clone())
}

/// Result of routing one key press.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// The press was recognized; the caller must not apply its default effect.
    pub prevent_default: bool,
    pub intent: Option<Intent>,
}

impl KeyOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }

    /// Recognized but with nothing to do yet.
    pub fn consumed() -> Self {
        Self {
            prevent_default: true,
            intent: None,
        }
    }

    pub fn intent(intent: Intent) -> Self {
        Self {
            prevent_default: true,
            intent: Some(intent),
        }
    }
}

/// Pending state of the `g` sequence.
///
/// A single deadline slot: arming again replaces it, so at most one
/// expiry is ever live.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChordState {
    pending: Option<char>,
    expires_at: Option<u64>,
}

impl ChordState {
    pub fn pending(&self) -> Option<char> {
        self.pending
    }

    pub fn expires_at(&self) -> Option<u64> {
        self.expires_at
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn arm(&mut self, key: char, now: u64, timeout_ms: u64) {
        self.pending = Some(key.to_ascii_lowercase());
        self.expires_at = Some(now.saturating_add(timeout_ms));
    }

    /// Consume the second key. Always clears the pending state.
    pub fn resolve(&mut self, key: char, now: u64) -> Option<Route> {
        let live = self.is_pending() && !self.is_expired(now);
        self.cancel();
        if live {
            sequence_target(key)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.expires_at = None;
    }

    pub fn is_expired(&self, now: u64) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }

    /// Clear a stale pending state. Returns true if something expired.
    pub fn expire(&mut self, now: u64) -> bool {
        if self.is_pending() && self.is_expired(now) {
            self.cancel();
            true
        } else {
            false
        }
    }
}

/// Intent performed for a bound action.
pub fn intent_for(action: Action) -> Intent {
    match action {
        Action::OpenPalette => Intent::OpenPalette,
        Action::OpenSettings => Intent::Navigate(Route::Settings),
        Action::CreateNew => Intent::OpenForm(Form::NewServer),
        Action::Save => Intent::Dispatch(AppEvent::Save),
        Action::ToggleShortcutsHelp => Intent::ToggleShortcutsHelp,
        Action::NextTab => Intent::Dispatch(AppEvent::NextTab),
        Action::PreviousTab => Intent::Dispatch(AppEvent::PreviousTab),
    }
}

/// A press with no command modifier. Shift counts only as part of an
/// uppercase letter.
fn is_plain(press: &KeyPress) -> bool {
    let m = press.modifiers;
    if m.has_command_modifier() {
        return false;
    }
    match press.key {
        Key::Char(c) => !m.shift || c.is_uppercase(),
        _ => !m.shift,
    }
}

fn leader_pressed(press: &KeyPress) -> bool {
    is_plain(press) && matches!(press.key, Key::Char(c) if c.eq_ignore_ascii_case(&SEQUENCE_LEADER))
}

/// The application-wide key listener.
pub struct ChordSequencer {
    bindings: BindingMap,
    state: ChordState,
    timeout_ms: u64,
    clock: ClockHandle,
    attached: bool,
}

impl ChordSequencer {
    pub fn new(bindings: BindingMap, clock: ClockHandle) -> Self {
        Self {
            bindings,
            state: ChordState::default(),
            timeout_ms: DEFAULT_SEQUENCE_TIMEOUT_MS,
            clock,
            attached: false,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn bindings(&self) -> &BindingMap {
        &self.bindings
    }

    pub fn set_bindings(&mut self, bindings: BindingMap) {
        self.bindings = bindings;
    }

    pub fn state(&self) -> &ChordState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Start receiving key presses. Attaching twice is a no-op.
    pub fn attach(&mut self) {
        if !self.attached {
            self.attached = true;
            tracing::debug!("key sequencer attached");
        }
    }

    /// Stop receiving key presses and drop any pending sequence.
    pub fn detach(&mut self) {
        self.state.cancel();
        if self.attached {
            self.attached = false;
            tracing::debug!("key sequencer detached");
        }
    }

    /// Expire a pending sequence whose deadline has passed.
    pub fn tick(&mut self) -> bool {
        let expired = self.state.expire(self.clock.now_millis());
        if expired {
            tracing::debug!("key sequence expired");
        }
        expired
    }

    pub fn handle(&mut self, press: &KeyPress) -> KeyOutcome {
        if !self.attached || press.target.is_text_entry() {
            return KeyOutcome::ignored();
        }
        let now = self.clock.now_millis();
        self.state.expire(now);

        if self.state.is_pending() {
            if leader_pressed(press) {
                self.state.arm(SEQUENCE_LEADER, now, self.timeout_ms);
                return KeyOutcome::consumed();
            }
            let second = match press.key {
                Key::Char(c) if is_plain(press) => Some(c),
                _ => None,
            };
            match second.and_then(|c| self.state.resolve(c, now)) {
                Some(route) => {
                    tracing::debug!(route = %route, "key sequence navigated");
                    return KeyOutcome::intent(Intent::Navigate(route));
                }
                // Unmatched second key: the sequence is dropped and the
                // press is evaluated on its own.
                None => self.state.cancel(),
            }
        }

        if let Some(action) = self.bindings.action_for(press) {
            tracing::debug!(action = %action, "shortcut matched");
            return KeyOutcome::intent(intent_for(action));
        }

        if leader_pressed(press) {
            self.state.arm(SEQUENCE_LEADER, now, self.timeout_ms);
            return KeyOutcome::consumed();
        }

        KeyOutcome::ignored()
    }
}

#[cfg(test)]
#[path = "sequencer_tests.rs"]
mod tests;
