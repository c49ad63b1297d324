// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keyboard input: chords, shortcut bindings and the global sequencer.

pub mod binding;
pub mod chord;
pub mod sequencer;

pub use binding::{Action, BindingMap, Conflict, KeyBinding};
pub use chord::{Chord, ChordParseError, FocusTarget, Key, KeyPress, Modifiers};
pub use sequencer::{ChordSequencer, ChordState, KeyOutcome, DEFAULT_SEQUENCE_TIMEOUT_MS};
