// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::config::DeckConfig;
use crate::storage::{BackupStore, MemoryStore};
use crate::time::ClockHandle;

fn create_test_app() -> TuiAppState {
    let shell = Shell::new(
        Arc::new(MemoryStore::new()),
        BackupStore::new(std::env::temp_dir().join("mcpdeck-app-tests")),
        &DeckConfig::default(),
        ClockHandle::fake_at(0),
    );
    let state = TuiAppState::new(shell);
    state.set_terminal_size(80, 24);
    state
}

fn route(state: &TuiAppState) -> Route {
    state.inner.lock().shell.route().clone()
}

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    let mut event = KeyEvent::new(KeyEventKind::Press, code);
    event.modifiers = modifiers;
    event
}

fn char_key(c: char) -> KeyEvent {
    key_event(KeyCode::Char(c), KeyModifiers::NONE)
}

#[test]
fn test_ctrl_c_exits() {
    let state = create_test_app();
    state.handle_key_event(key_event(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(state.exit_reason(), Some(ExitReason::Interrupted));
}

#[test]
fn test_ctrl_c_exits_even_with_palette_open() {
    let state = create_test_app();
    state.handle_key_event(key_event(KeyCode::Char('k'), KeyModifiers::CONTROL));
    state.handle_key_event(key_event(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(state.should_exit());
}

#[test]
fn test_q_on_dashboard_quits() {
    let state = create_test_app();
    state.handle_key_event(char_key('q'));
    assert_eq!(state.exit_reason(), Some(ExitReason::Quit));
}

#[test]
fn test_q_elsewhere_does_not_quit() {
    let state = create_test_app();
    state.handle_key_event(char_key('g'));
    state.handle_key_event(char_key('c'));
    state.handle_key_event(char_key('q'));
    assert!(!state.should_exit());
    assert_eq!(route(&state), Route::Chat);
}

#[test]
fn test_q_is_typed_into_open_palette() {
    let state = create_test_app();
    state.handle_key_event(key_event(KeyCode::Char('k'), KeyModifiers::CONTROL));
    state.handle_key_event(char_key('q'));
    assert!(!state.should_exit());
    assert_eq!(state.inner.lock().shell.palette().query(), "q");
}

#[test]
fn test_palette_keys_target_text_input() {
    let state = create_test_app();
    state.handle_key_event(key_event(KeyCode::Char('k'), KeyModifiers::CONTROL));
    state.handle_key_event(char_key('g'));
    state.handle_key_event(char_key('s'));
    assert_eq!(route(&state), Route::Dashboard);
}

#[test]
fn test_render_uses_terminal_width() {
    let state = create_test_app();
    state.set_terminal_size(40, 24);
    let lines = state.render_lines();
    assert_eq!(lines[1].matches('─').count(), 40);
}

#[test]
fn test_open_palette_fits_terminal_height() {
    let state = create_test_app();
    {
        let mut inner = state.inner.lock();
        for n in 0..10 {
            inner.shell.add_server(format!("Server {n}"), None);
        }
    }
    state.set_terminal_size(80, 20);
    state.handle_key_event(key_event(KeyCode::Char('k'), KeyModifiers::CONTROL));
    state.handle_key_event(key_event(KeyCode::End, KeyModifiers::NONE));

    let lines = state.render_lines();
    assert!(lines.len() <= 20, "{} lines for a 20-row terminal", lines.len());
    assert!(lines.iter().any(|l| l.contains(crate::palette::view::SELECTED_MARKER)));
}

