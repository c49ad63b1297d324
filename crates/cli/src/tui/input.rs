// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal key events to [`KeyPress`] values.

use iocraft::prelude::*;

use crate::keys::{FocusTarget, Key, KeyPress, Modifiers};

/// Convert a terminal key event. Keys the dashboard has no use for
/// (media keys, bare modifiers) yield `None`.
///
/// Terminal encoding varies: some send Ctrl+K as the raw ASCII control code
/// 0x0B, others as 'k' with CONTROL. Both become `Ctrl+K`.
pub fn key_press(event: &KeyEvent, target: FocusTarget) -> Option<KeyPress> {
    let m = event.modifiers;
    let mut modifiers = Modifiers {
        ctrl: m.contains(KeyModifiers::CONTROL),
        alt: m.contains(KeyModifiers::ALT),
        shift: m.contains(KeyModifiers::SHIFT),
        meta: m.contains(KeyModifiers::SUPER) || m.contains(KeyModifiers::META),
    };
    let key = match event.code {
        KeyCode::Char(c) => match control_letter(c) {
            Some(letter) => {
                modifiers.ctrl = true;
                Key::Char(letter)
            }
            None => Key::Char(c),
        },
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => {
            modifiers.shift = true;
            Key::Tab
        }
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::F(n) => Key::F(n),
        _ => return None,
    };
    Some(KeyPress {
        key,
        modifiers,
        target,
    })
}

/// 0x01..=0x1A are Ctrl+A..Ctrl+Z.
fn control_letter(c: char) -> Option<char> {
    match c as u32 {
        code @ 0x01..=0x1a => char::from_u32(u32::from(b'a') + code - 1),
        _ => None,
    }
}

/// Ctrl+C always leaves the dashboard.
pub fn is_interrupt(press: &KeyPress) -> bool {
    press.modifiers.ctrl && press.key == Key::Char('c')
}

/// A bare `q`.
pub fn is_quit(press: &KeyPress) -> bool {
    press.modifiers == Modifiers::NONE && press.key == Key::Char('q')
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
