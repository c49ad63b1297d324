// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Key presses and the textual chord notation (`Ctrl+Shift+Tab`, `Meta+K`).

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordParseError {
    #[error("empty chord")]
    Empty,

    #[error("unknown modifier {0:?}")]
    UnknownModifier(String),

    #[error("chord {0:?} has no base key")]
    MissingKey(String),

    #[error("chord {0:?} has more than one base key")]
    MultipleKeys(String),

    #[error("unknown key {0:?}")]
    UnknownKey(String),
}

/// A physical key, without modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Tab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

impl Key {
    /// Parse a key name. Names are case-insensitive; a single character is
    /// itself.
    pub fn parse(name: &str) -> Option<Key> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Key::Char(c.to_ascii_lowercase()));
        }
        let key = match name.to_ascii_lowercase().as_str() {
            "enter" | "return" => Key::Enter,
            "esc" | "escape" => Key::Esc,
            "tab" => Key::Tab,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "up" | "arrowup" => Key::Up,
            "down" | "arrowdown" => Key::Down,
            "left" | "arrowleft" => Key::Left,
            "right" | "arrowright" => Key::Right,
            "home" => Key::Home,
            "end" => Key::End,
            "pageup" => Key::PageUp,
            "pagedown" => Key::PageDown,
            "space" => Key::Char(' '),
            "plus" => Key::Char('+'),
            other => {
                let n: u8 = other.strip_prefix('f')?.parse().ok()?;
                if (1..=12).contains(&n) {
                    Key::F(n)
                } else {
                    return None;
                }
            }
        };
        Some(key)
    }

    /// Compare keys, ignoring letter case.
    pub fn eq_ignore_case(&self, other: &Key) -> bool {
        match (self, other) {
            (Key::Char(a), Key::Char(b)) => a.to_lowercase().eq(b.to_lowercase()),
            _ => self == other,
        }
    }

    /// Punctuation whose Shift state depends on the keyboard layout.
    pub fn is_symbol(&self) -> bool {
        matches!(self, Key::Char(c) if !c.is_alphanumeric() && !c.is_whitespace())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(' ') => f.write_str("Space"),
            Key::Char(c) => write!(f, "{}", c.to_uppercase()),
            Key::Enter => f.write_str("Enter"),
            Key::Esc => f.write_str("Esc"),
            Key::Tab => f.write_str("Tab"),
            Key::Backspace => f.write_str("Backspace"),
            Key::Delete => f.write_str("Delete"),
            Key::Up => f.write_str("Up"),
            Key::Down => f.write_str("Down"),
            Key::Left => f.write_str("Left"),
            Key::Right => f.write_str("Right"),
            Key::Home => f.write_str("Home"),
            Key::End => f.write_str("End"),
            Key::PageUp => f.write_str("PageUp"),
            Key::PageDown => f.write_str("PageDown"),
            Key::F(n) => write!(f, "F{n}"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Ctrl, Alt or Meta held. Shift alone does not count.
    pub fn has_command_modifier(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }

    fn set(&mut self, token: &str) -> bool {
        match token.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => self.ctrl = true,
            "alt" | "option" | "opt" => self.alt = true,
            "shift" => self.shift = true,
            "meta" | "cmd" | "command" | "super" => self.meta = true,
            _ => return false,
        }
        true
    }
}

fn is_modifier_name(token: &str) -> bool {
    let mut scratch = Modifiers::NONE;
    scratch.set(token)
}

/// Where keyboard focus was when a key was pressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    #[default]
    Surface,
    TextInput,
    TextArea,
    Select,
}

impl FocusTarget {
    /// Focus is inside an element that consumes typing.
    pub fn is_text_entry(&self) -> bool {
        !matches!(self, FocusTarget::Surface)
    }
}

/// One key-down event as delivered by the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
    pub target: FocusTarget,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
            target: FocusTarget::Surface,
        }
    }

    pub fn char(c: char) -> Self {
        Self::new(Key::Char(c))
    }

    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.modifiers.meta = true;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn targeting(mut self, target: FocusTarget) -> Self {
        self.target = target;
        self
    }

    /// The character typed, if this press would insert text.
    pub fn text(&self) -> Option<char> {
        match self.key {
            Key::Char(c) if !self.modifiers.has_command_modifier() && !c.is_control() => Some(c),
            _ => None,
        }
    }
}

/// A set of modifiers plus exactly one base key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Chord {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl Chord {
    pub fn new(modifiers: Modifiers, key: Key) -> Self {
        Self { modifiers, key }
    }

    /// Parse `Mod+Mod+Key`. Modifier order does not matter; `Ctrl++`
    /// binds the plus key.
    pub fn parse(text: &str) -> Result<Chord, ChordParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChordParseError::Empty);
        }
        let (prefix, key_name) = if text == "+" {
            ("", "+")
        } else if let Some(prefix) = text.strip_suffix("++") {
            (prefix, "+")
        } else {
            text.rsplit_once('+').unwrap_or(("", text))
        };

        let mut modifiers = Modifiers::NONE;
        for token in prefix.split('+').map(str::trim).filter(|t| !t.is_empty()) {
            if modifiers.set(token) {
                continue;
            }
            return Err(if Key::parse(token).is_some() {
                ChordParseError::MultipleKeys(text.to_string())
            } else {
                ChordParseError::UnknownModifier(token.to_string())
            });
        }

        let key_name = key_name.trim();
        if key_name.is_empty() || is_modifier_name(key_name) {
            return Err(ChordParseError::MissingKey(text.to_string()));
        }
        let key = Key::parse(key_name)
            .ok_or_else(|| ChordParseError::UnknownKey(key_name.to_string()))?;
        Ok(Chord { modifiers, key })
    }

    /// Whether this chord fires for `press`.
    pub fn matches(&self, press: &KeyPress) -> bool {
        self.same_as(&Chord::new(press.modifiers, press.key))
    }

    /// Two chords denote the same physical combination.
    pub fn same_as(&self, other: &Chord) -> bool {
        if !self.key.eq_ignore_case(&other.key) {
            return false;
        }
        if self.key.is_symbol() {
            let (a, b) = (self.modifiers, other.modifiers);
            a.ctrl == b.ctrl && a.alt == b.alt && a.meta == b.meta
        } else {
            self.modifiers == other.modifiers
        }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.modifiers;
        for (held, name) in [
            (m.ctrl, "Ctrl"),
            (m.alt, "Alt"),
            (m.shift, "Shift"),
            (m.meta, "Meta"),
        ] {
            if held {
                write!(f, "{name}+")?;
            }
        }
        write!(f, "{}", self.key)
    }
}

impl std::str::FromStr for Chord {
    type Err = ChordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chord::parse(s)
    }
}

#[cfg(test)]
#[path = "chord_tests.rs"]
mod tests;
