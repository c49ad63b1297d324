// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use rstest::rstest;
use yare::parameterized;

#[parameterized(
    ctrl_k = { "Ctrl+K", "Ctrl+K" },
    lowercase = { "ctrl+k", "Ctrl+K" },
    cmd_alias = { "Cmd+K", "Meta+K" },
    command_alias = { "Command+K", "Meta+K" },
    super_alias = { "Super+K", "Meta+K" },
    control_alias = { "Control+,", "Ctrl+," },
    option_alias = { "Option+X", "Alt+X" },
    modifier_order = { "Shift+Ctrl+Tab", "Ctrl+Shift+Tab" },
    all_modifiers = { "meta+shift+alt+ctrl+a", "Ctrl+Alt+Shift+Meta+A" },
    plus_key = { "Ctrl++", "Ctrl++" },
    bare_plus = { "+", "+" },
    space = { "Alt+Space", "Alt+Space" },
    function_key = { "f5", "F5" },
    escape_alias = { "Escape", "Esc" },
    arrow_alias = { "ArrowDown", "Down" },
    question = { "Shift+?", "Shift+?" },
)]
fn test_chord_parse_canonical_form(input: &str, expected: &str) {
    assert_eq!(Chord::parse(input).unwrap().to_string(), expected);
}

#[rstest]
#[case("", ChordParseError::Empty)]
#[case("   ", ChordParseError::Empty)]
#[case("Hyper+K", ChordParseError::UnknownModifier("Hyper".into()))]
#[case("Ctrl+", ChordParseError::MissingKey("Ctrl+".into()))]
#[case("Ctrl+Shift", ChordParseError::MissingKey("Ctrl+Shift".into()))]
#[case("K+J", ChordParseError::MultipleKeys("K+J".into()))]
#[case("Ctrl+F13", ChordParseError::UnknownKey("F13".into()))]
fn test_chord_parse_errors(#[case] input: &str, #[case] expected: ChordParseError) {
    assert_eq!(Chord::parse(input).unwrap_err(), expected);
}

#[test]
fn test_chord_display_round_trips() {
    for text in ["Ctrl+Shift+Tab", "Meta+,", "Alt+Space", "Ctrl++", "F12", "G"] {
        let chord = Chord::parse(text).unwrap();
        assert_eq!(Chord::parse(&chord.to_string()).unwrap(), chord);
    }
}

#[test]
fn test_chord_matches_ignoring_letter_case() {
    let chord = Chord::parse("Ctrl+K").unwrap();
    assert!(chord.matches(&KeyPress::char('k').ctrl()));
    assert!(chord.matches(&KeyPress::char('K').ctrl()));
    assert!(!chord.matches(&KeyPress::char('k')));
    assert!(!chord.matches(&KeyPress::char('k').ctrl().alt()));
    assert!(!chord.matches(&KeyPress::char('j').ctrl()));
}

#[test]
fn test_symbol_chords_ignore_shift() {
    let chord = Chord::parse("Shift+?").unwrap();
    assert!(chord.matches(&KeyPress::char('?').shift()));
    assert!(chord.matches(&KeyPress::char('?')));
    assert!(!chord.matches(&KeyPress::char('?').ctrl()));
}

#[test]
fn test_named_key_chords_respect_shift() {
    let chord = Chord::parse("Ctrl+Tab").unwrap();
    assert!(chord.matches(&KeyPress::new(Key::Tab).ctrl()));
    assert!(!chord.matches(&KeyPress::new(Key::Tab).ctrl().shift()));
}

#[parameterized(
    surface = { FocusTarget::Surface, false },
    text_input = { FocusTarget::TextInput, true },
    text_area = { FocusTarget::TextArea, true },
    select = { FocusTarget::Select, true },
)]
fn test_focus_target_text_entry(target: FocusTarget, expected: bool) {
    assert_eq!(target.is_text_entry(), expected);
}

#[test]
fn test_key_press_text_excludes_command_modifiers() {
    assert_eq!(KeyPress::char('a').text(), Some('a'));
    assert_eq!(KeyPress::char('A').shift().text(), Some('A'));
    assert_eq!(KeyPress::char('a').ctrl().text(), None);
    assert_eq!(KeyPress::new(Key::Enter).text(), None);
}
