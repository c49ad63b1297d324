// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn test_no_flags_runs_tui() {
    let cli = Cli::try_parse_from(["mcpdeck"]).unwrap();
    assert_eq!(cli.mode(), Mode::Tui);
    assert!(!cli.is_headless());
    assert!(cli.data_dir.is_none());
    assert!(cli.locale.is_none());
}

#[test]
fn test_parse_query() {
    let cli = Cli::try_parse_from(["mcpdeck", "--query", "set"]).unwrap();
    assert_eq!(cli.mode(), Mode::Query("set".to_string()));
    assert!(cli.is_headless());
}

#[test]
fn test_parse_empty_query_is_still_headless() {
    let cli = Cli::try_parse_from(["mcpdeck", "--query", ""]).unwrap();
    assert_eq!(cli.mode(), Mode::Query(String::new()));
}

#[test]
fn test_parse_list_shortcuts() {
    let cli = Cli::try_parse_from(["mcpdeck", "--list-shortcuts"]).unwrap();
    assert_eq!(cli.mode(), Mode::ListShortcuts);
}

#[test]
fn test_query_conflicts_with_list_shortcuts() {
    let result = Cli::try_parse_from(["mcpdeck", "--query", "x", "--list-shortcuts"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_data_dir_and_locale() {
    let cli =
        Cli::try_parse_from(["mcpdeck", "--data-dir", "/tmp/deck", "--locale", "pt-BR"]).unwrap();
    assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/deck")));
    assert_eq!(cli.locale.as_deref(), Some("pt-BR"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["mcpdeck", "--print"]).is_err());
}
