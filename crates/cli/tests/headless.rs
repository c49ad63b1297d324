// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Binary-level tests for the non-interactive modes.
//!
//! Each test points the binary at a fresh data directory so nothing leaks
//! from the developer's own `~/.mcpdeck`.

#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn data_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

fn write_store(dir: &Path, key: &str, json: &str) {
    let store = dir.join("store");
    std::fs::create_dir_all(&store).unwrap();
    std::fs::write(store.join(format!("{key}.json")), json).unwrap();
}

fn mcpdeck(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mcpdeck").unwrap();
    cmd.env_remove("MCPDECK_DATA_DIR")
        .env_remove("MCPDECK_LOCALE")
        .env_remove("MCPDECK_LOG")
        .arg("--data-dir")
        .arg(dir);
    cmd
}

// =============================================================================
// --query
// =============================================================================

mod query {
    use super::*;

    #[test]
    fn test_query_groups_and_ranks() {
        let dir = data_dir();
        let output = mcpdeck(dir.path())
            .args(["--query", "set"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let stdout = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();

        assert_eq!(lines[0], "Navigation:");
        assert!(stdout.contains("  nav-settings"));
        assert!(stdout.contains("Settings:\n"));
        assert!(stdout.contains("settings-export"));
    }

    #[test]
    fn test_query_without_matches() {
        let dir = data_dir();
        mcpdeck(dir.path())
            .args(["--query", "zzzz"])
            .assert()
            .success()
            .stdout("No commands found.\n");
    }

    #[test]
    fn test_query_reads_servers_and_connections() {
        let dir = data_dir();
        write_store(dir.path(), "servers", r#"[{"id":"github","name":"GitHub"}]"#);
        write_store(dir.path(), "connections", r#"{"github":"connected"}"#);

        mcpdeck(dir.path())
            .args(["--query", "github"])
            .assert()
            .success()
            .stdout(predicate::str::contains("server-disconnect-github"))
            .stdout(predicate::str::contains("server-connect-github").not());
    }

    #[test]
    fn test_empty_query_lists_recents_first() {
        let dir = data_dir();
        write_store(dir.path(), "mcp-recent-commands", r#"["settings-import"]"#);

        mcpdeck(dir.path())
            .args(["--query", ""])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Recent:\n  settings-import"));
    }

    #[test]
    fn test_malformed_store_document_is_ignored() {
        let dir = data_dir();
        write_store(dir.path(), "servers", "{not json");

        mcpdeck(dir.path())
            .args(["--query", "dashboard"])
            .assert()
            .success()
            .stdout(predicate::str::contains("nav-dashboard"));
    }

    #[test]
    fn test_data_dir_from_env() {
        let dir = data_dir();
        write_store(dir.path(), "servers", r#"[{"id":"memory","name":"Memory"}]"#);

        let mut cmd = Command::cargo_bin("mcpdeck").unwrap();
        cmd.env("MCPDECK_DATA_DIR", dir.path())
            .args(["--query", "memory"])
            .assert()
            .success()
            .stdout(predicate::str::contains("server-view-memory"));
    }
}

// =============================================================================
// --list-shortcuts
// =============================================================================

mod shortcuts {
    use super::*;

    #[test]
    fn test_lists_default_bindings() {
        let dir = data_dir();
        mcpdeck(dir.path())
            .arg("--list-shortcuts")
            .assert()
            .success()
            .stdout(predicate::str::contains("commandPalette  Meta+K|Ctrl+K"))
            .stdout(predicate::str::contains("conflict").not());
    }

    #[test]
    fn test_reports_conflicts() {
        let dir = data_dir();
        write_store(dir.path(), "mcp-shortcuts", r#"{"save":"Ctrl+K"}"#);

        mcpdeck(dir.path())
            .arg("--list-shortcuts")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "conflict: Ctrl+K is bound to both commandPalette and save",
            ));
    }
}

// =============================================================================
// Flags and configuration
// =============================================================================

mod flags {
    use super::*;

    #[test]
    fn test_query_and_list_shortcuts_conflict() {
        let dir = data_dir();
        mcpdeck(dir.path())
            .args(["--query", "x", "--list-shortcuts"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot be used with"));
    }

    #[test]
    fn test_version() {
        let mut cmd = Command::cargo_bin("mcpdeck").unwrap();
        cmd.arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("mcpdeck "));
    }

    #[test]
    fn test_malformed_config_warns_and_continues() {
        let dir = data_dir();
        std::fs::write(dir.path().join("config.toml"), "recent_limit = \"many\"").unwrap();

        mcpdeck(dir.path())
            .args(["--query", "chat"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Warning: ignoring"))
            .stdout(predicate::str::contains("nav-chat"));
    }
}
