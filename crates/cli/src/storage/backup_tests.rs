// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::storage::MemoryStore;
use crate::time::FakeClock;
use tempfile::TempDir;

fn populated_store() -> MemoryStore {
    let store = MemoryStore::new();
    store
        .set(SERVERS_KEY, r#"[{"id":"fs","name":"Filesystem"}]"#)
        .unwrap();
    store.set(CONNECTIONS_KEY, r#"{"fs":"connected"}"#).unwrap();
    store
        .set(SHORTCUTS_KEY, r#"{"commandPalette":"Ctrl+P"}"#)
        .unwrap();
    store.set(RECENTS_KEY, r#"["nav-chat"]"#).unwrap();
    store
}

#[test]
fn test_create_backup_captures_every_section() {
    let store = populated_store();
    let clock = FakeClock::new(1_700_000_000_000);

    let backup = create_backup(&store, &clock);

    assert_eq!(backup.version, BACKUP_VERSION);
    assert_eq!(backup.created_at.timestamp_millis(), 1_700_000_000_000);
    assert_eq!(backup.servers, vec![ServerSummary::new("fs", "Filesystem")]);
    assert_eq!(backup.connections.get("fs").map(String::as_str), Some("connected"));
    assert_eq!(backup.shortcuts.get("commandPalette").map(String::as_str), Some("Ctrl+P"));
    assert_eq!(backup.recents, vec!["nav-chat".to_string()]);
}

#[test]
fn test_create_backup_treats_malformed_sections_as_empty() {
    let store = MemoryStore::new();
    store.set(SERVERS_KEY, "not json").unwrap();
    store.set(RECENTS_KEY, "[1, 2").unwrap();

    let backup = create_backup(&store, &FakeClock::at_epoch());

    assert!(backup.servers.is_empty());
    assert!(backup.recents.is_empty());
}

#[test]
fn test_restore_backup_replaces_sections() {
    let source = populated_store();
    let backup = create_backup(&source, &FakeClock::at_epoch());

    let target = MemoryStore::new();
    target.set(RECENTS_KEY, r#"["nav-settings"]"#).unwrap();
    restore_backup(&target, &backup).unwrap();

    assert_eq!(
        target.get(RECENTS_KEY).unwrap().as_deref(),
        Some(r#"["nav-chat"]"#)
    );
    assert_eq!(
        target.get(CONNECTIONS_KEY).unwrap().as_deref(),
        Some(r#"{"fs":"connected"}"#)
    );
}

#[test]
fn test_restore_backup_rejects_other_versions() {
    let mut backup = create_backup(&MemoryStore::new(), &FakeClock::at_epoch());
    backup.version = 2;

    let err = restore_backup(&MemoryStore::new(), &backup).unwrap_err();
    assert!(matches!(err, BackupError::UnsupportedVersion(2)));
}

#[test]
fn test_backup_serializes_camel_case() {
    let backup = create_backup(&MemoryStore::new(), &FakeClock::at_epoch());
    let json = serde_json::to_value(&backup).unwrap();
    assert!(json.get("createdAt").is_some());
    assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
}

#[test]
fn test_backup_store_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let backups = BackupStore::new(dir.path().join("backups"));
    let backup = create_backup(&populated_store(), &FakeClock::new(42));

    backups.save("backup-one", &backup).unwrap();

    assert_eq!(backups.load("backup-one").unwrap(), backup);
    assert_eq!(backups.list(), vec!["backup-one".to_string()]);
}

#[test]
fn test_backup_store_load_missing_is_not_found() {
    let dir = TempDir::new().unwrap();
    let backups = BackupStore::new(dir.path());

    let err = backups.load("backup-missing").unwrap_err();
    assert!(matches!(err, BackupError::NotFound(id) if id == "backup-missing"));
}

#[test]
fn test_backup_store_delete_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let backups = BackupStore::new(dir.path());
    let backup = create_backup(&MemoryStore::new(), &FakeClock::at_epoch());
    backups.save("backup-a", &backup).unwrap();

    backups.delete("backup-a").unwrap();
    backups.delete("backup-a").unwrap();

    assert!(backups.list().is_empty());
}

#[test]
fn test_backup_store_rejects_path_like_ids() {
    let dir = TempDir::new().unwrap();
    let backups = BackupStore::new(dir.path());
    let backup = create_backup(&MemoryStore::new(), &FakeClock::at_epoch());

    let err = backups.save("../escape", &backup).unwrap_err();
    assert!(matches!(err, BackupError::Storage(StorageError::InvalidKey(_))));
}

#[test]
fn test_new_backup_ids_sort_by_creation_time() {
    let clock = FakeClock::new(1_000);
    let first = new_backup_id(&clock);
    clock.advance_ms(9_000_000);
    let second = new_backup_id(&clock);

    assert!(first.starts_with("backup-0000000001000-"));
    assert!(first < second);
    assert!(validate_key(&first).is_ok());
}

#[test]
fn test_latest_returns_newest_id() {
    let dir = TempDir::new().unwrap();
    let backups = BackupStore::new(dir.path());
    let clock = FakeClock::new(5);
    let backup = create_backup(&MemoryStore::new(), &clock);

    let older = new_backup_id(&clock);
    clock.advance_ms(10);
    let newer = new_backup_id(&clock);
    backups.save(&newer, &backup).unwrap();
    backups.save(&older, &backup).unwrap();

    assert_eq!(backups.latest(), Some(newer));
}
