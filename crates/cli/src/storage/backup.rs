// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Point-in-time snapshots of every persisted section.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    json_files_in, load_json, save_json, validate_key, KeyValueStore, StorageError,
    CONNECTIONS_KEY, RECENTS_KEY, SERVERS_KEY, SHORTCUTS_KEY,
};
use crate::servers::ServerSummary;
use crate::time::{utc_from_millis, Clock};

/// Current backup document version.
pub const BACKUP_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum BackupError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("unsupported backup version {0} (expected {BACKUP_VERSION})")]
    UnsupportedVersion(u32),

    #[error("backup not found: {0}")]
    NotFound(String),
}

/// A snapshot of the servers, connection map, shortcuts and recent commands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub version: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub servers: Vec<ServerSummary>,
    #[serde(default)]
    pub connections: BTreeMap<String, String>,
    #[serde(default)]
    pub shortcuts: BTreeMap<String, String>,
    #[serde(default)]
    pub recents: Vec<String>,
}

/// Capture the current contents of `store`. Malformed sections are captured as empty.
pub fn create_backup(store: &dyn KeyValueStore, clock: &dyn Clock) -> Backup {
    Backup {
        version: BACKUP_VERSION,
        created_at: utc_from_millis(clock.now_millis()),
        servers: load_json(store, SERVERS_KEY).unwrap_or_default(),
        connections: load_json(store, CONNECTIONS_KEY).unwrap_or_default(),
        shortcuts: load_json(store, SHORTCUTS_KEY).unwrap_or_default(),
        recents: load_json(store, RECENTS_KEY).unwrap_or_default(),
    }
}

/// Write every section of `backup` back into `store`, replacing what is there.
pub fn restore_backup(store: &dyn KeyValueStore, backup: &Backup) -> Result<(), BackupError> {
    if backup.version != BACKUP_VERSION {
        return Err(BackupError::UnsupportedVersion(backup.version));
    }
    save_json(store, SERVERS_KEY, &backup.servers)?;
    save_json(store, CONNECTIONS_KEY, &backup.connections)?;
    save_json(store, SHORTCUTS_KEY, &backup.shortcuts)?;
    save_json(store, RECENTS_KEY, &backup.recents)?;
    tracing::info!(
        servers = backup.servers.len(),
        created_at = %backup.created_at,
        "restored backup"
    );
    Ok(())
}

/// New backup id. Ids sort lexically in creation order.
pub fn new_backup_id(clock: &dyn Clock) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("backup-{:013}-{}", clock.now_millis(), &suffix[..8])
}

/// Backups on disk: `<dir>/<id>.json`.
#[derive(Clone, Debug)]
pub struct BackupStore {
    dir: PathBuf,
}

impl BackupStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, BackupError> {
        validate_key(id)?;
        Ok(self.dir.join(format!("{id}.json")))
    }

    pub fn save(&self, id: &str, backup: &Backup) -> Result<PathBuf, BackupError> {
        let path = self.path_for(id)?;
        std::fs::create_dir_all(&self.dir).map_err(StorageError::from)?;
        let json = serde_json::to_string_pretty(backup).map_err(StorageError::from)?;
        std::fs::write(&path, json).map_err(StorageError::from)?;
        tracing::info!(id, path = %path.display(), "saved backup");
        Ok(path)
    }

    pub fn load(&self, id: &str) -> Result<Backup, BackupError> {
        let path = self.path_for(id)?;
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(BackupError::NotFound(id.to_string()))
            }
            Err(e) => return Err(StorageError::from(e).into()),
        };
        Ok(serde_json::from_str(&content).map_err(StorageError::from)?)
    }

    /// Delete a backup. Deleting a missing backup succeeds.
    pub fn delete(&self, id: &str) -> Result<(), BackupError> {
        let path = self.path_for(id)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::from(e).into()),
        }
    }

    /// Backup ids, oldest first.
    pub fn list(&self) -> Vec<String> {
        let mut ids: Vec<String> = json_files_in(&self.dir)
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .filter(|id| validate_key(id).is_ok())
            .collect();
        ids.sort();
        ids
    }

    pub fn latest(&self) -> Option<String> {
        self.list().pop()
    }
}

#[cfg(test)]
#[path = "backup_tests.rs"]
mod tests;
