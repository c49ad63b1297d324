// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server configurations and their connection status.
//!
//! The palette only reads these; changes arrive through dispatched
//! [`AppEvent`](crate::events::AppEvent)s consumed by the shell.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::{
    load_json, save_json, KeyValueStore, StorageError, CONNECTIONS_KEY, CONNECTION_HISTORY_KEY,
    SERVERS_KEY,
};

/// Connection history entries kept on disk.
pub const HISTORY_LIMIT: usize = 50;

/// A configured MCP server as the dashboard lists it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSummary {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ServerSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }
}

/// Load the server list; a missing or malformed document is an empty list.
pub fn load_servers(store: &dyn KeyValueStore) -> Vec<ServerSummary> {
    load_json(store, SERVERS_KEY).unwrap_or_default()
}

pub fn save_servers(
    store: &dyn KeyValueStore,
    servers: &[ServerSummary],
) -> Result<(), StorageError> {
    save_json(store, SERVERS_KEY, servers)
}

/// Derive a server id from its display name, unique among `existing`.
///
/// `"My Files!"` becomes `my-files`; a clash appends `-2`, `-3`, ...
pub fn slug_id(name: &str, existing: &[ServerSummary]) -> String {
    let mut slug = String::new();
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    let base = match slug.trim_end_matches('-') {
        "" => "server".to_string(),
        trimmed => trimmed.to_string(),
    };

    let taken = |id: &str| existing.iter().any(|s| s.id == id);
    if !taken(&base) {
        return base;
    }
    (2..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or(base)
}

/// Connection status reported for a server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConnectionStatus {
    Connected,
    Connecting,
    #[default]
    Disconnected,
    Error,
}

impl ConnectionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Connecting => "connecting",
            Self::Disconnected => "disconnected",
            Self::Error => "error",
        }
    }

    /// Parse a stored status. Unknown strings read as disconnected.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "connected" => Self::Connected,
            "connecting" => Self::Connecting,
            "error" => Self::Error,
            _ => Self::Disconnected,
        }
    }
}

impl From<String> for ConnectionStatus {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<ConnectionStatus> for String {
    fn from(status: ConnectionStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server id to connection status. Servers without an entry are disconnected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionMap {
    statuses: BTreeMap<String, ConnectionStatus>,
}

impl ConnectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: BTreeMap<String, String>) -> Self {
        Self {
            statuses: raw
                .into_iter()
                .map(|(id, status)| (id, ConnectionStatus::parse(&status)))
                .collect(),
        }
    }

    pub fn to_raw(&self) -> BTreeMap<String, String> {
        self.statuses
            .iter()
            .map(|(id, status)| (id.clone(), status.as_str().to_string()))
            .collect()
    }

    pub fn status(&self, server_id: &str) -> ConnectionStatus {
        self.statuses.get(server_id).copied().unwrap_or_default()
    }

    pub fn is_connected(&self, server_id: &str) -> bool {
        self.status(server_id) == ConnectionStatus::Connected
    }

    pub fn set(&mut self, server_id: impl Into<String>, status: ConnectionStatus) {
        self.statuses.insert(server_id.into(), status);
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        load_json::<BTreeMap<String, String>>(store, CONNECTIONS_KEY)
            .map(Self::from_raw)
            .unwrap_or_default()
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        save_json(store, CONNECTIONS_KEY, &self.to_raw())
    }
}

/// One status change in the connection history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionEvent {
    pub server_id: String,
    pub status: ConnectionStatus,
    pub at: DateTime<Utc>,
}

/// Status changes, oldest first, capped at [`HISTORY_LIMIT`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionHistory {
    entries: VecDeque<ConnectionEvent>,
}

impl ConnectionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the store. Missing or malformed history is empty.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let mut history = Self {
            entries: load_json(store, CONNECTION_HISTORY_KEY).unwrap_or_default(),
        };
        history.truncate();
        history
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        save_json(store, CONNECTION_HISTORY_KEY, &self.entries)
    }

    /// Append `event`, dropping the oldest entries past the limit.
    pub fn record(&mut self, event: ConnectionEvent) {
        self.entries.push_back(event);
        self.truncate();
    }

    fn truncate(&mut self) {
        while self.entries.len() > HISTORY_LIMIT {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest first.
    pub fn recent(&self) -> impl Iterator<Item = &ConnectionEvent> {
        self.entries.iter().rev()
    }
}

#[cfg(test)]
#[path = "servers_tests.rs"]
mod tests;
