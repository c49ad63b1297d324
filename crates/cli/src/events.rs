// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed application events and the intents key handlers produce.
//!
//! Producers (the sequencer, palette commands) publish [`AppEvent`]s through
//! an [`EventSink`] without holding a reference to whoever consumes them. The
//! shell drains the [`EventQueue`] and matches every variant.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::routes::Route;

/// A cross-cutting request, serialized as `{"action": "...", ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum AppEvent {
    Connect {
        #[serde(rename = "serverId")]
        server_id: String,
    },
    Disconnect {
        #[serde(rename = "serverId")]
        server_id: String,
    },
    ClearChat,
    SetModel {
        model: String,
    },
    ToggleStreaming,
    CreateSession,
    ViewSessions,
    Save,
    NextTab,
    PreviousTab,
    ExportBackup,
    ImportBackup,
    RestoreBackup {
        #[serde(rename = "backupId")]
        backup_id: String,
    },
    DeleteBackup {
        #[serde(rename = "backupId")]
        backup_id: String,
    },
    ClearAllData,
}

impl AppEvent {
    /// The `action` discriminator.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connect { .. } => "connect",
            Self::Disconnect { .. } => "disconnect",
            Self::ClearChat => "clearChat",
            Self::SetModel { .. } => "setModel",
            Self::ToggleStreaming => "toggleStreaming",
            Self::CreateSession => "createSession",
            Self::ViewSessions => "viewSessions",
            Self::Save => "save",
            Self::NextTab => "nextTab",
            Self::PreviousTab => "previousTab",
            Self::ExportBackup => "exportBackup",
            Self::ImportBackup => "importBackup",
            Self::RestoreBackup { .. } => "restoreBackup",
            Self::DeleteBackup { .. } => "deleteBackup",
            Self::ClearAllData => "clearAllData",
        }
    }
}

/// Forms the shell can open as overlays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Form {
    NewServer,
    FromTemplate,
}

/// What a handled key asks the application to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Navigate(Route),
    OpenPalette,
    OpenForm(Form),
    ToggleShortcutsHelp,
    Dispatch(AppEvent),
}

/// Publisher side of the event bus.
pub trait EventSink {
    fn publish(&self, event: AppEvent);
}

/// In-process FIFO of published events. Clones share the queue.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    inner: Arc<Mutex<VecDeque<AppEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending event in publish order.
    pub fn drain(&self) -> Vec<AppEvent> {
        self.inner.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl EventSink for EventQueue {
    fn publish(&self, event: AppEvent) {
        tracing::debug!(action = event.name(), "published event");
        self.inner.lock().push_back(event);
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
