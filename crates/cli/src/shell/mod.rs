// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The dashboard controller.
//!
//! Owns all interactive state and routes each key press: to the palette
//! while it is open, to the add-server form while that is open, otherwise to
//! the chord sequencer. The terminal front end only converts events and
//! renders what the shell exposes.

mod form;

pub use form::{FormOutcome, ServerForm, Template, TEMPLATES};

use std::collections::VecDeque;
use std::sync::Arc;

use crate::config::DeckConfig;
use crate::events::{AppEvent, EventQueue, EventSink, Form, Intent};
use crate::keys::{Action, BindingMap, ChordSequencer, Key, KeyPress};
use crate::palette::{
    build_commands, maintenance_commands, ActionError, ActionSink, CommandAction, CommandPalette,
    PaletteOutcome, RecencyList,
};
use crate::routes::{Navigator, Route};
use crate::servers::{
    load_servers, save_servers, slug_id, ConnectionEvent, ConnectionHistory, ConnectionMap,
    ConnectionStatus, ServerSummary,
};
use crate::storage::backup::new_backup_id;
use crate::storage::{
    create_backup, restore_backup, BackupError, BackupStore, KeyValueStore, StorageError,
};
use crate::time::{utc_from_millis, Clock, ClockHandle};

/// Activity entries kept for the status line.
pub const ACTIVITY_LIMIT: usize = 20;

pub struct Shell {
    store: Arc<dyn KeyValueStore>,
    backups: BackupStore,
    clock: ClockHandle,
    sequencer: ChordSequencer,
    palette: CommandPalette,
    recents: RecencyList,
    events: EventQueue,
    route: Route,
    locale: Option<String>,
    show_help: bool,
    form: Option<ServerForm>,
    servers: Vec<ServerSummary>,
    connections: ConnectionMap,
    history: ConnectionHistory,
    activity: VecDeque<String>,
}

impl Shell {
    /// Load persisted state and attach the key sequencer.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        backups: BackupStore,
        config: &DeckConfig,
        clock: ClockHandle,
    ) -> Self {
        let bindings = BindingMap::load(store.as_ref());
        for conflict in bindings.conflicts() {
            tracing::warn!(%conflict, "shortcut conflict");
        }
        let mut sequencer = ChordSequencer::new(bindings, clock.clone())
            .with_timeout_ms(config.sequence_timeout_ms);
        sequencer.attach();

        let servers = load_servers(store.as_ref());
        let connections = ConnectionMap::load(store.as_ref());
        let history = ConnectionHistory::load(store.as_ref());
        let recents = RecencyList::load(store.as_ref(), config.recent_limit);
        tracing::info!(servers = servers.len(), "shell started");

        Self {
            store,
            backups,
            clock,
            sequencer,
            palette: CommandPalette::new(),
            recents,
            events: EventQueue::new(),
            route: Route::Dashboard,
            locale: config.locale.clone(),
            show_help: false,
            form: None,
            servers,
            connections,
            history,
            activity: VecDeque::new(),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The current route as a path, with the locale prefix.
    pub fn path(&self) -> String {
        self.route.path(self.locale.as_deref())
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn servers(&self) -> &[ServerSummary] {
        &self.servers
    }

    pub fn connections(&self) -> &ConnectionMap {
        &self.connections
    }

    pub fn connection_history(&self) -> &ConnectionHistory {
        &self.history
    }

    /// Backup ids, newest first.
    pub fn backup_ids(&self) -> Vec<String> {
        let mut ids = self.backups.list();
        ids.reverse();
        ids
    }

    pub fn palette(&self) -> &CommandPalette {
        &self.palette
    }

    pub fn recents(&self) -> &RecencyList {
        &self.recents
    }

    pub fn bindings(&self) -> &BindingMap {
        self.sequencer.bindings()
    }

    pub fn sequencer(&self) -> &ChordSequencer {
        &self.sequencer
    }

    pub fn form(&self) -> Option<&ServerForm> {
        self.form.as_ref()
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// A publisher handle onto the shell's event queue.
    pub fn event_sink(&self) -> EventQueue {
        self.events.clone()
    }

    /// No overlay has focus.
    pub fn is_idle(&self) -> bool {
        !self.palette.is_open() && self.form.is_none() && !self.show_help
    }

    /// Where keyboard input currently goes.
    pub fn text_focus(&self) -> bool {
        self.palette.is_open() || self.form.is_some()
    }

    pub fn activity(&self) -> impl Iterator<Item = &str> {
        self.activity.iter().map(String::as_str)
    }

    pub fn last_activity(&self) -> Option<&str> {
        self.activity.back().map(String::as_str)
    }

    /// Route one key press. Returns `true` when the press was consumed.
    pub fn handle_key(&mut self, press: &KeyPress) -> bool {
        let consumed = if self.palette.is_open() {
            self.palette_key(press)
        } else if self.form.is_some() {
            self.form_key(press)
        } else if self.show_help && press.key == Key::Esc {
            self.show_help = false;
            true
        } else {
            let outcome = self.sequencer.handle(press);
            if let Some(intent) = outcome.intent {
                self.apply(intent);
            }
            outcome.prevent_default
        };
        self.palette.run_deferred();
        self.drain_events();
        consumed
    }

    /// Periodic housekeeping. Returns `true` when something visible changed.
    pub fn tick(&mut self) -> bool {
        let expired = self.sequencer.tick();
        self.palette.run_deferred();
        let drained = self.drain_events() > 0;
        expired || drained
    }

    /// Detach from key input and close overlays.
    pub fn shutdown(&mut self) {
        self.sequencer.detach();
        self.palette.close();
        self.form = None;
        tracing::info!("shell stopped");
    }

    fn palette_key(&mut self, press: &KeyPress) -> bool {
        // The palette shortcut toggles it closed even though focus is in
        // its text input.
        if self.sequencer.bindings().action_for(press) == Some(Action::OpenPalette) {
            self.palette.close();
            return true;
        }
        match self.palette.handle_key(press) {
            PaletteOutcome::Execute(index) => {
                self.execute_command(index);
                true
            }
            outcome => outcome.prevent_default(),
        }
    }

    fn form_key(&mut self, press: &KeyPress) -> bool {
        let Some(form) = self.form.as_mut() else {
            return false;
        };
        match form.handle_key(press) {
            FormOutcome::Editing => {}
            FormOutcome::Cancel => self.form = None,
            FormOutcome::Submit { name, description } => {
                self.form = None;
                self.add_server(name, description);
            }
        }
        true
    }

    /// Run the palette row at display `index`.
    pub fn execute_command(&mut self, index: usize) {
        let mut palette = std::mem::take(&mut self.palette);
        let mut recents = std::mem::take(&mut self.recents);
        let store = Arc::clone(&self.store);
        let result = palette.execute(index, &mut recents, store.as_ref(), self);
        self.palette = palette;
        self.recents = recents;
        if let Err(e) = result {
            tracing::warn!(error = %e, "palette command failed");
            self.record(e.to_string());
        }
    }

    fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Navigate(route) => self.navigate(route),
            Intent::OpenPalette => self.toggle_palette(),
            Intent::OpenForm(form) => self.open_form(form),
            Intent::ToggleShortcutsHelp => self.show_help = !self.show_help,
            Intent::Dispatch(event) => self.events.publish(event),
        }
    }

    fn toggle_palette(&mut self) {
        if self.palette.is_open() {
            self.palette.close();
            return;
        }
        self.show_help = false;
        self.refresh_commands();
        self.palette.open();
    }

    fn open_form(&mut self, kind: Form) {
        self.show_help = false;
        self.form = Some(ServerForm::new(kind));
    }

    fn refresh_commands(&mut self) {
        let mut commands = build_commands(&self.servers, &self.connections);
        commands.extend(maintenance_commands(&self.backups.list()));
        self.palette.set_commands(commands);
    }

    fn has_server(&self, id: &str) -> bool {
        self.servers.iter().any(|s| s.id == id)
    }

    fn server_name(&self, id: &str) -> String {
        self.servers
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Append a server and persist the list. Returns the new id.
    pub fn add_server(&mut self, name: String, description: Option<String>) -> String {
        let id = slug_id(&name, &self.servers);
        self.record(format!("Added {name}"));
        self.servers.push(ServerSummary {
            id: id.clone(),
            name,
            description,
        });
        match save_servers(self.store.as_ref(), &self.servers) {
            Ok(()) => tracing::info!(server = %id, "added server"),
            Err(e) => self.report_failure("Saving servers", &e),
        }
        self.refresh_commands();
        id
    }

    /// Apply every queued event. Returns how many were handled.
    pub fn drain_events(&mut self) -> usize {
        let events = self.events.drain();
        let count = events.len();
        for event in events {
            self.apply_event(event);
        }
        if count > 0 && self.palette.is_open() {
            self.refresh_commands();
        }
        count
    }

    fn apply_event(&mut self, event: AppEvent) {
        tracing::debug!(action = event.name(), "handling event");
        match event {
            AppEvent::Connect { server_id } => {
                self.set_status(&server_id, ConnectionStatus::Connected)
            }
            AppEvent::Disconnect { server_id } => {
                self.set_status(&server_id, ConnectionStatus::Disconnected)
            }
            AppEvent::ClearChat => self.record("Cleared chat"),
            AppEvent::SetModel { model } => self.record(format!("Model set to {model}")),
            AppEvent::ToggleStreaming => self.record("Toggled streaming"),
            AppEvent::CreateSession => {
                self.navigate(Route::Chat);
                self.record("Started a new chat session");
            }
            AppEvent::ViewSessions => {
                self.navigate(Route::Chat);
                self.record("Viewing chat sessions");
            }
            AppEvent::Save => match self.save_all() {
                Ok(()) => self.record("Saved"),
                Err(e) => self.report_failure("Save", &e),
            },
            AppEvent::NextTab => self.navigate(self.route.next_tab()),
            AppEvent::PreviousTab => self.navigate(self.route.previous_tab()),
            AppEvent::ExportBackup => match self.export_backup() {
                Ok(id) => self.record(format!("Exported backup {id}")),
                Err(e) => self.report_failure("Export", &e),
            },
            AppEvent::ImportBackup => match self.import_backup() {
                Ok(Some(id)) => self.record(format!("Imported backup {id}")),
                Ok(None) => self.record("No backups to import"),
                Err(e) => self.report_failure("Import", &e),
            },
            AppEvent::RestoreBackup { backup_id } => match self.restore_from_backup(&backup_id) {
                Ok(()) => self.record(format!("Restored backup {backup_id}")),
                Err(e) => self.report_failure("Restore", &e),
            },
            AppEvent::DeleteBackup { backup_id } => match self.backups.delete(&backup_id) {
                Ok(()) => {
                    tracing::info!(id = %backup_id, "deleted backup");
                    self.record(format!("Deleted backup {backup_id}"));
                }
                Err(e) => self.report_failure("Delete", &e),
            },
            AppEvent::ClearAllData => match self.clear_all_data() {
                Ok(_) => self.record("Cleared all data"),
                Err(e) => self.report_failure("Clear", &e),
            },
        }
    }

    fn set_status(&mut self, server_id: &str, status: ConnectionStatus) {
        if !self.has_server(server_id) {
            self.record(format!("Unknown server {server_id}"));
            return;
        }
        self.connections.set(server_id, status);
        if let Err(e) = self.connections.save(self.store.as_ref()) {
            self.report_failure("Saving connections", &e);
        }
        self.history.record(ConnectionEvent {
            server_id: server_id.to_string(),
            status,
            at: utc_from_millis(self.clock.now_millis()),
        });
        if let Err(e) = self.history.save(self.store.as_ref()) {
            self.report_failure("Saving connection history", &e);
        }
        tracing::info!(server = server_id, status = %status, "connection status changed");
        let verb = match status {
            ConnectionStatus::Connected => "Connected",
            _ => "Disconnected",
        };
        self.record(format!("{verb} {}", self.server_name(server_id)));
    }

    fn save_all(&self) -> Result<(), StorageError> {
        let store = self.store.as_ref();
        save_servers(store, &self.servers)?;
        self.connections.save(store)?;
        self.sequencer.bindings().save(store)?;
        self.recents.save(store)
    }

    /// Write a snapshot of the store to the backups directory.
    pub fn export_backup(&self) -> Result<String, BackupError> {
        let backup = create_backup(self.store.as_ref(), &self.clock);
        let id = new_backup_id(&self.clock);
        self.backups.save(&id, &backup)?;
        Ok(id)
    }

    /// Restore the newest backup. `None` when there is nothing to restore.
    pub fn import_backup(&mut self) -> Result<Option<String>, BackupError> {
        let Some(id) = self.backups.latest() else {
            return Ok(None);
        };
        self.restore_from_backup(&id)?;
        Ok(Some(id))
    }

    /// Restore backup `id` and reload state from the store.
    pub fn restore_from_backup(&mut self, id: &str) -> Result<(), BackupError> {
        let backup = self.backups.load(id)?;
        restore_backup(self.store.as_ref(), &backup)?;
        self.reload();
        tracing::info!(id, "restored from backup");
        Ok(())
    }

    /// Remove every stored key and reload. Backups live outside the store
    /// and survive. Returns how many keys were removed.
    pub fn clear_all_data(&mut self) -> Result<usize, StorageError> {
        let keys = self.store.keys()?;
        for key in &keys {
            self.store.remove(key)?;
        }
        self.reload();
        self.navigate(Route::Dashboard);
        tracing::info!(keys = keys.len(), "cleared all data");
        Ok(keys.len())
    }

    /// Re-read everything persisted from the store.
    pub fn reload(&mut self) {
        let store = self.store.as_ref();
        self.servers = load_servers(store);
        self.connections = ConnectionMap::load(store);
        self.history = ConnectionHistory::load(store);
        self.recents = RecencyList::load(store, self.recents.limit());
        self.sequencer.set_bindings(BindingMap::load(store));
        self.refresh_commands();
    }

    fn record(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "activity");
        self.activity.push_back(message);
        while self.activity.len() > ACTIVITY_LIMIT {
            self.activity.pop_front();
        }
    }

    fn report_failure(&mut self, what: &str, error: &dyn std::error::Error) {
        tracing::warn!(error = %error, "{what} failed");
        self.record(format!("{what} failed: {error}"));
    }
}

impl Navigator for Shell {
    fn navigate(&mut self, route: Route) {
        if self.route != route {
            tracing::info!(path = %route.path(self.locale.as_deref()), "navigate");
        }
        self.route = route;
    }
}

impl ActionSink for Shell {
    fn perform(&mut self, action: &CommandAction) -> Result<(), ActionError> {
        match action {
            CommandAction::Navigate(Route::ServerDetail(id)) if !self.has_server(id) => Err(
                ActionError::new("navigate", format!("unknown server {id:?}")),
            ),
            CommandAction::Navigate(route) => {
                self.navigate(route.clone());
                Ok(())
            }
            CommandAction::Dispatch(event) => {
                self.events.publish(event.clone());
                Ok(())
            }
            CommandAction::OpenForm(form) => {
                self.open_form(*form);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
