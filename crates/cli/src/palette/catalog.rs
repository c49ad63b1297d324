// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Palette command catalog.
//!
//! A pure function of the server list and connection map. It is rebuilt
//! whenever the palette opens or state changes so connect/disconnect entries
//! always reflect the current status.

use super::command::{Category, Command, CommandAction};
use crate::events::{AppEvent, Form};
use crate::routes::Route;
use crate::servers::{ConnectionMap, ServerSummary};

/// Backups offered for restore and delete in the palette.
pub const BACKUP_COMMAND_LIMIT: usize = 5;

/// Static entries followed by a view entry and a connect-or-disconnect
/// entry per server.
pub fn build_commands(servers: &[ServerSummary], connections: &ConnectionMap) -> Vec<Command> {
    let mut commands = static_commands();
    for server in servers {
        commands.extend(server_commands(server, connections));
    }
    commands
}

fn static_commands() -> Vec<Command> {
    vec![
        Command::new(
            "nav-dashboard",
            "Go to Dashboard",
            Category::Navigation,
            CommandAction::Navigate(Route::Dashboard),
        )
        .description("View all MCP servers")
        .icon('⌂')
        .keywords(&["home", "servers", "overview"]),
        Command::new(
            "nav-chat",
            "Go to Chat",
            Category::Navigation,
            CommandAction::Navigate(Route::Chat),
        )
        .description("Chat with connected servers")
        .icon('✉')
        .keywords(&["conversation", "message", "talk"]),
        Command::new(
            "nav-developer",
            "Go to Developer Tools",
            Category::Navigation,
            CommandAction::Navigate(Route::Developer),
        )
        .description("Inspect requests and responses")
        .icon('⚙')
        .keywords(&["debug", "inspect", "logs"]),
        Command::new(
            "nav-settings",
            "Go to Settings",
            Category::Navigation,
            CommandAction::Navigate(Route::Settings),
        )
        .description("Configure application preferences")
        .icon('≡')
        .keywords(&["settings", "preferences", "config"]),
        Command::new(
            "server-add",
            "Add Server",
            Category::Server,
            CommandAction::OpenForm(Form::NewServer),
        )
        .description("Configure a new MCP server")
        .icon('+')
        .keywords(&["new", "create", "install"]),
        Command::new(
            "server-templates",
            "Browse Templates",
            Category::Server,
            CommandAction::OpenForm(Form::FromTemplate),
        )
        .description("Start from a server template")
        .icon('▤')
        .keywords(&["template", "starter", "gallery"]),
        Command::new(
            "chat-new-session",
            "New Chat Session",
            Category::Chat,
            CommandAction::Dispatch(AppEvent::CreateSession),
        )
        .description("Start a fresh conversation")
        .icon('✎')
        .keywords(&["chat", "conversation", "new"]),
        Command::new(
            "settings-export",
            "Export Configuration",
            Category::Settings,
            CommandAction::Dispatch(AppEvent::ExportBackup),
        )
        .description("Save servers and settings to a backup")
        .icon('↑')
        .keywords(&["backup", "save", "download"]),
        Command::new(
            "settings-import",
            "Import Configuration",
            Category::Settings,
            CommandAction::Dispatch(AppEvent::ImportBackup),
        )
        .description("Restore servers and settings from a backup")
        .icon('↓')
        .keywords(&["restore", "backup", "load"]),
    ]
}

/// Data-management entries: clear everything, then restore and delete for
/// the newest backups. `backups` is oldest first, as the backup store lists
/// them.
pub fn maintenance_commands(backups: &[String]) -> Vec<Command> {
    let mut commands = vec![Command::new(
        "settings-clear-data",
        "Clear All Data",
        Category::Settings,
        CommandAction::Dispatch(AppEvent::ClearAllData),
    )
    .description("Erase stored servers and preferences; backups are kept")
    .icon('✕')
    .keywords(&["wipe", "erase", "factory"])];

    for id in backups.iter().rev().take(BACKUP_COMMAND_LIMIT) {
        commands.push(
            Command::new(
                format!("backup-restore-{id}"),
                format!("Restore {id}"),
                Category::Settings,
                CommandAction::Dispatch(AppEvent::RestoreBackup {
                    backup_id: id.clone(),
                }),
            )
            .description("Replace current data with this backup")
            .icon('↺')
            .keywords(&["backup", "restore", "rollback"]),
        );
        commands.push(
            Command::new(
                format!("backup-delete-{id}"),
                format!("Delete {id}"),
                Category::Settings,
                CommandAction::Dispatch(AppEvent::DeleteBackup {
                    backup_id: id.clone(),
                }),
            )
            .description("Remove this backup file")
            .icon('⌫')
            .keywords(&["backup", "remove"]),
        );
    }
    commands
}

fn server_commands(server: &ServerSummary, connections: &ConnectionMap) -> [Command; 2] {
    let view = Command::new(
        format!("server-view-{}", server.id),
        format!("View {}", server.name),
        Category::Server,
        CommandAction::Navigate(Route::ServerDetail(server.id.clone())),
    )
    .description(
        server
            .description
            .clone()
            .unwrap_or_else(|| format!("Open {} details", server.name)),
    )
    .icon('●')
    .keywords(&["server", "details", server.id.as_str()]);

    let toggle = if connections.is_connected(&server.id) {
        Command::new(
            format!("server-disconnect-{}", server.id),
            format!("Disconnect {}", server.name),
            Category::Server,
            CommandAction::Dispatch(AppEvent::Disconnect {
                server_id: server.id.clone(),
            }),
        )
        .description("Stop the server connection")
        .icon('○')
        .keywords(&["stop", "disconnect", server.id.as_str()])
    } else {
        Command::new(
            format!("server-connect-{}", server.id),
            format!("Connect {}", server.name),
            Category::Server,
            CommandAction::Dispatch(AppEvent::Connect {
                server_id: server.id.clone(),
            }),
        )
        .description("Start the server connection")
        .icon('◉')
        .keywords(&["start", "connect", server.id.as_str()])
    };

    [view, toggle]
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
