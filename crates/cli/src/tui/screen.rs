// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Full-screen layout: header, body or overlay, status line.
//!
//! A pure function of the shell, so layout is testable without a terminal.

use unicode_width::UnicodeWidthStr;

use super::colors::{
    styled_accent, styled_gray, styled_palette_line, styled_separator, styled_status,
};
use super::separator::{make_separator, make_title_separator};
use crate::palette::view::{render_palette, render_shortcuts_help, truncate_to_width};
use crate::routes::{Route, TAB_ORDER};
use crate::servers::ConnectionStatus;
use crate::shell::{ServerForm, Shell, TEMPLATES};

pub const APP_NAME: &str = "mcpdeck";
pub const NO_SERVERS: &str = "No servers yet. Press Ctrl+N to add one, or Ctrl+K for commands.";
pub const DASHBOARD_HINT: &str = "ctrl+k commands · g then d/c/s go to · ? shortcuts · q quit";

pub const NO_BACKUPS: &str = "  No backups yet. Export one from the command palette.";
pub const NO_HISTORY: &str = "  No connection changes yet.";

/// Newest backups listed on the settings page.
const SETTINGS_BACKUP_ROWS: usize = 5;
/// Newest connection changes listed on the developer page.
const DEVELOPER_HISTORY_ROWS: usize = 10;

/// Indent and gap around the name, plus the widest label (`● disconnected`).
const STATUS_COLUMN: usize = 2 + 2 + 14;

/// Header, two separators, the overlay title and the status line.
const CHROME_ROWS: usize = 5;

/// Every line of the screen, styled. The palette is windowed to `height`.
pub fn render_screen(shell: &Shell, width: usize, height: usize) -> Vec<String> {
    let mut lines = vec![header(shell, width), styled_separator(&make_separator(width))];

    if shell.palette().is_open() {
        lines.push(styled_separator(&make_title_separator("Commands", width)));
        lines.extend(
            render_palette(
                shell.palette(),
                shell.recents().ids(),
                width,
                height.saturating_sub(CHROME_ROWS),
            )
                .iter()
                .map(styled_palette_line),
        );
    } else if let Some(form) = shell.form() {
        lines.extend(form_lines(form, width));
    } else if shell.is_help_visible() {
        lines.push(styled_separator(&make_title_separator("Shortcuts", width)));
        lines.extend(
            render_shortcuts_help(shell.bindings(), width)
                .into_iter()
                .skip(1),
        );
    } else {
        lines.extend(body(shell, width));
    }

    lines.push(styled_separator(&make_separator(width)));
    lines.push(status_line(shell, width));
    lines
}

fn header(shell: &Shell, width: usize) -> String {
    let active = shell.route().tab_index();
    let tabs: Vec<String> = TAB_ORDER
        .iter()
        .enumerate()
        .map(|(i, route)| {
            if i == active {
                styled_accent(route.title())
            } else {
                styled_gray(route.title())
            }
        })
        .collect();
    let count = match shell.servers().len() {
        1 => "1 server".to_string(),
        n => format!("{n} servers"),
    };
    // Tabs are short ASCII titles; only the server count can overflow.
    let plain_len = APP_NAME.width()
        + TAB_ORDER.iter().map(|r| r.title().width() + 2).sum::<usize>()
        + 2;
    let count = truncate_to_width(&count, width.saturating_sub(plain_len));
    format!(
        "{}  {}  {}",
        styled_accent(APP_NAME),
        tabs.join("  "),
        styled_gray(&count)
    )
}

fn body(shell: &Shell, width: usize) -> Vec<String> {
    match shell.route() {
        Route::Dashboard => dashboard(shell, width),
        Route::ServerDetail(id) => server_detail(shell, id, width),
        Route::Chat => {
            let connected: Vec<&str> = shell
                .servers()
                .iter()
                .filter(|s| shell.connections().is_connected(&s.id))
                .map(|s| s.name.as_str())
                .collect();
            let line = if connected.is_empty() {
                "No connected servers. Connect one from the command palette.".to_string()
            } else {
                format!("Chatting with {}", connected.join(", "))
            };
            vec![truncate_to_width(&line, width)]
        }
        Route::Developer => developer(shell, width),
        Route::Settings => {
            let locale = shell.locale().unwrap_or("default");
            let mut lines = vec![truncate_to_width(&format!("Locale: {locale}"), width)];
            lines.push(String::new());
            lines.extend(render_shortcuts_help(shell.bindings(), width));
            lines.push(String::new());
            lines.push(truncate_to_width("Backups", width));
            let backups = shell.backup_ids();
            if backups.is_empty() {
                lines.push(styled_gray(&truncate_to_width(NO_BACKUPS, width)));
            }
            lines.extend(
                backups
                    .iter()
                    .take(SETTINGS_BACKUP_ROWS)
                    .map(|id| truncate_to_width(&format!("  {id}"), width)),
            );
            lines
        }
    }
}

fn dashboard(shell: &Shell, width: usize) -> Vec<String> {
    if shell.servers().is_empty() {
        return vec![
            truncate_to_width(NO_SERVERS, width),
            String::new(),
            styled_gray(&truncate_to_width(DASHBOARD_HINT, width)),
        ];
    }
    let name_width = shell
        .servers()
        .iter()
        .map(|s| s.name.width())
        .max()
        .unwrap_or(0)
        .min(width.saturating_sub(STATUS_COLUMN));
    let mut lines: Vec<String> = shell
        .servers()
        .iter()
        .map(|server| {
            let name = truncate_to_width(&server.name, name_width);
            let pad = name_width.saturating_sub(name.width());
            format!(
                "  {name}{}  {}",
                " ".repeat(pad),
                styled_status(shell.connections().status(&server.id))
            )
        })
        .collect();
    lines.push(String::new());
    lines.push(styled_gray(&truncate_to_width(DASHBOARD_HINT, width)));
    lines
}

fn developer(shell: &Shell, width: usize) -> Vec<String> {
    let mut lines = vec![
        truncate_to_width("Developer tools", width),
        styled_gray(&truncate_to_width(&format!("route {}", shell.path()), width)),
        String::new(),
        truncate_to_width("Connection history", width),
    ];
    let history = shell.connection_history();
    if history.is_empty() {
        lines.push(styled_gray(&truncate_to_width(NO_HISTORY, width)));
    }
    for change in history.recent().take(DEVELOPER_HISTORY_ROWS) {
        let when = change.at.format("%Y-%m-%d %H:%M:%S");
        lines.push(truncate_to_width(
            &format!("  {when}  {}  {}", change.server_id, change.status),
            width,
        ));
    }
    lines
}

fn server_detail(shell: &Shell, id: &str, width: usize) -> Vec<String> {
    let Some(server) = shell.servers().iter().find(|s| s.id == id) else {
        return vec![truncate_to_width(&format!("Unknown server {id}"), width)];
    };
    let status = shell.connections().status(id);
    let mut lines = vec![
        styled_accent(&truncate_to_width(&server.name, width)),
        styled_gray(&truncate_to_width(&format!("id {}", server.id), width)),
        format!("  {}", styled_status(status)),
    ];
    if let Some(description) = &server.description {
        lines.push(truncate_to_width(description, width));
    }
    let action = match status {
        ConnectionStatus::Connected => "disconnect",
        _ => "connect",
    };
    lines.push(String::new());
    lines.push(styled_gray(&truncate_to_width(
        &format!("ctrl+k then \"{action}\" to {action} this server"),
        width,
    )));
    lines
}

fn form_lines(form: &ServerForm, width: usize) -> Vec<String> {
    let mut lines = vec![styled_separator(&make_title_separator(form.title(), width))];
    lines.push(truncate_to_width(&format!("Name: {}▏", form.name()), width));
    if let Some(selected) = form.template() {
        lines.push(String::new());
        for template in TEMPLATES.iter() {
            let text = format!("{:<12}{}", template.name, template.description);
            if template == selected {
                lines.push(styled_accent(&truncate_to_width(&format!("❯ {text}"), width)));
            } else {
                lines.push(truncate_to_width(&format!("  {text}"), width));
            }
        }
        lines.push(String::new());
        lines.push(styled_gray(&truncate_to_width(
            "tab next template · enter add · esc cancel",
            width,
        )));
    } else {
        lines.push(styled_gray(&truncate_to_width("enter add · esc cancel", width)));
    }
    lines
}

fn status_line(shell: &Shell, width: usize) -> String {
    let mut status = shell.path();
    if let Some(key) = shell.sequencer().state().pending() {
        status.push_str(&format!("  {key}…"));
    }
    if let Some(activity) = shell.last_activity() {
        status.push_str("  ");
        status.push_str(activity);
    }
    styled_gray(&truncate_to_width(&status, width))
}

#[cfg(test)]
#[path = "screen_tests.rs"]
mod tests;
