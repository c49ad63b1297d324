// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard colors and styled text helpers.
//!
//! Styling is applied as raw ANSI escapes inside `Text` content, so the pure
//! renderers stay plain and only this module knows about colors.

use crate::palette::view::{LineKind, ViewLine};
use crate::servers::ConnectionStatus;

/// Accent for the active tab and the palette query: RGB(95, 175, 255)
pub const ACCENT: (u8, u8, u8) = (95, 175, 255);

/// Gray for hints, descriptions and inactive tabs: RGB(153, 153, 153)
pub const TEXT_GRAY: (u8, u8, u8) = (153, 153, 153);

/// Dark gray for separator lines: RGB(136, 136, 136)
pub const SEPARATOR_GRAY: (u8, u8, u8) = (136, 136, 136);

/// Green for connected servers: RGB(80, 200, 120)
pub const CONNECTED: (u8, u8, u8) = (80, 200, 120);
/// Amber for servers still connecting: RGB(230, 190, 80)
pub const CONNECTING: (u8, u8, u8) = (230, 190, 80);
/// Red/Pink for servers in error: RGB(255, 107, 128)
pub const ERROR: (u8, u8, u8) = (255, 107, 128);

/// ANSI escape sequence helpers (public for reuse)
pub mod escape {
    /// 24-bit foreground color
    pub fn fg(r: u8, g: u8, b: u8) -> String {
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }

    /// Reset all attributes
    pub const RESET: &str = "\x1b[0m";

    /// Bold
    pub const BOLD: &str = "\x1b[1m";

    /// Dim
    pub const DIM: &str = "\x1b[2m";

    /// Inverse/reverse video
    pub const INVERSE: &str = "\x1b[7m";
}

fn fg(color: (u8, u8, u8)) -> String {
    escape::fg(color.0, color.1, color.2)
}

pub fn status_color(status: ConnectionStatus) -> (u8, u8, u8) {
    match status {
        ConnectionStatus::Connected => CONNECTED,
        ConnectionStatus::Connecting => CONNECTING,
        ConnectionStatus::Error => ERROR,
        ConnectionStatus::Disconnected => TEXT_GRAY,
    }
}

/// `● connected` in the status color.
pub fn styled_status(status: ConnectionStatus) -> String {
    format!("{}● {}{}", fg(status_color(status)), status, escape::RESET)
}

/// Bold accent text, for the active tab and titles.
pub fn styled_accent(text: &str) -> String {
    format!("{}{}{}{}", escape::BOLD, fg(ACCENT), text, escape::RESET)
}

/// Gray text.
pub fn styled_gray(text: &str) -> String {
    format!("{}{}{}", fg(TEXT_GRAY), text, escape::RESET)
}

/// Format a styled separator line (dim + dark gray).
pub fn styled_separator(line: &str) -> String {
    format!(
        "{}{}{}{}",
        escape::DIM,
        fg(SEPARATOR_GRAY),
        line,
        escape::RESET
    )
}

/// Style one palette line by its role. The detail is always dimmed.
pub fn styled_palette_line(line: &ViewLine) -> String {
    let detail = if line.detail.is_empty() {
        String::new()
    } else {
        format!("{}{}{}", escape::DIM, line.detail, escape::RESET)
    };
    let text = match line.kind {
        LineKind::Query => format!("{}{}{}", fg(ACCENT), line.text, escape::RESET),
        LineKind::Header => format!("{}{}{}", escape::BOLD, line.text, escape::RESET),
        LineKind::SelectedRow => format!("{}{}{}", escape::INVERSE, line.text, escape::RESET),
        LineKind::Row => line.text.clone(),
        LineKind::Empty | LineKind::More | LineKind::Hint => styled_gray(&line.text),
    };
    format!("{text}{detail}")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
