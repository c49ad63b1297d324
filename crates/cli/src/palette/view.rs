// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for the palette and the shortcuts help overlay.
//!
//! Both renderers are pure: they return lines sized to a column budget and
//! leave styling to the terminal front end.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::dialog::CommandPalette;
use super::matcher;
use crate::keys::sequencer::{SEQUENCES, SEQUENCE_LEADER};
use crate::keys::BindingMap;

pub const QUERY_PROMPT: &str = "⌕ ";
pub const PLACEHOLDER: &str = "Type a command or search…";
pub const EMPTY_STATE: &str = "No commands found.";
pub const FOOTER_HINT: &str = "↑↓ navigate · enter select · esc close";
pub const SELECTED_MARKER: &str = "❯";
/// Query line, one marker, the selected row, one marker, footer.
pub const MIN_PALETTE_ROWS: usize = 5;

/// Role of a rendered line, for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Query,
    Header,
    Row,
    SelectedRow,
    Empty,
    /// Count of rows scrolled out of view.
    More,
    Hint,
}

/// One output line: primary text plus a dimmed trailing detail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewLine {
    pub kind: LineKind,
    pub text: String,
    pub detail: String,
}

impl ViewLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            detail: String::new(),
        }
    }

    /// Fit `text` then `detail` into `width` columns.
    fn fitted(kind: LineKind, text: String, detail: String, width: usize) -> Self {
        let text = truncate_to_width(&text, width);
        let remaining = width.saturating_sub(text.width());
        let detail = if detail.is_empty() || remaining < 3 {
            String::new()
        } else {
            truncate_to_width(&detail, remaining)
        };
        Self { kind, text, detail }
    }

    pub fn plain(&self) -> String {
        format!("{}{}", self.text, self.detail)
    }
}

/// Truncate to at most `width` display columns, ending in `…` when cut.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    let budget = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    if width > 0 {
        out.push('…');
    }
    out
}

/// Render the open palette in at most `rows` lines: query line, a window of
/// grouped rows that always contains the selection, footer hint.
///
/// When the groups do not fit, `↑ N more` / `↓ N more` markers stand in for
/// the hidden lines. Below [`MIN_PALETTE_ROWS`] the budget is raised so the
/// selected row still shows.
pub fn render_palette(
    palette: &CommandPalette,
    recents: &[String],
    width: usize,
    rows: usize,
) -> Vec<ViewLine> {
    let query_line = if palette.query().is_empty() {
        ViewLine::fitted(
            LineKind::Query,
            QUERY_PROMPT.to_string(),
            PLACEHOLDER.to_string(),
            width,
        )
    } else {
        ViewLine::fitted(
            LineKind::Query,
            format!("{QUERY_PROMPT}{}", palette.query()),
            String::new(),
            width,
        )
    };

    let (body, selected_line) = palette_body(palette, recents, width);
    let budget = rows.max(MIN_PALETTE_ROWS) - 2;

    let mut lines = vec![query_line];
    lines.extend(scroll_window(body, selected_line, budget, width));
    lines.push(ViewLine::new(
        LineKind::Hint,
        truncate_to_width(FOOTER_HINT, width),
    ));
    lines
}

/// Group headers and rows, plus the position of the selected row.
fn palette_body(
    palette: &CommandPalette,
    recents: &[String],
    width: usize,
) -> (Vec<ViewLine>, usize) {
    let groups = palette.groups(recents);
    if groups.is_empty() {
        let empty = ViewLine::new(LineKind::Empty, truncate_to_width(EMPTY_STATE, width));
        return (vec![empty], 0);
    }

    let selected = palette.selected_index();
    let mut lines = Vec::new();
    let mut selected_line = 0;
    let mut index = 0;
    for group in &groups {
        lines.push(ViewLine::new(
            LineKind::Header,
            truncate_to_width(group.category.heading(), width),
        ));
        for command in &group.commands {
            let is_selected = index == selected;
            let marker = if is_selected { SELECTED_MARKER } else { " " };
            let icon = command.icon.unwrap_or(' ');
            let text = format!("{marker} {icon} {}", command.label);
            let detail = command
                .description
                .as_ref()
                .map(|d| format!("  {d}"))
                .unwrap_or_default();
            let kind = if is_selected {
                selected_line = lines.len();
                LineKind::SelectedRow
            } else {
                LineKind::Row
            };
            lines.push(ViewLine::fitted(kind, text, detail, width));
            index += 1;
        }
    }
    (lines, selected_line)
}

/// Keep `budget` lines of `body` around `selected`, with markers for the rest.
fn scroll_window(
    body: Vec<ViewLine>,
    selected: usize,
    budget: usize,
    width: usize,
) -> Vec<ViewLine> {
    let len = body.len();
    if len <= budget {
        return body;
    }
    let (start, end) = window_bounds(len, selected, budget);
    let more = |text: String| ViewLine::new(LineKind::More, truncate_to_width(&text, width));

    let mut lines = Vec::with_capacity(budget);
    if start > 0 {
        lines.push(more(format!("↑ {start} more")));
    }
    lines.extend(body.into_iter().skip(start).take(end - start));
    if end < len {
        lines.push(more(format!("↓ {} more", len - end)));
    }
    lines
}

/// Visible range `[start, end)` of `len > budget` lines. Each hidden side
/// spends one row of the budget on its marker.
fn window_bounds(len: usize, selected: usize, budget: usize) -> (usize, usize) {
    let selected = selected.min(len - 1);
    let edge = budget - 1;
    if selected < edge {
        return (0, edge);
    }
    if selected >= len - edge {
        return (len - edge, len);
    }
    let middle = budget - 2;
    let start = selected - (middle - 1) / 2;
    (start, (start + middle).min(len))
}

/// Plain `id  label` rows under group headings, for non-interactive output.
pub fn render_plain(palette: &CommandPalette, recents: &[String]) -> Vec<String> {
    let groups = palette.groups(recents);
    if groups.is_empty() {
        return vec![EMPTY_STATE.to_string()];
    }
    let id_width = matcher::flatten(&groups)
        .iter()
        .map(|c| c.id.width())
        .max()
        .unwrap_or(0);
    let mut lines = Vec::new();
    for group in &groups {
        lines.push(format!("{}:", group.category.heading()));
        for command in &group.commands {
            lines.push(format!("  {:<id_width$}  {}", command.id, command.label));
        }
    }
    lines
}

/// Binding and sequence reference, one shortcut per line.
pub fn render_shortcuts_help(bindings: &BindingMap, width: usize) -> Vec<String> {
    const KEYS_WIDTH: usize = 24;

    let mut lines = vec![truncate_to_width("Keyboard shortcuts", width)];
    for (action, binding) in bindings.iter() {
        let keys = binding.to_string().replace('|', " / ");
        lines.push(truncate_to_width(
            &format!(
                "  {keys:<width$}{}",
                action.description(),
                width = KEYS_WIDTH
            ),
            width,
        ));
    }
    for (key, route) in SEQUENCES.iter() {
        let keys = format!("{SEQUENCE_LEADER} then {key}");
        lines.push(truncate_to_width(
            &format!(
                "  {keys:<width$}Go to {}",
                route.title(),
                width = KEYS_WIDTH
            ),
            width,
        ));
    }
    for conflict in bindings.conflicts() {
        lines.push(truncate_to_width(&format!("  ! {conflict}"), width));
    }
    lines
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
