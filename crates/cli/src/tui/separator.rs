// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Width-aware separator generation for TUI rendering.

use unicode_width::UnicodeWidthStr;

/// Default separator character (box drawing horizontal)
pub const SEPARATOR_CHAR: char = '─';

/// Width of the rule before an overlay title.
const TITLE_LEAD: usize = 2;

/// Generate a full-width separator line.
pub fn make_separator(width: usize) -> String {
    SEPARATOR_CHAR.to_string().repeat(width)
}

/// Generate a separator with a leading title.
/// Format: "── {title} ────...──"
pub fn make_title_separator(title: &str, width: usize) -> String {
    let lead = SEPARATOR_CHAR.to_string().repeat(TITLE_LEAD);
    let head = format!("{lead} {title} ");
    let used = head.width();
    if width <= used {
        return head;
    }
    format!("{head}{}", make_separator(width - used))
}

#[cfg(test)]
#[path = "separator_tests.rs"]
mod tests;
