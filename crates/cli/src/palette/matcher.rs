// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoring, filtering and grouping of palette commands.
//!
//! A query is scored against each command's label, description and keywords.
//! Exact, prefix and substring hits stack; a fuzzy subsequence bonus is added
//! only when the whole query appears in order within the label.

use super::command::{Category, Command};

pub const EXACT_SCORE: u32 = 100;
pub const PREFIX_SCORE: u32 = 50;
pub const LABEL_SUBSTRING_SCORE: u32 = 25;
pub const DESCRIPTION_SCORE: u32 = 10;
pub const KEYWORD_SCORE: u32 = 15;
/// Per query character, when the query is a subsequence of the label.
pub const SUBSEQUENCE_SCORE_PER_CHAR: u32 = 2;

/// Check if `query` matches `text` using fuzzy subsequence matching.
///
/// Returns true if all characters in query appear in text in order,
/// but not necessarily consecutively.
///
/// # Examples
///
/// ```
/// use mcpdeck::palette::matcher::fuzzy_matches;
///
/// assert!(fuzzy_matches("gtd", "Go to Dashboard"));
/// assert!(!fuzzy_matches("xyz", "Go to Chat"));
/// ```
pub fn fuzzy_matches(query: &str, text: &str) -> bool {
    let query = query.to_lowercase();
    let text = text.to_lowercase();

    let mut query_chars = query.chars().peekable();

    for text_char in text.chars() {
        if let Some(&query_char) = query_chars.peek() {
            if text_char == query_char {
                query_chars.next();
            }
        }
    }

    query_chars.peek().is_none()
}

/// Relevance of `command` for `query`. Zero means no match.
///
/// The query is used as given; [`filter_commands`] trims it first.
pub fn score(command: &Command, query: &str) -> u32 {
    let query = query.to_lowercase();
    if query.is_empty() {
        return 0;
    }
    let label = command.label.to_lowercase();
    let mut total = 0;

    if label == query {
        total += EXACT_SCORE;
    }
    if label.starts_with(&query) {
        total += PREFIX_SCORE;
    }
    if label.contains(&query) {
        total += LABEL_SUBSTRING_SCORE;
    }
    if let Some(description) = &command.description {
        if description.to_lowercase().contains(&query) {
            total += DESCRIPTION_SCORE;
        }
    }
    if command.keywords.join(" ").to_lowercase().contains(&query) {
        total += KEYWORD_SCORE;
    }
    if fuzzy_matches(&query, &label) {
        let matched = u32::try_from(query.chars().count()).unwrap_or(u32::MAX);
        total += SUBSEQUENCE_SCORE_PER_CHAR.saturating_mul(matched);
    }
    total
}

/// Commands to show for `query`, in display priority.
///
/// A blank query lists recent commands (most recent first) then the rest in
/// catalog order. Otherwise only positive scores are kept, highest first;
/// ties keep catalog order.
pub fn filter_commands<'a>(
    commands: &'a [Command],
    query: &str,
    recents: &[String],
) -> Vec<&'a Command> {
    let query = query.trim();
    if query.is_empty() {
        let recent = recents
            .iter()
            .filter_map(|id| commands.iter().find(|c| &c.id == id));
        let rest = commands.iter().filter(|c| !recents.contains(&c.id));
        return recent.chain(rest).collect();
    }

    let mut scored: Vec<(u32, &Command)> = commands
        .iter()
        .map(|c| (score(c, query), c))
        .filter(|(s, _)| *s > 0)
        .collect();
    // sort_by is stable, so equal scores keep catalog order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, c)| c).collect()
}

/// A non-empty run of commands under one heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandGroup<'a> {
    pub category: Category,
    pub commands: Vec<&'a Command>,
}

/// Partition filtered commands into display groups.
///
/// With a blank query, recent commands form their own group ahead of the
/// rest. Empty groups are omitted and order within a group is preserved.
pub fn group_commands<'a>(
    filtered: &[&'a Command],
    recents: &[String],
    query_is_empty: bool,
) -> Vec<CommandGroup<'a>> {
    let category_of = |command: &Command| {
        if query_is_empty && recents.contains(&command.id) {
            Category::Recent
        } else {
            command.category
        }
    };
    Category::DISPLAY_ORDER
        .into_iter()
        .filter_map(|category| {
            let commands: Vec<&Command> = filtered
                .iter()
                .copied()
                .filter(|c| category_of(c) == category)
                .collect();
            (!commands.is_empty()).then_some(CommandGroup { category, commands })
        })
        .collect()
}

/// Filter then group. The flattened result is the selection index space.
pub fn search<'a>(
    commands: &'a [Command],
    query: &str,
    recents: &[String],
) -> Vec<CommandGroup<'a>> {
    let filtered = filter_commands(commands, query, recents);
    group_commands(&filtered, recents, query.trim().is_empty())
}

/// Commands in display order.
pub fn flatten<'a>(groups: &[CommandGroup<'a>]) -> Vec<&'a Command> {
    groups
        .iter()
        .flat_map(|g| g.commands.iter().copied())
        .collect()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
