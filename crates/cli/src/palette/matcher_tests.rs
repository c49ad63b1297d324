// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::palette::catalog::build_commands;
use crate::palette::command::CommandAction;
use crate::routes::Route;
use crate::servers::{ConnectionMap, ConnectionStatus, ServerSummary};
use proptest::prelude::*;
use rstest::{fixture, rstest};

fn command(id: &str, label: &str) -> Command {
    Command::new(
        id,
        label,
        Category::Navigation,
        CommandAction::Navigate(Route::Dashboard),
    )
}

#[fixture]
fn catalog() -> Vec<Command> {
    let servers = vec![
        ServerSummary::new("fs", "Filesystem"),
        ServerSummary::new("github", "GitHub"),
    ];
    let mut connections = ConnectionMap::new();
    connections.set("github", ConnectionStatus::Connected);
    build_commands(&servers, &connections)
}

fn ids<'a>(commands: &[&'a Command]) -> Vec<&'a str> {
    commands.iter().map(|c| c.id.as_str()).collect()
}

// =============================================================================
// Fuzzy Matching Tests
// =============================================================================

#[test]
fn test_fuzzy_matches_subsequence() {
    assert!(fuzzy_matches("gtd", "Go to Dashboard"));
    assert!(fuzzy_matches("GTC", "go to chat"));
    assert!(fuzzy_matches("", "anything"));
    assert!(!fuzzy_matches("dg", "Go to Dashboard"));
    assert!(!fuzzy_matches("chats", "chat"));
}

// =============================================================================
// Scoring Tests
// =============================================================================

#[test]
fn test_dash_prefers_dashboard_over_chat() {
    let dashboard = command("d", "Go to Dashboard");
    let chat = command("c", "Go to Chat");
    assert!(score(&dashboard, "dash") > score(&chat, "dash"));
    assert_eq!(score(&chat, "dash"), 0);
}

#[test]
fn test_exact_label_beats_prefix_of_same_label() {
    let settings = command("s", "Go to Settings");
    assert!(score(&settings, "go to settings") > score(&settings, "go to set"));
}

#[test]
fn test_subsequence_only_is_positive_but_below_substring() {
    let dashboard = command("d", "Go to Dashboard");
    let subsequence = score(&dashboard, "gtd");
    let substring = score(&dashboard, "das");
    assert!(subsequence > 0);
    assert!(substring > subsequence);
}

#[rstest]
#[case("go to dashboard", 100 + 50 + 25 + 30)]
#[case("go", 50 + 25 + 4)]
#[case("dash", 25 + 8)]
#[case("gtd", 6)]
#[case("DASH", 25 + 8)]
#[case("  dash  ", 0)]
#[case("xyz", 0)]
#[case("", 0)]
fn test_score_components(#[case] query: &str, #[case] expected: u32) {
    assert_eq!(score(&command("d", "Go to Dashboard"), query), expected);
}

#[test]
fn test_description_and_keywords_contribute() {
    let cmd = command("x", "Alpha")
        .description("Bravo charlie")
        .keywords(&["delta", "echo"]);
    assert_eq!(score(&cmd, "charlie"), DESCRIPTION_SCORE);
    assert_eq!(score(&cmd, "echo"), KEYWORD_SCORE);
    assert_eq!(score(&cmd, "delta echo"), KEYWORD_SCORE);
}

#[test]
fn test_partial_subsequence_earns_nothing() {
    // "gz" matches the g but never the z.
    assert_eq!(score(&command("d", "Go to Dashboard"), "gz"), 0);
}

// =============================================================================
// Filtering Tests
// =============================================================================

#[rstest]
fn test_empty_query_lists_recents_then_catalog(catalog: Vec<Command>) {
    let recents = vec!["nav-settings".to_string(), "server-view-fs".to_string()];
    let filtered = filter_commands(&catalog, "", &recents);

    assert_eq!(filtered.len(), catalog.len());
    assert_eq!(
        ids(&filtered)[..4],
        ["nav-settings", "server-view-fs", "nav-dashboard", "nav-chat"]
    );
}

#[rstest]
fn test_empty_query_skips_unknown_recent_ids(catalog: Vec<Command>) {
    let recents = vec!["server-view-gone".to_string()];
    let filtered = filter_commands(&catalog, "   ", &recents);
    assert_eq!(filtered.len(), catalog.len());
    assert_eq!(filtered[0].id, "nav-dashboard");
}

#[rstest]
fn test_filter_trims_query(catalog: Vec<Command>) {
    let padded = filter_commands(&catalog, "  DASH  ", &[]);
    assert_eq!(ids(&padded), ids(&filter_commands(&catalog, "dash", &[])));
    assert_eq!(padded[0].id, "nav-dashboard");
}

#[rstest]
fn test_ties_keep_catalog_order(catalog: Vec<Command>) {
    let filtered = filter_commands(&catalog, "configuration", &[]);
    assert_eq!(ids(&filtered), vec!["settings-export", "settings-import"]);
}

#[rstest]
fn test_set_query_end_to_end(catalog: Vec<Command>) {
    assert_eq!(catalog.len(), 13);

    let groups = search(&catalog, "set", &[]);
    let flat = flatten(&groups);

    let position = |id: &str| flat.iter().position(|c| c.id == id);
    let settings = position("nav-settings").unwrap();
    let export = position("settings-export").unwrap();
    let import = position("settings-import").unwrap();
    for unrelated in ["nav-dashboard", "nav-chat", "nav-developer"] {
        assert_eq!(position(unrelated), None);
    }

    let ranked = filter_commands(&catalog, "set", &[]);
    assert_eq!(ranked[0].id, "nav-settings");
    assert_eq!(ids(&ranked)[1..3], ["settings-export", "settings-import"]);

    let categories: Vec<Category> = groups.iter().map(|g| g.category).collect();
    assert_eq!(
        categories,
        vec![Category::Navigation, Category::Server, Category::Settings]
    );
    assert!(settings < export && export < import);
    assert_eq!(ids(&groups[2].commands), vec!["settings-export", "settings-import"]);
}

// =============================================================================
// Grouping Tests
// =============================================================================

#[rstest]
fn test_recents_grouped_first_only_for_empty_query(catalog: Vec<Command>) {
    let recents = vec!["settings-export".to_string()];

    let groups = search(&catalog, "", &recents);
    assert_eq!(groups[0].category, Category::Recent);
    assert_eq!(ids(&groups[0].commands), vec!["settings-export"]);
    let settings = groups.iter().find(|g| g.category == Category::Settings).unwrap();
    assert_eq!(ids(&settings.commands), vec!["settings-import"]);

    let groups = search(&catalog, "export", &recents);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].category, Category::Settings);
}

#[rstest]
fn test_group_order_is_fixed(catalog: Vec<Command>) {
    let groups = search(&catalog, "", &[]);
    let categories: Vec<Category> = groups.iter().map(|g| g.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::Navigation,
            Category::Server,
            Category::Chat,
            Category::Settings
        ]
    );
}

#[test]
fn test_no_matches_yield_no_groups() {
    let commands = vec![command("a", "Alpha")];
    assert!(search(&commands, "zzz", &[]).is_empty());
}

proptest! {
    #[test]
    fn test_filtered_scores_are_positive_and_descending(query in "[a-z ]{0,6}") {
        let servers = vec![ServerSummary::new("fs", "Filesystem")];
        let catalog = build_commands(&servers, &ConnectionMap::new());
        let filtered = filter_commands(&catalog, &query, &[]);
        if !query.trim().is_empty() {
            let scores: Vec<u32> = filtered.iter().map(|c| score(c, query.trim())).collect();
            prop_assert!(scores.iter().all(|s| *s > 0));
            prop_assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        } else {
            prop_assert_eq!(filtered.len(), catalog.len());
        }
    }
}
