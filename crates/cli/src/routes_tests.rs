// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

#[parameterized(
    dashboard = { Route::Dashboard, None, "/" },
    chat = { Route::Chat, None, "/chat" },
    developer = { Route::Developer, None, "/developer" },
    settings = { Route::Settings, None, "/settings" },
    server = { Route::ServerDetail("fs".into()), None, "/servers/fs" },
    localized_root = { Route::Dashboard, Some("de"), "/de" },
    localized_server = { Route::ServerDetail("gh".into()), Some("pt-BR"), "/pt-BR/servers/gh" },
)]
fn test_route_paths(route: Route, locale: Option<&str>, expected: &str) {
    assert_eq!(route.path(locale), expected);
}

#[parameterized(
    root = { "/", None, Route::Dashboard },
    chat_trailing = { "/chat/", None, Route::Chat },
    localized = { "/en/settings", Some("en"), Route::Settings },
    localized_root = { "/fr", Some("fr"), Route::Dashboard },
    server = { "/zh-Hant/servers/fs", Some("zh-Hant"), Route::ServerDetail("fs".into()) },
)]
fn test_route_parse(path: &str, locale: Option<&str>, expected: Route) {
    let (parsed_locale, route) = Route::parse(path).unwrap();
    assert_eq!(parsed_locale.as_deref(), locale);
    assert_eq!(route, expected);
}

#[test]
fn test_unknown_paths_do_not_parse() {
    assert_eq!(Route::parse("/nope"), None);
    assert_eq!(Route::parse("/servers"), None);
    assert_eq!(Route::parse("/en/servers/a/b"), None);
}

#[test]
fn test_tabs_cycle_in_both_directions() {
    assert_eq!(Route::Dashboard.next_tab(), Route::Chat);
    assert_eq!(Route::Settings.next_tab(), Route::Dashboard);
    assert_eq!(Route::Dashboard.previous_tab(), Route::Settings);
    assert_eq!(Route::ServerDetail("fs".into()).next_tab(), Route::Chat);
}
