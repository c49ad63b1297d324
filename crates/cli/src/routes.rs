// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Application routes and the navigation capability.

use std::fmt;

/// A screen the dashboard can show.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Dashboard,
    Chat,
    Developer,
    Settings,
    ServerDetail(String),
}

/// Top-level routes in tab order, used by next/previous tab.
pub const TAB_ORDER: [Route; 4] = [Route::Dashboard, Route::Chat, Route::Developer, Route::Settings];

impl Route {
    /// Path for this route, prefixed with `/<locale>` when one is set.
    pub fn path(&self, locale: Option<&str>) -> String {
        let base = match self {
            Self::Dashboard => "/".to_string(),
            Self::Chat => "/chat".to_string(),
            Self::Developer => "/developer".to_string(),
            Self::Settings => "/settings".to_string(),
            Self::ServerDetail(id) => format!("/servers/{id}"),
        };
        match locale.filter(|l| !l.is_empty()) {
            Some(locale) if base == "/" => format!("/{locale}"),
            Some(locale) => format!("/{locale}{base}"),
            None => base,
        }
    }

    /// Parse a path, returning the locale prefix if present.
    ///
    /// Accepts `/chat`, `/en/chat`, `/pt-BR/servers/fs`, and trailing slashes.
    pub fn parse(path: &str) -> Option<(Option<String>, Route)> {
        let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let locale = match segments.first() {
            Some(first) if is_locale_tag(first) => {
                let locale = first.to_string();
                segments.remove(0);
                Some(locale)
            }
            _ => None,
        };
        let route = match segments.as_slice() {
            [] => Route::Dashboard,
            ["chat"] => Route::Chat,
            ["developer"] => Route::Developer,
            ["settings"] => Route::Settings,
            ["servers", id] => Route::ServerDetail(id.to_string()),
            _ => return None,
        };
        Some((locale, route))
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Chat => "Chat",
            Self::Developer => "Developer",
            Self::Settings => "Settings",
            Self::ServerDetail(_) => "Server",
        }
    }

    /// The tab this route belongs to; server details sit under the dashboard.
    pub fn tab_index(&self) -> usize {
        match self {
            Self::Dashboard | Self::ServerDetail(_) => 0,
            Self::Chat => 1,
            Self::Developer => 2,
            Self::Settings => 3,
        }
    }

    pub fn next_tab(&self) -> Route {
        TAB_ORDER[(self.tab_index() + 1) % TAB_ORDER.len()].clone()
    }

    pub fn previous_tab(&self) -> Route {
        TAB_ORDER[(self.tab_index() + TAB_ORDER.len() - 1) % TAB_ORDER.len()].clone()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path(None))
    }
}

/// `en`, `de`, `pt-BR`, `zh-Hant`.
fn is_locale_tag(segment: &str) -> bool {
    let mut parts = segment.splitn(2, '-');
    let language = parts.next().unwrap_or_default();
    let language_ok = language.len() == 2 && language.chars().all(|c| c.is_ascii_lowercase());
    let region_ok = parts
        .next()
        .map(|r| (2..=4).contains(&r.len()) && r.chars().all(|c| c.is_ascii_alphabetic()))
        .unwrap_or(true);
    language_ok && region_ok
}

/// Something that can switch the visible screen.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
