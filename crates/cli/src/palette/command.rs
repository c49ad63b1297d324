// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Palette command values and the capability that performs them.

use std::fmt;

use thiserror::Error;

use crate::events::{AppEvent, Form};
use crate::routes::Route;

/// Display group of a command. Declaration order is display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Recent,
    Navigation,
    Server,
    Chat,
    Settings,
}

impl Category {
    pub const DISPLAY_ORDER: [Category; 5] = [
        Category::Recent,
        Category::Navigation,
        Category::Server,
        Category::Chat,
        Category::Settings,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            Category::Recent => "Recent",
            Category::Navigation => "Navigation",
            Category::Server => "Servers",
            Category::Chat => "Chat",
            Category::Settings => "Settings",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

/// What running a command does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandAction {
    Navigate(Route),
    Dispatch(AppEvent),
    OpenForm(Form),
}

/// An action owner refused or failed to perform a command.
#[derive(Debug, Error)]
#[error("{action} failed: {message}")]
pub struct ActionError {
    pub action: String,
    pub message: String,
}

impl ActionError {
    pub fn new(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            message: message.into(),
        }
    }
}

/// Performs command actions on behalf of the palette.
pub trait ActionSink {
    fn perform(&mut self, action: &CommandAction) -> Result<(), ActionError>;
}

/// One palette entry. Rebuilt from application state on every use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub icon: Option<char>,
    pub category: Category,
    /// Matched against the query, never displayed.
    pub keywords: Vec<String>,
    pub action: CommandAction,
}

impl Command {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        category: Category,
        action: CommandAction,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            icon: None,
            category,
            keywords: Vec::new(),
            action,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon(mut self, icon: char) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }
}
