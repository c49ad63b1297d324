// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The add-server overlay.

use crate::events::Form;
use crate::keys::{Key, KeyPress};

/// A starter server offered by the template form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
}

pub const TEMPLATES: [Template; 5] = [
    Template {
        name: "Filesystem",
        description: "Read and write files under a root directory",
    },
    Template {
        name: "GitHub",
        description: "Repositories, issues and pull requests",
    },
    Template {
        name: "Postgres",
        description: "Read-only queries against a PostgreSQL database",
    },
    Template {
        name: "Fetch",
        description: "Fetch web pages as markdown",
    },
    Template {
        name: "Memory",
        description: "Persistent knowledge graph",
    },
];

/// What a key did to the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormOutcome {
    Editing,
    Submit {
        name: String,
        description: Option<String>,
    },
    Cancel,
}

/// Name entry, plus a template picker for [`Form::FromTemplate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerForm {
    kind: Form,
    name: String,
    template: usize,
}

impl ServerForm {
    pub fn new(kind: Form) -> Self {
        Self {
            kind,
            name: String::new(),
            template: 0,
        }
    }

    pub fn kind(&self) -> Form {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The highlighted template, if this form offers templates.
    pub fn template(&self) -> Option<&'static Template> {
        match self.kind {
            Form::FromTemplate => TEMPLATES.get(self.template),
            Form::NewServer => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            Form::NewServer => "Add Server",
            Form::FromTemplate => "Add Server from Template",
        }
    }

    pub fn handle_key(&mut self, press: &KeyPress) -> FormOutcome {
        match press.key {
            Key::Esc => return FormOutcome::Cancel,
            Key::Enter => {
                if let Some(outcome) = self.submit() {
                    return outcome;
                }
            }
            Key::Backspace => {
                self.name.pop();
            }
            Key::Tab | Key::Down if self.kind == Form::FromTemplate => {
                if press.modifiers.shift {
                    self.cycle_back();
                } else {
                    self.template = (self.template + 1) % TEMPLATES.len();
                }
            }
            Key::Up if self.kind == Form::FromTemplate => self.cycle_back(),
            _ => {
                if let Some(c) = press.text() {
                    self.name.push(c);
                }
            }
        }
        FormOutcome::Editing
    }

    fn cycle_back(&mut self) {
        self.template = (self.template + TEMPLATES.len() - 1) % TEMPLATES.len();
    }

    /// A blank name is only accepted when a template supplies one.
    fn submit(&self) -> Option<FormOutcome> {
        let typed = self.name.trim();
        match (self.template(), typed.is_empty()) {
            (None, true) => None,
            (None, false) => Some(FormOutcome::Submit {
                name: typed.to_string(),
                description: None,
            }),
            (Some(t), _) => Some(FormOutcome::Submit {
                name: (if typed.is_empty() { t.name } else { typed }).to_string(),
                description: Some(t.description.to_string()),
            }),
        }
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
