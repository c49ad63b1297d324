// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TUI application state and main iocraft component.

use iocraft::prelude::*;
use parking_lot::Mutex;
use std::sync::Arc;

use super::input::{is_interrupt, is_quit, key_press};
use super::screen::render_screen;
use crate::keys::FocusTarget;
use crate::routes::Route;
use crate::shell::Shell;

/// Default terminal width when size cannot be detected
pub const DEFAULT_TERMINAL_WIDTH: u16 = 120;

/// Default terminal height when size cannot be detected
pub const DEFAULT_TERMINAL_HEIGHT: u16 = 24;

/// Why the event loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    /// Ctrl+C.
    Interrupted,
    /// `q` on the dashboard.
    Quit,
}

/// Shared state for the TUI app that can be accessed from outside the component
#[derive(Clone)]
pub struct TuiAppState {
    inner: Arc<Mutex<TuiAppStateInner>>,
}

struct TuiAppStateInner {
    shell: Shell,
    terminal_width: u16,
    terminal_height: u16,
    exit_reason: Option<ExitReason>,
}

impl TuiAppState {
    pub fn new(shell: Shell) -> Self {
        let (terminal_width, terminal_height) = crossterm::terminal::size()
            .unwrap_or((DEFAULT_TERMINAL_WIDTH, DEFAULT_TERMINAL_HEIGHT));
        Self {
            inner: Arc::new(Mutex::new(TuiAppStateInner {
                shell,
                terminal_width,
                terminal_height,
                exit_reason: None,
            })),
        }
    }

    /// Route a terminal key event into the shell.
    pub fn handle_key_event(&self, key: KeyEvent) {
        let mut inner = self.inner.lock();
        let target = if inner.shell.text_focus() {
            FocusTarget::TextInput
        } else {
            FocusTarget::Surface
        };
        let Some(press) = key_press(&key, target) else {
            return;
        };
        if is_interrupt(&press) {
            inner.exit_reason = Some(ExitReason::Interrupted);
            return;
        }

        let consumed = inner.shell.handle_key(&press);
        let on_dashboard = *inner.shell.route() == Route::Dashboard;
        if !consumed && is_quit(&press) && on_dashboard && inner.shell.is_idle() {
            inner.exit_reason = Some(ExitReason::Quit);
        }
    }

    /// Sequence expiry and queued events.
    pub fn tick(&self) -> bool {
        self.inner.lock().shell.tick()
    }

    pub fn set_terminal_size(&self, width: u16, height: u16) {
        let mut inner = self.inner.lock();
        inner.terminal_width = width;
        inner.terminal_height = height;
    }

    pub fn should_exit(&self) -> bool {
        self.inner.lock().exit_reason.is_some()
    }

    pub fn exit_reason(&self) -> Option<ExitReason> {
        self.inner.lock().exit_reason
    }

    /// Styled lines for the current terminal size.
    pub fn render_lines(&self) -> Vec<String> {
        let inner = self.inner.lock();
        render_screen(
            &inner.shell,
            usize::from(inner.terminal_width),
            usize::from(inner.terminal_height),
        )
    }

    pub fn shutdown(&self) {
        self.inner.lock().shell.shutdown();
    }
}

/// Props for the main App component
#[derive(Default, Props)]
pub struct AppProps {
    pub state: Option<TuiAppState>,
}

/// Main TUI App component using iocraft
#[component]
pub fn App(mut hooks: Hooks, props: &AppProps) -> impl Into<AnyElement<'static>> {
    let Some(state) = props.state.clone() else {
        return element! {
            View(flex_direction: FlexDirection::Column) {
                Text(content: "Error: TuiAppState must be provided via props")
            }
        };
    };

    let mut should_exit = hooks.use_state(|| false);
    // Render counter to force re-renders when state changes
    let mut render_counter = hooks.use_state(|| 0u64);
    // Timer counter drives the sequence deadline check
    let mut timer_counter = hooks.use_state(|| 0u64);

    hooks.use_terminal_events({
        let state = state.clone();
        move |event| match event {
            TerminalEvent::Key(key) if key.kind != KeyEventKind::Release => {
                state.handle_key_event(key);
                let current = *render_counter.read();
                render_counter.set(current.wrapping_add(1));
                if state.should_exit() {
                    should_exit.set(true);
                }
            }
            TerminalEvent::Resize(width, height) => {
                state.set_terminal_size(width, height);
                let current = *render_counter.read();
                render_counter.set(current.wrapping_add(1));
            }
            _ => {}
        }
    });

    hooks.use_future({
        async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
                let current = *timer_counter.read();
                timer_counter.set(current.wrapping_add(1));
            }
        }
    });

    state.tick();
    let lines = state.render_lines();

    if *should_exit.read() || state.should_exit() {
        hooks.use_context_mut::<SystemContext>().exit();
    }

    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: 100pct,
            height: 100pct,
        ) {
            #(lines.into_iter().map(|line| {
                element! {
                    Text(content: line, wrap: TextWrap::NoWrap)
                }
            }).collect::<Vec<_>>())
        }
    }
}

/// Owns the shared state and drives the fullscreen event loop.
pub struct TuiApp {
    state: TuiAppState,
}

impl TuiApp {
    pub fn new(shell: Shell) -> Self {
        Self {
            state: TuiAppState::new(shell),
        }
    }

    /// Run the main event loop using iocraft fullscreen
    pub fn run(&mut self) -> std::io::Result<ExitReason> {
        let state = self.state.clone();

        // Check if we're already in a tokio runtime
        if tokio::runtime::Handle::try_current().is_ok() {
            tokio::task::block_in_place(|| {
                tokio::runtime::Handle::current().block_on(async {
                    // ignore_ctrl_c() prevents iocraft from exiting on Ctrl+C - we handle it ourselves
                    element!(App(state: Some(state.clone())))
                        .fullscreen()
                        .ignore_ctrl_c()
                        .await
                })
            })?;
        } else {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async {
                element!(App(state: Some(state.clone())))
                    .fullscreen()
                    .ignore_ctrl_c()
                    .await
            })?;
        }

        self.state.shutdown();
        Ok(self.state.exit_reason().unwrap_or(ExitReason::Quit))
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
