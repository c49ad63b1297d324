// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mcpdeck binary entry point.

use std::path::Path;
use std::sync::Arc;

use clap::Parser;

use mcpdeck::cli::{Cli, Mode};
use mcpdeck::config::DeckConfig;
use mcpdeck::logging::{self, LogTarget};
use mcpdeck::output::{print_error, print_warning};
use mcpdeck::shell::Shell;
use mcpdeck::storage::{BackupStore, FileStore};
use mcpdeck::time::ClockHandle;
use mcpdeck::tui::{ExitReason, TuiApp};
use mcpdeck::{env, headless, paths};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let data_dir = paths::resolve_data_dir(cli.data_dir.as_deref());

    let mut config = DeckConfig::load_or_default(&paths::config_path(&data_dir));
    // --locale beats MCPDECK_LOCALE beats config.toml
    if let Some(locale) = cli.locale.clone().or_else(env::locale) {
        config.locale = Some(locale);
    }
    let config = config.normalized();

    let store = FileStore::new(paths::store_dir(&data_dir));

    let result = match cli.mode() {
        Mode::Query(query) => {
            logging::init(&LogTarget::Stderr);
            headless::run_query(&store, &config, &query, &mut std::io::stdout().lock())
        }
        Mode::ListShortcuts => {
            logging::init(&LogTarget::Stderr);
            headless::list_shortcuts(&store, &mut std::io::stdout().lock())
        }
        Mode::Tui => return run_tui_mode(&data_dir, &config, store),
    };

    if let Err(e) = result {
        print_error(e);
        std::process::exit(1);
    }
    Ok(())
}

/// Run in TUI mode.
fn run_tui_mode(
    data_dir: &Path,
    config: &DeckConfig,
    store: FileStore,
) -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&LogTarget::File(paths::logs_dir(data_dir)));

    // Ignore SIGINT so Ctrl+C is captured as a key event rather than killing the process.
    #[cfg(unix)]
    {
        use std::sync::atomic::AtomicBool;
        let flag = Arc::new(AtomicBool::new(false));
        if let Err(e) = signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&flag))
        {
            print_warning(format_args!("Failed to ignore SIGINT: {}", e));
        }
        // Leak the flag so it stays registered for the lifetime of the process
        std::mem::forget(flag);
    }

    let shell = Shell::new(
        Arc::new(store),
        BackupStore::new(paths::backups_dir(data_dir)),
        config,
        ClockHandle::system(),
    );
    let mut app = TuiApp::new(shell);
    match app.run() {
        Ok(ExitReason::Interrupted) => std::process::exit(130),
        Ok(ExitReason::Quit) => Ok(()),
        Err(e) => {
            print_error(e);
            std::process::exit(1);
        }
    }
}
