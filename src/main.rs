// src/main.rs

// Declare modules
pub mod color;
pub mod config;
pub mod engine;
pub mod keys;
pub mod orchestrator;
pub mod presenter;
pub mod renderer;

use crate::{
    config::{CONFIG, CONFIG_ENV_VAR},
    engine::GameSession,
    orchestrator::{GameOrchestrator, OrchestratorStatus},
    presenter::TextPresenter,
};
use std::io::IsTerminal;

// Logging
use log::{error, info};

/// Main entry point for the `slide-merge` game.
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting slide-merge...");

    // --- Configuration ---
    let config = &*CONFIG;
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => info!("Configuration from {:?}", path),
        None => info!("Configuration loaded (using default)."),
    }

    let mut session = GameSession::new(config);
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let stdout = std::io::stdout();
    let ansi = stdout.is_terminal();
    let mut presenter = TextPresenter::new(stdout.lock(), ansi);
    info!("Presenting as text (ANSI colors: {}).", ansi);

    let mut orchestrator = GameOrchestrator::new(&mut session, config, &mut input, &mut presenter);
    orchestrator.show_board()?;

    // --- Main Loop ---
    info!(
        "Keys: {} left, {} down, {} up, {} right, {} quit.",
        config.keybindings.left,
        config.keybindings.down,
        config.keybindings.up,
        config.keybindings.right,
        config.keybindings.quit
    );
    loop {
        match orchestrator.process_input_cycle() {
            Ok(OrchestratorStatus::Running) => {}
            Ok(OrchestratorStatus::Shutdown) => {
                info!("Orchestrator requested shutdown. Exiting main loop.");
                break;
            }
            Err(e) => {
                error!(
                    "Error in orchestrator input cycle: {:#}. Root cause: {:?}. Exiting.",
                    e,
                    e.root_cause()
                );
                return Err(e);
            }
        }
    }

    info!("slide-merge exited after {} moves.", session.moves_made());
    Ok(())
}
