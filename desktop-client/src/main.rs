mod colors;
mod config;
mod offline;
mod state;
mod ui;

use clap::Parser;
use common::{log, logger};
use eframe::egui;
use std::path::PathBuf;
use tokio::sync::mpsc;

use config::get_config_manager;
use offline::local_game_task;
use state::SharedState;
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Tic-tac-toe against a friend or an unbeatable computer")]
struct Args {
    /// YAML config file; defaults to tictactoe_client_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(args.config).get_config()?;
    log!(
        "Config loaded: computer plays {}, move delay {} ms, countdown {} s",
        config.game.computer_mark,
        config.game.computer_move_delay_ms,
        config.game.countdown_seconds
    );

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let runtime = tokio::runtime::Runtime::new()?;
    let shared_state_clone = shared_state.clone();
    let game_config = config.game;
    let game_thread = std::thread::spawn(move || {
        runtime.block_on(local_game_task(game_config, shared_state_clone, command_rx));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    let exit_tx = command_tx.clone();
    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(|_cc| Ok(Box::new(TicTacToeApp::new(shared_state, command_tx)))),
    )?;

    let _ = exit_tx.send(state::ClientCommand::Exit);
    if game_thread.join().is_err() {
        log!("Game thread panicked");
    }
    log!("Client shut down");

    Ok(())
}
