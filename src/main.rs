//! Main entry point for the terminal Pong game.
//!
//! Parses the command line, sets up logging, resolves the game configuration
//! and runs the game loop until a player quits.

use clap::Parser;
use log::error;
use std::process::ExitCode;

use config::{Cli, GameConfig};

pub mod config;
mod error;
mod game;
mod logger;


fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logger from RUST_LOG (default to warn level).
    if let Err(e) = logger::init(cli.log_file.as_deref()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let result = GameConfig::resolve(&cli).and_then(|config| game::game_loop::run(&config));

    match result {
        Ok(score) => {
            println!("Goals of player1: {},  Goals of player2: {}", score.left, score.right);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if !logger::writes_to_stderr(cli.log_file.as_deref()) {
                error!("{e}");
            }
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
