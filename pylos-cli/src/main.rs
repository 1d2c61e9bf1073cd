//! Pylos command line driver
//!
//! Runs the engine locally: AI self-play, a human against the AI over
//! stdin, or a node count of the game tree.

mod play;
mod selfplay;
mod tree;

use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use pylos_core::{Player, DEFAULT_DEPTH};
use tracing::warn;
use tracing_subscriber::EnvFilter;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Debug, Parser)]
#[command(name = "pylos", version, about = "Pylos engine driver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Let the AI play both sides
    Selfplay {
        /// Search depth in plies
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u8,
        /// Stop after this many moves
        #[arg(long, default_value_t = 200)]
        max_moves: usize,
    },
    /// Play against the AI, one JSON move per line on stdin
    Play {
        /// Side played from stdin
        #[arg(long, value_enum, default_value_t = Side::Light)]
        human: Side,
        /// Search depth in plies
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u8,
    },
    /// Count game tree nodes per ply from the initial position
    Count {
        #[arg(long)]
        depth: u8,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Side {
    Light,
    Dark,
}

impl From<Side> for Player {
    fn from(side: Side) -> Player {
        match side {
            Side::Light => Player::Light,
            Side::Dark => Player::Dark,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Set up SIGINT handler for graceful shutdown
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    }) {
        warn!(error = %e, "could not install Ctrl-C handler");
    }

    let result = match cli.command {
        Command::Selfplay { depth, max_moves } => selfplay::run(depth, max_moves, &running),
        Command::Play { human, depth } => play::run(human.into(), depth, &running),
        Command::Count { depth } => {
            tree::run(depth, &running);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
