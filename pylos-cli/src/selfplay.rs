//! AI against AI.

use std::sync::atomic::{AtomicBool, Ordering};

use pylos_core::{Outcome, SearchConfig, Session};
use tracing::info;

use crate::CliResult;

/// Play until the game ends, `max_moves` is reached or Ctrl-C is pressed.
pub fn run(depth: u8, max_moves: usize, running: &AtomicBool) -> CliResult {
    let mut session = Session::new(SearchConfig { depth });
    println!("{}\n", session.render());

    let mut played = 0;
    while played < max_moves && session.winner().is_none() {
        if !running.load(Ordering::SeqCst) {
            println!("\nInterrupted after {} moves", played);
            break;
        }

        let mover = session.state().turn();
        let text = session.request_local_move()?;
        session.apply_incoming_move(&text)?;
        played += 1;

        let stats = session.last_search();
        info!(
            ply = played,
            nodes = stats.nodes,
            rate = stats.positions_per_sec().round(),
            "searched"
        );
        println!("{}. {}: {}", played, mover.name(), text);
        println!("{}\n", session.render());
    }

    match session.outcome() {
        Outcome::Winner(player) => println!("{} wins after {} moves", player.name(), played),
        Outcome::Draw => println!("No legal moves left after {} moves", played),
        Outcome::Ongoing => println!("Stopped after {} moves", played),
    }
    Ok(())
}
