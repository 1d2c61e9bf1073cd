//! Human against AI over stdin.
//!
//! The human side sends one JSON move per line. Rejected lines are reported
//! and asked again; the AI answers with its move in the same notation.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use pylos_core::{Outcome, Player, SearchConfig, Session};

use crate::CliResult;

pub fn run(human: Player, depth: u8, running: &AtomicBool) -> CliResult {
    let mut session = Session::new(SearchConfig { depth });
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_game(&mut session, human, stdin.lock(), stdout.lock(), running)
}

/// Drive a game until it ends, input runs out or Ctrl-C is pressed.
fn play_game<R: BufRead, W: Write>(
    session: &mut Session,
    human: Player,
    input: R,
    mut out: W,
    running: &AtomicBool,
) -> CliResult {
    let mut lines = input.lines();

    writeln!(out, "You play {}. Moves look like {{\"move\": \"place\", \"to\": [0, 0, 0]}}", human.name())?;
    writeln!(out, "{}\n", session.render())?;

    while session.winner().is_none() && running.load(Ordering::SeqCst) {
        if session.state().turn() == human {
            write!(out, "{} > ", human.name())?;
            out.flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    writeln!(out, "\nInput closed")?;
                    return Ok(());
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            if let Err(e) = session.apply_incoming_move(&line) {
                writeln!(out, "Rejected: {}", e)?;
                continue;
            }
        } else {
            let text = session.request_local_move()?;
            session.apply_incoming_move(&text)?;
            writeln!(out, "{}: {}", human.opponent().name(), text)?;
        }
        writeln!(out, "{}\n", session.render())?;
    }

    match session.outcome() {
        Outcome::Winner(player) if player == human => writeln!(out, "You win!")?,
        Outcome::Winner(player) => writeln!(out, "{} wins", player.name())?,
        Outcome::Draw => writeln!(out, "No legal moves left")?,
        Outcome::Ongoing => writeln!(out, "Game abandoned")?,
    }
    Ok(())
}
