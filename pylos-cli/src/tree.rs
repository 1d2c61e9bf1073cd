//! Count the game tree node by node.
//!
//! Every path is enumerated, transpositions included. Won positions are
//! leaves; so are positions where the side to move is stuck.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use pylos_core::{GameState, Move};

/// Stack frame for iterative DFS.
struct Frame {
    state: GameState,
    moves: Vec<Move>,
    /// Index of next move to explore
    move_idx: usize,
}

impl Frame {
    fn new(state: GameState) -> Self {
        let moves = if state.winner().is_some() {
            Vec::new()
        } else {
            state.legal_moves()
        };
        Self {
            state,
            moves,
            move_idx: 0,
        }
    }
}

/// Tally of one enumeration.
#[derive(Debug, Default)]
pub struct TreeCount {
    /// Nodes at each ply, the root being ply 0
    pub per_ply: Vec<u64>,
    /// Won positions met within the depth
    pub terminal_wins: u64,
    /// Whether the enumeration ran to completion
    pub complete: bool,
}

/// Enumerate the tree below `root` down to `depth` plies.
pub fn count(root: GameState, depth: u8, running: &AtomicBool) -> TreeCount {
    let mut tally = TreeCount {
        per_ply: vec![0; depth as usize + 1],
        ..TreeCount::default()
    };
    tally.per_ply[0] = 1;

    let mut stack = Vec::with_capacity(depth as usize + 1);
    if depth > 0 {
        stack.push(Frame::new(root));
    }
    let mut last_log = Instant::now();

    while let Some(frame) = stack.last_mut() {
        if !running.load(Ordering::SeqCst) {
            return tally;
        }

        if frame.move_idx >= frame.moves.len() {
            stack.pop();
            continue;
        }
        let mov = frame.moves[frame.move_idx];
        frame.move_idx += 1;

        let child = match frame.state.play(mov) {
            Ok(child) => child,
            Err(e) => {
                tracing::error!(?mov, error = %e, "generated move rejected");
                continue;
            }
        };
        let ply = stack.len();
        tally.per_ply[ply] += 1;

        if child.winner().is_some() {
            tally.terminal_wins += 1;
        } else if ply < depth as usize {
            stack.push(Frame::new(child));
        }

        if last_log.elapsed() >= Duration::from_secs(5) {
            tracing::info!(ply, nodes = tally.per_ply.iter().sum::<u64>(), "counting");
            last_log = Instant::now();
        }
    }

    tally.complete = true;
    tally
}

pub fn run(depth: u8, running: &AtomicBool) {
    let start = Instant::now();
    let tally = count(GameState::new(), depth, running);

    if !tally.complete {
        println!("Interrupted, partial counts:");
    }
    for (ply, nodes) in tally.per_ply.iter().enumerate() {
        println!("ply {:>2}: {}", ply, nodes);
    }
    println!("Total nodes: {}", tally.per_ply.iter().sum::<u64>());
    println!("Terminal wins: {}", tally.terminal_wins);
    println!("Total time: {:.1}s", start.elapsed().as_secs_f64());
}
