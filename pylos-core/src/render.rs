//! Plain-text rendering for terminals and logs.
//!
//! ```text
//!  _______
//! |@|_|_|_|
//! |_|O|_|_|
//! |_|_|_|_|
//! |_|_|_|_|
//! ```
//!
//! One grid per layer, base first, then both reserves and the side to move.

use std::fmt;

use crate::{Board, Coord, GameState, Player, LAYERS, LAYER_SIDE};

fn cell_symbol(cell: Option<Player>) -> char {
    cell.map_or('_', Player::symbol)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for layer in 0..LAYERS as u8 {
            let side = LAYER_SIDE[layer as usize];
            writeln!(f, " {}", "_".repeat(side as usize * 2 - 1))?;
            for row in 0..side {
                let cells: Vec<String> = (0..side)
                    .map(|col| cell_symbol(self.cell(Coord::new(layer, row, col))).to_string())
                    .collect();
                writeln!(f, "|{}|", cells.join("|"))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board())?;
        for player in [Player::Light, Player::Dark] {
            writeln!(f, "Reserve of {}:", player.name())?;
            writeln!(f, "{}", format!("{} ", player.symbol()).repeat(self.reserve(player) as usize))?;
            writeln!(f)?;
        }
        write!(f, "{} to play !", self.turn().name())
    }
}
