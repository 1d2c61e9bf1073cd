//! Legal move enumeration.
//!
//! Generates moves in a fixed order so that search tie-breaks are
//! reproducible:
//! 1. Reserve placements, by destination cell index
//! 2. Relocations, by source then destination cell index
//!
//! A base move that completes a square is immediately followed by its
//! capture variants: single removals by cell index, then pairs.

use crate::{Board, Coord, GameState, Move, Player, Removal};

/// Generate all legal moves for the side to move.
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let player = state.turn();
    let board = state.board();
    let mut moves = Vec::with_capacity(32);

    if state.reserve(player) > 0 {
        for to in Coord::all() {
            if board.validate_placement(to).is_ok() {
                let mut after = *board;
                after.set(to, player);
                push_with_captures(&mut moves, Move::place(to), &after, player);
            }
        }
    }

    for from in Coord::all() {
        if board.validate_removal(from, player).is_err() {
            continue;
        }
        let mut lifted = *board;
        lifted.clear(from);
        for to in Coord::all().filter(|to| to.layer() > from.layer()) {
            if lifted.validate_placement(to).is_ok() {
                let mut after = lifted;
                after.set(to, player);
                push_with_captures(&mut moves, Move::relocate(from, to), &after, player);
            }
        }
    }

    moves
}

/// Push `base` and, if it completes a square, every way of cashing it in.
fn push_with_captures(moves: &mut Vec<Move>, base: Move, after: &Board, player: Player) {
    moves.push(base);
    if !after.forms_square(base.to()) {
        return;
    }

    let own: Vec<Coord> = Coord::all().filter(|&c| after.cell(c) == Some(player)).collect();

    for &coord in &own {
        if after.validate_removal(coord, player).is_ok() {
            moves.push(base.with_removal(Removal::One(coord)));
        }
    }

    for (i, &first) in own.iter().enumerate() {
        for &second in &own[i + 1..] {
            if let Some(pair) = removable_pair(after, player, first, second) {
                moves.push(base.with_removal(pair));
            }
        }
    }
}

/// Lower index first when legal, otherwise the reverse (top sphere unpins the one below).
fn removable_pair(board: &Board, player: Player, first: Coord, second: Coord) -> Option<Removal> {
    let in_order = |a: Coord, b: Coord| {
        if board.validate_removal(a, player).is_err() {
            return false;
        }
        let mut rest = *board;
        rest.clear(a);
        rest.validate_removal(b, player).is_ok()
    };

    if in_order(first, second) {
        Some(Removal::Two(first, second))
    } else if in_order(second, first) {
        Some(Removal::Two(second, first))
    } else {
        None
    }
}
