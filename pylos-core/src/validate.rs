//! Legality predicates over a board snapshot.
//!
//! Both checks are pure: they never touch the board and report the first
//! rule that fails.

use crate::{Board, Coord, Player, PylosError, PylosResult};

impl Board {
    /// Check that a sphere may be put on `coord`: the cell is free and stable.
    pub fn validate_placement(&self, coord: Coord) -> PylosResult<()> {
        if !self.is_empty(coord) {
            return Err(PylosError::CellOccupied(coord));
        }
        if !self.is_supported(coord) {
            return Err(PylosError::Unsupported(coord));
        }
        Ok(())
    }

    /// Check that `player` may lift the sphere on `coord` off the board.
    pub fn validate_removal(&self, coord: Coord, player: Player) -> PylosResult<()> {
        match self.cell(coord) {
            None => return Err(PylosError::CellEmpty(coord)),
            Some(owner) if owner != player => return Err(PylosError::NotOwned(coord, player)),
            Some(_) => {}
        }
        if self.is_pinned(coord) {
            return Err(PylosError::Pinned(coord));
        }
        Ok(())
    }
}
