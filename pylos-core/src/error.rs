//! Error types for move validation and parsing.
//!
//! Every variant describes why a move was rejected. None of them is fatal:
//! the state a move was applied to is never modified.

use crate::{Coord, Player};

/// Errors that can occur while parsing, validating or searching moves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PylosError {
    /// Coordinate outside of the pyramid (raw wire values)
    #[error("the position {0:?} is outside of the board")]
    OutOfBounds([i64; 3]),

    #[error("the position {0} is not free")]
    CellOccupied(Coord),

    /// Placement on a cell whose four supporting cells are not all occupied
    #[error("the position {0} is not stable")]
    Unsupported(Coord),

    #[error("the position {0} is empty")]
    CellEmpty(Coord),

    #[error("the sphere at {0} does not belong to {1:?}")]
    NotOwned(Coord, Player),

    /// Something rests on the sphere
    #[error("the position {0} is not movable")]
    Pinned(Coord),

    #[error("a sphere can only move to an upper layer ({from} -> {to})")]
    IllegalDirection { from: Coord, to: Coord },

    #[error("{0:?} has no more spheres in reserve")]
    EmptyReserve(Player),

    #[error("no square was formed at {0}, spheres cannot be removed")]
    NoSquareFormed(Coord),

    #[error("cannot remove more than 2 spheres (got {0})")]
    TooManyRemovals(usize),

    #[error("malformed move text: {0}")]
    MalformedMoveText(String),

    /// Search was asked to move from a position without legal moves
    #[error("{0:?} has no legal moves")]
    NoLegalMoves(Player),
}

/// Result type alias for game operations
pub type PylosResult<T> = Result<T, PylosError>;
