//! JSON move notation shared with the turn-sequencing host.
//!
//! ```text
//! {"move": "place", "to": [layer, row, col]}
//! {"move": "move", "to": [layer, row, col], "from": [layer, row, col]}
//! ... optionally with "remove": [[layer, row, col], ...] (at most 2)
//! ```
//!
//! Coordinates are read as plain integers so that negative or oversized
//! values are reported as `OutOfBounds` rather than as syntax errors.
//!
//! A `remove` key, even with an empty list, asks for a square to be formed.
//! A list longer than two is carried out of parsing as `Incoming::Overflow`
//! so the rules can judge the move and its square before its length.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Coord, Move, PylosError, PylosResult, Removal};

/// Kind of move on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireKind {
    Place,
    Move,
}

/// Serializable move, field-for-field the JSON shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMove {
    #[serde(rename = "move")]
    pub kind: WireKind,
    pub to: [i64; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<[i64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove: Option<Vec<[i64; 3]>>,
}

/// A move read from the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Incoming {
    Move(Move),
    /// More than two removals were listed. `base` carries `Removal::Empty`.
    Overflow { base: Move, count: usize },
}

impl Incoming {
    /// The move itself, or `TooManyRemovals` without looking at any board.
    pub fn into_move(self) -> PylosResult<Move> {
        match self {
            Incoming::Move(mov) => Ok(mov),
            Incoming::Overflow { count, .. } => Err(PylosError::TooManyRemovals(count)),
        }
    }
}

fn coord(raw: [i64; 3]) -> PylosResult<Coord> {
    Coord::checked(raw[0], raw[1], raw[2])
}

impl From<Move> for WireMove {
    fn from(mov: Move) -> Self {
        let removal = mov.removal();
        let remove = if removal.is_none() {
            None
        } else {
            Some(removal.coords().map(Coord::to_array).collect())
        };
        match mov {
            Move::Place { to, .. } => WireMove {
                kind: WireKind::Place,
                to: to.to_array(),
                from: None,
                remove,
            },
            Move::Relocate { from, to, .. } => WireMove {
                kind: WireKind::Move,
                to: to.to_array(),
                from: Some(from.to_array()),
                remove,
            },
        }
    }
}

impl fmt::Display for WireMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl TryFrom<WireMove> for Incoming {
    type Error = PylosError;

    fn try_from(wire: WireMove) -> PylosResult<Incoming> {
        let (remove, overflow) = match wire.remove.as_deref() {
            None => (Removal::None, None),
            Some([]) => (Removal::Empty, None),
            Some([a]) => (Removal::One(coord(*a)?), None),
            Some([a, b]) => (Removal::Two(coord(*a)?, coord(*b)?), None),
            Some(list) => (Removal::Empty, Some(list.len())),
        };
        let to = coord(wire.to)?;

        let mov = match (wire.kind, wire.from) {
            (WireKind::Place, None) => Move::place(to),
            (WireKind::Move, Some(from)) => Move::relocate(coord(from)?, to),
            (WireKind::Place, Some(_)) => {
                return Err(PylosError::MalformedMoveText(
                    "a placement cannot have a `from` position".to_string(),
                ))
            }
            (WireKind::Move, None) => {
                return Err(PylosError::MalformedMoveText(
                    "a move needs a `from` position".to_string(),
                ))
            }
        };
        let mov = mov.with_removal(remove);
        Ok(match overflow {
            None => Incoming::Move(mov),
            Some(count) => Incoming::Overflow { base: mov, count },
        })
    }
}

impl TryFrom<WireMove> for Move {
    type Error = PylosError;

    fn try_from(wire: WireMove) -> PylosResult<Move> {
        Incoming::try_from(wire)?.into_move()
    }
}

/// Read a move from its JSON text, keeping an oversized removal list for
/// the rules to judge.
pub fn read_move(raw: &str) -> PylosResult<Incoming> {
    let wire: WireMove = serde_json::from_str(raw)
        .map_err(|e| PylosError::MalformedMoveText(format!("{}: {}", e, raw.trim())))?;
    Incoming::try_from(wire)
}

/// Parse a move from its JSON text.
pub fn parse_move(raw: &str) -> PylosResult<Move> {
    read_move(raw)?.into_move()
}

/// Encode a move as JSON text accepted by `parse_move`.
pub fn encode_move(mov: Move) -> String {
    WireMove::from(mov).to_string()
}
