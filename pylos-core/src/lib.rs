//! Pylos game logic with bit-mask pyramid representation.
//!
//! # Board Encoding (2 × 30 bits)
//!
//! ```text
//! Layer 0 (4x4): cells  0-15   offset 0
//! Layer 1 (3x3): cells 16-24   offset 16
//! Layer 2 (2x2): cells 25-28   offset 25
//! Layer 3 (1x1): cell  29      offset 29
//!
//! index = offset[layer] + row * side[layer] + col
//!
//! Each player owns one u32 occupancy mask: bit i set = sphere on cell i.
//! ```
//!
//! A cell at (layer, row, col) with layer > 0 rests on the four cells
//! (layer-1, row, col), (layer-1, row+1, col), (layer-1, row+1, col+1)
//! and (layer-1, row, col+1).
//!
//! # Wire Encoding
//!
//! ```text
//! {"move": "place", "to": [0, 1, 2]}
//! {"move": "move", "to": [1, 0, 0], "from": [0, 3, 3]}
//! {"move": "place", "to": [0, 1, 1], "remove": [[0, 1, 1], [0, 0, 0]]}
//! ```

mod board;
mod error;
mod movegen;
pub mod notation;
mod render;
pub mod search;
mod session;
mod state;
mod stats;
mod validate;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use board::Board;
pub use error::{PylosError, PylosResult};
pub use movegen::legal_moves;
pub use notation::{encode_move, parse_move, read_move, Incoming, WireKind, WireMove};
pub use search::{evaluate, SearchConfig, SearchResult, Searcher, DEFAULT_DEPTH};
pub use session::Session;
pub use state::{GameState, Outcome, INITIAL_RESERVE};
pub use stats::SearchStats;

/// Number of layers in the pyramid.
pub const LAYERS: usize = 4;

/// Total number of cells across all layers (16 + 9 + 4 + 1).
pub const CELLS: usize = 30;

/// Side length of each layer.
pub const LAYER_SIDE: [u8; LAYERS] = [4, 3, 2, 1];

/// Index of the first cell of each layer.
pub const LAYER_OFFSET: [u8; LAYERS] = [0, 16, 25, 29];

/// Player identifier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Player {
    Light = 0,
    Dark = 1,
}

impl Player {
    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Light => Player::Dark,
            Player::Dark => Player::Light,
        }
    }

    /// Index into per-player arrays (0 or 1).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Convert from index (0 or 1) to Player.
    #[inline]
    pub fn from_index(idx: usize) -> Option<Player> {
        match idx {
            0 => Some(Player::Light),
            1 => Some(Player::Dark),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Light => "Light",
            Player::Dark => "Dark",
        }
    }

    /// Board symbol used by the text rendering.
    pub fn symbol(self) -> char {
        match self {
            Player::Light => '@',
            Player::Dark => 'O',
        }
    }
}

/// Position of a cell in the pyramid.
///
/// Ordering follows the cell index: layer first, then row, then column.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Coord {
    layer: u8,
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate. Caller guarantees it lies on the board;
    /// outside the crate use `Coord::checked`.
    #[inline]
    pub(crate) const fn new(layer: u8, row: u8, col: u8) -> Coord {
        debug_assert!(layer < LAYERS as u8);
        debug_assert!(row < LAYER_SIDE[layer as usize] && col < LAYER_SIDE[layer as usize]);
        Coord { layer, row, col }
    }

    /// Create a coordinate from untrusted input, rejecting anything off the board.
    pub fn checked(layer: i64, row: i64, col: i64) -> PylosResult<Coord> {
        let out_of_bounds = PylosError::OutOfBounds([layer, row, col]);
        if !(0..LAYERS as i64).contains(&layer) {
            return Err(out_of_bounds);
        }
        let side = LAYER_SIDE[layer as usize] as i64;
        if !(0..side).contains(&row) || !(0..side).contains(&col) {
            return Err(out_of_bounds);
        }
        Ok(Coord::new(layer as u8, row as u8, col as u8))
    }

    /// Get the coordinate for a cell index (0-29).
    #[inline]
    pub const fn from_index(idx: usize) -> Coord {
        debug_assert!(idx < CELLS);
        let layer = if idx >= 29 {
            3
        } else if idx >= 25 {
            2
        } else if idx >= 16 {
            1
        } else {
            0
        };
        let local = idx - LAYER_OFFSET[layer] as usize;
        let side = LAYER_SIDE[layer] as usize;
        Coord {
            layer: layer as u8,
            row: (local / side) as u8,
            col: (local % side) as u8,
        }
    }

    /// Cell index (0-29).
    #[inline]
    pub const fn index(self) -> usize {
        LAYER_OFFSET[self.layer as usize] as usize
            + self.row as usize * LAYER_SIDE[self.layer as usize] as usize
            + self.col as usize
    }

    /// Single-bit mask for this cell.
    #[inline]
    pub const fn bit(self) -> u32 {
        1 << self.index()
    }

    #[inline]
    pub const fn layer(self) -> u8 {
        self.layer
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// `[layer, row, col]` as used on the wire.
    pub fn to_array(self) -> [i64; 3] {
        [self.layer as i64, self.row as i64, self.col as i64]
    }

    /// Iterate over all 30 cells in index order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELLS).map(Coord::from_index)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.layer, self.row, self.col)
    }
}

/// Spheres sent back to the reserve after forming a square.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub enum Removal {
    #[default]
    None,
    /// A removal list with no entries: the move must still complete a square.
    Empty,
    One(Coord),
    /// Two spheres, removed in the given order.
    Two(Coord, Coord),
}

impl Removal {
    #[inline]
    pub fn is_none(self) -> bool {
        matches!(self, Removal::None)
    }

    pub fn len(self) -> usize {
        match self {
            Removal::None | Removal::Empty => 0,
            Removal::One(_) => 1,
            Removal::Two(..) => 2,
        }
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Removed coordinates in removal order.
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        let slots = match self {
            Removal::None | Removal::Empty => [None, None],
            Removal::One(a) => [Some(a), None],
            Removal::Two(a, b) => [Some(a), Some(b)],
        };
        slots.into_iter().flatten()
    }
}

/// A move in the game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Move {
    /// Place a sphere from the reserve onto the board.
    Place { to: Coord, remove: Removal },
    /// Lift one of the mover's spheres to a strictly higher layer.
    Relocate { from: Coord, to: Coord, remove: Removal },
}

impl Move {
    #[inline]
    pub fn place(to: Coord) -> Move {
        Move::Place { to, remove: Removal::None }
    }

    #[inline]
    pub fn relocate(from: Coord, to: Coord) -> Move {
        Move::Relocate { from, to, remove: Removal::None }
    }

    /// Same move with a different removal attached.
    pub fn with_removal(self, remove: Removal) -> Move {
        match self {
            Move::Place { to, .. } => Move::Place { to, remove },
            Move::Relocate { from, to, .. } => Move::Relocate { from, to, remove },
        }
    }

    /// Get the destination of the move.
    #[inline]
    pub fn to(&self) -> Coord {
        match self {
            Move::Place { to, .. } => *to,
            Move::Relocate { to, .. } => *to,
        }
    }

    /// Source cell for relocations, `None` for placements.
    #[inline]
    pub fn source(&self) -> Option<Coord> {
        match self {
            Move::Place { .. } => None,
            Move::Relocate { from, .. } => Some(*from),
        }
    }

    #[inline]
    pub fn removal(&self) -> Removal {
        match self {
            Move::Place { remove, .. } => *remove,
            Move::Relocate { remove, .. } => *remove,
        }
    }
}
