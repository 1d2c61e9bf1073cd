//! Game state and the transition function.

use crate::{legal_moves, Board, Incoming, Move, Player, PylosError, PylosResult};

/// Spheres each player starts with.
pub const INITIAL_RESERVE: u8 = 15;

/// Result of looking at a state from the outside.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Outcome {
    Ongoing,
    Winner(Player),
    /// Side to move has no legal move and nobody has won.
    /// Unreachable under the reserve rule but kept for hosts that report it.
    Draw,
}

/// Board, reserves and side to move.
///
/// `Copy` on purpose: transitions return a fresh value and never touch the
/// state they were called on, so search branches cannot see each other.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GameState {
    board: Board,
    reserve: [u8; 2],
    turn: Player,
}

impl GameState {
    /// Empty pyramid, full reserves, Light to move.
    pub fn new() -> GameState {
        GameState {
            board: Board::new(),
            reserve: [INITIAL_RESERVE; 2],
            turn: Player::Light,
        }
    }

    /// Assemble a state directly. Does NOT validate.
    pub fn from_parts(board: Board, reserve: [u8; 2], turn: Player) -> GameState {
        GameState { board, reserve, turn }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn reserve(&self, player: Player) -> u8 {
        self.reserve[player.index()]
    }

    #[inline]
    pub fn reserves(&self) -> [u8; 2] {
        self.reserve
    }

    /// Player to move.
    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Apply a move for `player`, returning the next state.
    ///
    /// On error nothing changes: the partially built successor is dropped.
    pub fn apply(&self, mov: Move, player: Player) -> PylosResult<GameState> {
        let mut next = *self;
        let to = match mov {
            Move::Place { to, .. } => {
                if next.reserve[player.index()] < 1 {
                    return Err(PylosError::EmptyReserve(player));
                }
                next.board.validate_placement(to)?;
                next.board.set(to, player);
                next.reserve[player.index()] -= 1;
                to
            }
            Move::Relocate { from, to, .. } => {
                if to.layer() <= from.layer() {
                    return Err(PylosError::IllegalDirection { from, to });
                }
                next.board.validate_removal(from, player)?;
                next.board.clear(from);
                // Checked on the lifted board: a sphere cannot climb onto itself
                next.board.validate_placement(to)?;
                next.board.set(to, player);
                to
            }
        };

        let removal = mov.removal();
        if !removal.is_none() {
            if !next.board.forms_square(to) {
                return Err(PylosError::NoSquareFormed(to));
            }
            for coord in removal.coords() {
                next.board.validate_removal(coord, player)?;
                next.board.clear(coord);
                next.reserve[player.index()] += 1;
            }
        }

        next.turn = next.turn.opponent();
        Ok(next)
    }

    /// Apply a move read from the wire for `player`.
    ///
    /// An oversized removal list is reported only once the base move and its
    /// square have been judged.
    pub fn apply_incoming(&self, incoming: Incoming, player: Player) -> PylosResult<GameState> {
        match incoming {
            Incoming::Move(mov) => self.apply(mov, player),
            Incoming::Overflow { base, count } => {
                self.apply(base, player)?;
                Err(PylosError::TooManyRemovals(count))
            }
        }
    }

    /// Apply a move for the side to move.
    pub fn play(&self, mov: Move) -> PylosResult<GameState> {
        self.apply(mov, self.turn)
    }

    /// All legal moves for the side to move, in generator order.
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self)
    }

    /// The opponent of the first player found with an exhausted reserve.
    pub fn winner(&self) -> Option<Player> {
        if self.reserve[0] < 1 {
            Some(Player::Dark)
        } else if self.reserve[1] < 1 {
            Some(Player::Light)
        } else {
            None
        }
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(winner) = self.winner() {
            Outcome::Winner(winner)
        } else if self.legal_moves().is_empty() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
