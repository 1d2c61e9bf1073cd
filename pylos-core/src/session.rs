//! Authoritative game held on behalf of a turn-sequencing host.
//!
//! The host feeds every accepted move, local or remote, through
//! `apply_incoming_move` and asks `request_local_move` when the automated
//! player is on turn.

use tracing::{info, warn};

use crate::{
    encode_move, read_move, GameState, Incoming, Move, Outcome, Player, PylosResult, SearchConfig,
    SearchStats, Searcher,
};

/// A running game plus the searcher that plays for the local side.
#[derive(Debug, Default)]
pub struct Session {
    state: GameState,
    searcher: Searcher,
}

impl Session {
    pub fn new(config: SearchConfig) -> Self {
        Self::from_state(GameState::new(), config)
    }

    /// Resume from an arbitrary position.
    pub fn from_state(state: GameState, config: SearchConfig) -> Self {
        Self {
            state,
            searcher: Searcher::new(config),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn depth(&self) -> u8 {
        self.searcher.config().depth
    }

    /// Statistics of the last `request_local_move` / `suggest_move`.
    pub fn last_search(&self) -> &SearchStats {
        self.searcher.stats()
    }

    /// Parse and apply a move for the side to move.
    ///
    /// On error the session keeps its previous state.
    pub fn apply_incoming_move(&mut self, raw: &str) -> PylosResult<()> {
        let incoming = read_move(raw).inspect_err(|e| warn!(error = %e, "unreadable move"))?;
        self.apply(incoming)
    }

    /// Apply an already parsed move for the side to move.
    pub fn apply_move(&mut self, mov: Move) -> PylosResult<()> {
        self.apply(Incoming::Move(mov))
    }

    fn apply(&mut self, incoming: Incoming) -> PylosResult<()> {
        let player = self.state.turn();
        match self.state.apply_incoming(incoming, player) {
            Ok(next) => {
                info!(player = player.name(), mov = ?incoming, reserves = ?next.reserves(), "move applied");
                self.state = next;
                Ok(())
            }
            Err(e) => {
                warn!(player = player.name(), mov = ?incoming, error = %e, "move rejected");
                Err(e)
            }
        }
    }

    /// Search a move for the side to move without playing it.
    pub fn suggest_move(&mut self) -> PylosResult<Move> {
        let result = self.searcher.search(&self.state)?;
        info!(
            player = self.state.turn().name(),
            score = result.score,
            mov = ?result.best_move,
            "move chosen"
        );
        Ok(result.best_move)
    }

    /// Search a move for the side to move and return its wire text.
    pub fn request_local_move(&mut self) -> PylosResult<String> {
        Ok(encode_move(self.suggest_move()?))
    }

    pub fn render(&self) -> String {
        self.state.to_string()
    }

    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }
}
