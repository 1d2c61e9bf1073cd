//! Fixed-depth negamax search.
//!
//! Every branch works on its own `GameState` copy; there is no transposition
//! table and no pruning. Ties keep the first move in generator order.

use tracing::error;

use crate::{legal_moves, GameState, Move, Player, PylosError, PylosResult, SearchStats};

/// Depth used when nothing else is configured.
pub const DEFAULT_DEPTH: u8 = 3;

/// Search settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Extra plies searched below the root move (0 = evaluate root moves directly).
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: DEFAULT_DEPTH }
    }
}

/// Best move found and its score from the mover's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Move,
}

/// Reserve difference: positive when `player` has more spheres left.
#[inline]
pub fn evaluate(state: &GameState, player: Player) -> i32 {
    state.reserve(player) as i32 - state.reserve(player.opponent()) as i32
}

/// Negamax searcher with per-search statistics.
#[derive(Debug, Default)]
pub struct Searcher {
    config: SearchConfig,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Statistics of the last search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick a move for the side to move.
    pub fn search(&mut self, state: &GameState) -> PylosResult<SearchResult> {
        self.stats = SearchStats::new();
        let player = state.turn();
        let result = self.negamax(state, player, self.config.depth);
        self.stats.finish();
        self.stats.log_summary(self.config.depth);
        result.ok_or(PylosError::NoLegalMoves(player))
    }

    /// Score every legal move of `state` for `player`; `None` if there are none.
    fn negamax(&mut self, state: &GameState, player: Player, depth: u8) -> Option<SearchResult> {
        debug_assert_eq!(player, state.turn());
        let moves = legal_moves(state);
        self.stats.record_node(moves.len());

        let mut best: Option<SearchResult> = None;
        for mov in moves {
            let next = match state.apply(mov, player) {
                Ok(next) => next,
                Err(e) => {
                    error!(?mov, error = %e, "generated move rejected by validator");
                    continue;
                }
            };

            let score = if depth == 0 {
                self.stats.record_leaf();
                evaluate(&next, player)
            } else {
                match self.negamax(&next, player.opponent(), depth - 1) {
                    Some(reply) => -reply.score,
                    None => {
                        // Opponent is stuck: score the position as it stands
                        self.stats.record_dead_end();
                        self.stats.record_leaf();
                        evaluate(&next, player)
                    }
                }
            };

            if best.map_or(true, |b| score > b.score) {
                best = Some(SearchResult { score, best_move: mov });
            }
        }
        best
    }
}

/// One-shot search with the given depth.
pub fn best_move(state: &GameState, depth: u8) -> PylosResult<SearchResult> {
    Searcher::new(SearchConfig { depth }).search(state)
}
