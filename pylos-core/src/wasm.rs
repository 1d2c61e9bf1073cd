//! WASM bindings for pylos-core
//!
//! Provides a JavaScript-friendly API around `Session`. Moves cross the
//! boundary as the same JSON text the host protocol uses.

use wasm_bindgen::prelude::*;

use crate::{notation::WireMove, Coord, Outcome, Player, SearchConfig, Session};

/// WASM-friendly wrapper around a game session
#[wasm_bindgen]
pub struct WasmGame {
    inner: Session,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a new game; `depth` defaults to 3 when omitted
    #[wasm_bindgen(constructor)]
    pub fn new(depth: Option<u8>) -> WasmGame {
        let config = depth.map(|depth| SearchConfig { depth }).unwrap_or_default();
        WasmGame { inner: Session::new(config) }
    }

    /// Current player (0 = Light, 1 = Dark)
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.inner.state().turn() as u8
    }

    /// Reserves as [light, dark]
    pub fn reserves(&self) -> Vec<u8> {
        self.inner.state().reserves().to_vec()
    }

    /// Cell owner: 0 (Light), 1 (Dark), -1 (empty or off the board)
    pub fn cell(&self, layer: i32, row: i32, col: i32) -> i8 {
        match Coord::checked(layer as i64, row as i64, col as i64) {
            Ok(coord) => self.inner.state().board().cell(coord).map_or(-1, |p| p as i8),
            Err(_) => -1,
        }
    }

    /// Get legal moves as an array of wire-format objects
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        let moves: Vec<WireMove> = self
            .inner
            .state()
            .legal_moves()
            .into_iter()
            .map(WireMove::from)
            .collect();
        serde_wasm_bindgen::to_value(&moves).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Apply a move given as JSON text. Throws the rejection reason.
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, raw: &str) -> Result<(), JsValue> {
        self.inner
            .apply_incoming_move(raw)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Search a move for the side to move and return it as JSON text
    #[wasm_bindgen(js_name = bestMove)]
    pub fn best_move(&mut self) -> Result<String, JsValue> {
        self.inner
            .request_local_move()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get game result: "ongoing", "light_wins", "dark_wins", or "draw"
    pub fn result(&self) -> String {
        match self.inner.outcome() {
            Outcome::Ongoing => "ongoing".to_string(),
            Outcome::Winner(Player::Light) => "light_wins".to_string(),
            Outcome::Winner(Player::Dark) => "dark_wins".to_string(),
            Outcome::Draw => "draw".to_string(),
        }
    }

    /// Text rendering of the pyramid
    pub fn render(&self) -> String {
        self.inner.render()
    }
}
