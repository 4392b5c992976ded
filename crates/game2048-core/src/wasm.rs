//! WebAssembly bindings for the game2048 engine.
//!
//! This module exposes a game session to JavaScript through wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::game::GameSession;
use crate::moves::Direction;
use crate::spawn::RngSource;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed session wrapper
#[wasm_bindgen]
pub struct WasmGame {
    session: GameSession,
}

#[wasm_bindgen]
impl WasmGame {
    /// Start a session, seeded when `seed` is given
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>, best_score: Option<u32>) -> WasmGame {
        let source = match seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };
        WasmGame {
            session: GameSession::with_best_score(source, best_score.unwrap_or(0)),
        }
    }

    /// Start a new game, returns state JSON
    pub fn reset(&mut self) -> String {
        let state = self.session.reset();
        serde_json::to_string(&state).unwrap_or_else(|_| "{}".to_string())
    }

    /// Apply a move by name ("up", "left", ...), returns events JSON or error
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, direction: &str) -> Result<String, JsValue> {
        let direction: Direction = direction
            .parse()
            .map_err(|e| JsValue::from_str(&format!("Move failed: {}", e)))?;
        let events = self.session.play(direction);
        Ok(serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string()))
    }

    /// Apply a move from a keyboard event key. Returns false for keys that aren't arrows.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.session.make_move(direction);
                true
            }
            None => false,
        }
    }

    /// Get the current session state as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_json::to_string(self.session.state()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the board as a JSON array of rows (for rendering)
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> String {
        serde_json::to_string(&self.session.state().board).unwrap_or_else(|_| "[]".to_string())
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.session.state().game_over
    }

    #[wasm_bindgen(js_name = hasWon)]
    pub fn has_won(&self) -> bool {
        self.session.state().won
    }

    #[wasm_bindgen(js_name = getScore)]
    pub fn get_score(&self) -> u32 {
        self.session.state().score
    }

    #[wasm_bindgen(js_name = getBestScore)]
    pub fn get_best_score(&self) -> u32 {
        self.session.state().best_score
    }

    #[wasm_bindgen(js_name = getMoveCount)]
    pub fn get_move_count(&self) -> u32 {
        self.session.state().move_count
    }
}
