use once_cell::sync::OnceCell;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::ai::eval::Evaluator;
use crate::config::EngineConfig;
use crate::game::GameController;

/// Weight table installed by [`load_weights`], shared by games created later.
static LOADED_WEIGHTS: OnceCell<Evaluator> = OnceCell::new();

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Installs a weight table blob. Can only succeed once per page.
#[wasm_bindgen]
pub fn load_weights(bytes: &[u8]) -> Result<(), JsValue> {
    let evaluator = Evaluator::from_bytes(bytes).map_err(to_js_error)?;
    LOADED_WEIGHTS
        .set(evaluator)
        .map_err(|_| JsValue::from_str("weights are already loaded"))?;
    log::info!("custom weight table loaded");
    Ok(())
}

#[wasm_bindgen]
pub struct WasmGame {
    inner: GameController,
}

#[wasm_bindgen]
impl WasmGame {
    /// `config` is an optional `{ max_depth, ai_side }` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmGame, JsValue> {
        let config: EngineConfig = if config.is_undefined() || config.is_null() {
            EngineConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let evaluator = LOADED_WEIGHTS.get().cloned().unwrap_or_default();
        let inner = GameController::with_config(&config, evaluator).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    pub fn reset(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.reset_game())
    }

    pub fn place(&mut self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        let state = self
            .inner
            .attempt_human_move(row, col)
            .map_err(to_js_error)?;
        to_js(&state)
    }

    /// Blocks until the search finishes; run it in a worker to keep the page live.
    pub fn ai_move(&mut self) -> Result<JsValue, JsValue> {
        let state = self.inner.request_ai_move().map_err(to_js_error)?;
        to_js(&state)
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.to_game_state())
    }

    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.legal_moves())
    }

    /// `undefined` until the game is over.
    pub fn result(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.result())
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
