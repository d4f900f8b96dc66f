#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Reflect};
use othello::Evaluator;
use othello::wasm::{WasmGame, load_weights, wasm_ready};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn ready_flag_is_set() {
    assert!(wasm_ready());
}

#[wasm_bindgen_test]
fn default_game_accepts_opening_move() {
    let mut game = WasmGame::new(JsValue::UNDEFINED).unwrap();

    let state = game.place(2, 3).unwrap();

    assert_eq!(field(&state, "dark_count").as_f64(), Some(4.0));
    assert_eq!(field(&state, "phase").as_string().as_deref(), Some("ai_thinking"));
}

#[wasm_bindgen_test]
fn illegal_move_is_reported_as_string() {
    let mut game = WasmGame::new(JsValue::NULL).unwrap();

    let err = game.place(0, 0).unwrap_err();

    assert!(err.as_string().unwrap().contains("illegal move"));
}

#[wasm_bindgen_test]
fn config_object_selects_dark_engine() {
    let config = Object::new();
    Reflect::set(&config, &"max_depth".into(), &JsValue::from(2)).unwrap();
    Reflect::set(&config, &"ai_side".into(), &"dark".into()).unwrap();
    let mut game = WasmGame::new(config.into()).unwrap();

    let state = game.ai_move().unwrap();

    assert_eq!(field(&state, "phase").as_string().as_deref(), Some("awaiting_human_move"));
}

#[wasm_bindgen_test]
fn bad_depth_is_rejected() {
    let config = Object::new();
    Reflect::set(&config, &"max_depth".into(), &JsValue::from(0)).unwrap();

    assert!(WasmGame::new(config.into()).is_err());
}

#[wasm_bindgen_test]
fn weights_load_only_once() {
    let bytes = Evaluator::default().to_bytes();

    assert!(load_weights(&bytes).is_ok());
    assert!(load_weights(&bytes).is_err());
    assert!(load_weights(b"junk").is_err());
}
