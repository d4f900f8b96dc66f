//! Othello engine: board rules, a fixed-depth alpha-beta opponent and the
//! turn controller a front end drives through [`wasm::WasmGame`].

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod types;
pub mod wasm;

pub use ai::eval::{DEFAULT_WEIGHTS, Evaluator, WeightTable};
pub use ai::search::{SearchResult, Searcher};
pub use board::{Board, Cell, Side};
pub use config::EngineConfig;
pub use error::{BoardParseError, EngineError, GameError};
pub use game::{FirstLegalMoveSelector, GameController, MoveSelector};
pub use types::{GameResult, GameState, Phase, Position};
