//! Error types for the engine.
//!
//! Rejections a caller can recover from are `Result`s. Contract violations
//! inside the engine (applying an illegal move) are assertions instead.

use thiserror::Error;

/// Rejections from the game controller. The game state is unchanged on every one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,

    #[error("it is not the player's turn")]
    NotHumanTurn,

    #[error("it is not AI's turn")]
    NotAiTurn,

    #[error("row/col out of range: ({row}, {col})")]
    OutOfRange { row: u8, col: u8 },

    #[error("illegal move at ({row}, {col})")]
    IllegalMove { row: u8, col: u8 },

    #[error("AI could not select a move")]
    NoAiMove,
}

/// Errors from engine configuration and weight table loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("search depth must be within 1..={max}, got {depth}")]
    InvalidDepth { depth: u8, max: u8 },

    #[error("weight table is not symmetric under the board reflections")]
    AsymmetricWeights,

    #[error("weight table magnitude {total} exceeds the i32 score range")]
    WeightsTooLarge { total: i64 },

    #[error("weights data too short: expected at least {expected} bytes, got {found}")]
    WeightsTooShort { expected: usize, found: usize },

    #[error("invalid weights magic (expected OWGT)")]
    BadMagic,

    #[error("unsupported weights version: expected {expected}, got {found}")]
    UnsupportedVersion { expected: u32, found: u32 },

    #[error("weights cell count mismatch: expected 64, got {found}")]
    CellCountMismatch { found: u32 },

    #[error("CRC32 mismatch: expected {expected:#010x}, got {actual:#010x}")]
    CrcMismatch { expected: u32, actual: u32 },

    #[error("unexpected EOF while reading weights")]
    TruncatedWeights,

    #[error("weights payload has trailing bytes")]
    TrailingBytes,
}

/// Errors from parsing the text board form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("expected 64 cells, found {found}")]
    WrongLength { found: usize },

    #[error("unexpected character {ch:?} at cell {index}")]
    InvalidChar { ch: char, index: usize },
}
