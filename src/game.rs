use crate::ai::eval::Evaluator;
use crate::ai::search::Searcher;
use crate::board::{Board, Side};
use crate::config::EngineConfig;
use crate::error::{EngineError, GameError};
use crate::rules::{apply_move_with_flips, has_legal_move, is_legal, legal_moves};
use crate::types::{GameResult, GameState, Phase, Position};

/// Picks the engine's move. Implemented by [`Searcher`].
pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, side: Side) -> Option<Position>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalMoveSelector;

impl MoveSelector for FirstLegalMoveSelector {
    fn select_move(&self, board: &Board, side: Side) -> Option<Position> {
        legal_moves(board, side).into_iter().next()
    }
}

/// Owns the live board and serializes human input against engine moves.
///
/// Transitions after every move:
/// - the opponent of the mover can play: it gets the turn;
/// - otherwise the mover can still play: it moves again (`is_pass`);
/// - otherwise the game is over.
pub struct GameController {
    board: Board,
    phase: Phase,
    ai_side: Side,
    is_pass: bool,
    flipped: Vec<Position>,
    last_move: Option<Position>,
    selector: Box<dyn MoveSelector>,
}

impl GameController {
    pub fn new(ai_side: Side, selector: Box<dyn MoveSelector>) -> Self {
        Self::from_position(Board::new(), Side::Dark, ai_side, selector)
    }

    /// Controller backed by the alpha-beta [`Searcher`].
    pub fn with_config(config: &EngineConfig, evaluator: Evaluator) -> Result<Self, EngineError> {
        config.validate()?;
        let searcher = Searcher::from_config(config, evaluator);
        Ok(Self::new(config.ai_side, Box::new(searcher)))
    }

    /// Resumes from an arbitrary position. If `to_move` is stuck the turn
    /// passes; if both sides are stuck the game is already over.
    pub fn from_position(
        board: Board,
        to_move: Side,
        ai_side: Side,
        selector: Box<dyn MoveSelector>,
    ) -> Self {
        let mut game = Self {
            board,
            phase: Phase::GameOver,
            ai_side,
            is_pass: false,
            flipped: Vec::new(),
            last_move: None,
            selector,
        };
        game.phase = if has_legal_move(&board, to_move) {
            game.phase_for(to_move)
        } else if has_legal_move(&board, to_move.opposite()) {
            game.is_pass = true;
            game.phase_for(to_move.opposite())
        } else {
            Phase::GameOver
        };
        game
    }

    /// Back to the standard opening with dark to move.
    pub fn reset_game(&mut self) -> GameState {
        self.board = Board::new();
        self.phase = self.phase_for(Side::Dark);
        self.is_pass = false;
        self.flipped.clear();
        self.last_move = None;
        log::info!("new game, engine plays {:?}", self.ai_side);
        self.to_game_state()
    }

    pub fn attempt_human_move(&mut self, row: u8, col: u8) -> Result<GameState, GameError> {
        match self.phase {
            Phase::GameOver => return Err(GameError::GameOver),
            Phase::AiThinking => return Err(GameError::NotHumanTurn),
            Phase::AwaitingHumanMove => {}
        }

        let pos = Position::new(row, col).ok_or(GameError::OutOfRange { row, col })?;
        let side = self.human_side();
        if !is_legal(&self.board, side, pos) {
            log::debug!("rejected illegal move ({row}, {col}) for {side:?}");
            return Err(GameError::IllegalMove { row, col });
        }

        self.play(side, pos);
        Ok(self.to_game_state())
    }

    /// Runs the engine for its side and plays the chosen move.
    pub fn request_ai_move(&mut self) -> Result<GameState, GameError> {
        match self.phase {
            Phase::GameOver => return Err(GameError::GameOver),
            Phase::AwaitingHumanMove => return Err(GameError::NotAiTurn),
            Phase::AiThinking => {}
        }

        let side = self.ai_side;
        let selected = self
            .selector
            .select_move(&self.board, side)
            .ok_or(GameError::NoAiMove)?;
        if !is_legal(&self.board, side, selected) {
            return Err(GameError::IllegalMove {
                row: selected.row,
                col: selected.col,
            });
        }

        self.play(side, selected);
        Ok(self.to_game_state())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ai_side(&self) -> Side {
        self.ai_side
    }

    pub fn human_side(&self) -> Side {
        self.ai_side.opposite()
    }

    pub fn side_to_move(&self) -> Option<Side> {
        match self.phase {
            Phase::AwaitingHumanMove => Some(self.human_side()),
            Phase::AiThinking => Some(self.ai_side),
            Phase::GameOver => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.side_to_move()
            .map(|side| legal_moves(&self.board, side))
            .unwrap_or_default()
    }

    /// Returns `(dark_count, light_count)`.
    pub fn scores(&self) -> (u8, u8) {
        self.board.count()
    }

    pub fn to_game_state(&self) -> GameState {
        let (dark_count, light_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            side_to_move: self.side_to_move(),
            phase: self.phase,
            dark_count,
            light_count,
            is_game_over: self.is_game_over(),
            is_pass: self.is_pass,
            flipped: self.flipped.iter().map(|p| p.index() as u8).collect(),
            last_move: self.last_move,
        }
    }

    /// `None` until the game is over.
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }
        let (dark_count, light_count) = self.board.count();
        Some(GameResult::from_counts(dark_count, light_count))
    }

    fn play(&mut self, side: Side, pos: Position) {
        let (next, flipped) = apply_move_with_flips(&self.board, side, pos);
        self.board = next;
        self.flipped = flipped;
        self.last_move = Some(pos);
        self.advance_after(side);
    }

    fn advance_after(&mut self, mover: Side) {
        let other = mover.opposite();
        if has_legal_move(&self.board, other) {
            self.is_pass = false;
            self.phase = self.phase_for(other);
        } else if has_legal_move(&self.board, mover) {
            log::info!("{other:?} has no legal move and passes");
            self.is_pass = true;
            self.phase = self.phase_for(mover);
        } else {
            self.is_pass = false;
            self.phase = Phase::GameOver;
            let (dark, light) = self.board.count();
            log::info!("game over: dark {dark} - light {light}");
        }
    }

    fn phase_for(&self, side: Side) -> Phase {
        if side == self.ai_side {
            Phase::AiThinking
        } else {
            Phase::AwaitingHumanMove
        }
    }
}
