use serde::Serialize;
use web_time::Instant;

use crate::ai::eval::Evaluator;
use crate::board::{Board, Side};
use crate::config::EngineConfig;
use crate::game::MoveSelector;
use crate::rules::{apply_move, has_legal_move, legal_moves};
use crate::types::Position;

pub const MIN_SCORE: i32 = i32::MIN;
pub const MAX_SCORE: i32 = i32::MAX;

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// `None` only when the engine's side has no legal move.
    pub best_move: Option<Position>,
    pub score: i32,
    /// Minimax nodes visited below the root.
    pub nodes: u64,
    pub elapsed_ms: u64,
}

/// Fixed-depth minimax with alpha-beta pruning.
///
/// The engine's side always maximizes and its opponent always minimizes;
/// scores are [`Evaluator::evaluate`] from the engine's point of view.
/// A searcher holds only configuration, so one instance can serve any
/// number of searches.
#[derive(Debug, Clone)]
pub struct Searcher {
    evaluator: Evaluator,
    max_depth: u8,
    ai_side: Side,
}

impl Searcher {
    pub fn new(evaluator: Evaluator, max_depth: u8, ai_side: Side) -> Self {
        Self {
            evaluator,
            max_depth,
            ai_side,
        }
    }

    pub fn from_config(config: &EngineConfig, evaluator: Evaluator) -> Self {
        Self::new(evaluator, config.max_depth, config.ai_side)
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn ai_side(&self) -> Side {
        self.ai_side
    }

    /// Picks the engine's move on `board`.
    ///
    /// Every root candidate is searched; alpha is raised after each one but
    /// siblings at the root are never cut. Ties keep the earliest candidate
    /// in row-major order.
    pub fn best_move(&self, board: &Board) -> SearchResult {
        let start = Instant::now();
        let mut walk = Walk::new(&self.evaluator, self.ai_side);

        let moves = legal_moves(board, self.ai_side);
        if moves.is_empty() {
            return SearchResult {
                best_move: None,
                score: self.evaluator.evaluate(board, self.ai_side),
                nodes: 0,
                elapsed_ms: 0,
            };
        }

        let child_depth = self.max_depth.saturating_sub(1);
        let mut best_move = None;
        let mut best_score = MIN_SCORE;
        let mut alpha = MIN_SCORE;

        for mv in moves {
            let next = apply_move(board, self.ai_side, mv);
            let score = walk.minimax(&next, child_depth, alpha, MAX_SCORE, false);
            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_score);
        }

        let result = SearchResult {
            best_move,
            score: best_score,
            nodes: walk.nodes,
            elapsed_ms: start.elapsed().as_millis() as u64,
        };
        log::debug!(
            "search side={:?} depth={} best={:?} score={} nodes={} elapsed={}ms",
            self.ai_side,
            self.max_depth,
            result.best_move,
            result.score,
            result.nodes,
            result.elapsed_ms
        );
        result
    }

    /// Value of `board` searched `depth` plies deep with window `(alpha, beta)`.
    /// `maximizing` selects whether the engine's side is to move.
    pub fn minimax(
        &self,
        board: &Board,
        depth: u8,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> i32 {
        Walk::new(&self.evaluator, self.ai_side).minimax(board, depth, alpha, beta, maximizing)
    }
}

impl MoveSelector for Searcher {
    fn select_move(&self, board: &Board, side: Side) -> Option<Position> {
        assert_eq!(side, self.ai_side, "searcher asked to play the wrong side");
        self.best_move(board).best_move
    }
}

/// Per-search scratch state.
struct Walk<'a> {
    evaluator: &'a Evaluator,
    max_side: Side,
    nodes: u64,
}

impl<'a> Walk<'a> {
    fn new(evaluator: &'a Evaluator, max_side: Side) -> Self {
        Self {
            evaluator,
            max_side,
            nodes: 0,
        }
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;
        let min_side = self.max_side.opposite();

        if depth == 0 || (!has_legal_move(board, min_side) && !has_legal_move(board, self.max_side))
        {
            return self.evaluator.evaluate(board, self.max_side);
        }

        let side = if maximizing { self.max_side } else { min_side };
        let moves = legal_moves(board, side);
        if moves.is_empty() {
            // Forced pass: same board, other side, one ply spent.
            return self.minimax(board, depth - 1, alpha, beta, !maximizing);
        }

        if maximizing {
            let mut best = MIN_SCORE;
            for mv in moves {
                let next = apply_move(board, side, mv);
                let score = self.minimax(&next, depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = MAX_SCORE;
            for mv in moves {
                let next = apply_move(board, side, mv);
                let score = self.minimax(&next, depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
