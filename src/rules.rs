//! Move rules: legality, move generation and disc flipping.
//!
//! Everything here is a pure function of a board and a side. [`apply_move`]
//! is the only way a board changes once a game is running.

use crate::board::{Board, Cell, Side};
use crate::types::Position;

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Returns true when `side` may play at `pos`: the square is empty and at least
/// one direction holds a contiguous, non-empty run of opponent discs closed by
/// a disc of `side`.
pub fn is_legal(board: &Board, side: Side, pos: Position) -> bool {
    if board.cell(pos) != Cell::Empty {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&dir| bracketed_run(board, side, pos, dir) > 0)
}

/// All legal moves for `side` in row-major order.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Position> {
    Position::all()
        .filter(|&pos| is_legal(board, side, pos))
        .collect()
}

pub fn has_legal_move(board: &Board, side: Side) -> bool {
    Position::all().any(|pos| is_legal(board, side, pos))
}

/// Discs that playing `pos` would flip, grouped by direction.
/// Empty when the move is illegal.
pub fn flips(board: &Board, side: Side, pos: Position) -> Vec<Position> {
    if board.cell(pos) != Cell::Empty {
        return Vec::new();
    }

    let mut out = Vec::new();
    for &(dr, dc) in &DIRECTIONS {
        let run = bracketed_run(board, side, pos, (dr, dc));
        let mut cursor = pos;
        for _ in 0..run {
            // In bounds: bracketed_run already walked these squares.
            if let Some(next) = cursor.offset(dr, dc) {
                out.push(next);
                cursor = next;
            }
        }
    }
    out
}

/// Plays `pos` for `side` and returns the new board.
///
/// Caller contract: the move is legal. It is only re-checked in debug builds.
pub fn apply_move(board: &Board, side: Side, pos: Position) -> Board {
    debug_assert!(
        is_legal(board, side, pos),
        "apply_move called with illegal move {pos:?} for {side:?}\n{board}"
    );

    let own = side.to_cell();
    let mut next = *board;
    next.set(pos, own);

    // Runs are measured on the untouched `board`, so directions never see
    // each other's flips.
    for &(dr, dc) in &DIRECTIONS {
        let run = bracketed_run(board, side, pos, (dr, dc));
        let mut cursor = pos;
        for _ in 0..run {
            if let Some(square) = cursor.offset(dr, dc) {
                next.set(square, own);
                cursor = square;
            }
        }
    }

    next
}

/// Same as [`apply_move`], also returning the flipped discs for display.
pub fn apply_move_with_flips(board: &Board, side: Side, pos: Position) -> (Board, Vec<Position>) {
    let flipped = flips(board, side, pos);
    (apply_move(board, side, pos), flipped)
}

/// Length of the opponent run starting next to `origin` in direction `dir`,
/// or 0 when the run is empty or not closed by a disc of `side` on the board.
fn bracketed_run(board: &Board, side: Side, origin: Position, (dr, dc): (i32, i32)) -> usize {
    let own = side.to_cell();
    let opp = side.opposite().to_cell();

    let mut run = 0usize;
    let mut cursor = origin.offset(dr, dc);
    while let Some(square) = cursor {
        let cell = board.cell(square);
        if cell == opp {
            run += 1;
            cursor = square.offset(dr, dc);
        } else if cell == own {
            return run;
        } else {
            return 0;
        }
    }
    0
}
