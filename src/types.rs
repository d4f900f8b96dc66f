use serde::Serialize;

use crate::board::{BOARD_SIZE, NUM_SQUARES, Side};

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Returns `None` when `row` or `col` lies outside the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < NUM_SQUARES, "square index out of range: {index}");
        Self {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        }
    }

    /// Row-major square index (0..=63).
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..NUM_SQUARES).map(Position::from_index)
    }

    /// Neighbouring square in direction `(dr, dc)`, if still on the board.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Position> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        let range = 0..BOARD_SIZE as i32;
        if range.contains(&row) && range.contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

/// Where the controller's state machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AwaitingHumanMove,
    AiThinking,
    GameOver,
}

/// Public game state returned to the front end after every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Row-major cells, 0=empty, 1=dark, 2=light.
    pub board: Vec<u8>,
    /// `None` once the game is over.
    pub side_to_move: Option<Side>,
    pub phase: Phase,
    pub dark_count: u8,
    pub light_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the opponent of the last mover had no legal move and the
    ///   last mover keeps the turn.
    /// - `false` otherwise.
    pub is_pass: bool,
    /// Contract:
    /// - After a move: indices (0..=63) of the discs it flipped.
    /// - Fresh game: empty.
    pub flipped: Vec<u8>,
    pub last_move: Option<Position>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// `None` is a draw.
    pub winner: Option<Side>,
    pub dark_count: u8,
    pub light_count: u8,
}

impl GameResult {
    /// Winner is the side with strictly more discs.
    pub fn from_counts(dark_count: u8, light_count: u8) -> Self {
        let winner = if dark_count > light_count {
            Some(Side::Dark)
        } else if light_count > dark_count {
            Some(Side::Light)
        } else {
            None
        };
        Self {
            winner,
            dark_count,
            light_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_new_rejects_out_of_range() {
        assert_eq!(Position::new(7, 7), Some(Position { row: 7, col: 7 }));
        assert_eq!(Position::new(8, 0), None);
        assert_eq!(Position::new(0, 8), None);
    }

    #[test]
    fn all_positions_are_row_major() {
        let all: Vec<Position> = Position::all().collect();

        assert_eq!(all.len(), NUM_SQUARES);
        assert_eq!(all[0], Position { row: 0, col: 0 });
        assert_eq!(all[9], Position { row: 1, col: 1 });
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert!(all.iter().enumerate().all(|(i, p)| p.index() == i));
    }

    #[test]
    fn offset_stops_at_edges() {
        let corner = Position { row: 0, col: 0 };

        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Position { row: 1, col: 1 }));
        assert_eq!(Position { row: 7, col: 3 }.offset(1, 0), None);
    }

    #[test]
    fn result_winner_is_strict_majority() {
        assert_eq!(GameResult::from_counts(40, 24).winner, Some(Side::Dark));
        assert_eq!(GameResult::from_counts(10, 54).winner, Some(Side::Light));
        assert_eq!(GameResult::from_counts(32, 32).winner, None);
    }
}
