use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoardParseError;
use crate::types::Position;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Content of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Dark,
    Light,
}

impl Cell {
    /// Wire code used by the front end: 0=empty, 1=dark, 2=light.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Dark => 1,
            Cell::Light => 2,
        }
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Dark => Some(Side::Dark),
            Cell::Light => Some(Side::Light),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Dark => 'X',
            Cell::Light => 'O',
        }
    }
}

/// One of the two players. Dark always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Dark,
    Light,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Dark => Side::Light,
            Side::Light => Side::Dark,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Side::Dark => Cell::Dark,
            Side::Light => Cell::Light,
        }
    }
}

/// Othello board as a plain 8x8 matrix. Copying it is a 64-byte value copy,
/// which is what the search relies on for its scratch boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the standard opening:
    /// (3,3)=light, (3,4)=dark, (4,3)=dark, (4,4)=light.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::Light;
        board.cells[3][4] = Cell::Dark;
        board.cells[4][3] = Cell::Dark;
        board.cells[4][4] = Cell::Light;
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Only the move rules and the text parser write squares.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// Returns `(dark_count, light_count)`.
    pub fn count(&self) -> (u8, u8) {
        self.cells
            .iter()
            .flatten()
            .fold((0u8, 0u8), |(dark, light), cell| match cell {
                Cell::Dark => (dark + 1, light),
                Cell::Light => (dark, light + 1),
                Cell::Empty => (dark, light),
            })
    }

    pub fn count_side(&self, side: Side) -> u8 {
        let (dark, light) = self.count();
        match side {
            Side::Dark => dark,
            Side::Light => light,
        }
    }

    pub fn occupied_count(&self) -> u8 {
        let (dark, light) = self.count();
        dark + light
    }

    pub fn empty_count(&self) -> u8 {
        NUM_SQUARES as u8 - self.occupied_count()
    }

    /// Converts board to `[u8; 64]` in row-major order, see [`Cell::code`].
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut out = [0u8; NUM_SQUARES];
        for (slot, cell) in out.iter_mut().zip(self.cells.iter().flatten()) {
            *slot = cell.code();
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the `Display` form: 64 cells of `.`, `X` or `O`, whitespace ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut found = 0usize;

        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match ch {
                '.' | '-' => Cell::Empty,
                'X' | 'x' => Cell::Dark,
                'O' | 'o' => Cell::Light,
                _ => return Err(BoardParseError::InvalidChar { ch, index: found }),
            };
            if found < NUM_SQUARES {
                board.set(Position::from_index(found), cell);
            }
            found += 1;
        }

        if found != NUM_SQUARES {
            return Err(BoardParseError::WrongLength { found });
        }
        Ok(board)
    }
}
