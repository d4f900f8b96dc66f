use crate::board::{BOARD_SIZE, Board, Cell, NUM_SQUARES, Side};
use crate::error::EngineError;
use crate::types::Position;

const MAGIC: &[u8; 4] = b"OWGT";
const VERSION: u32 = 1;
const HEADER_SIZE: usize = 20;
const PAYLOAD_SIZE: usize = NUM_SQUARES * 4;

pub type WeightTable = [[i32; BOARD_SIZE]; BOARD_SIZE];

/// Positional weights: corners are worth the most, the squares that hand
/// the opponent a corner are penalised.
pub const DEFAULT_WEIGHTS: WeightTable = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// Static positional evaluator over a fixed weight table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluator {
    weights: WeightTable,
}

impl Evaluator {
    /// Rejects tables that are not symmetric under the board reflections,
    /// and tables whose scores could leave the `i32` range.
    pub fn new(weights: WeightTable) -> Result<Self, EngineError> {
        if !is_symmetric(&weights) {
            return Err(EngineError::AsymmetricWeights);
        }
        let total: i64 = weights.iter().flatten().map(|&w| (w as i64).abs()).sum();
        if total > i32::MAX as i64 {
            return Err(EngineError::WeightsTooLarge { total });
        }
        Ok(Self { weights })
    }

    /// Deserialize a weight table blob.
    ///
    /// Layout: `OWGT`, version, cell count, CRC32 of the payload and a
    /// reserved word (all u32 LE), then 64 row-major i32 LE weights.
    pub fn from_bytes(data: &[u8]) -> Result<Self, EngineError> {
        if data.len() < HEADER_SIZE {
            return Err(EngineError::WeightsTooShort {
                expected: HEADER_SIZE,
                found: data.len(),
            });
        }

        if &data[0..4] != MAGIC {
            return Err(EngineError::BadMagic);
        }

        let version = read_u32_le(data, 4)?;
        if version != VERSION {
            return Err(EngineError::UnsupportedVersion {
                expected: VERSION,
                found: version,
            });
        }

        let cells = read_u32_le(data, 8)?;
        if cells as usize != NUM_SQUARES {
            return Err(EngineError::CellCountMismatch { found: cells });
        }

        let expected_crc = read_u32_le(data, 12)?;
        let payload = &data[HEADER_SIZE..];
        let actual_crc = crc32fast::hash(payload);
        if actual_crc != expected_crc {
            return Err(EngineError::CrcMismatch {
                expected: expected_crc,
                actual: actual_crc,
            });
        }

        if payload.len() < PAYLOAD_SIZE {
            return Err(EngineError::TruncatedWeights);
        }
        if payload.len() > PAYLOAD_SIZE {
            return Err(EngineError::TrailingBytes);
        }

        let mut weights = [[0i32; BOARD_SIZE]; BOARD_SIZE];
        for (pos, chunk) in Position::all().zip(payload.chunks_exact(4)) {
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(chunk);
            weights[pos.row as usize][pos.col as usize] = i32::from_le_bytes(bytes);
        }

        Self::new(weights)
    }

    /// Serialize into the format read by [`Evaluator::from_bytes`].
    pub fn to_bytes(&self) -> Vec<u8> {
        let payload: Vec<u8> = self
            .weights
            .iter()
            .flatten()
            .flat_map(|w| w.to_le_bytes())
            .collect();

        let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
        out.extend_from_slice(MAGIC);
        out.extend_from_slice(&VERSION.to_le_bytes());
        out.extend_from_slice(&(NUM_SQUARES as u32).to_le_bytes());
        out.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&payload);
        out
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Sum of weights of `side`'s discs minus the opponent's. Empty squares
    /// count for nothing.
    pub fn evaluate(&self, board: &Board, side: Side) -> i32 {
        let own = side.to_cell();
        Position::all()
            .map(|pos| match board.cell(pos) {
                Cell::Empty => 0,
                cell if cell == own => self.weight(pos),
                _ => -self.weight(pos),
            })
            .sum()
    }

    fn weight(&self, pos: Position) -> i32 {
        self.weights[pos.row as usize][pos.col as usize]
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
        }
    }
}

fn is_symmetric(weights: &WeightTable) -> bool {
    let last = BOARD_SIZE - 1;
    (0..BOARD_SIZE).all(|r| {
        (0..BOARD_SIZE).all(|c| {
            let w = weights[r][c];
            w == weights[r][last - c] && w == weights[last - r][c] && w == weights[c][r]
        })
    })
}

fn read_u32_le(data: &[u8], offset: usize) -> Result<u32, EngineError> {
    if offset + 4 > data.len() {
        return Err(EngineError::TruncatedWeights);
    }
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&data[offset..offset + 4]);
    Ok(u32::from_le_bytes(bytes))
}
