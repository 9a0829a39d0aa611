use crate::grid::Grid;
use crate::types::{Pos, Token};
use crate::validator::SettleReport;

/// Read-only copy of a settled board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    height: usize,
    width: usize,
    tokens: Vec<Token>,
}

impl BoardSnapshot {
    /// Copy a full grid. Panics if any slot is empty (mid-cascade).
    pub fn of(grid: &Grid) -> Self {
        let tokens = grid
            .cells()
            .iter()
            .map(|cell| match cell {
                Some(token) => *token,
                None => panic!("board snapshot taken with empty slots"),
            })
            .collect();
        Self {
            height: grid.height(),
            width: grid.width(),
            tokens,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, pos: Pos) -> Option<Token> {
        if pos.row >= self.height || pos.col >= self.width {
            return None;
        }
        Some(self.tokens[pos.row * self.width + pos.col])
    }

    pub fn row(&self, row: usize) -> &[Token] {
        let start = row * self.width;
        &self.tokens[start..start + self.width]
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Token]> {
        self.tokens.chunks(self.width)
    }

    pub fn to_rows(&self) -> Vec<Vec<Token>> {
        self.rows().map(<[Token]>::to_vec).collect()
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: BoardSnapshot,
    pub score: u32,
    pub moves: u32,
    pub seed: Option<u32>,
    pub last_report: Option<SettleReport>,
}
