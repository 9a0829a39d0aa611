use crate::types::{MAX_HEIGHT, MAX_WIDTH};

/// Why a move was rejected.
///
/// The grid is left exactly as it was before the call for every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid cell coordinate!")]
    OutOfBounds,

    #[error("specify two different cells")]
    SameCell,

    #[error("specify two adjacent cells")]
    NotAdjacent,

    #[error("swap didn't change anything")]
    NoMatch,
}

/// A settle cycle ran past its pass limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cascade did not settle after {passes} passes")]
pub struct CascadeOverflow {
    pub passes: u32,
}

/// Errors that can occur when constructing a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(
        "invalid board size {height}x{width} (rows 1..={}, columns 1..={})",
        MAX_HEIGHT,
        MAX_WIDTH
    )]
    InvalidDimensions { height: usize, width: usize },

    #[error("initial board failed to stabilize: {0}")]
    Cascade(#[from] CascadeOverflow),
}

/// Errors from [`Grid::parse`](crate::Grid::parse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    #[error("board text has no rows")]
    Empty,

    #[error("line {line}: unknown token '{ch}'")]
    UnknownToken { line: usize, ch: char },

    #[error("line {line}: expected {expected} tokens, found {found}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
}
