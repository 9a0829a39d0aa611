//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input handling).
//!
//! # Coordinates
//!
//! Cells are addressed as `(row, col)`:
//!
//! - **row**: 0 is the top row, `height - 1` the bottom row
//! - **col**: 0 is the leftmost column, `width - 1` the rightmost column
//!
//! Gravity pulls tokens toward the highest row index.
//!
//! # Examples
//!
//! ```
//! use tui_match3_types::{Direction, Pos, Token, MIN_MATCH_LEN};
//!
//! let token = Token::from_letter('g').unwrap();
//! assert_eq!(token, Token::Green);
//!
//! let pos = Pos::new(1, 2);
//! assert_eq!(pos.step(Direction::Up, 8, 8), Some(Pos::new(0, 2)));
//! assert_eq!(Pos::new(0, 2).step(Direction::Up, 8, 8), None);
//!
//! assert_eq!(MIN_MATCH_LEN, 3);
//! ```

/// Default board height (rows), as in the classic 8x8 layout
pub const DEFAULT_HEIGHT: usize = 8;

/// Default board width (columns)
pub const DEFAULT_WIDTH: usize = 8;

/// Largest supported board height (rows are labelled `A..Z`)
pub const MAX_HEIGHT: usize = 26;

/// Largest supported board width (columns are labelled `1..99`)
pub const MAX_WIDTH: usize = 99;

/// Minimum run length that counts as a match
pub const MIN_MATCH_LEN: usize = 3;

/// Default cap on batches within one settle cycle
pub const DEFAULT_MAX_SETTLE_PASSES: u32 = 1000;

/// Label letter for a row index, `A` for the top row (`?` past `Z`)
pub fn row_letter(row: usize) -> char {
    match u8::try_from(row) {
        Ok(r) if row < MAX_HEIGHT => char::from(b'A' + r),
        _ => '?',
    }
}

/// The five token kinds
///
/// Each token has a fixed color and a single-letter code:
/// - **Red** (`R`)
/// - **Magenta** (`M`)
/// - **Yellow** (`Y`)
/// - **Green** (`G`)
/// - **Blue** (`B`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    Red,
    Magenta,
    Yellow,
    Green,
    Blue,
}

impl Token {
    /// Number of token kinds
    pub const COUNT: usize = 5;

    /// All kinds in index order
    pub const ALL: [Token; Token::COUNT] = [
        Token::Red,
        Token::Magenta,
        Token::Yellow,
        Token::Green,
        Token::Blue,
    ];

    /// Stable index in `0..COUNT`
    pub fn index(self) -> usize {
        match self {
            Token::Red => 0,
            Token::Magenta => 1,
            Token::Yellow => 2,
            Token::Green => 3,
            Token::Blue => 4,
        }
    }

    /// Token for an index, `None` when `index >= COUNT`
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::Token;
    ///
    /// assert_eq!(Token::from_index(0), Some(Token::Red));
    /// assert_eq!(Token::from_index(4), Some(Token::Blue));
    /// assert_eq!(Token::from_index(5), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Single-letter code (uppercase)
    pub fn letter(self) -> char {
        match self {
            Token::Red => 'R',
            Token::Magenta => 'M',
            Token::Yellow => 'Y',
            Token::Green => 'G',
            Token::Blue => 'B',
        }
    }

    /// Parse a single-letter code (case-insensitive)
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Token::Red),
            'M' => Some(Token::Magenta),
            'Y' => Some(Token::Yellow),
            'G' => Some(Token::Green),
            'B' => Some(Token::Blue),
            _ => None,
        }
    }

    /// Parse token from its name or letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::Token;
    ///
    /// assert_eq!(Token::from_str("magenta"), Some(Token::Magenta));
    /// assert_eq!(Token::from_str("Y"), Some(Token::Yellow));
    /// assert_eq!(Token::from_str("purple"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" | "r" => Some(Token::Red),
            "magenta" | "m" => Some(Token::Magenta),
            "yellow" | "y" => Some(Token::Yellow),
            "green" | "g" => Some(Token::Green),
            "blue" | "b" => Some(Token::Blue),
            _ => None,
        }
    }

    /// Convert to lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Red => "red",
            Token::Magenta => "magenta",
            Token::Yellow => "yellow",
            Token::Green => "green",
            Token::Blue => "blue",
        }
    }
}

/// A cell position on the grid, ordered row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance: the larger of the row and column differences
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::Pos;
    ///
    /// assert_eq!(Pos::new(0, 0).chebyshev(Pos::new(1, 1)), 1);
    /// assert_eq!(Pos::new(0, 0).chebyshev(Pos::new(2, 2)), 2);
    /// assert_eq!(Pos::new(3, 1).chebyshev(Pos::new(3, 1)), 0);
    /// ```
    pub fn chebyshev(self, other: Pos) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Move one cell in `dir`, staying inside a `height x width` grid
    pub fn step(self, dir: Direction, height: usize, width: usize) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row >= height || col >= width {
            return None;
        }
        Some(Pos { row, col })
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// The four axis directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row/column delta for one step
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// A grid slot
///
/// - `None`: empty (only observable mid-cascade)
/// - `Some(Token)`: slot holds the token
pub type Cell = Option<Token>;
