//! Grid module - owns the board slots
//!
//! The grid is a `height x width` rectangle where each slot is empty or holds a token.
//! Uses a flat row-major array for cache locality.
//! Coordinates: (row, col) where row 0 is the top and col 0 is the left edge.
//!
//! Slots are only empty while a cascade is in progress; every public session
//! operation leaves the grid full.

use crate::error::GridParseError;
use crate::rng::TokenSource;
use crate::types::{Cell, Direction, Pos, Token};

/// The game grid using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    /// Flat array of slots, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. Panics if either dimension is zero.
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "grid must be at least 1x1");
        Self {
            height,
            width,
            cells: vec![None; height * width],
        }
    }

    /// Create a grid with every slot drawn from `source`
    pub fn filled(height: usize, width: usize, source: &mut impl TokenSource) -> Self {
        let mut grid = Self::new(height, width);
        for cell in &mut grid.cells {
            *cell = Some(source.next_token());
        }
        grid
    }

    /// Create a full grid from rows of tokens. Panics on ragged or empty input.
    pub fn from_rows(rows: Vec<Vec<Token>>) -> Self {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        assert!(
            rows.iter().all(|row| row.len() == width),
            "all rows must have the same width"
        );

        let mut grid = Self::new(height, width);
        for (i, token) in rows.into_iter().flatten().enumerate() {
            grid.cells[i] = Some(token);
        }
        grid
    }

    /// Parse a grid from token letters, one row per line
    ///
    /// Whitespace inside a line is ignored and blank lines are skipped, so
    /// fixtures can be written as `"R R G\nB G R\nG R B"`.
    pub fn parse(text: &str) -> Result<Self, GridParseError> {
        let mut rows: Vec<Vec<Token>> = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let mut row = Vec::new();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let token = Token::from_letter(ch).ok_or(GridParseError::UnknownToken {
                    line: line_no + 1,
                    ch,
                })?;
                row.push(token);
            }
            if row.is_empty() {
                continue;
            }
            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(GridParseError::Ragged {
                        line: line_no + 1,
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(GridParseError::Empty);
        }
        Ok(Self::from_rows(rows))
    }

    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.row >= self.height || pos.col >= self.width {
            return None;
        }
        Some(pos.row * self.width + pos.col)
    }

    #[inline]
    fn index_or_panic(&self, pos: Pos) -> usize {
        match self.index(pos) {
            Some(idx) => idx,
            None => panic!(
                "cell ({}, {}) is outside the {}x{} grid",
                pos.row, pos.col, self.height, self.width
            ),
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Check if position is inside the grid
    pub fn contains(&self, pos: Pos) -> bool {
        self.index(pos).is_some()
    }

    /// Token at `pos`. Panics if `pos` is out of bounds.
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index_or_panic(pos)]
    }

    /// Overwrite the slot at `pos`. Panics if `pos` is out of bounds.
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let idx = self.index_or_panic(pos);
        self.cells[idx] = cell;
    }

    /// Exchange two slots. Adjacency is not checked here.
    pub fn swap(&mut self, a: Pos, b: Pos) {
        let ia = self.index_or_panic(a);
        let ib = self.index_or_panic(b);
        self.cells.swap(ia, ib);
    }

    /// Check if two in-bounds cells are neighbors (Chebyshev distance 1)
    pub fn is_adjacent(&self, a: Pos, b: Pos) -> bool {
        self.contains(a) && self.contains(b) && a.chebyshev(b) == 1
    }

    /// Cells extending from `pos` (exclusive) in `dir` up to the grid edge
    pub fn neighbors_in_line(&self, pos: Pos, dir: Direction) -> LineIter {
        LineIter {
            next: pos.step(dir, self.height, self.width),
            dir,
            height: self.height,
            width: self.width,
        }
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let width = self.width;
        (0..self.height * width).map(move |i| Pos::new(i / width, i % width))
    }

    /// Slots of one column, top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        assert!(col < self.width, "column {} is outside the grid", col);
        (0..self.height).map(move |row| self.cells[row * self.width + col])
    }

    /// Slots of one row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        assert!(row < self.height, "row {} is outside the grid", row);
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Get a reference to the internal slot array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Board text, one line of token letters per row (`.` for empty)
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.height * (self.width + 1));
        for row in 0..self.height {
            for cell in self.row(row) {
                out.push(cell.map(Token::letter).unwrap_or('.'));
            }
            out.push('\n');
        }
        out
    }
}

/// Lazy walk along one axis direction
///
/// Finite (stops at the grid edge) and restartable via `Clone`.
#[derive(Debug, Clone)]
pub struct LineIter {
    next: Option<Pos>,
    dir: Direction,
    height: usize,
    width: usize,
}

impl Iterator for LineIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        let current = self.next?;
        self.next = current.step(self.dir, self.height, self.width);
        Some(current)
    }
}
