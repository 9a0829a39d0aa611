//! Resolver - drives a settle cycle to completion
//!
//! One settle cycle runs the state machine
//!
//! ```text
//! Scanning -> Clearing -> Gravity -> Refill -> Scanning -> ... -> Idle
//! ```
//!
//! Every trip through `Clearing` removes one batch: all cells matched on the
//! board at that moment. Each batch is reported separately so chained clears
//! are scored one at a time.

use tracing::{debug, trace};

use crate::error::CascadeOverflow;
use crate::grid::Grid;
use crate::matcher::find_all_matches;
use crate::rng::TokenSource;
use crate::types::{Pos, DEFAULT_MAX_SETTLE_PASSES};

/// States of one settle cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleState {
    Scanning,
    Clearing,
    Gravity,
    Refill,
    Idle,
}

/// Settle-cycle driver with a cap on batches per cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    max_passes: u32,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SETTLE_PASSES)
    }
}

impl Resolver {
    pub fn new(max_passes: u32) -> Self {
        Self { max_passes }
    }

    pub fn max_passes(&self) -> u32 {
        self.max_passes
    }

    /// Clear, drop and refill until no match remains.
    ///
    /// `on_batch` is called once per cleared batch with its size, in order.
    /// Returns the total number of cells cleared. Fails if more than
    /// `max_passes` batches would be needed.
    pub fn settle<S>(
        &self,
        grid: &mut Grid,
        source: &mut S,
        mut on_batch: impl FnMut(usize),
    ) -> Result<usize, CascadeOverflow>
    where
        S: TokenSource + ?Sized,
    {
        let mut state = SettleState::Scanning;
        let mut batch: Vec<Pos> = Vec::new();
        let mut passes = 0u32;
        let mut total = 0usize;

        loop {
            trace!(?state, passes, "settle step");
            state = match state {
                SettleState::Scanning => {
                    batch = find_all_matches(grid);
                    if batch.is_empty() {
                        SettleState::Idle
                    } else if passes >= self.max_passes {
                        return Err(CascadeOverflow { passes });
                    } else {
                        SettleState::Clearing
                    }
                }
                SettleState::Clearing => {
                    clear_cells(grid, &batch);
                    SettleState::Gravity
                }
                SettleState::Gravity => {
                    apply_gravity(grid);
                    SettleState::Refill
                }
                SettleState::Refill => {
                    refill(grid, source);
                    passes += 1;
                    total += batch.len();
                    debug!(pass = passes, cleared = batch.len(), "batch cleared");
                    on_batch(batch.len());
                    SettleState::Scanning
                }
                SettleState::Idle => return Ok(total),
            };
        }
    }
}

/// Empty every listed cell
pub fn clear_cells(grid: &mut Grid, cells: &[Pos]) {
    for &pos in cells {
        grid.set(pos, None);
    }
}

/// Compact each column toward the bottom row, keeping token order.
///
/// Emptied slots end up at the top of their column.
pub fn apply_gravity(grid: &mut Grid) {
    let height = grid.height();
    for col in 0..grid.width() {
        let mut write = height;
        for row in (0..height).rev() {
            let pos = Pos::new(row, col);
            if let Some(token) = grid.get(pos) {
                write -= 1;
                if write != row {
                    grid.set(Pos::new(write, col), Some(token));
                    grid.set(pos, None);
                }
            }
        }
    }
}

/// Fill every empty slot (row-major) from `source`; returns how many were filled
pub fn refill<S: TokenSource + ?Sized>(grid: &mut Grid, source: &mut S) -> usize {
    let mut filled = 0;
    for pos in grid.positions() {
        if grid.get(pos).is_none() {
            grid.set(pos, Some(source.next_token()));
            filled += 1;
        }
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::has_match;
    use crate::rng::{SimpleRng, TokenCycle};
    use crate::types::Token;

    fn column_tokens(grid: &Grid, col: usize) -> Vec<Token> {
        grid.column(col).flatten().collect()
    }

    #[test]
    fn test_gravity_preserves_column_order() {
        let mut grid = Grid::parse("RGB\nGBR\nBRG\nYMY").unwrap();
        let before: Vec<_> = (0..3).map(|c| column_tokens(&grid, c)).collect();

        clear_cells(&mut grid, &[Pos::new(1, 0), Pos::new(3, 0), Pos::new(2, 2)]);
        let expected: Vec<_> = (0..3).map(|c| column_tokens(&grid, c)).collect();
        apply_gravity(&mut grid);

        for col in 0..3 {
            assert_eq!(column_tokens(&grid, col), expected[col]);
        }
        assert_ne!(before[0], expected[0]);

        // Column 0 now has two empties on top, R and B below in original order
        assert_eq!(grid.get(Pos::new(0, 0)), None);
        assert_eq!(grid.get(Pos::new(1, 0)), None);
        assert_eq!(grid.get(Pos::new(2, 0)), Some(Token::Red));
        assert_eq!(grid.get(Pos::new(3, 0)), Some(Token::Blue));
    }

    #[test]
    fn test_gravity_on_full_grid_is_noop() {
        let mut grid = Grid::parse("RGB\nGBR").unwrap();
        let before = grid.clone();
        apply_gravity(&mut grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_refill_only_touches_empty_slots() {
        let mut grid = Grid::parse("RG\nBY").unwrap();
        grid.set(Pos::new(0, 1), None);
        let mut source = TokenCycle::repeat(Token::Magenta);
        assert_eq!(refill(&mut grid, &mut source), 1);
        assert_eq!(grid.to_text(), "RM\nBY\n");
    }

    #[test]
    fn test_settle_reports_each_batch() {
        // Row 0 matches; refill with non-matching tokens
        let mut grid = Grid::parse("RRR\nGBG\nBGB").unwrap();
        let mut source = TokenCycle::new(vec![Token::Yellow, Token::Magenta, Token::Yellow]);
        let mut batches = Vec::new();

        let total = Resolver::default()
            .settle(&mut grid, &mut source, |n| batches.push(n))
            .unwrap();

        assert_eq!(total, 3);
        assert_eq!(batches, vec![3]);
        assert_eq!(grid.to_text(), "YMY\nGBG\nBGB\n");
    }

    #[test]
    fn test_settle_on_stable_grid_does_nothing() {
        let mut grid = Grid::parse("RGB\nGBR\nRGB").unwrap();
        let before = grid.clone();
        let mut source = TokenCycle::repeat(Token::Red);
        let total = Resolver::default()
            .settle(&mut grid, &mut source, |_| panic!("no batch expected"))
            .unwrap();
        assert_eq!(total, 0);
        assert_eq!(grid, before);
        assert_eq!(source.drawn(), 0);
    }

    #[test]
    fn test_settle_random_grid_ends_stable_and_full() {
        for seed in 1..50 {
            let mut rng = SimpleRng::new(seed);
            let mut grid = Grid::filled(8, 8, &mut rng);
            Resolver::default().settle(&mut grid, &mut rng, |_| {}).unwrap();
            assert!(grid.is_full());
            assert!(!has_match(&grid), "seed {} left a match", seed);
        }
    }

    #[test]
    fn test_degenerate_source_hits_pass_cap() {
        let mut grid = Grid::parse("RRR\nGBG\nBGB").unwrap();
        let mut source = TokenCycle::repeat(Token::Red);
        let err = Resolver::new(5)
            .settle(&mut grid, &mut source, |_| {})
            .unwrap_err();
        assert_eq!(err, CascadeOverflow { passes: 5 });
    }
}
