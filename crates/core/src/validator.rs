//! Move validation and application
//!
//! A move names two cells. It is accepted only if both are on the board,
//! distinct, neighbors (diagonals included), and swapping them creates a
//! match at either cell. Rejected moves leave the grid untouched.

use tracing::{debug, error};

use crate::error::MoveError;
use crate::grid::Grid;
use crate::matcher::find_matches_at;
use crate::resolver::Resolver;
use crate::rng::TokenSource;
use crate::scoring::Scorer;
use crate::types::Pos;

/// Outcome of an accepted move
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettleReport {
    /// Size of each cleared batch, in the order they were cleared
    pub batches: Vec<usize>,
    /// Sum of the per-batch points
    pub score_delta: u32,
}

impl SettleReport {
    /// Total cells cleared over the whole cascade
    pub fn cleared(&self) -> usize {
        self.batches.iter().sum()
    }

    /// Number of chained batches after the first
    pub fn chain_len(&self) -> usize {
        self.batches.len().saturating_sub(1)
    }
}

/// Bounds, distinctness and adjacency checks, in that order
pub fn validate_move(grid: &Grid, a: Pos, b: Pos) -> Result<(), MoveError> {
    if !grid.contains(a) || !grid.contains(b) {
        return Err(MoveError::OutOfBounds);
    }
    if a == b {
        return Err(MoveError::SameCell);
    }
    if !grid.is_adjacent(a, b) {
        return Err(MoveError::NotAdjacent);
    }
    Ok(())
}

/// Swap `a` and `b`, keeping the swap only if it forms a match at either cell
pub fn try_swap(grid: &mut Grid, a: Pos, b: Pos) -> Result<(), MoveError> {
    grid.swap(a, b);
    let matched = find_matches_at(grid, a).is_some() || find_matches_at(grid, b).is_some();
    if !matched {
        grid.swap(a, b);
        return Err(MoveError::NoMatch);
    }
    Ok(())
}

/// Validate, swap, then settle the board while scoring each batch.
///
/// A settle cycle that exceeds the resolver's pass cap means the token
/// source is broken; that is treated as a fatal internal error and panics.
pub fn validate_and_apply<S>(
    grid: &mut Grid,
    source: &mut S,
    resolver: &Resolver,
    scorer: &mut Scorer,
    a: Pos,
    b: Pos,
) -> Result<SettleReport, MoveError>
where
    S: TokenSource + ?Sized,
{
    if let Err(err) = validate_move(grid, a, b).and_then(|()| try_swap(grid, a, b)) {
        debug!(?a, ?b, %err, "move rejected");
        return Err(err);
    }

    let mut report = SettleReport::default();
    let settled = resolver.settle(grid, source, |n| {
        report.batches.push(n);
        report.score_delta += scorer.score_batch(n);
    });

    if let Err(err) = settled {
        error!(%err, "board failed to settle after a move");
        panic!("internal error: {}", err);
    }

    debug!(?a, ?b, batches = ?report.batches, delta = report.score_delta, "move applied");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::TokenCycle;
    use crate::types::Token;

    #[test]
    fn test_validation_order() {
        let grid = Grid::parse("RGB\nGBR\nRGB").unwrap();
        assert_eq!(
            validate_move(&grid, Pos::new(3, 3), Pos::new(3, 3)),
            Err(MoveError::OutOfBounds)
        );
        assert_eq!(
            validate_move(&grid, Pos::new(1, 1), Pos::new(1, 1)),
            Err(MoveError::SameCell)
        );
        assert_eq!(
            validate_move(&grid, Pos::new(0, 0), Pos::new(0, 2)),
            Err(MoveError::NotAdjacent)
        );
        assert_eq!(validate_move(&grid, Pos::new(0, 0), Pos::new(1, 1)), Ok(()));
        assert_eq!(validate_move(&grid, Pos::new(2, 1), Pos::new(1, 1)), Ok(()));
    }

    #[test]
    fn test_try_swap_restores_on_no_match() {
        let mut grid = Grid::parse("RGB\nGBR\nRGB").unwrap();
        let before = grid.clone();
        assert_eq!(
            try_swap(&mut grid, Pos::new(0, 0), Pos::new(0, 1)),
            Err(MoveError::NoMatch)
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_diagonal_swap_can_match() {
        // Swapping (0,2) with its diagonal neighbor (1,1) completes row 0
        let mut grid = Grid::parse("RRG\nBRB\nGBG").unwrap();
        assert!(try_swap(&mut grid, Pos::new(0, 2), Pos::new(1, 1)).is_ok());
        assert_eq!(grid.get(Pos::new(0, 2)), Some(Token::Red));
    }

    #[test]
    fn test_validate_and_apply_scores_batches() {
        let mut grid = Grid::parse("RRG\nBGR\nGRB").unwrap();
        let mut source = TokenCycle::new(vec![Token::Green, Token::Red, Token::Blue]);
        let mut scorer = Scorer::new();

        let report = validate_and_apply(
            &mut grid,
            &mut source,
            &Resolver::default(),
            &mut scorer,
            Pos::new(0, 2),
            Pos::new(1, 2),
        )
        .unwrap();

        assert_eq!(report.batches, vec![3]);
        assert_eq!(report.score_delta, 3);
        assert_eq!(scorer.score(), 3);
        assert_eq!(grid.to_text(), "GRB\nBGG\nGRB\n");
    }
}
