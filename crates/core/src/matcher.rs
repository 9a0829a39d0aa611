//! Match detection
//!
//! A match is a run of at least [`MIN_MATCH_LEN`] identical tokens along one
//! row or column. Runs are found by walking outward from an origin cell in
//! each axis direction until the grid edge or a different (or empty) slot, so
//! corners, edges and interior cells all go through the same code path.

use crate::grid::Grid;
use crate::types::{Direction, Pos, Token, MIN_MATCH_LEN};

/// Cells cleared together: row-major, deduplicated, all holding `token`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    token: Token,
    cells: Vec<Pos>,
}

impl Match {
    pub fn token(&self) -> Token {
        self.token
    }

    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.binary_search(&pos).is_ok()
    }

    pub fn into_cells(self) -> Vec<Pos> {
        self.cells
    }
}

/// Extend from `origin` in `dir` while slots hold `token`.
fn run_from(grid: &Grid, origin: Pos, dir: Direction, token: Token) -> impl Iterator<Item = Pos> + '_ {
    grid.neighbors_in_line(origin, dir)
        .take_while(move |&pos| grid.get(pos) == Some(token))
}

/// Find the horizontal and vertical runs through `pos`.
///
/// Each run of length >= 3 is included; an L/T shape sharing `pos` is merged
/// into one match with the origin counted once. Returns `None` when neither
/// run is long enough or `pos` is empty.
pub fn find_matches_at(grid: &Grid, pos: Pos) -> Option<Match> {
    let token = grid.get(pos)?;
    let mut cells = vec![pos];

    for (back, fwd) in [
        (Direction::Left, Direction::Right),
        (Direction::Up, Direction::Down),
    ] {
        let before = cells.len();
        cells.extend(run_from(grid, pos, back, token));
        cells.extend(run_from(grid, pos, fwd, token));
        // +1 for the origin itself
        if cells.len() - before + 1 < MIN_MATCH_LEN {
            cells.truncate(before);
        }
    }

    if cells.len() < MIN_MATCH_LEN {
        return None;
    }

    cells.sort_unstable();
    cells.dedup();
    Some(Match { token, cells })
}

/// Every matched cell on the grid, row-major and deduplicated.
///
/// Each cell is used as a detection origin once; cells shared by overlapping
/// matches appear once in the result.
pub fn find_all_matches(grid: &Grid) -> Vec<Pos> {
    let width = grid.width();
    let mut marked = vec![false; grid.height() * width];

    for pos in grid.positions() {
        if let Some(m) = find_matches_at(grid, pos) {
            for cell in m.cells() {
                marked[cell.row * width + cell.col] = true;
            }
        }
    }

    marked
        .iter()
        .enumerate()
        .filter(|(_, &hit)| hit)
        .map(|(i, _)| Pos::new(i / width, i % width))
        .collect()
}

/// Whether any match exists anywhere on the grid
pub fn has_match(grid: &Grid) -> bool {
    grid.positions().any(|pos| find_matches_at(grid, pos).is_some())
}
