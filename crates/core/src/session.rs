//! Session - owns one game from first board to last move
//!
//! A session ties together the grid, the token source, the resolver and the
//! scorer. Construction fills and stabilizes the board (any points from that
//! initial settle are discarded), so the player never starts with a match on
//! the board.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::info;

use crate::config::{validate_dimensions, SessionConfig};
use crate::error::{MoveError, SessionError};
use crate::grid::Grid;
use crate::resolver::Resolver;
use crate::rng::{SimpleRng, TokenSource};
use crate::scoring::Scorer;
use crate::snapshot::{BoardSnapshot, GameSnapshot};
use crate::types::Pos;
use crate::validator::{validate_and_apply, SettleReport};

/// Create a seeded session with a freshly stabilized board
///
/// `seed: None` derives a seed from the system clock.
pub fn new_session(
    height: usize,
    width: usize,
    seed: Option<u32>,
) -> Result<Session<SimpleRng>, SessionError> {
    Session::from_config(&SessionConfig {
        height,
        width,
        seed,
        ..SessionConfig::default()
    })
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

/// One game: board, score and token source
#[derive(Debug, Clone)]
pub struct Session<S: TokenSource = SimpleRng> {
    grid: Grid,
    source: S,
    resolver: Resolver,
    scorer: Scorer,
    moves: u32,
    seed: Option<u32>,
    last_report: Option<SettleReport>,
}

impl Session<SimpleRng> {
    /// Build a session from configuration, seeding a [`SimpleRng`]
    pub fn from_config(config: &SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(clock_seed);
        let mut rng = SimpleRng::new(seed);
        let grid = Grid::filled(config.height, config.width, &mut rng);

        let mut session = Self::build(grid, rng, Resolver::new(config.max_settle_passes))?;
        session.seed = Some(seed);
        info!(
            height = config.height,
            width = config.width,
            seed,
            "session started"
        );
        Ok(session)
    }
}

impl<S: TokenSource> Session<S> {
    /// Random board of the given size drawn from `source`
    pub fn with_source(height: usize, width: usize, mut source: S) -> Result<Self, SessionError> {
        validate_dimensions(height, width)?;
        let grid = Grid::filled(height, width, &mut source);
        Self::build(grid, source, Resolver::default())
    }

    /// Start from a given board; it is stabilized before play
    pub fn with_grid(grid: Grid, source: S) -> Result<Self, SessionError> {
        Self::build(grid, source, Resolver::default())
    }

    /// Start from a given board with a custom resolver
    pub fn build(mut grid: Grid, mut source: S, resolver: Resolver) -> Result<Self, SessionError> {
        validate_dimensions(grid.height(), grid.width())?;
        // Fill any gaps left by the caller before the first scan.
        crate::resolver::refill(&mut grid, &mut source);
        resolver.settle(&mut grid, &mut source, |_| {})?;

        Ok(Self {
            grid,
            source,
            resolver,
            scorer: Scorer::new(),
            moves: 0,
            seed: None,
            last_report: None,
        })
    }

    /// Validate and play a move, settling the whole cascade.
    ///
    /// On any error the board is unchanged.
    pub fn attempt_move(&mut self, a: Pos, b: Pos) -> Result<SettleReport, MoveError> {
        let report = validate_and_apply(
            &mut self.grid,
            &mut self.source,
            &self.resolver,
            &mut self.scorer,
            a,
            b,
        )?;
        self.moves += 1;
        self.last_report = Some(report.clone());
        Ok(report)
    }

    pub fn board_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::of(&self.grid)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board_snapshot(),
            score: self.score(),
            moves: self.moves,
            seed: self.seed,
            last_report: self.last_report.clone(),
        }
    }

    pub fn score(&self) -> u32 {
        self.scorer.score()
    }

    /// Number of accepted moves
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Seed used for the board, when the session owns a [`SimpleRng`]
    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    pub fn last_report(&self) -> Option<&SettleReport> {
        self.last_report.as_ref()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }
}
