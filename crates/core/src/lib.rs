//! Core engine module - pure, deterministic, and testable
//!
//! This crate contains the tile-matching rules: the grid, match detection,
//! cascade resolution, scoring and move validation. It has **no dependencies**
//! on rendering, terminal input or I/O, making it:
//!
//! - **Deterministic**: same seed, same boards and refills
//! - **Testable**: token sources are injectable, so cascades can be scripted
//! - **Portable**: runs headless, in a terminal, or behind any other frontend
//!
//! # Module Structure
//!
//! - [`grid`]: `height x width` board with bounds-checked access and line walks
//! - [`matcher`]: detection of runs of three or more identical tokens
//! - [`resolver`]: the clear -> gravity -> refill -> rescan settle cycle
//! - [`scoring`]: per-batch reward curve and running score
//! - [`validator`]: move checks, swap-and-undo, and move application
//! - [`session`]: one game's owned state and the public entry points
//! - [`rng`]: seeded token sources
//! - [`snapshot`]: read-only copies for renderers
//! - [`config`]: session configuration from the environment
//!
//! # Game Rules
//!
//! - **Moves**: swap two neighboring cells (diagonals included); the swap must
//!   form a match at one of the two cells or it is undone
//! - **Matches**: runs of 3+ along a row or column; an L or T through one cell
//!   counts as one match
//! - **Cascades**: after clearing, tokens fall, new tokens drop in from the
//!   top, and any new matches clear as the next batch
//! - **Scoring**: each batch is scored on its own (3 -> 3, 4 -> 5, 5 -> 7, 6 -> 12)
//!
//! # Example
//!
//! ```
//! use tui_match3_core::{new_session, MoveError, Pos};
//!
//! let mut session = new_session(8, 8, Some(12345)).unwrap();
//! assert_eq!(session.score(), 0);
//!
//! // Cells two apart are never a legal move
//! let err = session.attempt_move(Pos::new(0, 0), Pos::new(2, 2)).unwrap_err();
//! assert_eq!(err, MoveError::NotAdjacent);
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod matcher;
pub mod resolver;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod validator;

pub use tui_match3_types as types;

// Re-export commonly used types for convenience
pub use config::SessionConfig;
pub use error::{CascadeOverflow, GridParseError, MoveError, SessionError};
pub use grid::{Grid, LineIter};
pub use matcher::{find_all_matches, find_matches_at, has_match, Match};
pub use resolver::{apply_gravity, clear_cells, refill, Resolver, SettleState};
pub use rng::{SimpleRng, TokenCycle, TokenSource};
pub use scoring::{batch_points, Scorer};
pub use session::{new_session, Session};
pub use snapshot::{BoardSnapshot, GameSnapshot};
pub use types::{Direction, Pos, Token};
pub use validator::{try_swap, validate_and_apply, validate_move, SettleReport};
