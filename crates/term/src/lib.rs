//! Terminal rendering for the match-3 board.
//!
//! Rendering goes through a plain framebuffer instead of a widget toolkit:
//! [`GameView`] turns a [`core::GameSnapshot`] into glyphs, and
//! [`TerminalRenderer`] flushes those glyphs to the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_match3_core as core;
pub use tui_match3_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{AnchorY, GameView, HudView, StatusKind, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
