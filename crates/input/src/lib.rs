//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`PromptKey`]s, parses cell labels such as `B3`, and collects
//! the two cells of a move through [`MovePrompt`].

pub mod label;
pub mod map;
pub mod prompt;

pub use tui_match3_types as types;

pub use label::{format_label, parse_label, row_letter, LabelError};
pub use map::{handle_key_event, should_quit, PromptKey};
pub use prompt::{MovePrompt, PromptEvent, PromptStage};
