//! Two-cell move prompt.
//!
//! The player types a label for the first cell, submits it, then types and
//! submits the second. Typed text lives in a fixed-capacity buffer, so key
//! handling never allocates.

use arrayvec::ArrayString;

use crate::label::{parse_label, LabelError};
use crate::map::PromptKey;
use crate::types::Pos;

/// Longest label: one letter plus two digits, with a spare slot
const LABEL_CAPACITY: usize = 4;

/// Which cell the prompt is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStage {
    First,
    Second(Pos),
}

/// Result of feeding one key to the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptEvent {
    /// Nothing to do yet
    Pending,
    /// Both cells entered
    Move(Pos, Pos),
    /// A label was malformed; the prompt restarts at the first cell
    Invalid {
        message: &'static str,
        reason: LabelError,
    },
}

#[derive(Debug, Clone)]
pub struct MovePrompt {
    buffer: ArrayString<LABEL_CAPACITY>,
    stage: PromptStage,
}

impl Default for MovePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePrompt {
    pub fn new() -> Self {
        Self {
            buffer: ArrayString::new(),
            stage: PromptStage::First,
        }
    }

    pub fn stage(&self) -> PromptStage {
        self.stage
    }

    /// Text typed so far for the current cell
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Question shown to the player for the current stage
    pub fn question(&self) -> &'static str {
        match self.stage {
            PromptStage::First => "First cell to switch: ",
            PromptStage::Second(_) => "Second cell to switch: ",
        }
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.stage = PromptStage::First;
    }

    pub fn handle(&mut self, key: PromptKey) -> PromptEvent {
        match key {
            PromptKey::Char(c) => {
                // Overlong input is dropped; parse_label reports it on submit.
                let _ = self.buffer.try_push(c);
                PromptEvent::Pending
            }
            PromptKey::Backspace => {
                self.buffer.pop();
                PromptEvent::Pending
            }
            PromptKey::Cancel => {
                self.reset();
                PromptEvent::Pending
            }
            PromptKey::Submit => self.submit(),
            PromptKey::Restart | PromptKey::Quit => PromptEvent::Pending,
        }
    }

    fn submit(&mut self) -> PromptEvent {
        let parsed = parse_label(&self.buffer);
        self.buffer.clear();

        match (self.stage, parsed) {
            (PromptStage::First, Ok(first)) => {
                self.stage = PromptStage::Second(first);
                PromptEvent::Pending
            }
            (PromptStage::Second(first), Ok(second)) => {
                self.stage = PromptStage::First;
                PromptEvent::Move(first, second)
            }
            (stage, Err(reason)) => {
                self.stage = PromptStage::First;
                let message = match stage {
                    PromptStage::First => "Invalid first cell coordinate!",
                    PromptStage::Second(_) => "Invalid second cell coordinate!",
                };
                PromptEvent::Invalid { message, reason }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(prompt: &mut MovePrompt, s: &str) -> PromptEvent {
        let mut last = PromptEvent::Pending;
        for c in s.chars() {
            last = prompt.handle(PromptKey::Char(c));
        }
        last
    }

    #[test]
    fn test_full_move_entry() {
        let mut prompt = MovePrompt::new();
        type_str(&mut prompt, "a1");
        assert_eq!(prompt.text(), "a1");
        assert_eq!(prompt.handle(PromptKey::Submit), PromptEvent::Pending);
        assert_eq!(prompt.stage(), PromptStage::Second(Pos::new(0, 0)));
        assert_eq!(prompt.text(), "");

        type_str(&mut prompt, "B1");
        assert_eq!(
            prompt.handle(PromptKey::Submit),
            PromptEvent::Move(Pos::new(0, 0), Pos::new(1, 0))
        );
        assert_eq!(prompt.stage(), PromptStage::First);
    }

    #[test]
    fn test_backspace_edits_buffer() {
        let mut prompt = MovePrompt::new();
        type_str(&mut prompt, "C4");
        prompt.handle(PromptKey::Backspace);
        type_str(&mut prompt, "5");
        prompt.handle(PromptKey::Submit);
        assert_eq!(prompt.stage(), PromptStage::Second(Pos::new(2, 4)));
    }

    #[test]
    fn test_invalid_second_restarts_move() {
        let mut prompt = MovePrompt::new();
        type_str(&mut prompt, "A1");
        prompt.handle(PromptKey::Submit);
        type_str(&mut prompt, "7");
        assert_eq!(
            prompt.handle(PromptKey::Submit),
            PromptEvent::Invalid {
                message: "Invalid second cell coordinate!",
                reason: LabelError::BadRow
            }
        );
        assert_eq!(prompt.stage(), PromptStage::First);
        assert_eq!(prompt.question(), "First cell to switch: ");
    }

    #[test]
    fn test_empty_submit_is_invalid() {
        let mut prompt = MovePrompt::new();
        assert_eq!(
            prompt.handle(PromptKey::Submit),
            PromptEvent::Invalid {
                message: "Invalid first cell coordinate!",
                reason: LabelError::Empty
            }
        );
    }

    #[test]
    fn test_overlong_input_is_truncated() {
        let mut prompt = MovePrompt::new();
        type_str(&mut prompt, "A12345");
        assert_eq!(prompt.text(), "A123");
    }

    #[test]
    fn test_cancel_clears_half_move() {
        let mut prompt = MovePrompt::new();
        type_str(&mut prompt, "D2");
        prompt.handle(PromptKey::Submit);
        type_str(&mut prompt, "D");
        prompt.handle(PromptKey::Cancel);
        assert_eq!(prompt.stage(), PromptStage::First);
        assert_eq!(prompt.text(), "");
    }
}
