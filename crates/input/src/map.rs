//! Key mapping from terminal events to prompt keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means to the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKey {
    /// Printable character for the label being typed
    Char(char),
    Backspace,
    /// Submit the current label
    Submit,
    /// Drop the typed text and any half-entered move
    Cancel,
    /// Start a new game
    Restart,
    Quit,
}

/// Map keyboard input to prompt keys.
pub fn handle_key_event(key: KeyEvent) -> Option<PromptKey> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('q') | KeyCode::Char('Q') => {
                Some(PromptKey::Quit)
            }
            KeyCode::Char('r') | KeyCode::Char('R') => Some(PromptKey::Restart),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii_alphanumeric() => Some(PromptKey::Char(c)),
        KeyCode::Backspace | KeyCode::Delete => Some(PromptKey::Backspace),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Tab => Some(PromptKey::Submit),
        KeyCode::Esc => Some(PromptKey::Cancel),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    handle_key_event(key) == Some(PromptKey::Quit)
}
