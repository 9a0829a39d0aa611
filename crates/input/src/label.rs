//! Cell labels: a row letter followed by a 1-based column number (`B3`).
//!
//! Only the syntax is checked here. Whether the cell is on the board is the
//! engine's call.

pub use crate::types::row_letter;
use crate::types::Pos;

/// Malformed cell label
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    #[error("no cell given")]
    Empty,

    #[error("row must be a letter A-Z")]
    BadRow,

    #[error("column must be a number starting at 1")]
    BadColumn,
}

/// Parse `"B3"` into `Pos { row: 1, col: 2 }` (case-insensitive, surrounding
/// whitespace ignored)
pub fn parse_label(text: &str) -> Result<Pos, LabelError> {
    let text = text.trim();
    let mut chars = text.chars();
    let letter = chars.next().ok_or(LabelError::Empty)?;
    if !letter.is_ascii_alphabetic() {
        return Err(LabelError::BadRow);
    }
    let row = (letter.to_ascii_uppercase() as u8 - b'A') as usize;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LabelError::BadColumn);
    }
    let col: usize = digits.parse().map_err(|_| LabelError::BadColumn)?;
    if col == 0 {
        return Err(LabelError::BadColumn);
    }

    Ok(Pos::new(row, col - 1))
}

/// Inverse of [`parse_label`] for rows within `A..Z`
pub fn format_label(pos: Pos) -> String {
    format!("{}{}", row_letter(pos.row), pos.col + 1)
}
