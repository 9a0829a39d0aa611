//! Status line text for the binary.

use crate::core::SettleReport;
use crate::input::format_label;
use crate::types::Pos;

/// One-line summary of an accepted move, e.g. `A3 <-> B3: +6 (chain x2)`.
///
/// The chain note appears whenever the cascade cleared more than one batch
/// and shows the total number of batches.
pub fn move_summary(a: Pos, b: Pos, report: &SettleReport) -> String {
    let mut text = format!(
        "{} <-> {}: +{}",
        format_label(a),
        format_label(b),
        report.score_delta
    );
    if report.chain_len() > 0 {
        text.push_str(&format!(" (chain x{})", report.batches.len()));
    }
    text
}
