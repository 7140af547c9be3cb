//! Calculator rendering.
//!
//! Turns session state into styled terminal lines. Nothing here evaluates;
//! it only formats what the session already holds.

use crate::calculator::CalcResult;
use crate::session::{History, HistoryEntry};

use super::theme::CalcTheme;

/// Render the live preview line: the result with "= " prefix, muted.
pub fn render_preview(preview: &str, theme: &CalcTheme) -> String {
    CalcTheme::paint(theme.preview, &format!("= {preview}"))
}

/// Render the outcome of a submission.
///
/// Successes show `expression = result`, errors show the message in the
/// error color.
pub fn render_submission(result: &CalcResult, theme: &CalcTheme) -> String {
    match result {
        CalcResult::Success {
            expression,
            display_result,
            ..
        } => format!(
            "{} {}",
            CalcTheme::paint(theme.expression, expression),
            CalcTheme::paint(theme.result, &format!("= {display_result}"))
        ),
        CalcResult::Error { message, .. } => CalcTheme::paint(theme.error, message),
    }
}

/// Render one history row, numbered from 1.
pub fn render_history_entry(index: usize, entry: &HistoryEntry, theme: &CalcTheme) -> String {
    format!(
        "{} {} {}",
        CalcTheme::paint(theme.accent, &format!("[{}]", index + 1)),
        CalcTheme::paint(theme.expression, &entry.expression),
        CalcTheme::paint(theme.result, &format!("= {}", entry.display_result))
    )
}

/// Render the whole history list, oldest first.
pub fn render_history(history: &History, theme: &CalcTheme) -> Vec<String> {
    if history.is_empty() {
        return vec![CalcTheme::paint(theme.preview, "(history is empty)")];
    }
    history
        .iter()
        .enumerate()
        .map(|(i, entry)| render_history_entry(i, entry, theme))
        .collect()
}
