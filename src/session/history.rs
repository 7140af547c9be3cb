//! Submitted calculations.

use crate::calculator::CalcResult;

/// A committed calculation in the history list.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    /// The expression as the user submitted it.
    pub expression: String,
    /// The result formatted for display.
    pub display_result: String,
    /// The result formatted for clipboard (raw number).
    pub clipboard_result: String,
    /// The numeric value.
    pub value: f64,
}

impl HistoryEntry {
    /// Create a history entry from a successful CalcResult.
    /// Errors are never recorded, so they yield `None`.
    pub fn from_calc_result(result: CalcResult) -> Option<Self> {
        match result {
            CalcResult::Success {
                expression,
                value,
                display_result,
                clipboard_result,
            } => Some(Self {
                expression,
                display_result,
                clipboard_result,
                value,
            }),
            CalcResult::Error { .. } => None,
        }
    }

    /// Get the text to copy to clipboard.
    pub fn text_for_clipboard(&self) -> &str {
        &self.clipboard_result
    }
}

/// Append-only list of calculations, oldest first.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
