//! Calculator session state.
//!
//! Holds everything the front end displays: the input buffer, the live
//! preview, the history list and the active theme. The evaluator itself
//! stays pure; this is the only place that keeps mutable state.

mod history;

pub use history::{History, HistoryEntry};

use crate::calculator::{
    CalcResult, NumberFormat, evaluate_expression, is_input_char, worth_evaluating,
};
use crate::ui::theme::ThemeMode;

/// Shown in the input after a failed submission.
pub const ERROR_INDICATOR: &str = "Error";

#[derive(Clone, Debug, Default)]
pub struct Session {
    input: String,
    preview: Option<String>,
    history: History,
    theme: ThemeMode,
    format: NumberFormat,
}

impl Session {
    pub fn new(theme: ThemeMode, format: NumberFormat) -> Self {
        Self {
            theme,
            format,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The live preview of the current input, if it evaluates.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Type a character. Characters outside the calculator set are ignored.
    pub fn insert_char(&mut self, c: char) -> bool {
        if !is_input_char(c) {
            return false;
        }
        self.start_editing();
        self.input.push(c);
        self.live_preview();
        true
    }

    /// Append text, dropping characters outside the calculator set.
    pub fn insert_str(&mut self, text: &str) {
        self.start_editing();
        self.input.extend(text.chars().filter(|&c| is_input_char(c)));
        self.live_preview();
    }

    /// Append an operator-led continuation, such as `^2`, unfiltered.
    ///
    /// A negative input is parenthesised first, so the continuation applies
    /// to the whole value: `-4` continued with `^2` becomes `(-4)^2`.
    pub fn continue_with(&mut self, text: &str) {
        self.start_editing();
        if self.input.trim_start().starts_with('-') {
            self.input = format!("({})", self.input.trim());
        }
        self.input.push_str(text);
        self.live_preview();
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        self.live_preview();
    }

    /// Replace the whole input.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.live_preview();
    }

    /// Clear input, preview and history.
    pub fn clear(&mut self) {
        self.input.clear();
        self.preview = None;
        self.history.clear();
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Re-evaluate the input for the preview. Every success is shown;
    /// failures clear it silently.
    pub fn live_preview(&mut self) -> Option<&str> {
        self.preview = None;
        if !worth_evaluating(&self.input) {
            return None;
        }

        match evaluate_expression(&self.input, &self.format) {
            CalcResult::Success { display_result, .. } => {
                self.preview = Some(display_result);
            }
            CalcResult::Error { message, .. } => {
                tracing::trace!(input = %self.input, %message, "preview suppressed");
            }
        }
        self.preview.as_deref()
    }

    /// Commit the input.
    ///
    /// On success the calculation is recorded and the input becomes the
    /// result; on failure the input becomes [`ERROR_INDICATOR`].
    pub fn submit(&mut self) -> CalcResult {
        let result = evaluate_expression(&self.input, &self.format);
        self.preview = None;

        match HistoryEntry::from_calc_result(result.clone()) {
            Some(entry) => {
                tracing::debug!(
                    expression = %entry.expression,
                    result = %entry.display_result,
                    "submitted"
                );
                self.input = entry.clipboard_result.clone();
                self.history.push(entry);
            }
            None => {
                tracing::debug!(
                    expression = %result.expression(),
                    error = %result.display(),
                    "submission failed"
                );
                self.input = ERROR_INDICATOR.to_string();
            }
        }

        result
    }

    /// Load a recorded expression back into the input.
    ///
    /// Returns the expression, or `None` if there is no such entry.
    pub fn replay(&mut self, index: usize) -> Option<String> {
        let expression = self.history.get(index)?.expression.clone();
        tracing::debug!(index, %expression, "replaying history entry");
        self.set_input(&expression);
        Some(expression)
    }

    // Typing over an error starts a fresh expression.
    fn start_editing(&mut self) {
        if self.input == ERROR_INDICATOR {
            self.input.clear();
        }
    }
}
