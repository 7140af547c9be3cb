//! Keystroke filtering for the live preview.
//!
//! The preview evaluates whatever has been typed. The checks here only skip
//! evaluation of input that cannot succeed, so they never hide a result.

use lazy_static::lazy_static;
use regex::Regex;

/// Function names understood by the evaluator.
pub const MATH_FUNCTIONS: &[&str] = &[
    "sin", "cos", "tan", "asin", "acos", "atan", "log", "log10", "sqrt",
];

/// Non-letter characters of the grammar.
const GRAMMAR_SYMBOLS: &str = "0123456789+-*/().^!";

lazy_static! {
    /// Characters the lexer can turn into tokens. Identifiers are lowercase;
    /// `E` can only appear as an exponent marker (`1E5`).
    static ref GRAMMAR_CHARS: Regex = Regex::new(
        r"^[0-9 \t\r\n.+\-*/^!()a-zE]+$"
    ).unwrap();

    /// An operator, sign or `(` at the end still waits for its operand.
    static ref AWAITS_OPERAND: Regex = Regex::new(
        r"[+\-*/^(][ \t\r\n]*$"
    ).unwrap();
}

/// Cheap pre-check run before the live preview evaluates `input`.
///
/// Returns `false` only when evaluation is certain to fail: blank input,
/// characters no token starts with, or a trailing operator. Everything else,
/// plain numbers included, goes to the evaluator.
pub fn worth_evaluating(input: &str) -> bool {
    if input.trim().is_empty() {
        return false;
    }
    GRAMMAR_CHARS.is_match(input) && !AWAITS_OPERAND.is_match(input)
}

/// Check if a typed character belongs in the expression buffer.
///
/// Letters are limited to those spelling a function name, plus `e`/`E`
/// for exponents.
pub fn is_input_char(c: char) -> bool {
    if GRAMMAR_SYMBOLS.contains(c) || matches!(c, ' ' | 'e' | 'E') {
        return true;
    }
    c.is_ascii_lowercase() && MATH_FUNCTIONS.iter().any(|name| name.contains(c))
}
