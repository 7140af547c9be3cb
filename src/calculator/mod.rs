//! Calculator module for evaluating scientific expressions.
//!
//! This module provides functionality to:
//! - Tokenize and parse expressions into a tree (no dynamic evaluation)
//! - Evaluate the tree with trigonometry in degrees, logarithms, roots,
//!   exponentiation and factorials
//! - Format results for display and the clipboard
//! - Detect whether input is worth a live preview

mod clipboard;
mod detection;
mod error;
mod evaluation;
mod format;
mod lexer;
mod parser;

pub use clipboard::copy_to_clipboard;
pub use detection::{MATH_FUNCTIONS, is_input_char, worth_evaluating};
pub use error::{CalcError, CalcOutcome, DomainError, ErrorKind, SyntaxError};
pub use evaluation::{CalcResult, evaluate, evaluate_expression, factorial};
pub use format::{NumberFormat, format_clipboard, format_display};
pub use lexer::Function;
pub use parser::{BinaryOp, Expr, parse};
