//! Expression evaluation.
//!
//! Walks the tree produced by the parser with `f64` arithmetic and wraps the
//! outcome for display. Every intermediate value is checked, so a success
//! always carries a finite number.

use super::error::{CalcError, CalcOutcome, DomainError, ErrorKind};
use super::format::{NumberFormat, format_clipboard, format_display};
use super::lexer::Function;
use super::parser::{BinaryOp, Expr, parse};

/// Result of evaluating a calculator expression, ready for display.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcResult {
    /// Successful calculation with a finite numeric result.
    Success {
        /// The original expression.
        expression: String,
        /// The numeric value.
        value: f64,
        /// Formatted for display.
        display_result: String,
        /// Formatted for clipboard (raw number, parses back exactly).
        clipboard_result: String,
    },
    /// The expression could not be evaluated.
    Error {
        /// The original expression.
        expression: String,
        /// Whether the input was malformed or mathematically undefined.
        kind: ErrorKind,
        /// Error message to display.
        message: String,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the numeric value (only for successful results).
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }

    /// Get the clipboard string (only for successful results).
    pub fn clipboard(&self) -> Option<&str> {
        match self {
            Self::Success {
                clipboard_result, ..
            } => Some(clipboard_result),
            Self::Error { .. } => None,
        }
    }

    /// Get the error classification (only for failed results).
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Error { kind, .. } => Some(*kind),
        }
    }
}

/// Evaluate an expression to a finite number.
///
/// This never panics on user input: malformed text is a
/// [`CalcError::Syntax`], undefined mathematics a [`CalcError::Domain`].
pub fn evaluate(input: &str) -> CalcOutcome<f64> {
    let tree = parse(input)?;
    eval(&tree)
}

/// Evaluate an expression and format the outcome.
pub fn evaluate_expression(input: &str, format: &NumberFormat) -> CalcResult {
    let expression = input.trim().to_string();

    match evaluate(&expression) {
        Ok(value) => CalcResult::Success {
            display_result: format_display(value, format),
            clipboard_result: format_clipboard(value),
            expression,
            value,
        },
        Err(err) => CalcResult::Error {
            expression,
            kind: err.kind(),
            message: err.to_string(),
        },
    }
}

/// Factorial of `n`, truncated toward zero first.
pub fn factorial(n: f64) -> CalcOutcome<f64> {
    if n.is_nan() {
        return Err(DomainError::NotANumber.into());
    }
    let n = n.trunc();
    if n < 0.0 {
        return Err(DomainError::NegativeFactorial.into());
    }
    // 171! no longer fits in an f64
    if n > 170.0 {
        return Err(DomainError::Overflow.into());
    }

    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        i += 1.0;
    }
    Ok(result)
}

fn eval(expr: &Expr) -> CalcOutcome<f64> {
    let value = match expr {
        Expr::Number(n) => *n,
        Expr::Factorial(n) => factorial(*n)?,
        Expr::Neg(operand) => -eval(operand)?,
        Expr::Binary(op, left, right) => binary(*op, eval(left)?, eval(right)?)?,
        Expr::Call(func, argument) => call(*func, eval(argument)?)?,
    };
    finite(value)
}

fn binary(op: BinaryOp, left: f64, right: f64) -> CalcOutcome<f64> {
    Ok(match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => {
            if right == 0.0 {
                return Err(DomainError::DivisionByZero.into());
            }
            left / right
        }
        BinaryOp::Pow => {
            if left == 0.0 && right < 0.0 {
                return Err(DomainError::DivisionByZero.into());
            }
            left.powf(right)
        }
    })
}

fn call(func: Function, x: f64) -> CalcOutcome<f64> {
    use Function::*;
    Ok(match func {
        Sin => x.to_radians().sin(),
        Cos => x.to_radians().cos(),
        Tan => x.to_radians().tan(),
        Asin | Acos => {
            if !(-1.0..=1.0).contains(&x) {
                return Err(DomainError::InverseTrigRange {
                    function: func.name(),
                }
                .into());
            }
            if func == Asin {
                x.asin().to_degrees()
            } else {
                x.acos().to_degrees()
            }
        }
        Atan => x.atan().to_degrees(),
        Ln | Log10 => {
            if x <= 0.0 {
                return Err(DomainError::LogNonPositive.into());
            }
            if func == Ln { x.ln() } else { x.log10() }
        }
        Sqrt => {
            if x < 0.0 {
                return Err(DomainError::SqrtNegative.into());
            }
            x.sqrt()
        }
    })
}

fn finite(value: f64) -> CalcOutcome<f64> {
    if value.is_nan() {
        Err(CalcError::Domain(DomainError::NotANumber))
    } else if value.is_infinite() {
        Err(CalcError::Domain(DomainError::Overflow))
    } else {
        Ok(value)
    }
}
