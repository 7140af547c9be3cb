//! Error types produced while evaluating an expression.

use thiserror::Error;

/// Broad classification of an evaluation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The input could not be parsed.
    Syntax,
    /// The input parsed but is mathematically undefined.
    Domain,
}

/// The input is not a well-formed expression.
///
/// Positions are character offsets into the original input.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SyntaxError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("malformed number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unknown identifier '{name}' at position {pos}")]
    UnknownIdentifier { name: String, pos: usize },

    #[error("function '{name}' must be followed by '('")]
    MissingCallParen { name: String },

    #[error("unexpected '{found}' at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unclosed '(' at position {pos}")]
    UnclosedParen { pos: usize },

    #[error("unmatched ')' at position {pos}")]
    UnmatchedParen { pos: usize },

    #[error("'!' at position {pos} must follow a whole number")]
    FactorialOperand { pos: usize },

    #[error("expression nested too deeply at position {pos}")]
    TooDeep { pos: usize },
}

/// The expression is well-formed but has no finite real value.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DomainError {
    #[error("factorial of a negative number")]
    NegativeFactorial,

    #[error("square root of a negative number")]
    SqrtNegative,

    #[error("logarithm of a non-positive number")]
    LogNonPositive,

    #[error("division by zero")]
    DivisionByZero,

    #[error("{function} argument outside [-1, 1]")]
    InverseTrigRange { function: &'static str },

    #[error("result is not a real number")]
    NotANumber,

    #[error("result is too large")]
    Overflow,
}

/// Any failure returned by [`evaluate`](super::evaluate).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CalcError {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("math error: {0}")]
    Domain(#[from] DomainError),
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Domain(_) => ErrorKind::Domain,
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

pub type CalcOutcome<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let syntax: CalcError = SyntaxError::Empty.into();
        let domain: CalcError = DomainError::DivisionByZero.into();
        assert_eq!(syntax.kind(), ErrorKind::Syntax);
        assert_eq!(domain.kind(), ErrorKind::Domain);
        assert!(syntax.is_syntax());
        assert!(domain.is_domain());
    }

    #[test]
    fn test_messages() {
        let err: CalcError = SyntaxError::UnclosedParen { pos: 3 }.into();
        assert_eq!(err.to_string(), "syntax error: unclosed '(' at position 3");
        let err: CalcError = DomainError::InverseTrigRange { function: "asin" }.into();
        assert_eq!(err.to_string(), "math error: asin argument outside [-1, 1]");
    }
}
