//! Tokenizer for calculator input.
//!
//! Identifiers are read whole, so `log10` is a single token and never
//! a `log` followed by `10`.

use std::fmt;
use std::iter::{Enumerate, Peekable};
use std::str::Chars;

use super::error::SyntaxError;

/// Built-in functions. Trigonometry works in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Ln,
    Log10,
    Sqrt,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Self> {
        use Function::*;
        match name {
            "sin" => Some(Sin),
            "cos" => Some(Cos),
            "tan" => Some(Tan),
            "asin" => Some(Asin),
            "acos" => Some(Acos),
            "atan" => Some(Atan),
            "log" => Some(Ln),
            "log10" => Some(Log10),
            "sqrt" => Some(Sqrt),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        use Function::*;
        match self {
            Sin => "sin",
            Cos => "cos",
            Tan => "tan",
            Asin => "asin",
            Acos => "acos",
            Atan => "atan",
            Ln => "log",
            Log10 => "log10",
            Sqrt => "sqrt",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Function(Function),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Bang,
    LParen,
    RParen,
}

/// A token and the character offset where it starts.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Function(func) => f.write_str(func.name()),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Caret => f.write_str("^"),
            Self::Bang => f.write_str("!"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

/// Split `input` into tokens, skipping whitespace.
pub fn tokenize(input: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut chars = input.chars().enumerate().peekable();
    let mut tokens = Vec::new();

    while let Some(&(pos, c)) = chars.peek() {
        let kind = match c {
            ' ' | '\t' | '\n' | '\r' => {
                chars.next();
                continue;
            }
            '0'..='9' | '.' => consume_number(&mut chars)?,
            'a'..='z' | 'A'..='Z' => consume_identifier(&mut chars)?,
            _ => {
                chars.next();
                match c {
                    '+' => TokenKind::Plus,
                    '-' => TokenKind::Minus,
                    '*' => TokenKind::Star,
                    '/' => TokenKind::Slash,
                    '^' => TokenKind::Caret,
                    '!' => TokenKind::Bang,
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    _ => return Err(SyntaxError::UnexpectedChar { ch: c, pos }),
                }
            }
        };
        tokens.push(Token { kind, pos });
    }

    Ok(tokens)
}

type CharStream<'a> = Peekable<Enumerate<Chars<'a>>>;

// Digits with at most one decimal point; either side of the point may be
// empty but not both. An exponent suffix (`1.5e-7`) is accepted so that
// formatted results can be fed back in.
fn consume_number(chars: &mut CharStream) -> Result<TokenKind, SyntaxError> {
    let start = chars.peek().map_or(0, |&(pos, _)| pos);
    let mut text = String::new();

    while let Some(&(_, c)) = chars.peek() {
        match c {
            '0'..='9' | '.' => text.push(c),
            _ => break,
        }
        chars.next();
    }

    let dots = text.matches('.').count();
    if dots > 1 || text == "." {
        return Err(SyntaxError::InvalidNumber { text, pos: start });
    }

    if let Some(exponent) = exponent_suffix(chars) {
        text.push_str(&exponent);
    }

    text.parse::<f64>()
        .map(TokenKind::Number)
        .map_err(|_| SyntaxError::InvalidNumber { text, pos: start })
}

// Consume `e`, an optional sign and at least one digit. Leaves the stream
// untouched when the suffix is incomplete.
fn exponent_suffix(chars: &mut CharStream) -> Option<String> {
    let mut lookahead = chars.clone();
    let mut suffix = String::new();

    match lookahead.next() {
        Some((_, c @ ('e' | 'E'))) => suffix.push(c),
        _ => return None,
    }
    if let Some(&(_, c @ ('+' | '-'))) = lookahead.peek() {
        suffix.push(c);
        lookahead.next();
    }
    while let Some(&(_, c @ '0'..='9')) = lookahead.peek() {
        suffix.push(c);
        lookahead.next();
    }

    if !suffix.ends_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    *chars = lookahead;
    Some(suffix)
}

fn consume_identifier(chars: &mut CharStream) -> Result<TokenKind, SyntaxError> {
    let start = chars.peek().map_or(0, |&(pos, _)| pos);
    let mut name = String::new();

    while let Some(&(_, c)) = chars.peek() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '_' => name.push(c),
            _ => break,
        }
        chars.next();
    }

    match Function::from_name(&name) {
        Some(func) => Ok(TokenKind::Function(func)),
        None => Err(SyntaxError::UnknownIdentifier { name, pos: start }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_operators_and_numbers() {
        assert_eq!(
            kinds("2 + 3.5*(.5 - 1.)"),
            vec![
                TokenKind::Number(2.0),
                TokenKind::Plus,
                TokenKind::Number(3.5),
                TokenKind::Star,
                TokenKind::LParen,
                TokenKind::Number(0.5),
                TokenKind::Minus,
                TokenKind::Number(1.0),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_log10_is_one_token() {
        assert_eq!(
            kinds("log10(100)+log(1)"),
            vec![
                TokenKind::Function(Function::Log10),
                TokenKind::LParen,
                TokenKind::Number(100.0),
                TokenKind::RParen,
                TokenKind::Plus,
                TokenKind::Function(Function::Ln),
                TokenKind::LParen,
                TokenKind::Number(1.0),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize(" 12 ^ 3").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![1, 4, 6]);
    }

    #[test]
    fn test_exponent_suffix() {
        assert_eq!(
            kinds("1.5e3+2E-2"),
            vec![
                TokenKind::Number(1500.0),
                TokenKind::Plus,
                TokenKind::Number(0.02),
            ]
        );
        // Not an exponent: the `e` is left for the identifier reader.
        assert!(matches!(
            tokenize("2e"),
            Err(SyntaxError::UnknownIdentifier { pos: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_identifier() {
        assert_eq!(
            tokenize("2+foo(1)"),
            Err(SyntaxError::UnknownIdentifier {
                name: "foo".to_string(),
                pos: 2
            })
        );
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        assert!(matches!(
            tokenize("1.2.3"),
            Err(SyntaxError::InvalidNumber { pos: 0, .. })
        ));
        assert!(matches!(
            tokenize("1+."),
            Err(SyntaxError::InvalidNumber { pos: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_stray_characters() {
        assert_eq!(
            tokenize("2;alert(1)"),
            Err(SyntaxError::UnexpectedChar { ch: ';', pos: 1 })
        );
        assert_eq!(
            tokenize("2 % 3"),
            Err(SyntaxError::UnexpectedChar { ch: '%', pos: 2 })
        );
    }
}
