//! Recursive-descent parser producing an expression tree.
//!
//! Precedence, loosest first:
//! - `+` `-` (left associative)
//! - `*` `/` (left associative)
//! - unary `-` `+`
//! - `^` (right associative, exponent may carry a sign)
//! - `!` on a whole-number literal
//! - numbers, parenthesised groups, function calls

use super::error::SyntaxError;
use super::lexer::{Function, Token, TokenKind, tokenize};

/// Deepest nesting of parentheses, calls and signs accepted.
const MAX_DEPTH: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Number(f64),
    /// Factorial of a literal, resolved before any surrounding operator.
    Factorial(f64),
    Neg(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Call(Function, Box<Expr>),
}

impl Expr {
    fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Self::Binary(op, Box::new(left), Box::new(right))
    }
}

/// Parse a complete expression.
pub fn parse(input: &str) -> Result<Expr, SyntaxError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(SyntaxError::Empty);
    }

    let mut parser = Parser {
        tokens,
        next: 0,
        depth: 0,
    };
    let expr = parser.expression()?;

    match parser.peek() {
        None => Ok(expr),
        Some(Token {
            kind: TokenKind::RParen,
            pos,
        }) => Err(SyntaxError::UnmatchedParen { pos: *pos }),
        Some(token) => Err(unexpected(token)),
    }
}

struct Parser {
    tokens: Vec<Token>,
    next: usize,
    depth: usize,
}

fn unexpected(token: &Token) -> SyntaxError {
    SyntaxError::UnexpectedToken {
        found: token.kind.to_string(),
        pos: token.pos,
    }
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.next)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.next).cloned();
        if token.is_some() {
            self.next += 1;
        }
        token
    }

    fn descend(&mut self, pos: usize) -> Result<(), SyntaxError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(SyntaxError::TooDeep { pos });
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn expression(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.term()?;

        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Plus) => BinaryOp::Add,
                Some(TokenKind::Minus) => BinaryOp::Sub,
                _ => return Ok(left),
            };
            self.advance();
            let right = self.term()?;
            left = Expr::binary(op, left, right);
        }
    }

    fn term(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.unary()?;

        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Star) => BinaryOp::Mul,
                Some(TokenKind::Slash) => BinaryOp::Div,
                _ => return Ok(left),
            };
            self.advance();
            let right = self.unary()?;
            left = Expr::binary(op, left, right);
        }
    }

    fn unary(&mut self) -> Result<Expr, SyntaxError> {
        let (negate, pos) = match self.peek() {
            Some(Token {
                kind: TokenKind::Minus,
                pos,
            }) => (true, *pos),
            Some(Token {
                kind: TokenKind::Plus,
                pos,
            }) => (false, *pos),
            _ => return self.power(),
        };
        self.advance();

        // `-1!` takes the factorial of -1, as the sign sits directly on the digits.
        let signed_literal = matches!(self.peek_kind(), Some(TokenKind::Number(_)));

        self.descend(pos)?;
        let operand = self.unary()?;
        self.ascend();

        Ok(match (negate, operand) {
            (false, operand) => operand,
            (true, Expr::Factorial(n)) if signed_literal => Expr::Factorial(-n),
            (true, operand) => Expr::Neg(Box::new(operand)),
        })
    }

    fn power(&mut self) -> Result<Expr, SyntaxError> {
        let base = self.postfix()?;

        let pos = match self.peek() {
            Some(Token {
                kind: TokenKind::Caret,
                pos,
            }) => *pos,
            _ => return Ok(base),
        };
        self.advance();

        self.descend(pos)?;
        let exponent = self.unary()?;
        self.ascend();

        Ok(Expr::binary(BinaryOp::Pow, base, exponent))
    }

    fn postfix(&mut self) -> Result<Expr, SyntaxError> {
        let operand = match self.peek_kind() {
            Some(&TokenKind::Number(n)) => {
                self.advance();
                let bang = match self.peek() {
                    Some(Token {
                        kind: TokenKind::Bang,
                        pos,
                    }) => Some(*pos),
                    _ => None,
                };
                match bang {
                    // `4.9!` has no single digit run to apply `!` to
                    Some(pos) if n.fract() != 0.0 => {
                        return Err(SyntaxError::FactorialOperand { pos });
                    }
                    Some(_) => {
                        self.advance();
                        Expr::Factorial(n)
                    }
                    None => Expr::Number(n),
                }
            }
            _ => self.primary()?,
        };

        match self.peek() {
            Some(Token {
                kind: TokenKind::Bang,
                pos,
            }) => Err(SyntaxError::FactorialOperand { pos: *pos }),
            _ => Ok(operand),
        }
    }

    fn primary(&mut self) -> Result<Expr, SyntaxError> {
        let token = self.advance().ok_or(SyntaxError::UnexpectedEnd)?;

        match token.kind {
            TokenKind::Number(n) => Ok(Expr::Number(n)),
            TokenKind::LParen => self.group(token.pos),
            TokenKind::Function(func) => {
                match self.peek() {
                    Some(Token {
                        kind: TokenKind::LParen,
                        pos,
                    }) => {
                        let open = *pos;
                        self.advance();
                        let argument = self.group(open)?;
                        Ok(Expr::Call(func, Box::new(argument)))
                    }
                    _ => Err(SyntaxError::MissingCallParen {
                        name: func.name().to_string(),
                    }),
                }
            }
            TokenKind::Bang => Err(SyntaxError::FactorialOperand { pos: token.pos }),
            _ => Err(unexpected(&token)),
        }
    }

    // Parse up to and including the `)` matching the `(` at `open`.
    fn group(&mut self, open: usize) -> Result<Expr, SyntaxError> {
        self.descend(open)?;
        let inner = self.expression()?;
        self.ascend();

        match self.advance() {
            Some(Token {
                kind: TokenKind::RParen,
                ..
            }) => Ok(inner),
            Some(token) => Err(unexpected(&token)),
            None => Err(SyntaxError::UnclosedParen { pos: open }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Box<Expr> {
        Box::new(Expr::Number(n))
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        assert_eq!(
            parse("2+3*4").unwrap(),
            Expr::Binary(
                BinaryOp::Add,
                num(2.0),
                Box::new(Expr::Binary(BinaryOp::Mul, num(3.0), num(4.0)))
            )
        );
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        assert_eq!(
            parse("8-4-2").unwrap(),
            Expr::Binary(
                BinaryOp::Sub,
                Box::new(Expr::Binary(BinaryOp::Sub, num(8.0), num(4.0))),
                num(2.0)
            )
        );
    }

    #[test]
    fn test_power_is_right_associative() {
        assert_eq!(
            parse("2^3^2").unwrap(),
            Expr::Binary(
                BinaryOp::Pow,
                num(2.0),
                Box::new(Expr::Binary(BinaryOp::Pow, num(3.0), num(2.0)))
            )
        );
    }

    #[test]
    fn test_power_binds_tighter_than_negation() {
        assert_eq!(
            parse("-2^2").unwrap(),
            Expr::Neg(Box::new(Expr::Binary(BinaryOp::Pow, num(2.0), num(2.0))))
        );
        assert_eq!(
            parse("2^-1").unwrap(),
            Expr::Binary(BinaryOp::Pow, num(2.0), Box::new(Expr::Neg(num(1.0))))
        );
    }

    #[test]
    fn test_function_argument_extent() {
        assert_eq!(
            parse("sin(30+60)*2").unwrap(),
            Expr::Binary(
                BinaryOp::Mul,
                Box::new(Expr::Call(
                    Function::Sin,
                    Box::new(Expr::Binary(BinaryOp::Add, num(30.0), num(60.0)))
                )),
                num(2.0)
            )
        );
    }

    #[test]
    fn test_factorial_forms() {
        assert_eq!(parse("5!").unwrap(), Expr::Factorial(5.0));
        assert_eq!(parse("-1!").unwrap(), Expr::Factorial(-1.0));
        assert_eq!(
            parse("2*3!").unwrap(),
            Expr::Binary(BinaryOp::Mul, num(2.0), Box::new(Expr::Factorial(3.0)))
        );
        assert_eq!(
            parse("-(3!)").unwrap(),
            Expr::Neg(Box::new(Expr::Factorial(3.0)))
        );
    }

    #[test]
    fn test_factorial_requires_literal() {
        assert_eq!(
            parse("(3)!"),
            Err(SyntaxError::FactorialOperand { pos: 3 })
        );
        assert_eq!(parse("3!!"), Err(SyntaxError::FactorialOperand { pos: 2 }));
        assert_eq!(parse("!3"), Err(SyntaxError::FactorialOperand { pos: 0 }));
    }

    #[test]
    fn test_factorial_of_fraction_rejected() {
        assert_eq!(parse("4.9!"), Err(SyntaxError::FactorialOperand { pos: 3 }));
        assert_eq!(parse("2.5!"), Err(SyntaxError::FactorialOperand { pos: 3 }));
        assert_eq!(parse("-0.5!"), Err(SyntaxError::FactorialOperand { pos: 4 }));
        assert_eq!(parse("4.0!"), Ok(Expr::Factorial(4.0)));
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(parse(""), Err(SyntaxError::Empty));
        assert_eq!(parse("   "), Err(SyntaxError::Empty));
        assert_eq!(parse("2+"), Err(SyntaxError::UnexpectedEnd));
        assert_eq!(parse("((2+3)"), Err(SyntaxError::UnclosedParen { pos: 0 }));
        assert_eq!(parse("(2+3))"), Err(SyntaxError::UnmatchedParen { pos: 5 }));
        assert_eq!(
            parse("sqrt 4"),
            Err(SyntaxError::MissingCallParen {
                name: "sqrt".to_string()
            })
        );
        assert_eq!(
            parse("2 3"),
            Err(SyntaxError::UnexpectedToken {
                found: "3".to_string(),
                pos: 2
            })
        );
        assert_eq!(
            parse("()"),
            Err(SyntaxError::UnexpectedToken {
                found: ")".to_string(),
                pos: 1
            })
        );
    }

    #[test]
    fn test_deep_nesting_is_rejected() {
        let input = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
        assert!(matches!(parse(&input), Err(SyntaxError::TooDeep { .. })));

        let input = format!("{}1", "-".repeat(1000));
        assert!(matches!(parse(&input), Err(SyntaxError::TooDeep { .. })));
    }
}
