use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

/// Parenthesis/unary nesting accepted before parsing gives up.
const MAX_NESTING: usize = 256;

/// Longest token stream accepted. Bounds the depth of operator chains,
/// which the tree walks in `evaluate`, `Display` and `Drop` recurse over.
const MAX_TOKENS: usize = 512;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Split the input into tokens paired with their character position.
fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, ExpressionError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(&c) = chars.get(pos) {
        if tokens.len() > MAX_TOKENS {
            return Err(ExpressionError::TooLong(MAX_TOKENS));
        }
        let token = match c {
            c if c.is_whitespace() => {
                pos += 1;
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' | '×' => Token::Star,
            '/' | '÷' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_digit() || c == '.' => {
                let start = pos;
                while chars
                    .get(pos)
                    .is_some_and(|d| d.is_ascii_digit() || *d == '.')
                {
                    pos += 1;
                }
                let literal: String = chars.get(start..pos).unwrap_or_default().iter().collect();
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| ExpressionError::InvalidNumber(literal.clone()))?;
                tokens.push((Token::Number(value), start));
                continue;
            }
            other => {
                return Err(ExpressionError::UnexpectedCharacter {
                    found: other,
                    position: pos,
                });
            }
        };
        tokens.push((token, pos));
        pos += 1;
    }

    if tokens.len() > MAX_TOKENS {
        return Err(ExpressionError::TooLong(MAX_TOKENS));
    }

    Ok(tokens)
}

/// Recursive-descent parser over the token stream.
///
/// ```text
/// expression := term (("+" | "-") term)*
/// term       := unary (("*" | "/") unary)*
/// unary      := ("+" | "-") unary | primary
/// primary    := number | "(" expression ")"
/// ```
struct Parser {
    tokens: Vec<(Token, usize)>,
    cursor: usize,
    depth: usize,
}

impl Parser {
    fn new(tokens: Vec<(Token, usize)>) -> Self {
        Self {
            tokens,
            cursor: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor).map(|(token, _)| token)
    }

    fn advance(&mut self) -> Option<(Token, usize)> {
        let next = self.tokens.get(self.cursor).cloned();
        if next.is_some() {
            self.cursor += 1;
        }
        next
    }

    fn descend(&mut self) -> Result<(), ExpressionError> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(ExpressionError::NestingTooDeep(MAX_NESTING));
        }
        Ok(())
    }

    fn expression(&mut self) -> Result<Expression, ExpressionError> {
        let mut lhs = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.cursor += 1;
                    let rhs = self.term()?;
                    lhs = Expression::Add(Box::new(lhs), Box::new(rhs));
                }
                Some(Token::Minus) => {
                    self.cursor += 1;
                    let rhs = self.term()?;
                    lhs = Expression::Sub(Box::new(lhs), Box::new(rhs));
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn term(&mut self) -> Result<Expression, ExpressionError> {
        let mut lhs = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.cursor += 1;
                    let rhs = self.unary()?;
                    lhs = Expression::Mul(Box::new(lhs), Box::new(rhs));
                }
                Some(Token::Slash) => {
                    self.cursor += 1;
                    let rhs = self.unary()?;
                    lhs = Expression::Div(Box::new(lhs), Box::new(rhs));
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn unary(&mut self) -> Result<Expression, ExpressionError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.cursor += 1;
                self.descend()?;
                let inner = self.unary()?;
                self.depth -= 1;
                Ok(Expression::Neg(Box::new(inner)))
            }
            Some(Token::Plus) => {
                self.cursor += 1;
                self.descend()?;
                let inner = self.unary()?;
                self.depth -= 1;
                Ok(inner)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expression, ExpressionError> {
        match self.advance() {
            Some((Token::Number(n), _)) => Ok(Expression::Number(n)),
            Some((Token::LParen, _)) => {
                self.descend()?;
                let inner = self.expression()?;
                self.depth -= 1;
                match self.advance() {
                    Some((Token::RParen, _)) => Ok(inner),
                    Some((token, position)) => Err(ExpressionError::UnexpectedToken {
                        found: token.to_string(),
                        position,
                    }),
                    None => Err(ExpressionError::UnbalancedParenthesis),
                }
            }
            Some((token, position)) => Err(ExpressionError::UnexpectedToken {
                found: token.to_string(),
                position,
            }),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        debug!("Parsing expression: '{}'", input);

        let tokens = tokenize(input)?;
        if tokens.is_empty() {
            return Err(ExpressionError::Empty);
        }

        let mut parser = Parser::new(tokens);
        let expr = parser.expression()?;

        match parser.advance() {
            None => {
                debug!("Parsed expression: {}", expr);
                Ok(expr)
            }
            Some((Token::RParen, _)) => Err(ExpressionError::UnbalancedParenthesis),
            Some((token, position)) => Err(ExpressionError::UnexpectedToken {
                found: token.to_string(),
                position,
            }),
        }
    }
}
