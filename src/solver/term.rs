use std::fmt;
use std::sync::Arc;

use crate::cards::Card;
use crate::utils::format_value;

/// One of the four operators the game allows, in search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug)]
enum Notation {
    Leaf(String),
    Pair {
        op: Operator,
        lhs: Arc<Notation>,
        rhs: Arc<Notation>,
    },
}

impl Notation {
    fn write_to(&self, out: &mut String) {
        match self {
            Notation::Leaf(text) => out.push_str(text),
            Notation::Pair { op, lhs, rhs } => {
                out.push('(');
                lhs.write_to(out);
                out.push(' ');
                out.push_str(op.symbol());
                out.push(' ');
                rhs.write_to(out);
                out.push(')');
            }
        }
    }
}

/// A value together with the expression text that produces it.
///
/// Composite terms share their operands, so cloning a term during the
/// search never copies text. The text is rendered by [`Term::expression`].
#[derive(Debug, Clone)]
pub struct Term {
    value: f64,
    notation: Arc<Notation>,
}

impl Term {
    /// Leaf term with caller-supplied display text.
    pub fn new(value: f64, expression: impl Into<String>) -> Self {
        Self {
            value,
            notation: Arc::new(Notation::Leaf(expression.into())),
        }
    }

    /// Leaf term whose text is the canonical rendering of `value`.
    pub fn from_value(value: f64) -> Self {
        Self::new(value, format_value(value))
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Fully parenthesized expression text, e.g. `((10 * 10) - 4)`.
    pub fn expression(&self) -> String {
        let mut out = String::new();
        self.notation.write_to(&mut out);
        out
    }

    /// `(self op rhs)`
    pub fn combine(&self, op: Operator, rhs: &Term) -> Term {
        Term {
            value: op.apply(self.value, rhs.value),
            notation: Arc::new(Notation::Pair {
                op,
                lhs: Arc::clone(&self.notation),
                rhs: Arc::clone(&rhs.notation),
            }),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.expression())
    }
}

impl From<&Card> for Term {
    fn from(card: &Card) -> Self {
        Term::from_value(f64::from(card.value()))
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Term::from_value(value)
    }
}
