use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

impl Expression {
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] when any divisor evaluates
    /// to zero.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => Ok(l.evaluate()? + r.evaluate()?),
            Expression::Sub(l, r) => Ok(l.evaluate()? - r.evaluate()?),
            Expression::Mul(l, r) => Ok(l.evaluate()? * r.evaluate()?),
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if is_zero(right) {
                    debug!("Division by zero attempted in {}", self);
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            Expression::Neg(e) => Ok(-e.evaluate()?),
        };

        if let Ok(value) = &result
            && !matches!(self, Expression::Number(_))
        {
            debug!("{} = {}", self, value);
        }

        result
    }
}
