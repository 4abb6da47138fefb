use std::fmt;

use crate::expression::ast::Expression;
use crate::utils::format_value;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Add(_, _) | Expression::Sub(_, _) => 1,
                Expression::Mul(_, _) | Expression::Div(_, _) => 2,
                Expression::Neg(_) => 3,
                Expression::Number(n) if *n < 0.0 => 3,
                Expression::Number(_) => 4,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn write_binary(
            f: &mut fmt::Formatter,
            l: &Expression,
            symbol: &str,
            r: &Expression,
            need_l: bool,
            need_r: bool,
        ) -> fmt::Result {
            write_with_parens(f, l, need_l)?;
            write!(f, " {} ", symbol)?;
            write_with_parens(f, r, need_r)
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", format_value(*n)),
                Expression::Add(l, r) => write_binary(f, l, "+", r, false, false),
                Expression::Sub(l, r) => write_binary(f, l, "-", r, false, precedence(r) <= 1),
                Expression::Mul(l, r) => {
                    write_binary(f, l, "*", r, precedence(l) < 2, precedence(r) < 2)
                }
                Expression::Div(l, r) => {
                    write_binary(f, l, "/", r, precedence(l) < 2, precedence(r) <= 2)
                }
                Expression::Neg(e) => {
                    let need = !matches!(e.as_ref(), Expression::Number(n) if *n >= 0.0);
                    write!(f, "-")?;
                    write_with_parens(f, e, need)
                }
            }
        }

        fmt_expression(f, self)
    }
}
