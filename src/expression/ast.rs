/// Arithmetic expression tree over the four card-game operators
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
    Neg(Box<Expression>),
}

impl Expression {
    /// Numeric literals in left-to-right order.
    pub fn literals(&self) -> Vec<f64> {
        fn collect(expr: &Expression, out: &mut Vec<f64>) {
            match expr {
                Expression::Number(n) => out.push(*n),
                Expression::Add(l, r)
                | Expression::Sub(l, r)
                | Expression::Mul(l, r)
                | Expression::Div(l, r) => {
                    collect(l, out);
                    collect(r, out);
                }
                Expression::Neg(e) => collect(e, out),
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }
}
