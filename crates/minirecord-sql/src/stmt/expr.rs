use super::{ColumnRef, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// All operands must hold
    And(Vec<Expr>),

    Column(ColumnRef),

    Eq(Box<Expr>, Box<Expr>),

    /// An integer written directly into the SQL text
    Literal(i64),

    /// A value bound as a positional parameter
    Value(Value),
}

impl Expr {
    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::Eq(Box::new(lhs.into()), Box::new(rhs.into()))
    }

    /// Conjunction of `operands`. A single operand is returned unwrapped.
    pub fn and(operands: impl IntoIterator<Item = Expr>) -> Expr {
        let operands: Vec<_> = operands.into_iter().collect();

        match <[Expr; 1]>::try_from(operands) {
            Ok([operand]) => operand,
            Err(operands) => Expr::And(operands),
        }
    }

    pub fn value(value: impl Into<Value>) -> Expr {
        Expr::Value(value.into())
    }

    pub fn is_and(&self) -> bool {
        matches!(self, Expr::And(_))
    }
}

impl From<ColumnRef> for Expr {
    fn from(value: ColumnRef) -> Self {
        Expr::Column(value)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Value(value)
    }
}
