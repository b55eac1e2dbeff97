use super::Expr;

/// `JOIN <table> ON <on>`
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub table: String,
    pub on: Expr,
}
