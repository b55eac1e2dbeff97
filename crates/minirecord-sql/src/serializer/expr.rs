use super::{Delimited, Params, ToSql};

use crate::stmt::{self, ColumnRef};

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use stmt::Expr::*;

        match self {
            And(operands) => {
                fmt!(f, Delimited(operands, " AND "));
            }
            Column(column) => {
                fmt!(f, column);
            }
            Eq(lhs, rhs) => {
                let (lhs, rhs) = (&**lhs, &**rhs);
                fmt!(f, lhs " = " rhs);
            }
            Literal(value) => {
                fmt!(f, *value);
            }
            Value(value) => {
                let placeholder = f.params.push(value);
                fmt!(f, placeholder);
            }
        }
    }
}

impl ToSql for &ColumnRef {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        if let Some(table) = &self.table {
            fmt!(f, table ".");
        }

        let name = &self.name;
        fmt!(f, name);
    }
}
