use super::{Attributes, ColumnRef, Expr, Join};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// When set, only this table's columns are projected (`<table>.*`).
    /// Otherwise every column (`*`).
    pub projection: Option<String>,

    pub from: String,

    pub joins: Vec<Join>,

    pub filter: Option<Expr>,

    pub limit: Option<u64>,
}

impl Select {
    /// `SELECT * FROM <table>`
    pub fn all(table: impl Into<String>) -> Select {
        Select {
            projection: None,
            from: table.into(),
            joins: vec![],
            filter: None,
            limit: None,
        }
    }

    /// `SELECT * FROM <table> LIMIT 0`, read for its column header only.
    pub fn columns_of(table: impl Into<String>) -> Select {
        Select {
            limit: Some(0),
            ..Select::all(table)
        }
    }

    /// `SELECT * FROM <table> WHERE <table>.<primary_key> = <id>`
    ///
    /// The id is an integer and is written into the SQL text.
    pub fn find(table: &str, primary_key: &str, id: i64) -> Select {
        Select {
            filter: Some(Expr::eq(
                ColumnRef::qualified(table, primary_key),
                Expr::Literal(id),
            )),
            ..Select::all(table)
        }
    }

    /// `SELECT * FROM <table> WHERE <col> = ? [AND <col> = ?]*`, in criteria
    /// order. Empty criteria select every row.
    pub fn filter(table: impl Into<String>, criteria: &Attributes) -> Select {
        let operands: Vec<_> = criteria
            .iter()
            .map(|(column, value)| Expr::eq(ColumnRef::bare(column), Expr::value(value.clone())))
            .collect();

        Select {
            filter: if operands.is_empty() {
                None
            } else {
                Some(Expr::and(operands))
            },
            ..Select::all(table)
        }
    }

    /// Two-table join used by through associations:
    ///
    /// `SELECT <source>.* FROM <through> JOIN <source> ON <on> WHERE
    /// <through>.<through_key> = ?`
    pub fn through(
        through: &str,
        source: &str,
        on: (ColumnRef, ColumnRef),
        through_key: &str,
        value: impl Into<super::Value>,
    ) -> Select {
        Select {
            projection: Some(source.to_string()),
            from: through.to_string(),
            joins: vec![Join {
                table: source.to_string(),
                on: Expr::eq(on.0, on.1),
            }],
            filter: Some(Expr::eq(
                ColumnRef::qualified(through, through_key),
                Expr::value(value),
            )),
            limit: None,
        }
    }
}
