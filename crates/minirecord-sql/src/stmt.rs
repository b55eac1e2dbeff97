mod column;
pub use column::ColumnRef;

mod expr;
pub use expr::Expr;

mod insert;
pub use insert::Insert;

mod join;
pub use join::Join;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

pub use minirecord_core::stmt::{Attributes, Value};

/// A statement the record layer knows how to generate.
///
/// Table and column names are written into the SQL text as-is; only values
/// are bound as parameters. Callers must pass identifiers taken from
/// registered schema metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
}

impl Statement {
    /// True for statements that return rows.
    pub fn is_query(&self) -> bool {
        matches!(self, Statement::Select(_))
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
