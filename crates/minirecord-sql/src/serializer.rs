#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod statement;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a, T> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer { _priv: () }
    }

    /// Writes `stmt` as SQLite SQL, pushing every bound value into `params`
    /// in placeholder order.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }
}
