mod association;

pub mod db;
pub use db::Db;

mod eager;
pub use eager::Included;

mod record;
pub use record::Record;

mod relation;
pub use relation::Relation;

pub mod schema;

pub use minirecord_core::{
    attrs, bail, driver, err,
    stmt::{self, Attributes, Value},
    Error, Result,
};

pub use minirecord_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Db, Record, Relation};
    pub use minirecord_core::{
        schema::{AssociationOptions, Associations},
        stmt::{Primitive, Value},
        Error, Result,
    };
    pub use std::{
        convert::Into,
        option::Option::{self, None, Some},
        result::Result::{Err, Ok},
    };
}
