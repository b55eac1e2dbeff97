mod reflect;
pub use reflect::columns_for;

pub use minirecord_core::schema::*;
