mod attributes;
pub use attributes::Attributes;

mod primitive;
pub use primitive::Primitive;

mod record_set;
pub use record_set::RecordSet;

mod value;
pub use value::Value;
