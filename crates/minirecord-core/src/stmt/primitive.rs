use super::Value;
use crate::{Error, Result};

/// A Rust type that a record field can hold.
///
/// Record fields are declared as `Option<T>` where `T: Primitive`; `None`
/// stands for an unset attribute or a SQL `NULL`.
pub trait Primitive: Sized {
    /// Name used in conversion error messages.
    const NAME: &'static str;

    /// Converts a non-null database value into `Self`.
    fn load(value: Value) -> Result<Self>;

    fn into_value(self) -> Value;

    /// Loads a possibly-null value as an optional field.
    fn load_option(value: Value) -> Result<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            value => Self::load(value).map(Some),
        }
    }

    /// Stores an optional field, `None` becoming `NULL`.
    fn option_into_value(value: Option<Self>) -> Value {
        value.map(Self::into_value).unwrap_or_default()
    }
}

impl Primitive for i64 {
    const NAME: &'static str = "i64";

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Integer(v) => Ok(v),
            value => Err(Error::type_conversion(value, Self::NAME)),
        }
    }

    fn into_value(self) -> Value {
        Value::Integer(self)
    }
}

impl Primitive for i32 {
    const NAME: &'static str = "i32";

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Integer(v) => {
                i32::try_from(v).map_err(|_| Error::type_conversion(Value::Integer(v), Self::NAME))
            }
            value => Err(Error::type_conversion(value, Self::NAME)),
        }
    }

    fn into_value(self) -> Value {
        Value::Integer(self.into())
    }
}

impl Primitive for f64 {
    const NAME: &'static str = "f64";

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Real(v) => Ok(v),
            // Whole numbers in NUMERIC columns are stored as integers
            Value::Integer(v) => Ok(v as f64),
            value => Err(Error::type_conversion(value, Self::NAME)),
        }
    }

    fn into_value(self) -> Value {
        Value::Real(self)
    }
}

impl Primitive for bool {
    const NAME: &'static str = "bool";

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Integer(0) => Ok(false),
            Value::Integer(1) => Ok(true),
            value => Err(Error::type_conversion(value, Self::NAME)),
        }
    }

    fn into_value(self) -> Value {
        Value::from(self)
    }
}

impl Primitive for String {
    const NAME: &'static str = "String";

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Text(v) => Ok(v),
            value => Err(Error::type_conversion(value, Self::NAME)),
        }
    }

    fn into_value(self) -> Value {
        Value::Text(self)
    }
}

impl Primitive for Vec<u8> {
    const NAME: &'static str = "Vec<u8>";

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Blob(v) => Ok(v),
            value => Err(Error::type_conversion(value, Self::NAME)),
        }
    }

    fn into_value(self) -> Value {
        Value::Blob(self)
    }
}
