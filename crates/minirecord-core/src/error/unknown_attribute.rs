use super::Error;

/// Error when an attribute name is not one of the record type's columns.
///
/// Raised when constructing a record from a map with an undeclared key, when
/// reading or writing through the uniform accessor with an unknown column, and
/// when registration finds that a record type's fields and its table's
/// reflected columns disagree.
#[derive(Debug)]
pub(super) struct UnknownAttributeError {
    name: Box<str>,
}

impl std::error::Error for UnknownAttributeError {}

impl core::fmt::Display for UnknownAttributeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown attribute '{}'", self.name)
    }
}

impl Error {
    /// Creates an unknown attribute error for the given attribute name.
    pub fn unknown_attribute(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownAttribute(UnknownAttributeError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown attribute error.
    pub fn is_unknown_attribute(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownAttribute(_))
    }
}
