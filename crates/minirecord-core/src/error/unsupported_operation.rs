use super::Error;

/// Error when an operation is requested on something that does not support
/// it, e.g. resolving a two-hop association through a has-many descriptor.
#[derive(Debug)]
pub(super) struct UnsupportedOperationError {
    message: Box<str>,
}

impl std::error::Error for UnsupportedOperationError {}

impl core::fmt::Display for UnsupportedOperationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported operation: {}", self.message)
    }
}

impl Error {
    pub fn unsupported_operation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedOperation(
            UnsupportedOperationError {
                message: message.into().into(),
            },
        ))
    }

    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedOperation(_))
    }
}
