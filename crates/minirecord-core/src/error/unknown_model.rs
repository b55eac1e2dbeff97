use super::Error;

/// Error when a record type is used with a database it was not registered
/// with.
#[derive(Debug)]
pub(super) struct UnknownModelError {
    name: Box<str>,
}

impl std::error::Error for UnknownModelError {}

impl core::fmt::Display for UnknownModelError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown model `{}`; register it with the database builder",
            self.name
        )
    }
}

impl Error {
    pub fn unknown_model(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownModel(UnknownModelError {
            name: name.into().into(),
        }))
    }

    pub fn is_unknown_model(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownModel(_))
    }
}
