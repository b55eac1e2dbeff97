use super::Error;

/// Error when an association cannot be resolved: the name was never declared
/// on the model, or the declared target is not the requested record type.
#[derive(Debug)]
pub(super) struct InvalidAssociationError {
    model: Box<str>,
    name: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidAssociationError {}

impl core::fmt::Display for InvalidAssociationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid association `{}::{}`: {}",
            self.model, self.name, self.reason
        )
    }
}

impl Error {
    pub fn invalid_association(
        model: impl Into<String>,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidAssociation(
            InvalidAssociationError {
                model: model.into().into(),
                name: name.into().into(),
                reason: reason.into().into(),
            },
        ))
    }

    pub fn is_invalid_association(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidAssociation(_))
    }
}
