use thiserror::Error;

/// Outcome categories for registry failures.
///
/// Callers branch on the category; the rendered message is host-facing text
/// and not part of the stable contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
}

/// Registry operation failures.
///
/// Every failure is a returned value; the registry never panics for control
/// flow, and a failed operation leaves the store unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    #[error("Missing required field: {0}.")]
    MissingField(&'static str),

    #[error("Insurance Policy ID must be a non-empty string.")]
    EmptyId,

    #[error("Insurance Policy with ID={0} not found.")]
    NotFound(String),

    #[error("Claim for Insurance Policy with ID={0} has already been filed.")]
    ClaimAlreadyFiled(String),
}

impl PolicyError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn claim_already_filed(id: impl Into<String>) -> Self {
        Self::ClaimAlreadyFiled(id.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField(_) | Self::EmptyId => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::ClaimAlreadyFiled(_) => ErrorKind::Conflict,
        }
    }
}
