use thiserror::Error;

/// Domain-level error taxonomy.
///
/// Every fallible core operation surfaces one of these; none of them should
/// ever crash the process.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Bad credentials. Deliberately carries no detail: unknown email and
    /// wrong password are indistinguishable to the caller.
    #[error("Invalid credentials")]
    AuthFailure,

    /// The session is in the wrong state for the requested operation.
    #[error("Operation not permitted in current session state")]
    Unauthorized,

    /// Malformed questionnaire input.
    #[error("Validation: {0}")]
    Validation(String),

    /// Email already registered.
    #[error("Email already exists: {0}")]
    DuplicateEmail(String),

    /// Underlying storage unavailable or misbehaving.
    #[error("Storage error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// Whether this error is likely transient (e.g. DB connection lost)
    /// and the operation may succeed if retried.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Persistence(_))
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Persistence(e.to_string())
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
