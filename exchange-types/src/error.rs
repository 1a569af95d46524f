//! Error types for the exchange catalog.

/// Domain-level errors (invalid values, arithmetic failures).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Rate cannot be zero")]
    ZeroRate,

    #[error("Decimal overflow")]
    Overflow,
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Application-level errors raised by the services.
///
/// Each business-rule failure carries the offending code(s) so the transport
/// layer can tell a conflict from a missing resource.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Currency already exists: {0}")]
    CurrencyAlreadyExists(String),

    #[error("Exchange already exists: {base} -> {target}")]
    ExchangeAlreadyExists { base: String, target: String },

    #[error("Currency not found: {0}")]
    CurrencyNotFound(String),

    #[error("Exchange not found: {base} -> {target}")]
    ExchangeNotFound { base: String, target: String },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            e => AppError::BadRequest(e.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(e) => e.into(),
            RepoError::NotFound => AppError::Internal("Entity not found".into()),
            RepoError::Database(e) => AppError::Internal(e),
            RepoError::Conflict(e) => AppError::Conflict(e),
        }
    }
}
