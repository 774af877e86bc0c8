//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`EateryError`] via `From`.

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum EateryError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A record failed an invariant or a request could not be coerced into one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("invalid identifier {value:?}")]
    InvalidId { value: String },

    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("price must be a non-negative number")]
    NegativePrice,

    #[error("guests must be at least 1")]
    GuestsOutOfRange,

    #[error("rating must be between {min} and {max}")]
    RatingOutOfRange { min: u8, max: u8 },

    #[error("malformed form: {reason}")]
    MalformedForm { reason: String },

    #[error("unsupported image format {extension:?}")]
    UnsupportedImage { extension: String },

    #[error("file is not a valid image: {reason}")]
    InvalidImage { reason: String },
}

/// Lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
