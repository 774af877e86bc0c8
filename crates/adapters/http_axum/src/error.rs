//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use eatery_domain::error::{EateryError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Status code and client-facing message for an [`EateryError`].
///
/// Storage failures are logged here and never exposed to the client.
pub(crate) fn status_and_message(err: &EateryError) -> (StatusCode, String) {
    match err {
        EateryError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        EateryError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        EateryError::Storage(err) => {
            tracing::error!(error = %err, source = ?err.source(), "storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    }
}

/// Maps [`EateryError`] to an HTTP response with appropriate status code.
pub struct ApiError(EateryError);

impl From<EateryError> for ApiError {
    fn from(err: EateryError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::MalformedForm {
            reason: rejection.body_text(),
        }
        .into()
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ValidationError::MalformedForm {
            reason: rejection.body_text(),
        }
        .into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);
        (status, Json(ErrorBody { message })).into_response()
    }
}
