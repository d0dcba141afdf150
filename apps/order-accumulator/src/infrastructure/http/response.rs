//! HTTP error responses (problem details).

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::shared::DomainError;

/// Problem-details style error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// Reference for the status code.
    #[serde(rename = "type")]
    pub kind: String,
    /// Short title.
    pub title: String,
    /// HTTP status code.
    pub status: u16,
    /// Human-readable detail.
    pub detail: String,
    /// Offending field, for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
}

/// Errors surfaced by the control surface.
///
/// Business validation failures become 400s carrying the offending field;
/// anything unexpected becomes a generic 500 with no internal detail beyond
/// a message string.
#[derive(Debug)]
pub enum ApiError {
    /// Request failed business validation.
    Validation(DomainError),
    /// Bad request outside the domain taxonomy (e.g. blank path input).
    BadRequest {
        /// Detail message.
        detail: String,
        /// Offending field.
        field_name: String,
    },
    /// Unexpected failure.
    Internal {
        /// Message string; no internals leaked.
        message: String,
    },
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail, field_name) = match self {
            Self::Validation(err) => {
                let field = err.field().map(ToString::to_string);
                (StatusCode::BAD_REQUEST, err.to_string(), field)
            }
            Self::BadRequest { detail, field_name } => {
                (StatusCode::BAD_REQUEST, detail, Some(field_name))
            }
            Self::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message, None),
        };

        let body = ProblemDetails {
            kind: format!("https://httpstatuses.com/{}", status.as_u16()),
            title: status
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string(),
            status: status.as_u16(),
            detail,
            field_name,
        };

        (status, Json(body)).into_response()
    }
}
