//! Directory error types with HTTP status code mapping.
//!
//! [`DirectoryError`] is the central error type for the service. Each
//! variant maps to an [`ErrorKind`], a numeric code and an HTTP status,
//! and all three are surfaced in the JSON error body so callers can render
//! kind-specific guidance.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::EntityKind;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "kind": "not_found",
///     "message": "venue 42 not found",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code, kind and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`DirectoryError`]).
    pub code: u32,
    /// Machine-readable failure category.
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Failure category shared by every [`DirectoryError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// An id or route lookup missed.
    NotFound,
    /// A submitted field is missing or malformed.
    ValidationFailure,
    /// A show references a venue or artist that does not exist.
    ReferentialIntegrity,
    /// The store rejected or failed the operation.
    PersistenceFailure,
    /// Anything else.
    Internal,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category           | HTTP Status                   |
/// |-----------|--------------------|-------------------------------|
/// | 1000–1999 | Validation         | 400 Bad Request               |
/// | 2000–2999 | Lookup / Integrity | 404 Not Found / 422           |
/// | 3000–3999 | Server             | 500 Internal Server Error     |
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// No row of the given entity has this id.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Which table was searched.
        entity: EntityKind,
        /// The id that missed.
        id: i64,
    },

    /// No route matches the request path.
    #[error("no route for {0}")]
    RouteNotFound(String),

    /// Request validation failed.
    #[error("invalid submission: {0}")]
    Validation(String),

    /// A show references a missing venue or artist.
    #[error("referential integrity violated: {0}")]
    ReferentialIntegrity(String),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DirectoryError {
    /// Shorthand for a [`DirectoryError::NotFound`] on `entity`.
    #[must_use]
    pub fn not_found(entity: EntityKind, id: impl Into<i64>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Returns the failure category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } | Self::RouteNotFound(_) => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::ValidationFailure,
            Self::ReferentialIntegrity(_) => ErrorKind::ReferentialIntegrity,
            Self::Persistence(_) => ErrorKind::PersistenceFailure,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Validation(_) => 1001,
            Self::NotFound { .. } => 2001,
            Self::RouteNotFound(_) => 2002,
            Self::ReferentialIntegrity(_) => 2003,
            Self::Internal(_) => 3000,
            Self::Persistence(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::ReferentialIntegrity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for DirectoryError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                Self::ReferentialIntegrity(db.message().to_string())
            }
            _ => Self::Persistence(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DirectoryError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Persistence(format!("migration failed: {err}"))
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("genre encoding: {err}"))
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                kind: self.kind(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
