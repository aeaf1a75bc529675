use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header, or one without a recognised scheme.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The presented token does not belong to any account.
    #[error("Token does not match any account")]
    InvalidToken,

    /// Login attempted with an unknown name or wrong password.
    #[error("Invalid credentials for '{0}'")]
    InvalidCredentials(String),

    /// Account exists but lacks the staff or superuser flag required by the endpoint.
    ///
    /// # Fields
    /// - Account ID
    /// - Description of what was attempted
    #[error("Account {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Authenticated account is not linked to a team.
    #[error("Account {0} has no team")]
    NoTeam(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid credentials"
/// - `AccessDenied` → 403 Forbidden with "Insufficient permissions"
/// - `NoTeam` → 404 Not Found with "No team associated with this user"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Authentication credentials were not provided",
            ),
            Self::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
            Self::InvalidCredentials(_) => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
            Self::NoTeam(_) => (StatusCode::NOT_FOUND, "No team associated with this user"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
