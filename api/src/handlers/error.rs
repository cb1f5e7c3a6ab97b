//! JSON error responses and the domain error to HTTP mapping

use actix_web::{http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use pb_core::errors::{DomainError, TokenError};

/// Error body returned by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub error: String,
    /// Human-readable message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    pub fn to_response(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

/// Map a session failure from a first-party credential endpoint
///
/// Bad credentials come back as 401 with their message. Faults on our side
/// are logged and reported without detail.
pub fn handle_domain_error(err: DomainError) -> HttpResponse {
    match err {
        DomainError::Token(TokenError::RevocationCheckFailed) => {
            warn!("revocation store unavailable during credential exchange");
            ErrorResponse::new("service_unavailable", "please try again later")
                .to_response(StatusCode::SERVICE_UNAVAILABLE)
        }
        DomainError::Token(token_err) if token_err.is_server_fault() => {
            error!(code = token_err.error_code(), error = %token_err, "token issuance failed");
            ErrorResponse::new("internal_error", "An internal error occurred")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
        DomainError::Token(token_err) => {
            ErrorResponse::new(token_err.error_code(), token_err.to_string())
                .to_response(StatusCode::UNAUTHORIZED)
        }
        DomainError::Store { message } | DomainError::Internal { message } => {
            error!(error = %message, "session operation failed");
            ErrorResponse::new("internal_error", "An internal error occurred")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
