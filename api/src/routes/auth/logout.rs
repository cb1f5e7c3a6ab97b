use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use tracing::{debug, error};

use pb_core::errors::{DomainError, TokenError};

use crate::app::AppState;
use crate::cookies::{removal_cookie, REFRESH_COOKIE};
use crate::handlers::ErrorResponse;

/// Handler for POST /api/v1/auth/logout
///
/// Blacklists the refresh token from the cookie until its own expiry and
/// clears the cookie.
pub async fn logout(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let Some(cookie) = req.cookie(REFRESH_COOKIE).filter(|c| !c.value().is_empty()) else {
        return ErrorResponse::new("missing_refresh_token", "refresh token not found in cookies")
            .to_response(StatusCode::BAD_REQUEST);
    };

    match state.sessions.logout(cookie.value()).await {
        Ok(_) => HttpResponse::Ok()
            .cookie(removal_cookie(&state.cookie))
            .json(serde_json::json!({
                "message": "Successfully logged out. Refresh token removed from cookies and added to blacklist."
            })),
        Err(DomainError::Token(TokenError::MalformedSubject)) => {
            ErrorResponse::new("invalid_refresh_token", "invalid user ID in token")
                .to_response(StatusCode::BAD_REQUEST)
        }
        Err(DomainError::Token(e)) => {
            debug!(reason = e.error_code(), "logout with invalid refresh token");
            ErrorResponse::new("invalid_refresh_token", "invalid refresh token")
                .to_response(StatusCode::BAD_REQUEST)
        }
        Err(e) => {
            error!(error = %e, "failed to blacklist refresh token");
            ErrorResponse::new("logout_failed", "failed to logout")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
