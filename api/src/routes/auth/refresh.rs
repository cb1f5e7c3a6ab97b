use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::cookies::{refresh_cookie, REFRESH_COOKIE};
use crate::handlers::{handle_domain_error, ErrorResponse};

/// Body returned after a successful refresh
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub message: String,
}

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges the `refresh_token` cookie for a new pair. The new access token
/// is returned in the body; the new refresh token replaces the cookie.
///
/// ## Errors
/// - 400 Bad Request: no `refresh_token` cookie
/// - 401 Unauthorized: refresh token invalid, expired or revoked
/// - 503 Service Unavailable: revocation list unreachable
pub async fn refresh(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let Some(cookie) = req.cookie(REFRESH_COOKIE).filter(|c| !c.value().is_empty()) else {
        return ErrorResponse::new("missing_refresh_token", "refresh token not found in cookies")
            .to_response(StatusCode::BAD_REQUEST);
    };

    let pair = match state.sessions.refresh(cookie.value()).await {
        Ok(pair) => pair,
        Err(e) => return handle_domain_error(e),
    };

    let max_age = match state.sessions.refresh_ttl_seconds() {
        Ok(seconds) => seconds,
        Err(e) => return handle_domain_error(e),
    };

    HttpResponse::Ok()
        .cookie(refresh_cookie(pair.refresh_token, max_age, &state.cookie))
        .json(RefreshResponse {
            access_token: pair.access_token,
            expires_in: pair.expires_in,
            message: "Access token refreshed successfully. New refresh token stored in httpOnly cookie."
                .to_string(),
        })
}
