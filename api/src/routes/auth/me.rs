use actix_web::HttpResponse;

use crate::middleware::AuthContext;

/// Handler for GET /api/v1/auth/me
///
/// Only reachable through the access token gate.
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "user_id": auth.user_id }))
}
