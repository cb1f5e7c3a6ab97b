//! `refresh_token` cookie construction

use actix_web::cookie::{time::Duration, Cookie, SameSite};

use pb_shared::config::CookieConfig;

/// Name of the cookie carrying the refresh token
pub const REFRESH_COOKIE: &str = "refresh_token";

/// Cookie holding `token` for `max_age_seconds`
pub fn refresh_cookie(token: impl Into<String>, max_age_seconds: i64, config: &CookieConfig) -> Cookie<'static> {
    build(token.into(), Duration::seconds(max_age_seconds), config)
}

/// Cookie that makes the client drop the refresh token
pub fn removal_cookie(config: &CookieConfig) -> Cookie<'static> {
    build(String::new(), Duration::ZERO, config)
}

fn build(value: String, max_age: Duration, config: &CookieConfig) -> Cookie<'static> {
    let mut builder = Cookie::build(REFRESH_COOKIE, value)
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(config.secure)
        .path("/")
        .max_age(max_age);

    if !config.domain.is_empty() {
        builder = builder.domain(config.domain.clone());
    }

    builder.finish()
}
