use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::token::{Claims, TokenClass};
use crate::errors::TokenError;

#[test]
fn test_claims_timestamps() {
    let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let claims = Claims::new(42, TokenClass::Access, issued_at, issued_at + Duration::seconds(900));

    assert_eq!(claims.sub, "42");
    assert_eq!(claims.token_type, "access");
    assert_eq!(claims.iat, claims.nbf);
    assert_eq!(claims.exp - claims.iat, 900);
    assert_eq!(claims.expires_at(), Some(issued_at + Duration::seconds(900)));
}

#[test]
fn test_claims_have_distinct_ids() {
    let now = Utc::now();
    let a = Claims::new(1, TokenClass::Refresh, now, now + Duration::seconds(60));
    let b = Claims::new(1, TokenClass::Refresh, now, now + Duration::seconds(60));
    assert_ne!(a.jti, b.jti);
}

#[test]
fn test_token_class_parsing() {
    assert_eq!("access".parse::<TokenClass>().unwrap(), TokenClass::Access);
    assert_eq!("refresh".parse::<TokenClass>().unwrap(), TokenClass::Refresh);
    assert!(matches!(
        "session".parse::<TokenClass>(),
        Err(TokenError::UnknownTokenType { value }) if value == "session"
    ));
}

#[test]
fn test_malformed_subject() {
    let mut claims = Claims::new(7, TokenClass::Access, Utc::now(), Utc::now() + Duration::seconds(60));
    assert_eq!(claims.user_id().unwrap(), 7);

    claims.sub = "not-a-number".to_string();
    assert!(matches!(claims.user_id(), Err(TokenError::MalformedSubject)));
}
