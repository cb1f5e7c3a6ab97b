//! Unit tests for revocation-aware validation

use std::sync::Arc;

use chrono::Duration;

use crate::clock::Clock;
use crate::domain::entities::token::{Claims, TokenClass};
use crate::errors::TokenError;
use crate::repositories::{MockRevocationRepository, RevocationRepository};
use crate::services::token::{TokenIssuer, TokenValidator};

use super::{codec_with, fixed_clock, test_config};

#[tokio::test]
async fn test_revoked_refresh_token_rejected() {
    let clock = fixed_clock();
    let codec = codec_with(&test_config(), clock.clone());
    let issuer = TokenIssuer::new(codec.clone(), test_config(), clock.clone());
    let store = Arc::new(MockRevocationRepository::new(clock.clone()));
    let validator = TokenValidator::with_revocation(codec.clone(), store.clone());

    let pair = issuer.issue_pair(42).unwrap();
    assert_eq!(validator.validate(&pair.refresh_token, TokenClass::Refresh).await, Ok(42));

    store
        .add(&pair.refresh_token, 42, clock.now() + Duration::days(7))
        .await
        .unwrap();

    assert_eq!(
        validator.validate(&pair.refresh_token, TokenClass::Refresh).await,
        Err(TokenError::TokenRevoked)
    );

    // Signature and expiry alone still pass
    let unchecked = TokenValidator::without_revocation(codec);
    assert!(!unchecked.checks_revocation());
    assert_eq!(unchecked.validate(&pair.refresh_token, TokenClass::Refresh).await, Ok(42));
}

#[tokio::test]
async fn test_unreachable_store_fails_closed() {
    let clock = fixed_clock();
    let codec = codec_with(&test_config(), clock.clone());
    let issuer = TokenIssuer::new(codec.clone(), test_config(), clock.clone());
    let store = Arc::new(MockRevocationRepository::new(clock.clone()));
    let validator = TokenValidator::with_revocation(codec, store.clone());

    let pair = issuer.issue_pair(42).unwrap();
    store.set_failing(true);

    assert_eq!(
        validator.validate(&pair.access_token, TokenClass::Access).await,
        Err(TokenError::RevocationCheckFailed)
    );
}

#[tokio::test]
async fn test_codec_errors_skip_store() {
    let clock = fixed_clock();
    let codec = codec_with(&test_config(), clock.clone());
    let store = Arc::new(MockRevocationRepository::new(clock.clone()));
    let validator = TokenValidator::with_revocation(codec, store.clone());

    assert_eq!(
        validator.validate("", TokenClass::Access).await,
        Err(TokenError::SignatureInvalid)
    );
    assert_eq!(store.lookups(), 0);
}

#[tokio::test]
async fn test_malformed_subject() {
    let clock = fixed_clock();
    let codec = codec_with(&test_config(), clock.clone());
    let validator = TokenValidator::without_revocation(codec.clone());

    let mut claims = Claims::new(1, TokenClass::Access, clock.now(), clock.now() + Duration::seconds(60));
    claims.sub = "user-1".to_string();
    let token = codec.sign(&claims).unwrap();

    assert_eq!(
        validator.validate(&token, TokenClass::Access).await,
        Err(TokenError::MalformedSubject)
    );
    assert!(validator.validate_claims(&token, TokenClass::Access).await.is_ok());
}

#[tokio::test]
async fn test_stale_revocation_entry_does_not_block() {
    let clock = fixed_clock();
    let codec = codec_with(&test_config(), clock.clone());
    let issuer = TokenIssuer::new(codec.clone(), test_config(), clock.clone());
    let store = Arc::new(MockRevocationRepository::new(clock.clone()));
    let validator = TokenValidator::with_revocation(codec, store.clone());

    let pair = issuer.issue_pair(42).unwrap();
    store
        .add(&pair.refresh_token, 42, clock.now() + Duration::seconds(60))
        .await
        .unwrap();
    clock.advance(Duration::seconds(61));

    assert_eq!(validator.validate(&pair.refresh_token, TokenClass::Refresh).await, Ok(42));
}
