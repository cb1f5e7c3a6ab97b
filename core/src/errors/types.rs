//! Token error taxonomy
//!
//! Every reason a token can be refused, or a pair can fail to be minted.
//! The HTTP gate collapses all of them into one opaque denial; first-party
//! credential endpoints surface them by message.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid token signature")]
    SignatureInvalid,

    #[error("token has expired")]
    Expired,

    #[error("token is not valid yet")]
    NotYetValid,

    #[error("expected {expected} token, got {actual}")]
    WrongTokenClass { expected: String, actual: String },

    #[error("invalid user ID in token")]
    MalformedSubject,

    #[error("token has been revoked")]
    TokenRevoked,

    #[error("failed to check token revocation")]
    RevocationCheckFailed,

    #[error("user not found")]
    UnknownUser,

    #[error("invalid configuration for {setting}: {value:?}")]
    ConfigurationInvalid { setting: String, value: String },

    #[error("unknown token type: {value}")]
    UnknownTokenType { value: String },

    #[error("failed to sign token")]
    SigningFailed,
}

impl TokenError {
    /// Stable machine-readable code, used in logs
    pub fn error_code(&self) -> &'static str {
        match self {
            TokenError::SignatureInvalid => "signature_invalid",
            TokenError::Expired => "expired",
            TokenError::NotYetValid => "not_yet_valid",
            TokenError::WrongTokenClass { .. } => "wrong_token_class",
            TokenError::MalformedSubject => "malformed_subject",
            TokenError::TokenRevoked => "token_revoked",
            TokenError::RevocationCheckFailed => "revocation_check_failed",
            TokenError::UnknownUser => "unknown_user",
            TokenError::ConfigurationInvalid { .. } => "configuration_invalid",
            TokenError::UnknownTokenType { .. } => "unknown_token_type",
            TokenError::SigningFailed => "signing_failed",
        }
    }

    /// Whether the failure is a server-side fault rather than a bad credential
    pub fn is_server_fault(&self) -> bool {
        matches!(
            self,
            TokenError::RevocationCheckFailed
                | TokenError::ConfigurationInvalid { .. }
                | TokenError::UnknownTokenType { .. }
                | TokenError::SigningFailed
        )
    }
}
