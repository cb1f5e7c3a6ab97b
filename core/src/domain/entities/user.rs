//! User record as seen by the session layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered user, resolved from a token subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    pub first_name: String,

    pub last_name: String,

    pub email: String,

    pub created_at: DateTime<Utc>,
}
