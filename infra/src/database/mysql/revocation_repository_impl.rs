//! MySQL implementation of the RevocationRepository trait.
//!
//! Rows live in `blacklisted_tokens`, keyed uniquely by the token string.
//! Every time predicate binds the injected clock's instant instead of
//! `NOW()`, so the database and the token codec agree on what "expired" means.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use pb_core::clock::Clock;
use pb_core::domain::entities::revocation::RevocationEntry;
use pb_core::errors::DomainError;
use pb_core::repositories::RevocationRepository;

/// MySQL implementation of RevocationRepository
pub struct MySqlRevocationRepository {
    pool: MySqlPool,
    clock: Arc<dyn Clock>,
}

impl MySqlRevocationRepository {
    pub fn new(pool: MySqlPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }

    fn row_to_entry(row: &sqlx::mysql::MySqlRow) -> Result<RevocationEntry, DomainError> {
        Ok(RevocationEntry {
            token: row
                .try_get("token")
                .map_err(|e| DomainError::store(format!("Failed to get token: {}", e)))?,
            user_id: row
                .try_get("user_id")
                .map_err(|e| DomainError::store(format!("Failed to get user_id: {}", e)))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::store(format!("Failed to get expires_at: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::store(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl RevocationRepository for MySqlRevocationRepository {
    async fn add(
        &self,
        token: &str,
        user_id: i64,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        // The no-op update keeps the first row intact on a duplicate token
        let query = r#"
            INSERT INTO blacklisted_tokens (token, user_id, expires_at, created_at)
            VALUES (?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE token = token
        "#;

        sqlx::query(query)
            .bind(token)
            .bind(user_id)
            .bind(expires_at)
            .bind(self.clock.now())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to blacklist token: {}", e)))?;

        Ok(())
    }

    async fn is_blacklisted(&self, token: &str) -> Result<bool, DomainError> {
        let query = r#"
            SELECT COUNT(*) AS hits
            FROM blacklisted_tokens
            WHERE token = ? AND expires_at > ?
        "#;

        let row = sqlx::query(query)
            .bind(token)
            .bind(self.clock.now())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to check blacklist: {}", e)))?;

        let hits: i64 = row
            .try_get("hits")
            .map_err(|e| DomainError::store(format!("Failed to get hits: {}", e)))?;

        Ok(hits > 0)
    }

    async fn cleanup_expired(&self) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM blacklisted_tokens WHERE expires_at <= ?")
            .bind(self.clock.now())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to clean up blacklist: {}", e)))?;

        Ok(result.rows_affected() as usize)
    }

    async fn find(&self, token: &str) -> Result<Option<RevocationEntry>, DomainError> {
        let query = r#"
            SELECT token, user_id, expires_at, created_at
            FROM blacklisted_tokens
            WHERE token = ?
        "#;

        let row = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to find blacklist entry: {}", e)))?;

        row.as_ref().map(Self::row_to_entry).transpose()
    }
}
