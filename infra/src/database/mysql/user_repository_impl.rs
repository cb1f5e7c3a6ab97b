//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use pb_core::domain::entities::user::User;
use pb_core::errors::DomainError;
use pb_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, first_name, last_name, email, created_at
            FROM users
            WHERE id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to find user: {}", e)))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let user = User {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::store(format!("Failed to get id: {}", e)))?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| DomainError::store(format!("Failed to get first_name: {}", e)))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| DomainError::store(format!("Failed to get last_name: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::store(format!("Failed to get email: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::store(format!("Failed to get created_at: {}", e)))?,
        };

        Ok(Some(user))
    }
}
