// Database repository for user records

use sqlx::PgPool;

use crate::auth::error::AuthError;
use crate::auth::models::{PublicUser, User};

/// User repository for database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user
    /// A duplicate email trips the unique constraint and maps to
    /// EmailAlreadyExists
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AuthError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) \
             RETURNING id, name, email, password_hash, created_at",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AuthError::EmailAlreadyExists;
                }
            }
            AuthError::DatabaseError(e.to_string())
        })?;

        Ok(user)
    }

    /// Find a user by email, compared exactly as stored
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(user)
    }

    /// Load the public fields for a user id
    /// The credential hash is never selected on this path
    pub async fn find_public_by_id(&self, id: i32) -> Result<Option<PublicUser>, AuthError> {
        let user = sqlx::query_as::<_, PublicUser>(
            "SELECT id, name, email FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(user)
    }
}
