use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::SqlitePool;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserStore;
use crate::user::errors::AuthError;

pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    username: String,
    password_hash: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = AuthError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId(row.id),
            email: EmailAddress::new(row.email)?,
            username: Username::new(row.username)?,
            password_hash: row.password_hash,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn create(&self, user: NewUser) -> Result<User, AuthError> {
        // An explicit transaction, committed before this returns: fetching
        // the RETURNING row alone does not wait for SQLite to commit the
        // implicit write, and a lookup on another pooled connection could
        // still see the pre-insert snapshot.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, username, password_hash, is_active, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, email, username, password_hash, is_active, created_at
            "#,
        )
        .bind(user.email.as_str())
        .bind(user.username.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.is_active)
        .bind(user.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    // SQLite reports the violated column in the message,
                    // e.g. "UNIQUE constraint failed: users.email"
                    let message = db_err.message();
                    if message.contains("users.email") {
                        return AuthError::DuplicateEmail(user.email.as_str().to_string());
                    }
                    if message.contains("users.username") {
                        return AuthError::DuplicateUsername(user.username.as_str().to_string());
                    }
                }
            }
            AuthError::Storage(e.to_string())
        })?;

        tx.commit()
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        User::try_from(row)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, username, password_hash, is_active, created_at
            FROM users
            WHERE email = ?1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Storage(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, username, password_hash, is_active, created_at
            FROM users
            WHERE username = ?1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Storage(e.to_string()))?;

        row.map(User::try_from).transpose()
    }
}
