//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::PasswordDigest;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clean up expired sessions
    pub async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM sessions WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired sessions");

        Ok(deleted)
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                login,
                profile_name,
                email,
                password_digest,
                subscription_id,
                is_admin,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.login)
        .bind(&user.profile_name)
        .bind(&user.email)
        .bind(user.password_digest.as_str())
        .bind(&user.subscription_id)
        .bind(user.is_admin)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AuthError::AccountExists
            }
            other => AuthError::Database(other),
        })?;

        Ok(())
    }

    async fn find_by_login_or_email(&self, identifier: &str) -> AuthResult<Option<User>> {
        // Single identifier bound to both columns, first row wins.
        // Deliberately left without a tie-break; see DESIGN.md.
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                login,
                profile_name,
                email,
                password_digest,
                subscription_id,
                is_admin,
                created_at,
                updated_at
            FROM users
            WHERE login = $1 OR email = $1
            LIMIT 1
            "#,
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn exists_with_login_or_email(&self, login: &str, email: &str) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE login = $1 OR email = $2)",
        )
        .bind(login)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgAuthRepository {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                session_id,
                user_id,
                login,
                profile_name,
                email,
                subscription_id,
                display_name,
                avatar_url,
                welcome_message,
                expires_at_ms,
                created_at,
                last_activity_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(session.session_id)
        .bind(session.user_id.as_uuid())
        .bind(&session.login)
        .bind(&session.profile_name)
        .bind(&session.email)
        .bind(&session.subscription_id)
        .bind(&session.display_name)
        .bind(&session.avatar_url)
        .bind(&session.welcome_message)
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .bind(session.last_activity_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                session_id,
                user_id,
                login,
                profile_name,
                email,
                subscription_id,
                display_name,
                avatar_url,
                welcome_message,
                expires_at_ms,
                created_at,
                last_activity_at
            FROM sessions
            WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SessionRow::into_session))
    }

    async fn update_activity(&self, session: &Session) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE sessions SET
                last_activity_at = $2
            WHERE session_id = $1
            "#,
        )
        .bind(session.session_id)
        .bind(session.last_activity_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn take_welcome_message(&self, session_id: Uuid) -> AuthResult<Option<String>> {
        let message = sqlx::query_scalar::<_, Option<String>>(
            "SELECT welcome_message FROM sessions WHERE session_id = $1",
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?
        .flatten();

        if message.is_some() {
            sqlx::query("UPDATE sessions SET welcome_message = NULL WHERE session_id = $1")
                .bind(session_id)
                .execute(&self.pool)
                .await?;
        }

        Ok(message)
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        sqlx::query("DELETE FROM sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        self.cleanup_expired().await
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    login: String,
    profile_name: String,
    email: String,
    password_digest: String,
    subscription_id: Option<String>,
    is_admin: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_uuid(self.user_id),
            login: self.login,
            profile_name: self.profile_name,
            email: self.email,
            password_digest: PasswordDigest::from_stored(self.password_digest),
            subscription_id: self.subscription_id,
            is_admin: self.is_admin,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    user_id: Uuid,
    login: String,
    profile_name: String,
    email: String,
    subscription_id: Option<String>,
    display_name: String,
    avatar_url: String,
    welcome_message: Option<String>,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
    last_activity_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session {
            session_id: self.session_id,
            user_id: UserId::from_uuid(self.user_id),
            login: self.login,
            profile_name: self.profile_name,
            email: self.email,
            subscription_id: self.subscription_id,
            display_name: self.display_name,
            avatar_url: self.avatar_url,
            welcome_message: self.welcome_message,
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
            last_activity_at: self.last_activity_at,
        }
    }
}
