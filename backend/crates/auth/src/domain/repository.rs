//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{session::Session, user::User};
use crate::error::AuthResult;
use uuid::Uuid;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user
    ///
    /// Returns `AuthError::AccountExists` when the storage uniqueness
    /// constraint on login or email is violated (covers the race between
    /// the existence check and the insert).
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find a user whose login OR email equals the identifier
    ///
    /// At most one record is returned; when a login collides with another
    /// user's email string the winner is unspecified, matching the
    /// observed behavior (see DESIGN.md).
    async fn find_by_login_or_email(&self, identifier: &str) -> AuthResult<Option<User>>;

    /// Check if any user holds the login or the email
    async fn exists_with_login_or_email(&self, login: &str, email: &str) -> AuthResult<bool>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>>;

    /// Update last activity timestamp
    async fn update_activity(&self, session: &Session) -> AuthResult<()>;

    /// Take the one-shot welcome message, clearing it
    async fn take_welcome_message(&self, session_id: Uuid) -> AuthResult<Option<String>>;

    /// Delete a session
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
