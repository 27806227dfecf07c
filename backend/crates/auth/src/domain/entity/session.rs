//! Session Entity
//!
//! Server-side session row referenced by a cookie token. Carries a
//! denormalized snapshot of the authenticated user so page handlers
//! never need a second lookup.

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserId;
use uuid::Uuid;

use crate::domain::entity::user::User;

/// Default avatar shipped with the static assets
pub const DEFAULT_AVATAR_URL: &str = "/img/avatar-default.svg";

/// Auth session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    /// Reference to the user row
    pub user_id: UserId,
    /// Snapshot: login
    pub login: String,
    /// Snapshot: profile name
    pub profile_name: String,
    /// Snapshot: e-mail
    pub email: String,
    /// Snapshot: subscription reference
    pub subscription_id: Option<String>,
    /// Snapshot: name to greet with (profile name or login)
    pub display_name: String,
    /// Snapshot: avatar reference
    pub avatar_url: String,
    /// One-shot welcome flash, consumed by the first profile render
    pub welcome_message: Option<String>,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp
    pub last_activity_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session for a freshly authenticated user
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn for_user(user: &User, welcome_message: Option<String>, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id: user.user_id,
            login: user.login.clone(),
            profile_name: user.profile_name.clone(),
            email: user.email.clone(),
            subscription_id: user.subscription_id.clone(),
            display_name: user.display_name().to_string(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
            welcome_message,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
            last_activity_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Update last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }

    /// Get remaining time until expiration
    pub fn remaining_ms(&self) -> i64 {
        let now_ms = Utc::now().timestamp_millis();
        (self.expires_at_ms - now_ms).max(0)
    }
}
