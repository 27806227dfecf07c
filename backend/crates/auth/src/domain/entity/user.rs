//! User Entity
//!
//! Registered account. Created on successful registration and never
//! mutated afterwards; there is no deletion path.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::PasswordDigest;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Login name (unique)
    pub login: String,
    /// Profile name shown on the site
    pub profile_name: String,
    /// E-mail address (unique)
    pub email: String,
    /// Password digest, never the plaintext
    pub password_digest: PasswordDigest,
    /// Optional subscription reference (max 32 chars at the storage layer)
    pub subscription_id: Option<String>,
    /// Administrator flag
    pub is_admin: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new regular user
    pub fn new(
        login: impl Into<String>,
        profile_name: impl Into<String>,
        email: impl Into<String>,
        password_digest: PasswordDigest,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            login: login.into(),
            profile_name: profile_name.into(),
            email: email.into(),
            password_digest,
            subscription_id: None,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Name to greet the user with: profile name, falling back to login
    pub fn display_name(&self) -> &str {
        if self.profile_name.is_empty() {
            &self.login
        } else {
            &self.profile_name
        }
    }
}
