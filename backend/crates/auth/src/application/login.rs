//! Login Use Case
//!
//! Authenticates a user by login or e-mail and creates a session.
//! Expected failures (missing fields, unknown identifier, wrong
//! password) are expressed in the [`LoginOutcome`] envelope.

use std::sync::Arc;

use http::StatusCode;
use platform::password::PlainPassword;

use crate::application::config::AuthConfig;
use crate::application::messages;
use crate::application::token::sign_session_token;
use crate::domain::entity::session::Session;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AuthResult;

/// Raw login form input
#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    /// Login or e-mail
    pub identifier: String,
    pub password: String,
}

/// Successful login: the persisted session and its cookie token
#[derive(Debug)]
pub struct LoginSuccess {
    pub session: Session,
    pub session_token: String,
}

/// Result envelope for login
#[derive(Debug)]
pub struct LoginOutcome {
    pub status: StatusCode,
    pub errors: Vec<String>,
    pub success: Option<LoginSuccess>,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        self.success.is_some()
    }

    fn failure(status: StatusCode, errors: Vec<String>) -> Self {
        Self {
            status,
            errors,
            success: None,
        }
    }
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutcome> {
        let identifier = input.identifier.trim().to_string();

        let mut errors = Vec::new();
        if identifier.is_empty() {
            errors.push(messages::IDENTIFIER_REQUIRED.to_string());
        }
        if input.password.is_empty() {
            errors.push(messages::PASSWORD_REQUIRED.to_string());
        }
        if !errors.is_empty() {
            return Ok(LoginOutcome::failure(StatusCode::BAD_REQUEST, errors));
        }

        let Some(user) = self.user_repo.find_by_login_or_email(&identifier).await? else {
            return Ok(LoginOutcome::failure(
                StatusCode::NOT_FOUND,
                vec![messages::ACCOUNT_NOT_FOUND.to_string()],
            ));
        };

        let password = PlainPassword::new(input.password);
        if !user.password_digest.verify(&password) {
            return Ok(LoginOutcome::failure(
                StatusCode::UNAUTHORIZED,
                vec![messages::WRONG_PASSWORD.to_string()],
            ));
        }

        let welcome = messages::welcome(user.display_name());
        let session = Session::for_user(&user, Some(welcome), self.config.session_ttl_chrono());

        self.session_repo.create(&session).await?;

        let session_token = sign_session_token(session.session_id, &self.config.session_secret);

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(LoginOutcome {
            status: StatusCode::OK,
            errors: Vec::new(),
            success: Some(LoginSuccess {
                session,
                session_token,
            }),
        })
    }
}
