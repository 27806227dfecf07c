//! Auth Middleware
//!
//! Middleware for pages that require an authenticated session. The
//! resolved user is inserted into request extensions as [`CurrentUser`]
//! so handlers receive an explicit context value instead of reaching
//! into ambient session state.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use kernel::id::UserId;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;

/// Authenticated user snapshot available to page handlers
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub session_id: Uuid,
    pub user_id: UserId,
    pub login: String,
    pub profile_name: String,
    pub email: String,
    pub subscription_id: Option<String>,
    pub display_name: String,
    pub avatar_url: String,
}

impl From<&Session> for CurrentUser {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.session_id,
            user_id: session.user_id,
            login: session.login.clone(),
            profile_name: session.profile_name.clone(),
            email: session.email.clone(),
            subscription_id: session.subscription_id.clone(),
            display_name: session.display_name.clone(),
            avatar_url: session.avatar_url.clone(),
        }
    }
}

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a live session
///
/// Unauthenticated requests are redirected to the register page.
pub async fn require_session<R>(
    state: AuthMiddlewareState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let Some(token) = token else {
        return Err(Redirect::to("/register").into_response());
    };

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let session = match use_case.get_session(&token).await {
        Ok(session) => session,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected session cookie");
            return Err(Redirect::to("/register").into_response());
        }
    };

    req.extensions_mut().insert(CurrentUser::from(&session));

    Ok(next.run(req).await)
}
