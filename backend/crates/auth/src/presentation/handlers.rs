//! HTTP Handlers
//!
//! The handlers only map result envelopes to responses: failures
//! re-render the register page with the envelope's status, a successful
//! login sets the session cookie and redirects.

use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::application::config::AuthConfig;
use crate::application::{LoginOutcome, LoginUseCase, LogoutUseCase, RegisterUseCase};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::presentation::dto::{LoginForm, RegisterForm, RegisterPageData};
use crate::presentation::views::RegisterView;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub view: Arc<RegisterView>,
}

// ============================================================================
// Register
// ============================================================================

/// GET /register
pub async fn show_register<R>(State(state): State<AuthAppState<R>>) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    render_page(&state, StatusCode::OK, &RegisterPageData::empty())
}

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<RegisterForm>,
) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone());

    match use_case.execute(form.clone().into()).await {
        Ok(outcome) => render_page(&state, outcome.status, &RegisterPageData::from_register(&outcome)),
        Err(e) => {
            e.log();
            render_page(
                &state,
                StatusCode::INTERNAL_SERVER_ERROR,
                &RegisterPageData::register_failed(&form),
            )
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<LoginForm>,
) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    match use_case.execute(form.into()).await {
        Ok(LoginOutcome {
            success: Some(success),
            ..
        }) => {
            // Welcome flash travels with the session row; the profile
            // page consumes it on first render.
            let cookie = state
                .config
                .session_cookie()
                .build_set_cookie(&success.session_token);

            ([(header::SET_COOKIE, cookie)], Redirect::to("/profile")).into_response()
        }
        Ok(outcome) => render_page(&state, outcome.status, &RegisterPageData::from_login(&outcome)),
        Err(e) => {
            e.log();
            render_page(
                &state,
                StatusCode::INTERNAL_SERVER_ERROR,
                &RegisterPageData::login_failed(),
            )
        }
    }
}

// ============================================================================
// Logout
// ============================================================================

/// POST /logout
pub async fn logout<R>(State(state): State<AuthAppState<R>>, headers: HeaderMap) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    if let Some(token) = token {
        let use_case = LogoutUseCase::new(state.repo.clone(), state.config.clone());
        // Redirect home regardless of the outcome
        if let Err(e) = use_case.execute(&token).await {
            e.log();
        }
    }

    let cookie = state.config.session_cookie().build_delete_cookie();

    ([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response()
}

// ============================================================================
// Helper Functions
// ============================================================================

fn render_page<R>(state: &AuthAppState<R>, status: StatusCode, data: &RegisterPageData) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    (status, Html(state.view.render(data))).into_response()
}
