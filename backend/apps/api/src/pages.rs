//! Site Pages
//!
//! Handlebars-rendered pages. Public pages carry no user state; the
//! profile and settings pages receive the authenticated [`CurrentUser`]
//! from the session middleware as an explicit extension value.

use std::sync::Arc;

use axum::Extension;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use handlebars::Handlebars;
use serde::Serialize;

use auth::AuthConfig;
use auth::PgAuthRepository;
use auth::application::CheckSessionUseCase;
use auth::middleware::CurrentUser;

/// Compiled site templates
pub struct SiteViews {
    hbs: Handlebars<'static>,
}

impl SiteViews {
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.register_partial("site_nav", include_str!("../templates/partials/site_nav.hbs"))
            .expect("embedded nav partial is valid");

        let templates = [
            ("home", include_str!("../templates/home.hbs")),
            (
                "course-management",
                include_str!("../templates/course_management.hbs"),
            ),
            ("contact", include_str!("../templates/contact.hbs")),
            ("profile", include_str!("../templates/profile.hbs")),
            ("settings", include_str!("../templates/settings.hbs")),
        ];
        for (name, source) in templates {
            hbs.register_template_string(name, source)
                .expect("embedded site template is valid");
        }

        Self { hbs }
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Response {
        match self.hbs.render(name, data) {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                tracing::error!(template = name, error = %e, "Failed to render page");
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    Html("<!DOCTYPE html><html lang=\"uk\"><body><p>Сторінка тимчасово недоступна.</p></body></html>".to_string()),
                )
                    .into_response()
            }
        }
    }
}

impl Default for SiteViews {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared state for page handlers
#[derive(Clone)]
pub struct PagesState {
    pub views: Arc<SiteViews>,
    pub repo: Arc<PgAuthRepository>,
    pub auth_config: Arc<AuthConfig>,
}

// ============================================================================
// Template data
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PublicPageData {
    active: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserData {
    login: String,
    display_name: String,
    email: String,
    subscription_id: Option<String>,
    avatar_url: String,
}

impl From<&CurrentUser> for UserData {
    fn from(user: &CurrentUser) -> Self {
        Self {
            login: user.login.clone(),
            display_name: user.display_name.clone(),
            email: user.email.clone(),
            subscription_id: user.subscription_id.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserPageData {
    active: &'static str,
    user: UserData,
    welcome: Option<String>,
}

// ============================================================================
// Public pages
// ============================================================================

/// GET /
pub async fn home(State(state): State<PagesState>) -> Response {
    state
        .views
        .render("home", &PublicPageData { active: "home" })
}

/// GET /course-management
pub async fn course_management(State(state): State<PagesState>) -> Response {
    state
        .views
        .render("course-management", &PublicPageData { active: "courses" })
}

/// GET /contact
pub async fn contact(State(state): State<PagesState>) -> Response {
    state
        .views
        .render("contact", &PublicPageData { active: "contact" })
}

// ============================================================================
// Authenticated pages
// ============================================================================

/// GET /profile
///
/// Shows the one-shot welcome flash stashed at login.
pub async fn profile(
    State(state): State<PagesState>,
    Extension(user): Extension<CurrentUser>,
) -> Response {
    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.auth_config.clone());

    let welcome = match use_case.take_welcome_message(user.session_id).await {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to take welcome message");
            None
        }
    };

    state.views.render(
        "profile",
        &UserPageData {
            active: "profile",
            user: UserData::from(&user),
            welcome,
        },
    )
}

/// GET /settings
pub async fn settings(
    State(state): State<PagesState>,
    Extension(user): Extension<CurrentUser>,
) -> Response {
    state.views.render(
        "settings",
        &UserPageData {
            active: "settings",
            user: UserData::from(&user),
            welcome: None,
        },
    )
}
