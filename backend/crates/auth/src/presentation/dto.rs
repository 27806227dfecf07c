//! Form DTOs and template data

use serde::{Deserialize, Serialize};

use crate::application::messages;
use crate::application::register::{RegisterInput, RegisterOutcome};
use crate::application::login::{LoginInput, LoginOutcome};

// ============================================================================
// Incoming forms
// ============================================================================

/// Registration form body (urlencoded)
///
/// Missing fields default to empty strings, mirroring what the validation
/// rules expect.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub profile_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password_confirm: String,
}

impl From<RegisterForm> for RegisterInput {
    fn from(form: RegisterForm) -> Self {
        Self {
            login: form.login,
            profile_name: form.profile_name,
            email: form.email,
            password: form.password,
            password_confirm: form.password_confirm,
        }
    }
}

/// Login form body (urlencoded)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub password: String,
}

impl From<LoginForm> for LoginInput {
    fn from(form: LoginForm) -> Self {
        Self {
            identifier: form.identifier,
            password: form.password,
        }
    }
}

// ============================================================================
// Template data
// ============================================================================

/// Echoed registration fields for the template
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterFormData {
    pub login: String,
    pub profile_name: String,
    pub email: String,
}

/// Everything the register/login page template needs
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPageData {
    pub register_form: RegisterFormData,
    pub register_errors: Vec<String>,
    pub register_success: Option<String>,
    pub login_errors: Vec<String>,
    pub login_success: Option<String>,
}

impl RegisterPageData {
    /// Empty form for `GET /register`
    pub fn empty() -> Self {
        Self::default()
    }

    /// Page data for a registration outcome
    pub fn from_register(outcome: &RegisterOutcome) -> Self {
        Self {
            register_form: RegisterFormData {
                login: outcome.form.login.clone(),
                profile_name: outcome.form.profile_name.clone(),
                email: outcome.form.email.clone(),
            },
            register_errors: outcome.errors.clone(),
            register_success: outcome.success.clone(),
            ..Self::default()
        }
    }

    /// Page data for a failed registration caused by an infrastructure error
    pub fn register_failed(form: &RegisterForm) -> Self {
        Self {
            register_form: RegisterFormData {
                login: form.login.clone(),
                profile_name: form.profile_name.clone(),
                email: form.email.clone(),
            },
            register_errors: vec![messages::REGISTER_FAILED.to_string()],
            ..Self::default()
        }
    }

    /// Page data for a failed login outcome
    pub fn from_login(outcome: &LoginOutcome) -> Self {
        Self {
            login_errors: outcome.errors.clone(),
            ..Self::default()
        }
    }

    /// Page data for a failed login caused by an infrastructure error
    pub fn login_failed() -> Self {
        Self {
            login_errors: vec![messages::LOGIN_FAILED.to_string()],
            ..Self::default()
        }
    }
}
