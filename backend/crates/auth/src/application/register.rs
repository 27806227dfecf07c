//! Register Use Case
//!
//! Validates the registration form, checks for an existing account and
//! creates the user. Every expected outcome is expressed as a
//! [`RegisterOutcome`] envelope; only infrastructure failures are `Err`.

use std::sync::Arc;

use http::StatusCode;
use platform::password::PlainPassword;

use crate::application::messages;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Raw registration form input
#[derive(Debug, Clone, Default)]
pub struct RegisterInput {
    pub login: String,
    pub profile_name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Trimmed form fields echoed back into the re-rendered form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFormEcho {
    pub login: String,
    pub profile_name: String,
    pub email: String,
}

/// Result envelope for registration
///
/// Exactly one of `success` / non-empty `errors` holds. The status code
/// is the HTTP intent; the presentation layer maps it without business
/// knowledge.
#[derive(Debug)]
pub struct RegisterOutcome {
    pub status: StatusCode,
    pub form: RegisterFormEcho,
    pub errors: Vec<String>,
    pub success: Option<String>,
}

impl RegisterOutcome {
    pub fn is_success(&self) -> bool {
        self.success.is_some()
    }

    fn failure(status: StatusCode, form: RegisterFormEcho, errors: Vec<String>) -> Self {
        Self {
            status,
            form,
            errors,
            success: None,
        }
    }

    fn created() -> Self {
        Self {
            status: StatusCode::CREATED,
            form: RegisterFormEcho::default(),
            errors: Vec::new(),
            success: Some(messages::REGISTER_SUCCESS.to_string()),
        }
    }
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutcome> {
        let (form, errors) = validate(&input);

        if !errors.is_empty() {
            return Ok(RegisterOutcome::failure(
                StatusCode::BAD_REQUEST,
                form,
                errors,
            ));
        }

        if self
            .user_repo
            .exists_with_login_or_email(&form.login, &form.email)
            .await?
        {
            return Ok(RegisterOutcome::failure(
                StatusCode::CONFLICT,
                form,
                vec![messages::ACCOUNT_EXISTS.to_string()],
            ));
        }

        let digest = PlainPassword::new(input.password).digest();
        let user = User::new(&form.login, &form.profile_name, &form.email, digest);

        match self.user_repo.create(&user).await {
            Ok(()) => {}
            // Lost the check-then-insert race: the unique constraint
            // reports what the existence check missed.
            Err(AuthError::AccountExists) => {
                return Ok(RegisterOutcome::failure(
                    StatusCode::CONFLICT,
                    form,
                    vec![messages::ACCOUNT_EXISTS.to_string()],
                ));
            }
            Err(e) => return Err(e),
        }

        tracing::info!(
            user_id = %user.user_id,
            login = %user.login,
            "User registered"
        );

        Ok(RegisterOutcome::created())
    }
}

/// Collect all violated rules; the order is fixed so the rendered list
/// is deterministic.
fn validate(input: &RegisterInput) -> (RegisterFormEcho, Vec<String>) {
    let form = RegisterFormEcho {
        login: input.login.trim().to_string(),
        profile_name: input.profile_name.trim().to_string(),
        email: input.email.trim().to_string(),
    };

    let mut errors = Vec::new();

    if form.login.chars().count() < 3 {
        errors.push(messages::LOGIN_TOO_SHORT.to_string());
    }

    if form.profile_name.chars().count() < 2 {
        errors.push(messages::PROFILE_NAME_TOO_SHORT.to_string());
    }

    if form.email.is_empty() {
        errors.push(messages::EMAIL_REQUIRED.to_string());
    } else if !is_valid_email(&form.email) {
        errors.push(messages::EMAIL_INVALID.to_string());
    }

    if input.password.chars().count() < 6 {
        errors.push(messages::PASSWORD_TOO_SHORT.to_string());
    }

    if input.password_confirm.is_empty() {
        errors.push(messages::PASSWORD_CONFIRM_REQUIRED.to_string());
    } else if !input.password.is_empty() && input.password != input.password_confirm {
        errors.push(messages::PASSWORDS_DO_NOT_MATCH.to_string());
    }

    (form, errors)
}

/// `local@domain.tld` shape: no whitespace, a single `@`, and a dot with
/// something after it in the domain part.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));

        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@@example.com"));
    }

    #[test]
    fn test_validation_collects_all_errors_in_order() {
        let input = RegisterInput {
            login: "ab".to_string(),
            profile_name: "A".to_string(),
            email: "bad".to_string(),
            password: "12345".to_string(),
            password_confirm: "12345".to_string(),
        };

        let (form, errors) = validate(&input);

        assert_eq!(form.login, "ab");
        assert_eq!(
            errors,
            vec![
                messages::LOGIN_TOO_SHORT.to_string(),
                messages::PROFILE_NAME_TOO_SHORT.to_string(),
                messages::EMAIL_INVALID.to_string(),
                messages::PASSWORD_TOO_SHORT.to_string(),
            ]
        );
    }

    #[test]
    fn test_validation_trims_fields() {
        let input = RegisterInput {
            login: "  taras  ".to_string(),
            profile_name: " Тарас ".to_string(),
            email: " taras@example.com ".to_string(),
            password: "secret123".to_string(),
            password_confirm: "secret123".to_string(),
        };

        let (form, errors) = validate(&input);

        assert!(errors.is_empty());
        assert_eq!(form.login, "taras");
        assert_eq!(form.profile_name, "Тарас");
        assert_eq!(form.email, "taras@example.com");
    }

    #[test]
    fn test_missing_confirm_reported_without_mismatch() {
        let input = RegisterInput {
            login: "taras".to_string(),
            profile_name: "Тарас".to_string(),
            email: "taras@example.com".to_string(),
            password: "secret123".to_string(),
            password_confirm: String::new(),
        };

        let (_, errors) = validate(&input);
        assert_eq!(errors, vec![messages::PASSWORD_CONFIRM_REQUIRED.to_string()]);
    }

    #[test]
    fn test_mismatched_confirm() {
        let input = RegisterInput {
            login: "taras".to_string(),
            profile_name: "Тарас".to_string(),
            email: "taras@example.com".to_string(),
            password: "secret123".to_string(),
            password_confirm: "secret124".to_string(),
        };

        let (_, errors) = validate(&input);
        assert_eq!(errors, vec![messages::PASSWORDS_DO_NOT_MATCH.to_string()]);
    }
}
