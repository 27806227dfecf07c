//! User-facing message catalog (Ukrainian)
//!
//! All texts shown on the register/login page live here so the use cases
//! stay free of literals and the error lists remain deterministic.

pub const LOGIN_TOO_SHORT: &str = "Вкажіть логін щонайменше з 3 символів.";
pub const PROFILE_NAME_TOO_SHORT: &str = "Ім'я профілю має містити щонайменше 2 символи.";
pub const EMAIL_REQUIRED: &str = "Вкажіть електронну адресу.";
pub const EMAIL_INVALID: &str = "Електронна адреса має некоректний формат.";
pub const PASSWORD_TOO_SHORT: &str = "Пароль має містити щонайменше 6 символів.";
pub const PASSWORD_CONFIRM_REQUIRED: &str = "Підтвердіть пароль.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Паролі не співпадають.";

pub const ACCOUNT_EXISTS: &str =
    "Користувач із таким логіном або електронною адресою вже існує.";
pub const REGISTER_SUCCESS: &str =
    "Обліковий запис успішно створено! Тепер ви можете увійти.";
pub const REGISTER_FAILED: &str =
    "Сталася помилка під час створення акаунта. Спробуйте ще раз пізніше.";

pub const IDENTIFIER_REQUIRED: &str = "Вкажіть логін або електронну адресу.";
pub const PASSWORD_REQUIRED: &str = "Вкажіть пароль.";
pub const ACCOUNT_NOT_FOUND: &str = "Обліковий запис не знайдено.";
pub const WRONG_PASSWORD: &str = "Невірний пароль.";
pub const LOGIN_FAILED: &str = "Сталася помилка під час входу. Спробуйте ще раз пізніше.";

/// Welcome flash shown once after login
pub fn welcome(display_name: &str) -> String {
    format!("Ласкаво просимо, {display_name}!")
}
