//! Register Page View
//!
//! Handlebars rendering of the combined register/login page. The template
//! is embedded at compile time.

use handlebars::Handlebars;

use crate::presentation::dto::RegisterPageData;

const REGISTER_TEMPLATE: &str = include_str!("../../templates/register.hbs");

/// Compiled register page template
pub struct RegisterView {
    hbs: Handlebars<'static>,
}

impl RegisterView {
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.register_template_string("register", REGISTER_TEMPLATE)
            .expect("embedded register template is valid");

        Self { hbs }
    }

    /// Render the page; a template failure degrades to a minimal page
    pub fn render(&self, data: &RegisterPageData) -> String {
        match self.hbs.render("register", data) {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(error = %e, "Failed to render register page");
                "<!DOCTYPE html><html lang=\"uk\"><body><p>Сторінка тимчасово недоступна.</p></body></html>"
                    .to_string()
            }
        }
    }
}

impl Default for RegisterView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::messages;

    #[test]
    fn test_renders_empty_form() {
        let view = RegisterView::new();
        let html = view.render(&RegisterPageData::empty());

        assert!(html.contains("name=\"login\""));
        assert!(html.contains("name=\"passwordConfirm\""));
        assert!(html.contains("action=\"/login\""));
    }

    #[test]
    fn test_renders_errors_and_echo() {
        let mut data = RegisterPageData::empty();
        data.register_form.login = "taras".to_string();
        data.register_errors = vec![messages::EMAIL_INVALID.to_string()];

        let view = RegisterView::new();
        let html = view.render(&data);

        assert!(html.contains("value=\"taras\""));
        assert!(html.contains(messages::EMAIL_INVALID));
    }

    #[test]
    fn test_renders_success_message() {
        let mut data = RegisterPageData::empty();
        data.register_success = Some(messages::REGISTER_SUCCESS.to_string());

        let view = RegisterView::new();
        let html = view.render(&data);

        assert!(html.contains(messages::REGISTER_SUCCESS));
    }
}
