use axum::{
    RequestPartsExt,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

use bleiner_content::Language;

use crate::language::UserLanguage;

pub(crate) mod filters {
    #[askama::filter_fn]
    pub fn t(value: impl AsRef<str>, values: &dyn askama::Values) -> askama::Result<String> {
        let preferred_language = askama::get_value::<String>(values, "preferred_language")
            .expect("Unable to get preferred_language from askama::get_value");

        Ok(rust_i18n::t!(value.as_ref(), locale = preferred_language).to_string())
    }
}

/// Per-request rendering context: resolved language plus the site
/// configuration, injected into every template as askama values.
pub struct Template {
    pub language: Language,
    config: crate::config::Config,
}

impl Template {
    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert(
            "preferred_language",
            Box::new(self.language.locale().to_owned()),
        );
        values.insert("config", Box::new(self.config.clone()));

        template.render_with_values(&values)
    }

    /// Render a partial into a string, for embedding into a page
    /// template with the `safe` filter.
    pub fn to_string<T: askama::Template>(&self, template: T) -> String {
        match self.render_with_values(template) {
            Ok(html) => html,
            Err(err) => format!("Failed to render template. Error: {err}"),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template. Error: {err}"),
            )
                .into_response(),
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        let UserLanguage(language) = parts
            .extract::<UserLanguage>()
            .await
            .expect("Unable to extract user language");

        Ok(Template {
            language,
            config: state.config.clone(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;
