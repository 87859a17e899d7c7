use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use bleiner_contact::{
    ContactController, ContactForm, Field, SubmissionState, error_message_key,
};
use strum::VariantArray;

use crate::{
    routes::AppState,
    template::{Template, filters},
};

/// The contact form partial, embedded into pages as pre-rendered HTML.
#[derive(askama::Template, Default)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub name_error: Option<String>,
    pub email_error: Option<String>,
    pub phone_error: Option<String>,
    pub message_error: Option<String>,
    pub succeeded: bool,
    pub failed: bool,
}

impl ContactFormTemplate {
    pub fn from_controller(controller: &ContactController) -> Self {
        let form = controller.form();
        let errors = controller.errors();
        let state = controller.state();

        let message_for = |field| errors.code(field).map(error_message_key);

        Self {
            name: form.name,
            email: form.email,
            phone: form.phone,
            message: form.message,
            name_error: message_for(Field::Name),
            email_error: message_for(Field::Email),
            phone_error: message_for(Field::Phone),
            message_error: message_for(Field::Message),
            succeeded: state == SubmissionState::Succeeded,
            failed: state == SubmissionState::Failed,
        }
    }
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub site: crate::config::SiteConfig,
    pub contact: String,
}

pub async fn page(template: Template, State(app_state): State<AppState>) -> impl IntoResponse {
    let contact = template.to_string(ContactFormTemplate::default());

    template.render(ContactTemplate {
        site: app_state.config.site.clone(),
        contact,
    })
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ContactForm>,
) -> impl IntoResponse {
    let controller = ContactController::new(
        app_state.sender.clone(),
        app_state.config.contact.success_reset(),
    );

    for field in Field::VARIANTS {
        controller.update_field(*field, input.get(*field));
    }

    controller.submit().await;

    let contact = template.to_string(ContactFormTemplate::from_controller(&controller));

    template.render(ContactTemplate {
        site: app_state.config.site.clone(),
        contact,
    })
}
