use std::sync::Arc;

use axum::{Router, response::IntoResponse, routing::get};
use bleiner_contact::MessageSender;
use tower_http::trace::TraceLayer;

use crate::template::{NotFoundTemplate, Template};

mod assets;
mod contact;
mod health;
mod index;
mod lang;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub sender: Arc<dyn MessageSender>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    let response = template.render(NotFoundTemplate);
    (axum::http::StatusCode::NOT_FOUND, response)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/lang/{tag}", get(lang::action))
        .fallback(fallback)
        .nest_service("/static", assets::AssetsService::new())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
