pub mod config;
pub mod language;
pub mod observability;
pub mod routes;
pub mod template;

use std::sync::Arc;

use bleiner_contact::{MessageSender, SimulatedSender};

pub use routes::AppState;

rust_i18n::i18n!("locales", fallback = "de");

/// Build the full application router from a configuration.
///
/// Shared by the `serve` command and the integration tests, which drive
/// the router directly without binding a socket.
pub fn create_app(config: config::Config) -> axum::Router {
    let sender: Arc<dyn MessageSender> =
        Arc::new(SimulatedSender::new(config.contact.send_delay()));

    routes::router(AppState { config, sender })
}
