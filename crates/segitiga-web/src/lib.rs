//! Web front end for the Segitiga triangle calculator.
//!
//! Serves both calculator forms as server-rendered HTML (askama) and exposes
//! the same logic as a JSON endpoint. All decisions are made by
//! `segitiga-core`; this crate only maps requests onto a [`FormState`].
//!
//! [`FormState`]: segitiga_core::FormState

pub mod config;
pub mod error;
pub mod routes;
pub mod tracing_setup;
pub mod views;

use axum::{
    Router,
    routing::{get, post},
};
use segitiga_core::{Calculator, FormSet};
use segitiga_types::Locale;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::SegitigaConfig;

/// Shared, read-only request state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub forms: FormSet,
    pub locale: Locale,
}

impl AppState {
    pub fn new(locale: Locale) -> Self {
        Self { forms: FormSet::new(Arc::new(Calculator::with_locale(locale))), locale }
    }
}

pub fn create_app(config: &SegitigaConfig) -> Router {
    router(AppState::new(config.ui.locale))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index).post(routes::submit_form))
        .route("/api/calculate/:calculator", post(routes::calculate))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until the process is stopped.
pub async fn serve(config: SegitigaConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let app = create_app(&config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, locale = %config.ui.locale, "Segitiga web server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
