pub mod countries;
pub mod health;

use crate::config::Environment;
use crate::repository::Repository;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Every route the server exposes, as `(method, path)`.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/health"),
    ("GET", "/ready"),
    ("GET", "/countries"),
    ("GET", "/countries/:code"),
];

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn Repository>,
    pub environment: Environment,
}

impl AppState {
    pub fn new(repo: Arc<dyn Repository>, environment: Environment) -> Self {
        Self { repo, environment }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/countries", get(countries::list_countries))
        .route("/countries/:code", get(countries::get_country))
        .layer(cors)
        .with_state(state)
}
