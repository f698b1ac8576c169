use axum::extract::State;
use axum::Json;

use crate::api::AppState;
use crate::domain::EntityKind;
use crate::error::AppError;

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "environment": state.environment.to_string(),
    }))
}

/// Ready once reference data has been seeded.
pub async fn ready(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let countries = state.repo.get_all(EntityKind::Country).await?;
    let status = if countries.is_empty() {
        "seeding"
    } else {
        "ready"
    };
    Ok(Json(serde_json::json!({ "status": status })))
}
