use axum::extract::{Path, State};
use axum::Json;

use crate::api::AppState;
use crate::domain::{Country, EntityKind};
use crate::error::AppError;

pub async fn list_countries(State(state): State<AppState>) -> Result<Json<Vec<Country>>, AppError> {
    let countries: Vec<Country> = state
        .repo
        .get_all(EntityKind::Country)
        .await?
        .iter()
        .filter_map(|e| e.as_country().cloned())
        .collect();

    Ok(Json(countries))
}

pub async fn get_country(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Country>, AppError> {
    let code = code.trim().to_uppercase();
    if code.is_empty() {
        return Err(AppError::BadRequest("Country code must not be empty".into()));
    }

    state
        .repo
        .get(EntityKind::Country, &code)
        .await?
        .and_then(|e| e.as_country().cloned())
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Country {} not found", code)))
}
