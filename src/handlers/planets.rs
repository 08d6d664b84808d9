//! GET /planets, GET /planets/{id}

use crate::error::{AppError, ErrorBody};
use crate::extractors::RecordId;
use crate::model::Planet;
use crate::response::ok;
use crate::service::PlanetService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/planets",
    tag = "planets",
    responses((status = 200, description = "All planets", body = [Planet]))
)]
pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::list(&state.pool).await?;
    Ok(ok(planets))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = "planets",
    params(("id" = i64, Path, description = "Planet id")),
    responses(
        (status = 200, description = "The planet", body = Planet),
        (status = 404, description = "Unknown id", body = ErrorBody)
    )
)]
pub async fn get_planet(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet id doesn't exist".into()))?;
    Ok(ok(planet))
}
