//! GET /people, GET /people/{id}

use crate::error::{AppError, ErrorBody};
use crate::extractors::RecordId;
use crate::model::Character;
use crate::response::ok;
use crate::service::CharacterService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/people",
    tag = "people",
    responses((status = 200, description = "All characters", body = [Character]))
)]
pub async fn list_people(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let people = CharacterService::list(&state.pool).await?;
    Ok(ok(people))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = "people",
    params(("id" = i64, Path, description = "Character id")),
    responses(
        (status = 200, description = "The character", body = Character),
        (status = 404, description = "Unknown id", body = ErrorBody)
    )
)]
pub async fn get_person(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Character id doesn't exist".into()))?;
    Ok(ok(character))
}
