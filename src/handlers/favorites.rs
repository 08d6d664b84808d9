//! Add and remove favorites for the current user.
//!
//! Adding answers 200 with the new row. Only planet favorites can be removed.

use crate::error::{AppError, ErrorBody};
use crate::extractors::RecordId;
use crate::model::{Favorite, FavoriteTarget};
use crate::response::{ok, success, SuccessBody};
use crate::service::{CharacterService, FavoriteService, PlanetService};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    tag = "favorites",
    params(("id" = i64, Path, description = "Planet id")),
    responses(
        (status = 200, description = "The new favorite", body = Favorite),
        (status = 404, description = "Unknown planet", body = ErrorBody)
    )
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    if !PlanetService::exists(&state.pool, id).await? {
        return Err(AppError::NotFound("Planet id doesn't exist".into()));
    }
    let target = FavoriteTarget::Planet(id);
    let favorite = FavoriteService::add(&state.pool, state.favorites_user_id, target).await?;
    tracing::info!(favorite_id = favorite.id, planet_id = id, "planet added to favorites");
    Ok(ok(favorite))
}

#[utoipa::path(
    post,
    path = "/favorite/people/{id}",
    tag = "favorites",
    params(("id" = i64, Path, description = "Character id")),
    responses(
        (status = 200, description = "The new favorite", body = Favorite),
        (status = 404, description = "Unknown character", body = ErrorBody)
    )
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    if !CharacterService::exists(&state.pool, id).await? {
        return Err(AppError::NotFound("Character id doesn't exist".into()));
    }
    let target = FavoriteTarget::Character(id);
    let favorite = FavoriteService::add(&state.pool, state.favorites_user_id, target).await?;
    tracing::info!(favorite_id = favorite.id, character_id = id, "character added to favorites");
    Ok(ok(favorite))
}

#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    tag = "favorites",
    params(("id" = i64, Path, description = "Planet id")),
    responses(
        (status = 200, description = "Removed", body = SuccessBody),
        (status = 404, description = "Planet is not in user favorites", body = ErrorBody)
    )
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let favorite = FavoriteService::find_planet(&state.pool, state.favorites_user_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet is not in user favorites".into()))?;
    FavoriteService::delete(&state.pool, favorite.id).await?;
    tracing::info!(favorite_id = favorite.id, planet_id = id, "planet removed from favorites");
    Ok(success("Deleted planet from favorites"))
}
