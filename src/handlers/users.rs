//! GET /users, GET /users/favorites

use crate::error::AppError;
use crate::model::{Favorite, User};
use crate::response::ok;
use crate::service::{FavoriteService, UserService};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses((status = 200, description = "All users, without passwords", body = [User]))
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::list(&state.pool).await?;
    Ok(ok(users))
}

#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = "favorites",
    responses((status = 200, description = "Favorites of the current user", body = [Favorite]))
)]
pub async fn list_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::list_for_user(&state.pool, state.favorites_user_id).await?;
    Ok(ok(favorites))
}
