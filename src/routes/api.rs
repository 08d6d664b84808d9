//! Public routes: people, planets, users, favorites.

use crate::handlers::{
    add_favorite_person, add_favorite_planet, delete_favorite_planet, get_person, get_planet,
    list_favorites, list_people, list_planets, list_users,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/people", get(list_people))
        .route("/people/:id", get(get_person))
        .route("/planets", get(list_planets))
        .route("/planets/:id", get(get_planet))
        .route("/users", get(list_users))
        .route("/users/favorites", get(list_favorites))
        .route("/favorite/planet/:id", post(add_favorite_planet).delete(delete_favorite_planet))
        .route("/favorite/people/:id", post(add_favorite_person))
        .with_state(state)
}
