//! OpenAPI document for the public surface, served at `/openapi.json`.

use crate::error::ErrorBody;
use crate::model::{Character, Favorite, Planet, User};
use crate::response::SuccessBody;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Star Wars API",
        description = "Characters, planets, users and the current user's favorites."
    ),
    paths(
        crate::handlers::people::list_people,
        crate::handlers::people::get_person,
        crate::handlers::planets::list_planets,
        crate::handlers::planets::get_planet,
        crate::handlers::users::list_users,
        crate::handlers::users::list_favorites,
        crate::handlers::favorites::add_favorite_planet,
        crate::handlers::favorites::add_favorite_person,
        crate::handlers::favorites::delete_favorite_planet,
    ),
    components(schemas(Character, Planet, User, Favorite, ErrorBody, SuccessBody)),
    tags(
        (name = "people", description = "Characters"),
        (name = "planets", description = "Planets"),
        (name = "users", description = "Users"),
        (name = "favorites", description = "Favorites of the current user")
    )
)]
pub struct ApiDoc;
