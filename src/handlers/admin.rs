//! JSON admin over every table: list, create, read, patch, delete.
//! Path is `/admin/:resource[/:id]`; the resource segment picks the table.

use crate::error::AppError;
use crate::extractors::parse_id;
use crate::model::{
    CharacterChanges, NewCharacter, NewFavorite, NewPlanet, NewUser, PlanetChanges, UserChanges,
};
use crate::response::{created, ok, success};
use crate::service::{
    CharacterService, FavoriteService, PlanetService, RequestValidator, UserService,
};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Users,
    People,
    Planets,
    Favorites,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Users,
        Resource::People,
        Resource::Planets,
        Resource::Favorites,
    ];

    pub fn segment(self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::People => "people",
            Resource::Planets => "planets",
            Resource::Favorites => "favorites",
        }
    }

    /// Record type name used in messages.
    fn label(self) -> &'static str {
        match self {
            Resource::Users => "User",
            Resource::People => "Character",
            Resource::Planets => "Planet",
            Resource::Favorites => "Favorite",
        }
    }

    fn missing(self) -> AppError {
        AppError::NotFound(format!("{} id doesn't exist", self.label()))
    }
}

impl FromStr for Resource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.segment() == s)
            .ok_or_else(|| AppError::NotFound(format!("Unknown admin resource '{}'", s)))
    }
}

fn parse_body<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    serde_json::from_value(body).map_err(|e| AppError::BadRequest(format!("invalid body: {}", e)))
}

pub async fn index() -> impl IntoResponse {
    let resources: Vec<&str> = Resource::ALL.iter().map(|r| r.segment()).collect();
    ok(serde_json::json!({ "resources": resources }))
}

pub async fn list(
    State(state): State<AppState>,
    Path(resource): Path<String>,
) -> Result<Response, AppError> {
    let pool = &state.pool;
    Ok(match resource.parse::<Resource>()? {
        Resource::Users => ok(UserService::list(pool).await?).into_response(),
        Resource::People => ok(CharacterService::list(pool).await?).into_response(),
        Resource::Planets => ok(PlanetService::list(pool).await?).into_response(),
        Resource::Favorites => ok(FavoriteService::list(pool).await?).into_response(),
    })
}

pub async fn create(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let pool = &state.pool;
    let resource = resource.parse::<Resource>()?;
    let response = match resource {
        Resource::Users => {
            let new: NewUser = parse_body(body)?;
            RequestValidator::new_user(&new)?;
            created(UserService::create(pool, &new).await?).into_response()
        }
        Resource::People => {
            let new: NewCharacter = parse_body(body)?;
            RequestValidator::new_character(&new)?;
            created(CharacterService::create(pool, &new).await?).into_response()
        }
        Resource::Planets => {
            let new: NewPlanet = parse_body(body)?;
            RequestValidator::new_planet(&new)?;
            created(PlanetService::create(pool, &new).await?).into_response()
        }
        Resource::Favorites => {
            let new: NewFavorite = parse_body(body)?;
            let target = RequestValidator::new_favorite(&new)?;
            created(FavoriteService::add(pool, new.user_id, target).await?).into_response()
        }
    };
    tracing::info!(resource = resource.segment(), "admin create");
    Ok(response)
}

pub async fn read(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let pool = &state.pool;
    let resource = resource.parse::<Resource>()?;
    let id = parse_id(&id)?;
    Ok(match resource {
        Resource::Users => {
            let user = UserService::get(pool, id).await?;
            ok(user.ok_or_else(|| resource.missing())?).into_response()
        }
        Resource::People => {
            let character = CharacterService::get(pool, id).await?;
            ok(character.ok_or_else(|| resource.missing())?).into_response()
        }
        Resource::Planets => {
            let planet = PlanetService::get(pool, id).await?;
            ok(planet.ok_or_else(|| resource.missing())?).into_response()
        }
        Resource::Favorites => {
            let favorite = FavoriteService::get(pool, id).await?;
            ok(favorite.ok_or_else(|| resource.missing())?).into_response()
        }
    })
}

pub async fn update(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let pool = &state.pool;
    let resource = resource.parse::<Resource>()?;
    let id = parse_id(&id)?;
    let response = match resource {
        Resource::Users => {
            let changes: UserChanges = parse_body(body)?;
            RequestValidator::user_changes(&changes)?;
            let user = UserService::update(pool, id, &changes)
                .await?
                .ok_or_else(|| resource.missing())?;
            ok(user).into_response()
        }
        Resource::People => {
            let changes: CharacterChanges = parse_body(body)?;
            RequestValidator::character_changes(&changes)?;
            let character = CharacterService::update(pool, id, &changes)
                .await?
                .ok_or_else(|| resource.missing())?;
            ok(character).into_response()
        }
        Resource::Planets => {
            let changes: PlanetChanges = parse_body(body)?;
            RequestValidator::planet_changes(&changes)?;
            let planet = PlanetService::update(pool, id, &changes)
                .await?
                .ok_or_else(|| resource.missing())?;
            ok(planet).into_response()
        }
        Resource::Favorites => {
            return Err(AppError::BadRequest("favorites cannot be updated".into()));
        }
    };
    tracing::info!(resource = resource.segment(), id, "admin update");
    Ok(response)
}

pub async fn delete(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let pool = &state.pool;
    let resource = resource.parse::<Resource>()?;
    let id = parse_id(&id)?;
    let deleted = match resource {
        Resource::Users => UserService::delete(pool, id).await?,
        Resource::People => CharacterService::delete(pool, id).await?,
        Resource::Planets => PlanetService::delete(pool, id).await?,
        Resource::Favorites => FavoriteService::delete(pool, id).await?,
    };
    if !deleted {
        return Err(resource.missing());
    }
    tracing::info!(resource = resource.segment(), id, "admin delete");
    Ok(success(format!("Deleted {} {}", resource.label().to_lowercase(), id)).into_response())
}
