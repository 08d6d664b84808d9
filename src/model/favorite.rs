use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Row of `favorites`. One of `planet_id` / `character_id` is set per row.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: Option<i64>,
    pub character_id: Option<i64>,
}

/// What a favorite points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i64),
    Character(i64),
}

impl FavoriteTarget {
    pub fn planet_id(self) -> Option<i64> {
        match self {
            FavoriteTarget::Planet(id) => Some(id),
            FavoriteTarget::Character(_) => None,
        }
    }

    pub fn character_id(self) -> Option<i64> {
        match self {
            FavoriteTarget::Character(id) => Some(id),
            FavoriteTarget::Planet(_) => None,
        }
    }
}

/// Admin-side favorite body; validated into a [`FavoriteTarget`] before insert.
#[derive(Clone, Debug, Deserialize)]
pub struct NewFavorite {
    pub user_id: i64,
    pub planet_id: Option<i64>,
    pub character_id: Option<i64>,
}

impl NewFavorite {
    /// `None` unless exactly one target is set.
    pub fn target(&self) -> Option<FavoriteTarget> {
        match (self.planet_id, self.character_id) {
            (Some(p), None) => Some(FavoriteTarget::Planet(p)),
            (None, Some(c)) => Some(FavoriteTarget::Character(c)),
            _ => None,
        }
    }
}
