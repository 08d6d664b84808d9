use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Row of `characters`, exposed as "people".
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CharacterChanges {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
}
