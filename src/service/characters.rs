//! Queries against `characters`.

use crate::error::AppError;
use crate::model::{Character, CharacterChanges, NewCharacter};
use sqlx::AnyPool;

const COLUMNS: &str = "id, name, gender, birth_year, height, eye_color, hair_color";

pub struct CharacterService;

impl CharacterService {
    /// Every character, ordered by id.
    pub async fn list(pool: &AnyPool) -> Result<Vec<Character>, AppError> {
        let sql = format!("SELECT {} FROM characters ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql).fetch_all(pool).await?)
    }

    pub async fn get(pool: &AnyPool, id: i64) -> Result<Option<Character>, AppError> {
        let sql = format!("SELECT {} FROM characters WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?)
    }

    pub async fn exists(pool: &AnyPool, id: i64) -> Result<bool, AppError> {
        Ok(Self::get(pool, id).await?.is_some())
    }

    pub async fn create(pool: &AnyPool, new: &NewCharacter) -> Result<Character, AppError> {
        let sql = format!(
            "INSERT INTO characters (name, gender, birth_year, height, eye_color, hair_color) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as(&sql)
            .bind(new.name.trim().to_string())
            .bind(new.gender.clone())
            .bind(new.birth_year.clone())
            .bind(new.height.clone())
            .bind(new.eye_color.clone())
            .bind(new.hair_color.clone())
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Apply the fields present in `changes`; absent fields keep their stored value.
    pub async fn update(
        pool: &AnyPool,
        id: i64,
        changes: &CharacterChanges,
    ) -> Result<Option<Character>, AppError> {
        let sql = format!(
            "UPDATE characters SET name = COALESCE($1, name), gender = COALESCE($2, gender), \
             birth_year = COALESCE($3, birth_year), height = COALESCE($4, height), \
             eye_color = COALESCE($5, eye_color), hair_color = COALESCE($6, hair_color) \
             WHERE id = $7 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as(&sql)
            .bind(changes.name.as_ref().map(|n| n.trim().to_string()))
            .bind(changes.gender.clone())
            .bind(changes.birth_year.clone())
            .bind(changes.height.clone())
            .bind(changes.eye_color.clone())
            .bind(changes.hair_color.clone())
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Returns false when no row had that id.
    pub async fn delete(pool: &AnyPool, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM characters WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(done.rows_affected() > 0)
    }
}
