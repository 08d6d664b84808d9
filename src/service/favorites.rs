//! Queries against `favorites`.

use crate::error::AppError;
use crate::model::{Favorite, FavoriteTarget};
use sqlx::AnyPool;

const COLUMNS: &str = "id, user_id, planet_id, character_id";

pub struct FavoriteService;

impl FavoriteService {
    /// Favorites of one user, ordered by id.
    pub async fn list_for_user(pool: &AnyPool, user_id: i64) -> Result<Vec<Favorite>, AppError> {
        let sql = format!("SELECT {} FROM favorites WHERE user_id = $1 ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, user_id, "query");
        Ok(sqlx::query_as(&sql).bind(user_id).fetch_all(pool).await?)
    }

    pub async fn list(pool: &AnyPool) -> Result<Vec<Favorite>, AppError> {
        let sql = format!("SELECT {} FROM favorites ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql).fetch_all(pool).await?)
    }

    pub async fn get(pool: &AnyPool, id: i64) -> Result<Option<Favorite>, AppError> {
        let sql = format!("SELECT {} FROM favorites WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?)
    }

    /// Insert one favorite. The caller checks that the target exists.
    pub async fn add(
        pool: &AnyPool,
        user_id: i64,
        target: FavoriteTarget,
    ) -> Result<Favorite, AppError> {
        let sql = format!(
            "INSERT INTO favorites (user_id, planet_id, character_id) \
             VALUES ($1, $2, $3) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, user_id, favorite = ?target, "query");
        let row = sqlx::query_as(&sql)
            .bind(user_id)
            .bind(target.planet_id())
            .bind(target.character_id())
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// First favorite of `user_id` pointing at `planet_id`, if any.
    pub async fn find_planet(
        pool: &AnyPool,
        user_id: i64,
        planet_id: i64,
    ) -> Result<Option<Favorite>, AppError> {
        let sql = format!(
            "SELECT {} FROM favorites WHERE user_id = $1 AND planet_id = $2 ORDER BY id LIMIT 1",
            COLUMNS
        );
        tracing::debug!(sql = %sql, user_id, planet_id, "query");
        Ok(sqlx::query_as(&sql)
            .bind(user_id)
            .bind(planet_id)
            .fetch_optional(pool)
            .await?)
    }

    pub async fn delete(pool: &AnyPool, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM favorites WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(done.rows_affected() > 0)
    }
}
