//! Queries against `planets`.

use crate::error::AppError;
use crate::model::{NewPlanet, Planet, PlanetChanges};
use sqlx::AnyPool;

const COLUMNS: &str = "id, name, climate, terrain, population, diameter";

pub struct PlanetService;

impl PlanetService {
    pub async fn list(pool: &AnyPool) -> Result<Vec<Planet>, AppError> {
        let sql = format!("SELECT {} FROM planets ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql).fetch_all(pool).await?)
    }

    pub async fn get(pool: &AnyPool, id: i64) -> Result<Option<Planet>, AppError> {
        let sql = format!("SELECT {} FROM planets WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?)
    }

    pub async fn exists(pool: &AnyPool, id: i64) -> Result<bool, AppError> {
        Ok(Self::get(pool, id).await?.is_some())
    }

    pub async fn create(pool: &AnyPool, new: &NewPlanet) -> Result<Planet, AppError> {
        let sql = format!(
            "INSERT INTO planets (name, climate, terrain, population, diameter) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as(&sql)
            .bind(new.name.trim().to_string())
            .bind(new.climate.clone())
            .bind(new.terrain.clone())
            .bind(new.population.clone())
            .bind(new.diameter.clone())
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    pub async fn update(
        pool: &AnyPool,
        id: i64,
        changes: &PlanetChanges,
    ) -> Result<Option<Planet>, AppError> {
        let sql = format!(
            "UPDATE planets SET name = COALESCE($1, name), climate = COALESCE($2, climate), \
             terrain = COALESCE($3, terrain), population = COALESCE($4, population), \
             diameter = COALESCE($5, diameter) WHERE id = $6 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as(&sql)
            .bind(changes.name.as_ref().map(|n| n.trim().to_string()))
            .bind(changes.climate.clone())
            .bind(changes.terrain.clone())
            .bind(changes.population.clone())
            .bind(changes.diameter.clone())
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn delete(pool: &AnyPool, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM planets WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(done.rows_affected() > 0)
    }
}
