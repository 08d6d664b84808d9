//! Queries against `users`.

use crate::error::AppError;
use crate::model::{NewUser, User, UserChanges};
use sqlx::AnyPool;

/// `is_active` is read as an integer: SQLite stores booleans as 0/1 and the `Any` driver
/// decodes by value type.
const COLUMNS: &str = "id, email, password, CAST(is_active AS INTEGER) AS is_active";

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password: String,
    is_active: i64,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: r.id,
            email: r.email,
            password: r.password,
            is_active: r.is_active != 0,
        }
    }
}

pub struct UserService;

impl UserService {
    pub async fn list(pool: &AnyPool) -> Result<Vec<User>, AppError> {
        let sql = format!("SELECT {} FROM users ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<UserRow> = sqlx::query_as(&sql).fetch_all(pool).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    pub async fn get(pool: &AnyPool, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row: Option<UserRow> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
        Ok(row.map(User::from))
    }

    pub async fn create(pool: &AnyPool, new: &NewUser) -> Result<User, AppError> {
        let sql = "INSERT INTO users (email, password, is_active) VALUES ($1, $2, $3) RETURNING id";
        tracing::debug!(sql = %sql, email = %new.email, "query");
        let (id,): (i64,) = sqlx::query_as(sql)
            .bind(new.email.trim().to_string())
            .bind(new.password.clone())
            .bind(new.is_active)
            .fetch_one(pool)
            .await?;
        Self::get(pool, id).await?.ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    pub async fn update(
        pool: &AnyPool,
        id: i64,
        changes: &UserChanges,
    ) -> Result<Option<User>, AppError> {
        let sql = "UPDATE users SET email = COALESCE($1, email), \
                   password = COALESCE($2, password), \
                   is_active = COALESCE($3, is_active) WHERE id = $4";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql)
            .bind(changes.email.as_ref().map(|e| e.trim().to_string()))
            .bind(changes.password.clone())
            .bind(changes.is_active)
            .bind(id)
            .execute(pool)
            .await?;
        if done.rows_affected() == 0 {
            return Ok(None);
        }
        Self::get(pool, id).await
    }

    pub async fn delete(pool: &AnyPool, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM users WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(done.rows_affected() > 0)
    }
}
