//! Create the four tables when absent. Idempotent, run on every boot.
//! Order follows foreign key dependencies: users, characters, planets, then favorites.
//! `favorites.user_id` carries no foreign key: the favorites user is a fixed placeholder
//! and need not have a row in `users`.

use crate::config::Backend;
use crate::error::AppError;
use sqlx::AnyPool;

/// Table names in creation order.
pub const TABLES: &[&str] = &["users", "characters", "planets", "favorites"];

fn pk_column(backend: Backend) -> &'static str {
    match backend {
        Backend::Sqlite => "id INTEGER PRIMARY KEY AUTOINCREMENT",
        Backend::Postgres => "id BIGSERIAL PRIMARY KEY",
    }
}

fn id_type(backend: Backend) -> &'static str {
    match backend {
        Backend::Sqlite => "INTEGER",
        Backend::Postgres => "BIGINT",
    }
}

fn ddl(backend: Backend) -> Vec<String> {
    let pk = pk_column(backend);
    let fk = id_type(backend);
    vec![
        format!(
            "CREATE TABLE IF NOT EXISTS users (
                {pk},
                email VARCHAR(120) NOT NULL UNIQUE,
                password VARCHAR(80) NOT NULL,
                is_active BOOLEAN NOT NULL
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS characters (
                {pk},
                name VARCHAR(250) NOT NULL,
                gender VARCHAR(50),
                birth_year VARCHAR(50),
                height VARCHAR(50),
                eye_color VARCHAR(50),
                hair_color VARCHAR(50)
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS planets (
                {pk},
                name VARCHAR(250) NOT NULL,
                climate VARCHAR(250),
                terrain VARCHAR(250),
                population VARCHAR(50),
                diameter VARCHAR(50)
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS favorites (
                {pk},
                user_id {fk} NOT NULL,
                planet_id {fk} REFERENCES planets(id),
                character_id {fk} REFERENCES characters(id)
            )"
        ),
        "CREATE INDEX IF NOT EXISTS favorites_user_id_idx ON favorites (user_id)".to_string(),
    ]
}

/// Apply the schema for `backend`. Safe to call when the tables already exist.
pub async fn apply_migrations(pool: &AnyPool, backend: Backend) -> Result<(), AppError> {
    for sql in ddl(backend) {
        tracing::debug!(sql = %sql, "migration");
        sqlx::query(&sql).execute(pool).await?;
    }
    tracing::info!(tables = ?TABLES, "schema ready");
    Ok(())
}
