//! Database bootstrap: make sure the target database exists, then open an `AnyPool` for it.

use crate::config::{Backend, DatabaseSettings};
use crate::error::{AppError, ConfigError};
use sqlx::ConnectOptions;
use sqlx::{any::AnyPoolOptions, AnyPool};
use std::str::FromStr;

/// Create the database (PostgreSQL) or its parent directory (SQLite file) when missing.
pub async fn ensure_database_exists(settings: &DatabaseSettings) -> Result<(), AppError> {
    match settings.backend {
        Backend::Postgres => ensure_postgres_database(&settings.url).await,
        Backend::Sqlite => {
            if let Some(dir) = sqlite_parent_dir(&settings.url) {
                tokio::fs::create_dir_all(&dir)
                    .await
                    .map_err(|source| ConfigError::Io { path: dir.clone(), source })?;
            }
            Ok(())
        }
    }
}

/// Open the shared pool. Drivers are registered once per process.
pub async fn connect(settings: &DatabaseSettings) -> Result<AnyPool, AppError> {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.url)
        .await?;
    tracing::info!(backend = ?settings.backend, "database pool ready");
    Ok(pool)
}

async fn ensure_postgres_database(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| ConfigError::InvalidUrl("no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

/// Directory holding a file-backed SQLite database, if the URL names one.
fn sqlite_parent_dir(url: &str) -> Option<String> {
    let path = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?
        .split('?')
        .next()?;
    if path.is_empty() || path.contains(":memory:") {
        return None;
    }
    let dir = std::path::Path::new(path).parent()?.to_str()?;
    (!dir.is_empty()).then(|| dir.to_string())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_settings(url: String) -> DatabaseSettings {
        DatabaseSettings {
            url,
            backend: Backend::Sqlite,
            max_connections: 1,
        }
    }

    #[test]
    fn splits_postgres_url_into_admin_url_and_name() {
        let (admin, name) =
            parse_db_name_from_url("postgres://u:p@db:5432/starwars?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://u:p@db:5432/postgres");
        assert_eq!(name, "starwars");
    }

    #[test]
    fn finds_sqlite_parent_dir() {
        assert_eq!(
            sqlite_parent_dir("sqlite:///tmp/test.db?mode=rwc").as_deref(),
            Some("/tmp")
        );
        assert_eq!(sqlite_parent_dir("sqlite::memory:"), None);
        assert_eq!(sqlite_parent_dir("sqlite://test.db"), None);
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("star\"wars"), "\"star\"\"wars\"");
    }

    #[tokio::test]
    async fn connects_to_sqlite_file() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("nested/sw.db").display());
        let settings = sqlite_settings(url);
        ensure_database_exists(&settings).await.unwrap();
        let pool = connect(&settings).await.unwrap();
        let one: (i64,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(one.0, 1);
    }

    #[tokio::test]
    async fn unusable_sqlite_dir_is_a_startup_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();
        let url = format!("sqlite://{}?mode=rwc", blocker.join("sw.db").display());

        let err = ensure_database_exists(&sqlite_settings(url)).await.unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::Io { .. })), "{:?}", err);
        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
