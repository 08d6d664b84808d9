//! Server entry point: read settings, prepare the database, serve the API.
//!
//! Run from repo root: `cargo run -p api-server`

use axum::{extract::Request, ServiceExt};
use starwars_api::{app, apply_migrations, connect, ensure_database_exists, load_from_env, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("starwars_api=info,tower_http=info")
            }),
        )
        .init();

    ensure_database_exists(&settings.database).await?;
    let pool = connect(&settings.database).await?;
    apply_migrations(&pool, settings.database.backend).await?;

    let state = AppState {
        pool,
        favorites_user_id: settings.favorites_user_id,
    };

    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app(state))).await?;
    Ok(())
}
