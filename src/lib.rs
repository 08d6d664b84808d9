//! Star Wars API: characters, planets, users and favorites over a relational store.

pub mod config;
pub mod doc;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{load_from_env, Backend, DatabaseSettings, Settings};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{app, ROUTES};
pub use state::AppState;
pub use store::{connect, ensure_database_exists};
