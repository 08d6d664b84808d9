//! Shared application state for all routes.

use sqlx::AnyPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
    /// User the public favorites endpoints read and write for.
    pub favorites_user_id: i64,
}
