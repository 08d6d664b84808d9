//! Admin routes over every table.

use crate::handlers::admin::{create, delete, index, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn admin_routes(state: AppState) -> Router {
    Router::new()
        .route("/admin", get(index))
        .route("/admin/:resource", get(list).post(create))
        .route("/admin/:resource/:id", get(read).patch(update).delete(delete))
        .with_state(state)
}
