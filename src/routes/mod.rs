//! Route table and application assembly.

mod admin;
mod api;
mod common;

pub use admin::admin_routes;
pub use api::api_routes;
pub use common::common_routes;

use crate::error::AppError;
use crate::handlers::sitemap;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower::{Layer, ServiceBuilder};
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, normalize_path::NormalizePath,
    normalize_path::NormalizePathLayer, trace::TraceLayer,
};

/// Largest request body accepted.
pub const BODY_LIMIT: usize = 1024 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
}

const fn route(method: &'static str, path: &'static str) -> RouteInfo {
    RouteInfo { method, path }
}

/// Every route the app serves, in sitemap order.
pub const ROUTES: &[RouteInfo] = &[
    route("GET", "/"),
    route("GET", "/people"),
    route("GET", "/people/{id}"),
    route("GET", "/planets"),
    route("GET", "/planets/{id}"),
    route("GET", "/users"),
    route("GET", "/users/favorites"),
    route("POST", "/favorite/planet/{id}"),
    route("POST", "/favorite/people/{id}"),
    route("DELETE", "/favorite/planet/{id}"),
    route("GET", "/admin"),
    route("GET", "/admin/{resource}"),
    route("POST", "/admin/{resource}"),
    route("GET", "/admin/{resource}/{id}"),
    route("PATCH", "/admin/{resource}/{id}"),
    route("DELETE", "/admin/{resource}/{id}"),
    route("GET", "/health"),
    route("GET", "/ready"),
    route("GET", "/version"),
    route("GET", "/openapi.json"),
];

async fn not_found() -> AppError {
    AppError::NotFound("Not found".into())
}

/// Full application: all routes plus CORS, tracing and body limit. Trailing slashes are ignored.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(sitemap))
        .merge(api_routes(state.clone()))
        .merge(admin_routes(state.clone()))
        .merge(common_routes(state))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
                .layer(CorsLayer::permissive()),
        );
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
