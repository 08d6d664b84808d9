//! Shared fixture: a fresh SQLite file, migrated, wrapped in the full app.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::AnyPool;
use starwars_api::model::{NewCharacter, NewPlanet, NewUser};
use starwars_api::service::{CharacterService, PlanetService, UserService};
use starwars_api::{app, apply_migrations, connect, AppState, Backend, DatabaseSettings};
use tempfile::TempDir;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

pub struct TestApp {
    pub app: NormalizePath<Router>,
    pub pool: AnyPool,
    _dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text)
            .unwrap_or_else(|e| panic!("not json ({}): {}", e, self.text))
    }
}

/// Empty database with user 1 present, since favorites reference it.
pub async fn spawn() -> TestApp {
    let t = spawn_empty().await;
    seed_user(&t.pool, "user1@example.com").await;
    t
}

/// Empty database, no rows at all.
pub async fn spawn_empty() -> TestApp {
    spawn_for_user(1).await
}

pub async fn spawn_for_user(favorites_user_id: i64) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let settings = DatabaseSettings {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display()),
        backend: Backend::Sqlite,
        max_connections: 1,
    };
    let pool = connect(&settings).await.unwrap();
    apply_migrations(&pool, Backend::Sqlite).await.unwrap();
    let state = AppState {
        pool: pool.clone(),
        favorites_user_id,
    };
    TestApp {
        app: app(state),
        pool,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(v) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(v.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let resp = self.app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            headers,
            text: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str) -> TestResponse {
        self.request(Method::POST, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }

    pub async fn count(&self, table: &str) -> i64 {
        let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .unwrap();
        n
    }
}

pub async fn seed_user(pool: &AnyPool, email: &str) -> i64 {
    let new = NewUser {
        email: email.into(),
        password: "secret".into(),
        is_active: true,
    };
    UserService::create(pool, &new).await.unwrap().id
}

pub async fn seed_planet(pool: &AnyPool, name: &str) -> i64 {
    let new = NewPlanet {
        name: name.into(),
        climate: Some("arid".into()),
        terrain: Some("desert".into()),
        population: Some("200000".into()),
        diameter: Some("10465".into()),
    };
    PlanetService::create(pool, &new).await.unwrap().id
}

pub async fn seed_character(pool: &AnyPool, name: &str) -> i64 {
    let new = NewCharacter {
        name: name.into(),
        gender: Some("male".into()),
        birth_year: Some("19BBY".into()),
        height: Some("172".into()),
        eye_color: Some("blue".into()),
        hair_color: Some("blond".into()),
    };
    CharacterService::create(pool, &new).await.unwrap().id
}
