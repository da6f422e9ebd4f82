#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use authgate_api::auth::jwt::JwtConfig;
use authgate_api::config::ServerConfig;
use authgate_api::router::build_app_router;
use authgate_api::state::AppState;
use authgate_db::DbPool;

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expiry_secs: 86_400,
        },
        session_secret: "session-secret-for-tests-at-least-32-bytes".to_string(),
    }
}

/// Build the full application router on top of `pool`, with the same
/// middleware stack production uses.
pub fn build_test_app(pool: DbPool) -> Router {
    build_app_router(AppState::new(pool, test_config()))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// GET with an arbitrary `Authorization` header value.
pub async fn get_with_authorization(app: Router, uri: &str, value: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header("authorization", value)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    get_with_authorization(app, uri, &format!("Bearer {token}")).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: &str,
    body: impl Into<Body>,
) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", content_type)
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register `login`/`password` and assert it succeeded.
pub async fn register(app: &Router, login: &str, password: &str) {
    let body = serde_json::json!({ "login": login, "password": password });
    let response = post_json(app.clone(), "/auth/register", body).await;
    assert_eq!(response.status(), 201, "registration of {login} should succeed");
}

/// Rows stored under `login`, read straight from the table.
pub async fn count_login(pool: &DbPool, login: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE login = ?")
        .bind(login)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Log in and return the bearer token.
pub async fn login(app: &Router, login: &str, password: &str) -> String {
    let body = serde_json::json!({ "login": login, "password": password });
    let response = post_json(app.clone(), "/auth/login", body).await;
    assert_eq!(response.status(), 200, "login of {login} should succeed");
    body_json(response).await["token"]
        .as_str()
        .expect("login response must contain a token")
        .to_string()
}
