//! HTTP-level integration tests for the protected `GET /api/data` listing.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, get_with_authorization};
use serde_json::json;
use sqlx::SqlitePool;

use authgate_api::auth::jwt::{Claims, JwtConfig, TokenService};
use authgate_db::models::user::CreateUser;
use authgate_db::repositories::UserRepo;

fn test_tokens() -> TokenService {
    TokenService::new(&common::test_config().jwt)
}

/// The full register -> login -> list flow.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_login_list_flow(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    common::register(&app, "alice_01", "longenough1").await;
    let token = common::login(&app, "alice_01", "longenough1").await;

    let response = get_auth(app, "/api/data", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!([{ "id": 1, "login": "alice_01" }]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_listing_never_exposes_hashes(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    common::register(&app, "frank", "longenough1").await;
    common::register(&app, "grace", "longenough2").await;
    let token = common::login(&app, "frank", "longenough1").await;

    let json = body_json(get_auth(app, "/api/data", &token).await).await;

    let users = json.as_array().expect("response body should be an array");
    assert_eq!(users.len(), 2);
    for user in users {
        let keys: Vec<&String> = user.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2, "only id and login are listed: {user}");
        assert!(user.get("password_hash").is_none());
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_listing_escapes_logins(pool: SqlitePool) {
    {
        let mut conn = pool.acquire().await.unwrap();
        let input = CreateUser {
            login: "<img src=x>".to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
        };
        assert!(UserRepo::create(&mut conn, &input).await.unwrap());
    }
    let app = common::build_test_app(pool);
    let token = test_tokens().issue(1).unwrap();

    let json = body_json(get_auth(app, "/api/data", &token).await).await;

    assert_eq!(json[0]["login"], "&lt;img src=x&gt;");
}

// ---------------------------------------------------------------------------
// Authorization gate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_header_is_401(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/data").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "error": "Authorization header required" }));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_wrong_scheme_is_401(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let token = test_tokens().issue(1).unwrap();

    let response = get_with_authorization(app, "/api/data", &format!("Token {token}")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "error": "Invalid token type" }));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_lowercase_scheme_is_accepted(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let token = test_tokens().issue(1).unwrap();

    let response = get_with_authorization(app, "/api/data", &format!("bearer {token}")).await;

    assert_eq!(response.status(), StatusCode::OK);
}

/// Expired, forged, and garbage tokens all produce the same 401 body, with
/// the same shape as the missing-header case.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_bad_tokens_share_one_error(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let expired = test_tokens()
        .sign(&Claims {
            user_id: 1,
            exp: chrono::Utc::now().timestamp() - 300,
        })
        .unwrap();
    let forged = TokenService::new(&JwtConfig {
        secret: "attacker-secret".to_string(),
        expiry_secs: 86_400,
    })
    .issue(1)
    .unwrap();

    let missing = body_json(get(app.clone(), "/api/data").await).await;

    for token in [expired.as_str(), forged.as_str(), "garbage"] {
        let response = get_auth(app.clone(), "/api/data", token).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = body_json(response).await;
        assert_eq!(json, json!({ "error": "Invalid or expired token" }));

        let keys = |v: &serde_json::Value| {
            v.as_object().unwrap().keys().cloned().collect::<Vec<_>>()
        };
        assert_eq!(keys(&json), keys(&missing));
    }
}
