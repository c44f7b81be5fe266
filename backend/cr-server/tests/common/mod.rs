#![allow(dead_code)]

//! Test infrastructure for cr-server API tests

use cr_auth::{TelegramLogin, VerifiedLogin};
use cr_config::Config;
use cr_core::TelegramId;
use cr_server::AppState;
use cr_store::MemoryStore;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;

pub const BOT_ID: &str = "123456";
pub const BOT_TOKEN: &str = "123456:test-token";
pub const JWT_SECRET: &str = "test-secret-key-at-least-32-bytes-long";

pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub state: AppState,
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.telegram.bot_id = BOT_ID.to_string();
    config.telegram.bot_token = BOT_TOKEN.to_string();
    config.session.jwt_secret = Some(JWT_SECRET.to_string());
    config
}

/// AppState over an empty in-memory store
pub fn create_test_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), &test_config()).unwrap();
    TestApp { store, state }
}

pub fn tg(value: &str) -> TelegramId {
    TelegramId::parse(value).unwrap()
}

/// `Bearer <token>` for a session issued to `telegram_id`
pub fn bearer(state: &AppState, telegram_id: &str) -> String {
    let login = VerifiedLogin {
        telegram_id: tg(telegram_id),
        username: None,
        first_name: None,
        auth_date: chrono::Utc::now().timestamp(),
    };
    let session = state.session_issuer.issue(&login).unwrap();
    format!("Bearer {}", session.token)
}

/// Callback query string signed with the test bot token
pub fn signed_callback_query(state: &AppState, telegram_id: &str, auth_date: i64) -> String {
    let mut pairs = vec![
        ("id".to_string(), telegram_id.to_string()),
        ("first_name".to_string(), "Ada".to_string()),
        ("username".to_string(), "ada".to_string()),
        ("auth_date".to_string(), auth_date.to_string()),
    ];

    let unsigned = pairs
        .iter()
        .cloned()
        .chain([("hash".to_string(), "00".to_string())]);
    let login = TelegramLogin::from_pairs(unsigned).unwrap();
    let hash = state.login_verifier.sign(&login).unwrap();

    pairs.push(("hash".to_string(), hash));
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn get(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn put_json(uri: &str, authorization: Option<&str>, body: String) -> Request<Body> {
    let mut builder = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    builder.body(Body::from(body)).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}
