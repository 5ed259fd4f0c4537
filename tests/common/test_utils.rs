use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use chessgpt::{
    analysis::Analyst,
    config::LlmConfig,
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;

pub const SAMPLE_PGN: &str = r#"[Event "Casual Game"]
[White "Student"]
[Black "Coach"]
[Result "0-1"]

1. e4 e5 2. Nf3 Nc6 3. Bc4 Nd4 4. Nxe5 Qg5 5. Nxf7 Qxg2 6. Rf1 Qxe4+ 7. Be2 Nf3# 0-1"#;

/// LLM settings with a fixed credential and an unset fallback variable
pub fn create_test_llm_config() -> LlmConfig {
    LlmConfig {
        api_key: Some("test-api-key".to_string()),
        api_key_env: "CHESSGPT_TEST_UNSET_VARIABLE".to_string(),
        ..LlmConfig::default()
    }
}

pub fn create_test_analyst(mock: &MockLlmClient) -> Analyst {
    Analyst::new(Arc::new(mock.clone()), &create_test_llm_config())
}

/// App wired to the mock completion client
pub fn create_test_app(mock: &MockLlmClient) -> Router {
    server::router(AppState::new(
        Some(create_test_analyst(mock)),
        "OPENAI_API_KEY",
    ))
}

/// App with no credential configured
pub fn create_unconfigured_app() -> Router {
    server::router(AppState::new(None, "OPENAI_API_KEY"))
}

pub fn json_post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}
