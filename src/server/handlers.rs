use super::types::{AnalysisRequest, AnalysisResponse, ErrorResponse, HealthResponse};
use crate::{Error, analysis::Analyst};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::{error, info, warn};

const INDEX_HTML: &str = include_str!("index.html");

#[derive(Clone)]
pub struct AppState {
    /// `None` when no credential is configured.
    pub analyst: Option<Arc<Analyst>>,
    pub api_key_env: String,
}

impl AppState {
    pub fn new(analyst: Option<Analyst>, api_key_env: impl Into<String>) -> Self {
        Self {
            analyst: analyst.map(Arc::new),
            api_key_env: api_key_env.into(),
        }
    }
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        app: "chessgpt",
        credential_configured: state.analyst.is_some(),
    })
}

/// The body is read as raw bytes so that any JSON problem, whatever the
/// content type, becomes a JSON error response.
pub async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request = AnalysisRequest::from_body(&body).map_err(|e| error_response(e.into()))?;

    let Some(pgn) = request.pgn() else {
        return Err(error_response(Error::invalid_request(
            "No PGN text provided",
        )));
    };

    let Some(analyst) = state.analyst else {
        return Err(error_response(Error::MissingCredential {
            env_var: state.api_key_env,
        }));
    };

    info!("Received analysis request ({} bytes of PGN)", pgn.len());

    match analyst.analyze(pgn).await {
        Ok(analysis) => {
            info!("Analysis complete ({} bytes)", analysis.len());
            Ok(Json(AnalysisResponse { analysis }))
        }
        Err(e) => Err(error_response(e)),
    }
}

fn error_response(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    let (status, message) = match &err {
        Error::InvalidRequest(msg) => {
            warn!("Rejected analysis request: {}", msg);
            (StatusCode::BAD_REQUEST, msg.clone())
        }
        e if e.is_completion_failure() => {
            error!("Completion call failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error analyzing game: {}", e),
            )
        }
        e => {
            error!("Failed to handle analysis request: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    };

    (status, Json(ErrorResponse { error: message }))
}
