use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    /// `null` and a missing field both read as no PGN.
    #[serde(default)]
    pub pgn: Option<String>,
}

impl AnalysisRequest {
    /// Parses a request body. Only a JSON object is accepted; serde would
    /// otherwise also take the struct in array form.
    pub fn from_body(body: &[u8]) -> serde_json::Result<Self> {
        let object: Map<String, Value> = serde_json::from_slice(body)?;
        serde_json::from_value(Value::Object(object))
    }

    /// The PGN text, or `None` when it is missing or blank.
    pub fn pgn(&self) -> Option<&str> {
        self.pgn.as_deref().filter(|pgn| !pgn.trim().is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub app: &'static str,
    pub credential_configured: bool,
}
