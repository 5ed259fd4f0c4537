use super::prompt;
use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{ChatCompletionRequest, LlmClient, OpenAiClient},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Turns PGN text into a written report by a single chat-completion call.
pub struct Analyst {
    llm_client: Arc<dyn LlmClient>,
    model: String,
    max_tokens: u16,
    temperature: f32,
}

impl Analyst {
    pub fn new(llm_client: Arc<dyn LlmClient>, config: &LlmConfig) -> Self {
        Self {
            llm_client,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// Builds an analyst backed by the OpenAI client, or `None` when no
    /// credential is configured.
    pub fn from_config(config: &LlmConfig) -> Option<Self> {
        let api_key = config.resolve_api_key()?;
        let client = OpenAiClient::new(config, api_key);

        Some(Self::new(Arc::new(client), config))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Analyzes a game with the configured model.
    pub async fn analyze(&self, pgn: &str) -> Result<String> {
        self.analyze_with_model(pgn, None).await
    }

    /// Returns the first choice's text verbatim. Any failure of the
    /// completion call, including an empty reply, is an error.
    pub async fn analyze_with_model(&self, pgn: &str, model: Option<&str>) -> Result<String> {
        if pgn.trim().is_empty() {
            return Err(Error::invalid_request("No PGN text provided"));
        }

        let model = model.unwrap_or(&self.model).to_string();
        info!("Analyzing game ({} bytes of PGN) with {}", pgn.len(), model);

        let request = ChatCompletionRequest {
            model,
            messages: prompt::build_messages(pgn),
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
        };

        let response = self.llm_client.create_chat_completion(request).await?;

        if let Some(usage) = &response.usage {
            debug!(
                "Completion {} used {} prompt + {} completion tokens",
                response.id, usage.prompt_tokens, usage.completion_tokens
            );
        }

        match response.first_content() {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            Some(_) => Err(Error::llm("Completion returned empty content")),
            None => Err(Error::llm("Completion returned no choices")),
        }
    }
}
