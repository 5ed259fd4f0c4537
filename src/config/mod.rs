mod types;

pub use types::*;

use crate::Result;
use std::{env, io::ErrorKind};
use tracing::debug;

/// Loads the YAML config named by `CONFIG_PATH` (default `config.yaml`).
/// A missing file yields the defaults.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    load_from_path(&config_path).await
}

pub async fn load_from_path(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    match tokio::fs::read_to_string(config_path).await {
        Ok(config_str) => from_yaml(&config_str),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No configuration file at {}, using defaults", config_path);
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn from_yaml(config_str: &str) -> Result<Config> {
    // An empty file parses as YAML null.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = from_yaml("").unwrap();

        assert_eq!(config.llm.model, "gpt-4");
        assert_eq!(config.llm.max_tokens, 1000);
        assert_eq!(config.llm.temperature, 0.7);
        assert_eq!(config.llm.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.logs.level, "info");
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = from_yaml(
            r#"
llm:
  model: gpt-4o-mini
  temperature: 0.2
server:
  port: 3000
"#,
        )
        .unwrap();

        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.temperature, 0.2);
        assert_eq!(config.llm.max_tokens, 1000);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let result = from_yaml("llm: [unclosed");
        assert!(matches!(result, Err(crate::Error::Yaml(_))));
    }

    #[test]
    fn test_api_key_from_config_wins() {
        let config = LlmConfig {
            api_key: Some("sk-from-file".to_string()),
            api_key_env: "CHESSGPT_TEST_UNSET_VARIABLE".to_string(),
            ..LlmConfig::default()
        };

        assert_eq!(config.resolve_api_key().as_deref(), Some("sk-from-file"));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = LlmConfig {
            api_key: Some("   ".to_string()),
            api_key_env: "CHESSGPT_TEST_UNSET_VARIABLE".to_string(),
            ..LlmConfig::default()
        };

        assert_eq!(config.resolve_api_key(), None);
    }

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        let config = load_from_path(&path.to_string_lossy()).await.unwrap();
        assert_eq!(config.llm.model, "gpt-4");
    }
}
