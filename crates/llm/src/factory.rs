//! Provider factory.
//!
//! This module creates model runtime clients from configuration values. The
//! resulting handle is built once by the application root and passed
//! explicitly into the pipeline; there is no ambient global client.

use crate::client::LlmClient;
use crate::providers::{LlamaServerClient, OllamaClient};
use condense_core::{AppError, AppResult};
use std::sync::Arc;

/// Create a model runtime client based on the provider name.
///
/// # Arguments
/// * `provider` - Provider identifier ("ollama", "llama-server")
/// * `endpoint` - Optional custom endpoint URL
///
/// # Returns
/// A shared trait object implementing `LlmClient`
///
/// # Errors
/// Returns `AppError::Config` for unknown providers.
pub fn create_client(provider: &str, endpoint: Option<&str>) -> AppResult<Arc<dyn LlmClient>> {
    match provider.to_lowercase().as_str() {
        "ollama" => {
            let base_url = endpoint.unwrap_or("http://localhost:11434");
            Ok(Arc::new(OllamaClient::with_base_url(base_url)))
        }
        "llama-server" | "llama" => {
            let base_url = endpoint.unwrap_or("http://localhost:8080");
            Ok(Arc::new(LlamaServerClient::with_base_url(base_url)))
        }
        _ => Err(AppError::Config(format!(
            "Unknown provider: {}. Supported: ollama, llama-server",
            provider
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_ollama_client() {
        let client = create_client("ollama", None).unwrap();
        assert_eq!(client.provider_name(), "ollama");
    }

    #[test]
    fn test_create_llama_server_client() {
        let client = create_client("llama-server", Some("http://localhost:9000")).unwrap();
        assert_eq!(client.provider_name(), "llama-server");
    }

    #[test]
    fn test_unknown_provider() {
        match create_client("unknown", None) {
            Err(err) => assert!(err.to_string().contains("Unknown provider")),
            Ok(_) => panic!("Expected error for unknown provider"),
        }
    }
}
