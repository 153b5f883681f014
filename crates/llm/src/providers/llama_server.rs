//! llama.cpp server provider implementation.
//!
//! This module talks to the HTTP server bundled with llama.cpp
//! (`llama-server`) via its `/completion` endpoint. The server performs
//! plain completions and returns only generated text, so the prompt is
//! never echoed. Model runtime options (context size, batch, threads, GPU
//! layers) are fixed when the server process is launched and are therefore
//! not part of the per-request payload.

use crate::client::{GenRequest, GenResponse, GenUsage, LlmClient};
use condense_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// llama-server /completion request format.
#[derive(Debug, Serialize)]
struct CompletionRequest {
    prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    n_predict: Option<u32>,
    temperature: f32,
    top_p: f32,
    top_k: u32,
    repeat_penalty: f32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    stop: Vec<String>,
}

/// llama-server /completion response format.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    content: String,
    #[serde(default)]
    model: String,
    #[serde(default)]
    tokens_evaluated: u32,
    #[serde(default)]
    tokens_predicted: u32,
}

/// llama.cpp server client.
pub struct LlamaServerClient {
    /// Base URL for the server
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl LlamaServerClient {
    /// Create a new client with default settings.
    ///
    /// Default URL: http://localhost:8080
    pub fn new() -> Self {
        Self::with_base_url("http://localhost:8080")
    }

    /// Create a new client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Convert a GenRequest to the llama-server wire format.
    fn to_completion_request(&self, request: &GenRequest) -> CompletionRequest {
        CompletionRequest {
            prompt: request.prompt.clone(),
            n_predict: request.max_tokens,
            temperature: request.sampling.temperature,
            top_p: request.sampling.top_p,
            top_k: request.sampling.top_k,
            repeat_penalty: request.sampling.repeat_penalty,
            stop: request.stop.clone(),
        }
    }
}

impl Default for LlamaServerClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmClient for LlamaServerClient {
    fn provider_name(&self) -> &str {
        "llama-server"
    }

    async fn complete(&self, request: &GenRequest) -> AppResult<GenResponse> {
        tracing::debug!(
            "Sending completion request to llama-server ({} prompt chars)",
            request.prompt.chars().count()
        );

        let completion_request = self.to_completion_request(request);
        let url = format!("{}/completion", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&completion_request)
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to send request to llama-server: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Llm(format!(
                "llama-server API error ({}): {}",
                status, error_text
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to parse llama-server response: {}", e)))?;

        tracing::debug!(
            "Received completion from llama-server ({} output tokens)",
            completion.tokens_predicted
        );

        let model = if completion.model.is_empty() {
            request.model.clone()
        } else {
            completion.model
        };

        Ok(GenResponse {
            content: completion.content,
            model,
            usage: GenUsage::new(completion.tokens_evaluated, completion.tokens_predicted),
            done: true,
        })
    }
}
