//! Ollama provider implementation.
//!
//! This module integrates with Ollama, a local LLM runtime.
//! Ollama API: https://github.com/ollama/ollama/blob/main/docs/api.md
//!
//! Requests use raw completion mode so no chat template is applied and the
//! prompt never leaks into the output. Model runtime options (context size,
//! batch, threads, GPU layers) ride along in the `options` object, which is
//! how Ollama exposes the underlying llama.cpp load parameters.

use crate::client::{GenRequest, GenResponse, GenUsage, LlmClient};
use condense_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Ollama API request format.
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    raw: bool,
    stream: bool,
    options: OllamaOptions,
}

/// Sampling and runtime options, Ollama naming.
#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    repeat_penalty: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
    num_ctx: u32,
    num_batch: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_thread: Option<u32>,
    num_gpu: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    stop: Vec<String>,
}

/// Ollama API response format.
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    model: String,
    response: String,
    done: bool,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

/// Ollama client.
pub struct OllamaClient {
    /// Base URL for the Ollama API
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl OllamaClient {
    /// Create a new Ollama client with default settings.
    ///
    /// Default URL: http://localhost:11434
    pub fn new() -> Self {
        Self::with_base_url("http://localhost:11434")
    }

    /// Create a new Ollama client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Convert a GenRequest to the Ollama wire format.
    fn to_ollama_request(&self, request: &GenRequest) -> OllamaRequest {
        OllamaRequest {
            model: request.model.clone(),
            prompt: request.prompt.clone(),
            // Plain completion: no chat template, no prompt echo
            raw: true,
            stream: false,
            options: OllamaOptions {
                temperature: request.sampling.temperature,
                top_p: request.sampling.top_p,
                top_k: request.sampling.top_k,
                repeat_penalty: request.sampling.repeat_penalty,
                num_predict: request.max_tokens,
                num_ctx: request.runtime.context_size,
                num_batch: request.runtime.batch_size,
                // 0 means "let the runtime decide", expressed by omission
                num_thread: (request.runtime.threads > 0).then_some(request.runtime.threads),
                num_gpu: request.runtime.gpu_layers,
                stop: request.stop.clone(),
            },
        }
    }

    /// Convert an Ollama response to a GenResponse.
    fn convert_response(&self, response: OllamaResponse) -> GenResponse {
        let usage = GenUsage::new(
            response.prompt_eval_count.unwrap_or(0),
            response.eval_count.unwrap_or(0),
        );

        GenResponse {
            content: response.response,
            model: response.model,
            usage,
            done: response.done,
        }
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmClient for OllamaClient {
    fn provider_name(&self) -> &str {
        "ollama"
    }

    async fn complete(&self, request: &GenRequest) -> AppResult<GenResponse> {
        tracing::debug!(
            "Sending completion request to Ollama ({} prompt chars)",
            request.prompt.chars().count()
        );

        let ollama_request = self.to_ollama_request(request);
        let url = format!("{}/api/generate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&ollama_request)
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to send request to Ollama: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Llm(format!(
                "Ollama API error ({}): {}",
                status, error_text
            )));
        }

        let ollama_response: OllamaResponse = response
            .json()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to parse Ollama response: {}", e)))?;

        tracing::debug!(
            "Received completion from Ollama ({} output tokens)",
            ollama_response.eval_count.unwrap_or(0)
        );

        Ok(self.convert_response(ollama_response))
    }
}
