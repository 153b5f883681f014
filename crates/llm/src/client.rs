//! Completion request/response types and the provider trait.

use condense_core::config::{ModelOptions, SamplingParams};
use condense_core::AppResult;
use serde::{Deserialize, Serialize};

/// A single completion request.
///
/// A request fully determines one call to the model runtime. Sampling
/// parameters and runtime options are process-wide constants copied in from
/// the configuration; only the prompt, the token budget, and the stop
/// sequences vary between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenRequest {
    /// The prompt text to send to the model
    pub prompt: String,

    /// Model identifier (Ollama model name or GGUF path)
    pub model: String,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Stop sequences; generation halts before emitting the first match
    #[serde(default)]
    pub stop: Vec<String>,

    /// Sampling parameters (temperature, top-p, top-k, repeat penalty)
    #[serde(default)]
    pub sampling: SamplingParams,

    /// Model runtime options (context size, batch, threads, GPU layers)
    #[serde(default)]
    pub runtime: ModelOptions,
}

impl GenRequest {
    /// Create a new request with required fields.
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            max_tokens: None,
            stop: Vec::new(),
            sampling: SamplingParams::default(),
            runtime: ModelOptions::default(),
        }
    }

    /// Set the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the stop sequences.
    pub fn with_stop(mut self, stop: Vec<String>) -> Self {
        self.stop = stop;
        self
    }

    /// Set the sampling parameters.
    pub fn with_sampling(mut self, sampling: SamplingParams) -> Self {
        self.sampling = sampling;
        self
    }

    /// Set the model runtime options.
    pub fn with_runtime(mut self, runtime: ModelOptions) -> Self {
        self.runtime = runtime;
        self
    }
}

/// A completion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenResponse {
    /// The generated text, prompt excluded
    pub content: String,

    /// Model that generated the response
    pub model: String,

    /// Usage statistics
    pub usage: GenUsage,

    /// Whether the response was complete
    #[serde(default = "default_true")]
    pub done: bool,
}

fn default_true() -> bool {
    true
}

/// Token usage statistics.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GenUsage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: u32,

    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: u32,

    /// Total tokens used
    #[serde(default)]
    pub total_tokens: u32,
}

impl GenUsage {
    /// Create usage stats from prompt and completion token counts.
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// Trait for model runtime providers.
///
/// This trait abstracts the underlying runtime (Ollama, llama-server) behind
/// a unified completion interface. Providers must return only generated
/// text, never an echo of the prompt, and must honor the request's stop
/// sequences.
#[async_trait::async_trait]
pub trait LlmClient: Send + Sync {
    /// Get the provider name (e.g., "ollama", "llama-server").
    fn provider_name(&self) -> &str;

    /// Perform one blocking completion.
    ///
    /// # Arguments
    /// * `request` - The completion request
    ///
    /// # Returns
    /// The complete response; an empty `content` is a valid outcome.
    async fn complete(&self, request: &GenRequest) -> AppResult<GenResponse>;
}
