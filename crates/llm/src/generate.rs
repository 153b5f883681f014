//! Generation client: fixed sampling, trim, retry-once-on-empty.
//!
//! `Generator` wraps a provider client with the process-wide sampling
//! parameters and runtime options, and implements the empty-output retry
//! policy: a model that produces nothing gets exactly one second chance
//! with a corrective instruction prepended to the prompt. An output that is
//! still empty after the retry is returned as an empty string; the caller
//! decides how to present that.

use crate::client::{GenRequest, LlmClient};
use condense_core::config::{ModelOptions, SamplingParams};
use condense_core::AppResult;
use std::sync::Arc;

/// Corrective instruction prepended to the prompt on the single retry.
const RETRY_PREAMBLE: &str = "Write a detailed academic English summary (at least 500 words). \
Return only plain paragraphs (no lists, no headings, no questions).\n\n";

/// Completion wrapper holding the model handle and fixed parameters.
///
/// Built once by the application root and passed into the pipeline; cloning
/// is cheap (the underlying client is shared).
#[derive(Clone)]
pub struct Generator {
    client: Arc<dyn LlmClient>,
    model: String,
    sampling: SamplingParams,
    runtime: ModelOptions,
}

impl Generator {
    /// Create a generator over a provider client.
    pub fn new(
        client: Arc<dyn LlmClient>,
        model: impl Into<String>,
        sampling: SamplingParams,
        runtime: ModelOptions,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            sampling,
            runtime,
        }
    }

    /// Issue a single completion and return the trimmed output.
    ///
    /// No retry is applied here; used directly for the translation pass,
    /// where the corrective summary instruction would be wrong.
    pub async fn complete_once(
        &self,
        prompt: &str,
        max_tokens: u32,
        stop: &[String],
    ) -> AppResult<String> {
        let request = GenRequest::new(prompt, &self.model)
            .with_max_tokens(max_tokens)
            .with_stop(stop.to_vec())
            .with_sampling(self.sampling)
            .with_runtime(self.runtime);

        let response = self.client.complete(&request).await?;
        Ok(response.content.trim().to_string())
    }

    /// Issue a completion, retrying exactly once if the output is empty.
    ///
    /// The retry keeps the same token budget and stop sequences but
    /// prefixes the prompt with an explicit corrective instruction. The
    /// retry's result is returned as-is: an empty string is a valid,
    /// user-visible outcome, not an error.
    pub async fn generate(&self, prompt: &str, max_tokens: u32, stop: &[String]) -> AppResult<String> {
        let text = self.complete_once(prompt, max_tokens, stop).await?;
        if !text.is_empty() {
            return Ok(text);
        }

        tracing::warn!("Model returned empty output, retrying once with a corrective instruction");
        let retry_prompt = format!("{}{}", RETRY_PREAMBLE, prompt);
        self.complete_once(&retry_prompt, max_tokens, stop).await
    }

    /// Model identifier this generator is bound to.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{GenResponse, GenUsage};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Stub client that replays scripted outputs and records prompts.
    struct ScriptedClient {
        outputs: Mutex<VecDeque<String>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedClient {
        fn new(outputs: &[&str]) -> Self {
            Self {
                outputs: Mutex::new(outputs.iter().map(|s| s.to_string()).collect()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }

        fn prompt(&self, i: usize) -> String {
            self.prompts.lock().unwrap()[i].clone()
        }
    }

    #[async_trait::async_trait]
    impl LlmClient for ScriptedClient {
        fn provider_name(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, request: &GenRequest) -> AppResult<GenResponse> {
            self.prompts.lock().unwrap().push(request.prompt.clone());
            let content = self.outputs.lock().unwrap().pop_front().unwrap_or_default();
            Ok(GenResponse {
                content,
                model: request.model.clone(),
                usage: GenUsage::default(),
                done: true,
            })
        }
    }

    fn generator(client: Arc<ScriptedClient>) -> Generator {
        Generator::new(
            client,
            "test-model",
            SamplingParams::default(),
            ModelOptions::default(),
        )
    }

    #[tokio::test]
    async fn test_non_empty_output_needs_no_retry() {
        let client = Arc::new(ScriptedClient::new(&["  a summary  "]));
        let gen = generator(client.clone());

        let stop = vec!["</s>".to_string()];
        let text = gen.generate("prompt", 100, &stop).await.unwrap();

        assert_eq!(text, "a summary");
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_retry_triggers_exactly_once() {
        let client = Arc::new(ScriptedClient::new(&["", "recovered"]));
        let gen = generator(client.clone());

        let stop = vec!["</s>".to_string()];
        let text = gen.generate("original prompt", 100, &stop).await.unwrap();

        assert_eq!(text, "recovered");
        assert_eq!(client.calls(), 2);
        // Retry keeps the original prompt, prefixed with the corrective instruction
        assert!(client.prompt(1).starts_with("Write a detailed academic English summary"));
        assert!(client.prompt(1).ends_with("original prompt"));
    }

    #[tokio::test]
    async fn test_empty_after_retry_is_valid() {
        let client = Arc::new(ScriptedClient::new(&["", "   "]));
        let gen = generator(client.clone());

        let stop = vec!["</s>".to_string()];
        let text = gen.generate("prompt", 100, &stop).await.unwrap();

        // No third call, no error: empty propagates to the caller
        assert_eq!(text, "");
        assert_eq!(client.calls(), 2);
    }

    #[tokio::test]
    async fn test_complete_once_never_retries() {
        let client = Arc::new(ScriptedClient::new(&[""]));
        let gen = generator(client.clone());

        let stop = vec!["</s>".to_string()];
        let text = gen.complete_once("translate", 800, &stop).await.unwrap();

        assert_eq!(text, "");
        assert_eq!(client.calls(), 1);
    }
}
