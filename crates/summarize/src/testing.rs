//! Test support: a scripted model client.

use condense_core::config::{ModelOptions, SamplingParams};
use condense_core::AppResult;
use condense_llm::{GenRequest, GenResponse, GenUsage, Generator, LlmClient};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Stub client that replays scripted outputs and records every request.
///
/// Outputs past the end of the script come back empty, which would trip
/// the generation retry; tests script exactly the calls they expect.
pub struct ScriptedClient {
    outputs: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<GenRequest>>,
}

impl ScriptedClient {
    pub fn new(outputs: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            outputs: Mutex::new(outputs.iter().map(|s| s.to_string()).collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn request(&self, i: usize) -> GenRequest {
        self.requests.lock().unwrap()[i].clone()
    }
}

#[async_trait::async_trait]
impl LlmClient for ScriptedClient {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &GenRequest) -> AppResult<GenResponse> {
        self.requests.lock().unwrap().push(request.clone());
        let content = self.outputs.lock().unwrap().pop_front().unwrap_or_default();
        Ok(GenResponse {
            content,
            model: request.model.clone(),
            usage: GenUsage::default(),
            done: true,
        })
    }
}

/// Build a generator over a scripted client with default parameters.
pub fn generator(client: Arc<ScriptedClient>) -> Generator {
    Generator::new(
        client,
        "test-model",
        SamplingParams::default(),
        ModelOptions::default(),
    )
}
