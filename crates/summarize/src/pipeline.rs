//! Two-stage map-reduce summarization pipeline.
//!
//! Map: window the document and produce one bullet summary per window,
//! strictly in order. Reduce: synthesize the labeled partial summaries
//! into one long-form academic summary, then sanitize it.
//!
//! No chunk-level failure is distinguished from success: an empty
//! per-window summary is still labeled and stitched, and an empty final
//! result is returned as an empty string for the caller to present.

use crate::sanitize::sanitize;
use crate::window::window;
use condense_core::config::AppConfig;
use condense_core::AppResult;
use condense_llm::Generator;
use condense_prompt::{chunk_prompt, default_stops, synthesis_prompt, synthesis_stops};

/// Pipeline geometry and token budgets, fixed per process.
#[derive(Debug, Clone, Copy)]
pub struct SummarizeConfig {
    /// Window size in characters
    pub max_chars: usize,

    /// Overlap between consecutive windows in characters
    pub overlap: usize,

    /// Token budget for each per-window summary
    pub intermediate_budget: u32,

    /// Default token budget for the final synthesis
    pub final_budget: u32,
}

impl SummarizeConfig {
    /// Derive the pipeline configuration from the application config.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            max_chars: config.window.max_chars,
            overlap: config.window.overlap,
            intermediate_budget: config.budgets.intermediate,
            final_budget: config.budgets.final_summary,
        }
    }
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// End-to-end document summarizer.
pub struct Summarizer {
    generator: Generator,
    config: SummarizeConfig,
}

impl Summarizer {
    /// Create a summarizer over an explicit generator handle.
    pub fn new(generator: Generator, config: SummarizeConfig) -> Self {
        Self { generator, config }
    }

    /// Summarize a full document text.
    ///
    /// `final_budget` overrides the configured synthesis budget for this
    /// run only (chat commands use this). An empty result is returned as
    /// an empty string, never as an error.
    pub async fn summarize(
        &self,
        full_text: &str,
        final_budget: Option<u32>,
    ) -> AppResult<String> {
        let stitched = self.stitched_intermediate(full_text).await?;

        let budget = final_budget.unwrap_or(self.config.final_budget);
        tracing::info!("Synthesizing final summary ({} token budget)", budget);

        let prompt = synthesis_prompt(&stitched)?;
        let summary = self
            .generator
            .generate(&prompt, budget, &synthesis_stops())
            .await?;

        Ok(sanitize(&summary))
    }

    /// Map stage: produce the labeled, ordered partial summaries.
    async fn stitched_intermediate(&self, full_text: &str) -> AppResult<String> {
        if full_text.chars().count() <= self.config.max_chars {
            let summary = self.summarize_window(full_text).await?;
            return Ok(format!("[Chunk 1]\n{}", summary));
        }

        let chunks = window(full_text, self.config.max_chars, self.config.overlap);
        tracing::info!(
            "Text split into {} chunks, creating intermediate summaries",
            chunks.len()
        );

        let mut partials = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            tracing::debug!("Summarizing chunk {}/{}", chunk.index, chunks.len());
            let summary = self.summarize_window(&chunk.text).await?;
            partials.push(format!("[Chunk {}]\n{}", chunk.index, summary));
        }

        Ok(partials.join("\n\n"))
    }

    /// Summarize one window into concise bullets.
    async fn summarize_window(&self, passage: &str) -> AppResult<String> {
        let prompt = chunk_prompt(passage)?;
        self.generator
            .generate(&prompt, self.config.intermediate_budget, &default_stops())
            .await
    }

    /// The generator handle (the chat translation pass uses it directly).
    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// The pipeline configuration.
    pub fn config(&self) -> &SummarizeConfig {
        &self.config
    }
}
