//! LLM integration crate for condense.
//!
//! This crate provides the generation boundary of the summarizer: a
//! provider-agnostic completion trait over local model runtimes, and the
//! `Generator` wrapper that applies the process-wide sampling parameters
//! and the retry-on-empty-output policy.
//!
//! # Providers
//! - **Ollama**: local model runtime, `/api/generate` (default)
//! - **llama-server**: llama.cpp built-in HTTP server, `/completion`
//!
//! # Example
//! ```no_run
//! use condense_llm::{providers::OllamaClient, Generator};
//! use condense_core::config::{ModelOptions, SamplingParams};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(OllamaClient::new());
//! let generator = Generator::new(
//!     client,
//!     "llama3.2",
//!     SamplingParams::default(),
//!     ModelOptions::default(),
//! );
//! let stop = vec!["</s>".to_string()];
//! let text = generator.generate("Summarize: ...", 350, &stop).await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod generate;
pub mod providers;

// Re-export main types
pub use client::{GenRequest, GenResponse, GenUsage, LlmClient};
pub use factory::create_client;
pub use generate::Generator;
pub use providers::{LlamaServerClient, OllamaClient};
