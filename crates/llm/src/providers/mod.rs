//! Provider implementations for local model runtimes.

mod llama_server;
mod ollama;

pub use llama_server::LlamaServerClient;
pub use ollama::OllamaClient;
