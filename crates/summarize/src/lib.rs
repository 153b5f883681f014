//! Document summarization core for condense.
//!
//! This crate implements the chunking + hierarchical summarization
//! pipeline:
//! - Text windowing with overlap and word-boundary-aware cuts
//! - Two-stage map-reduce prompting (per-window bullets, final synthesis)
//! - Artifact sanitization of generated output
//! - Chat command interpretation and the conversational session

pub mod chat;
pub mod command;
pub mod pipeline;
pub mod sanitize;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types
pub use chat::{ChatSession, ChatTurn, Role};
pub use command::{interpret, Directive};
pub use pipeline::{SummarizeConfig, Summarizer};
pub use sanitize::sanitize;
pub use window::{window, Chunk};
