//! Prompt system for condense.
//!
//! This crate holds the prompting contract of the summarization pipeline:
//! - Embedded Handlebars templates for the map stage (per-window bullets),
//!   the reduce stage (final synthesis), and the translation pass
//! - The stop-sequence sets paired with those templates

pub mod builder;
pub mod templates;

// Re-export main entry points
pub use builder::{chunk_prompt, synthesis_prompt, translation_prompt};
pub use templates::{default_stops, synthesis_stops};
