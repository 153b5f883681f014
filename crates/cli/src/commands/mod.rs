//! Command handlers for the condense CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod chat;
pub mod extract;
pub mod summarize;

// Re-export command types for convenience
pub use chat::ChatCommand;
pub use extract::ExtractCommand;
pub use summarize::SummarizeCommand;
