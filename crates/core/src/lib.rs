//! Condense Core Library
//!
//! This crate provides the foundational utilities for the condense CLI:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management (sampling, budgets, windowing)

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ModelOptions, SamplingParams, TokenBudgets, WindowConfig};
pub use error::{AppError, AppResult};
