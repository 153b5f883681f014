//! Configuration management for the condense CLI.
//!
//! This module handles loading and merging configuration from multiple
//! sources, in precedence order:
//! - Built-in defaults
//! - Config file (condense.yaml)
//! - Environment variables (CONDENSE_*)
//! - Command-line flags
//!
//! The configuration is read once at process start and treated as immutable
//! afterwards: sampling parameters, token budgets, and window geometry are
//! process-wide constants for the life of the run.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{AppError, AppResult};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Model runtime provider ("ollama" or "llama-server")
    pub provider: String,

    /// Base URL of the model runtime (provider default when unset)
    pub endpoint: Option<String>,

    /// Model identifier (Ollama model name or GGUF path for llama-server)
    pub model: String,

    /// Model runtime options (context size, batch, threads, GPU layers)
    #[serde(default)]
    pub runtime: ModelOptions,

    /// Sampling parameters, fixed for every generation call
    #[serde(default)]
    pub sampling: SamplingParams,

    /// Token budgets for the intermediate and final passes
    #[serde(default)]
    pub budgets: TokenBudgets,

    /// Text window geometry in characters
    #[serde(default)]
    pub window: WindowConfig,

    /// Config file the values were merged from, if any
    #[serde(skip)]
    pub config_file: Option<PathBuf>,

    /// Log level override
    #[serde(skip)]
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    #[serde(skip)]
    pub verbose: bool,

    /// Disable colored output
    #[serde(skip)]
    pub no_color: bool,
}

/// Sampling parameters shared by every generation request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingParams {
    pub temperature: f32,

    #[serde(rename = "topP")]
    pub top_p: f32,

    #[serde(rename = "topK")]
    pub top_k: u32,

    #[serde(rename = "repeatPenalty")]
    pub repeat_penalty: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.95,
            top_k: 40,
            repeat_penalty: 1.15,
        }
    }
}

/// Model runtime options forwarded to the provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelOptions {
    /// Context window size in tokens
    #[serde(rename = "contextSize")]
    pub context_size: u32,

    /// Prompt processing batch size
    #[serde(rename = "batchSize")]
    pub batch_size: u32,

    /// Worker thread count (0 = let the runtime decide)
    pub threads: u32,

    /// Layers offloaded to the GPU
    #[serde(rename = "gpuLayers")]
    pub gpu_layers: u32,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            context_size: 8192,
            batch_size: 512,
            threads: 0,
            gpu_layers: 0,
        }
    }
}

/// Output token budgets for the two pipeline stages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenBudgets {
    /// Per-window bullet summary budget
    pub intermediate: u32,

    /// Final synthesis budget (callers may override per run)
    #[serde(rename = "final")]
    pub final_summary: u32,
}

impl Default for TokenBudgets {
    fn default() -> Self {
        Self {
            intermediate: 350,
            final_summary: 1200,
        }
    }
}

/// Text window geometry, measured in characters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    #[serde(rename = "maxChars")]
    pub max_chars: usize,

    pub overlap: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            max_chars: 5000,
            overlap: 400,
        }
    }
}

/// Config file structure. A present section replaces that whole section;
/// fields omitted inside a section fall back to their defaults.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    provider: Option<String>,
    endpoint: Option<String>,
    model: Option<String>,
    runtime: Option<ModelOptions>,
    sampling: Option<SamplingParams>,
    budgets: Option<TokenBudgets>,
    window: Option<WindowConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: "ollama".to_string(), // Local-first default
            endpoint: None,
            model: "llama3.2".to_string(),
            runtime: ModelOptions::default(),
            sampling: SamplingParams::default(),
            budgets: TokenBudgets::default(),
            window: WindowConfig::default(),
            config_file: None,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, config file, and environment.
    ///
    /// The config file is the CLI-supplied path, else `CONDENSE_CONFIG`,
    /// else `condense.yaml` in the working directory (only if present).
    /// Environment variables override file values:
    /// - `CONDENSE_PROVIDER`, `CONDENSE_ENDPOINT`, `CONDENSE_MODEL`
    /// - `CONDENSE_CONTEXT_SIZE`, `CONDENSE_BATCH_SIZE`,
    ///   `CONDENSE_THREADS`, `CONDENSE_GPU_LAYERS`
    /// - `CONDENSE_TEMPERATURE`, `CONDENSE_TOP_P`, `CONDENSE_TOP_K`,
    ///   `CONDENSE_REPEAT_PENALTY`
    /// - `CONDENSE_MAX_TOKENS_INTERMEDIATE`, `CONDENSE_MAX_TOKENS_FINAL`
    /// - `CONDENSE_MAX_CHARS`, `CONDENSE_OVERLAP`
    /// - `RUST_LOG`, `NO_COLOR`
    pub fn load(config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        config.config_file = config_file
            .or_else(|| std::env::var("CONDENSE_CONFIG").ok().map(PathBuf::from));

        let config_path = config
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("condense.yaml"));

        if config_path.exists() {
            config.merge_yaml(&config_path)?;
        }

        config.apply_env()?;

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &Path) -> AppResult<()> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        if let Some(provider) = file.provider {
            self.provider = provider;
        }
        if let Some(endpoint) = file.endpoint {
            self.endpoint = Some(endpoint);
        }
        if let Some(model) = file.model {
            self.model = model;
        }
        if let Some(runtime) = file.runtime {
            self.runtime = runtime;
        }
        if let Some(sampling) = file.sampling {
            self.sampling = sampling;
        }
        if let Some(budgets) = file.budgets {
            self.budgets = budgets;
        }
        if let Some(window) = file.window {
            self.window = window;
        }
        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                self.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                self.no_color = !color;
            }
        }

        Ok(())
    }

    /// Apply environment variable overrides.
    fn apply_env(&mut self) -> AppResult<()> {
        if let Ok(provider) = std::env::var("CONDENSE_PROVIDER") {
            self.provider = provider;
        }
        if let Ok(endpoint) = std::env::var("CONDENSE_ENDPOINT") {
            self.endpoint = Some(endpoint);
        }
        if let Ok(model) = std::env::var("CONDENSE_MODEL") {
            self.model = model;
        }

        env_override("CONDENSE_CONTEXT_SIZE", &mut self.runtime.context_size)?;
        env_override("CONDENSE_BATCH_SIZE", &mut self.runtime.batch_size)?;
        env_override("CONDENSE_THREADS", &mut self.runtime.threads)?;
        env_override("CONDENSE_GPU_LAYERS", &mut self.runtime.gpu_layers)?;

        env_override("CONDENSE_TEMPERATURE", &mut self.sampling.temperature)?;
        env_override("CONDENSE_TOP_P", &mut self.sampling.top_p)?;
        env_override("CONDENSE_TOP_K", &mut self.sampling.top_k)?;
        env_override("CONDENSE_REPEAT_PENALTY", &mut self.sampling.repeat_penalty)?;

        env_override(
            "CONDENSE_MAX_TOKENS_INTERMEDIATE",
            &mut self.budgets.intermediate,
        )?;
        env_override("CONDENSE_MAX_TOKENS_FINAL", &mut self.budgets.final_summary)?;

        env_override("CONDENSE_MAX_CHARS", &mut self.window.max_chars)?;
        env_override("CONDENSE_OVERLAP", &mut self.window.overlap)?;

        if let Ok(level) = std::env::var("RUST_LOG") {
            self.log_level = Some(level);
        }
        if std::env::var("NO_COLOR").is_ok() {
            self.no_color = true;
        }

        Ok(())
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Command-line flags take precedence over file and environment values.
    pub fn with_overrides(
        mut self,
        provider: Option<String>,
        endpoint: Option<String>,
        model: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(provider) = provider {
            self.provider = provider;
        }

        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint);
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Validate configuration before the first generation call.
    ///
    /// Degenerate window geometry is rejected here because it is a
    /// configuration product, not a per-request fault; the windower still
    /// guards against a non-advancing cursor structurally.
    pub fn validate(&self) -> AppResult<()> {
        let known_providers = ["ollama", "llama-server"];

        if !known_providers.contains(&self.provider.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown provider: {}. Supported: {}",
                self.provider,
                known_providers.join(", ")
            )));
        }

        if self.window.max_chars == 0 {
            return Err(AppError::Config(
                "Window size must be at least 1 character".to_string(),
            ));
        }

        if self.window.overlap >= self.window.max_chars {
            return Err(AppError::Config(format!(
                "Window overlap ({}) must be smaller than the window size ({})",
                self.window.overlap, self.window.max_chars
            )));
        }

        if self.budgets.intermediate == 0 || self.budgets.final_summary == 0 {
            return Err(AppError::Config(
                "Token budgets must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Overwrite `slot` with the parsed value of `key` if the variable is set.
fn env_override<T>(key: &str, slot: &mut T) -> AppResult<()>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    if let Ok(raw) = std::env::var(key) {
        *slot = raw
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid value for {}: {}", key, e)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.provider, "ollama");
        assert_eq!(config.model, "llama3.2");
        assert_eq!(config.sampling.temperature, 0.3);
        assert_eq!(config.sampling.top_p, 0.95);
        assert_eq!(config.sampling.top_k, 40);
        assert_eq!(config.sampling.repeat_penalty, 1.15);
        assert_eq!(config.budgets.intermediate, 350);
        assert_eq!(config.budgets.final_summary, 1200);
        assert_eq!(config.window.max_chars, 5000);
        assert_eq!(config.window.overlap, 400);
        assert_eq!(config.runtime.context_size, 8192);
        assert_eq!(config.runtime.batch_size, 512);
        assert_eq!(config.runtime.threads, 0);
        assert_eq!(config.runtime.gpu_layers, 0);
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default().with_overrides(
            Some("llama-server".to_string()),
            Some("http://localhost:8080".to_string()),
            Some("model.gguf".to_string()),
            None,
            true,
            false,
        );

        assert_eq!(config.provider, "llama-server");
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.model, "model.gguf");
        assert!(config.verbose);
        assert_eq!(config.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_merge_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "provider: llama-server\n\
             endpoint: http://127.0.0.1:8080\n\
             sampling:\n  temperature: 0.7\n  topK: 20\n\
             window:\n  maxChars: 3000\n  overlap: 200\n\
             budgets:\n  final: 900\n"
        )
        .unwrap();

        let mut config = AppConfig::default();
        config.merge_yaml(file.path()).unwrap();

        assert_eq!(config.provider, "llama-server");
        assert_eq!(config.endpoint.as_deref(), Some("http://127.0.0.1:8080"));
        assert_eq!(config.sampling.temperature, 0.7);
        assert_eq!(config.sampling.top_k, 20);
        // Omitted fields inside a present section fall back to defaults
        assert_eq!(config.sampling.top_p, 0.95);
        assert_eq!(config.window.max_chars, 3000);
        assert_eq!(config.window.overlap, 200);
        assert_eq!(config.budgets.final_summary, 900);
        assert_eq!(config.budgets.intermediate, 350);
    }

    #[test]
    fn test_merge_yaml_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "window: [not, a, mapping]").unwrap();

        let mut config = AppConfig::default();
        assert!(config.merge_yaml(file.path()).is_err());
    }

    #[test]
    fn test_validate_unknown_provider() {
        let mut config = AppConfig::default();
        config.provider = "unknown".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_degenerate_window() {
        let mut config = AppConfig::default();
        config.window.overlap = config.window.max_chars;
        assert!(config.validate().is_err());

        config.window.overlap = config.window.max_chars + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_default_ok() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
