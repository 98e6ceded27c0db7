// Required external crates for configuration management and serialization
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use config::{Config, ConfigError, Environment, File};

/// Ollama instance the models are read from
#[derive(Debug, Deserialize, Clone)]
pub struct OllamaConfig {
    /// Base URL of the Ollama HTTP API
    pub host: String,
}

/// Parameters written into every Jan descriptor unless the modelfile overrides them
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct JanDefaults {
    pub temperature: f64,
    pub top_p: f64,
    pub stream: bool,
    pub max_tokens: u64,
    pub stop: Vec<String>,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl Default for JanDefaults {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            stream: true,
            max_tokens: 2048,
            stop: Vec::new(),
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

/// Jan model tree the descriptors are written into
#[derive(Debug, Deserialize, Clone)]
pub struct JanConfig {
    /// Directory holding one subdirectory per model
    pub directory: PathBuf,
    /// Default inference parameters
    pub defaults: JanDefaults,
}

/// Configuration for application logging
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Directory for the rolling log files
    pub directory: PathBuf,
}

/// Main settings struct that contains all configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub ollama: OllamaConfig,
    pub jan: JanConfig,
    pub logging: LoggingConfig,
}

/// Resolves `~/jan/models` for the invoking user.
fn default_jan_directory() -> Result<PathBuf, ConfigError> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join("jan").join("models"))
        .ok_or_else(|| ConfigError::Message("Could not determine the home directory".to_string()))
}

impl Settings {
    /// Loads settings from `./config` in the current working directory.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::current_dir()
            .map_err(|e| ConfigError::Message(
                format!("Failed to get current directory: {}", e)
            ))?
            .join("config");

        Self::load(&config_dir)
    }

    /// Builds settings from the following sources, highest precedence first:
    /// 1. Environment variables prefixed with OLLAMA_JAN_ (`__` separates sections)
    /// 2. `local.toml` in `config_dir`, if present
    /// 3. `default.toml` in `config_dir`, if present
    /// 4. Built-in defaults
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let defaults = JanDefaults::default();
        let jan_directory = default_jan_directory()?;

        let settings = Config::builder()
            .set_default("ollama.host", "http://localhost:11434")?
            .set_default("jan.directory", jan_directory.to_string_lossy().to_string())?
            .set_default("jan.defaults.temperature", defaults.temperature)?
            .set_default("jan.defaults.top_p", defaults.top_p)?
            .set_default("jan.defaults.stream", defaults.stream)?
            .set_default("jan.defaults.max_tokens", defaults.max_tokens as i64)?
            .set_default("jan.defaults.stop", defaults.stop)?
            .set_default("jan.defaults.frequency_penalty", defaults.frequency_penalty)?
            .set_default("jan.defaults.presence_penalty", defaults.presence_penalty)?
            .set_default("logging.level", "info")?
            .set_default("logging.directory", "logs")?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            .add_source(
                Environment::with_prefix("OLLAMA_JAN")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;

        Ok(settings)
    }

    /// Parsed logging level; `validate` guarantees this succeeds for loaded settings.
    pub fn log_level(&self) -> tracing::Level {
        self.logging.level.parse().unwrap_or(tracing::Level::INFO)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.ollama.host.starts_with("http://") || self.ollama.host.starts_with("https://")) {
            return Err(ConfigError::Message(
                format!("Ollama host must be an http(s) URL, got: {}", self.ollama.host)
            ));
        }

        let defaults = &self.jan.defaults;
        if !(0.0..=2.0).contains(&defaults.temperature) {
            return Err(ConfigError::Message(
                format!("Temperature must be between 0.0 and 2.0, got: {}", defaults.temperature)
            ));
        }

        if !(0.0..=1.0).contains(&defaults.top_p) {
            return Err(ConfigError::Message(
                format!("top_p must be between 0.0 and 1.0, got: {}", defaults.top_p)
            ));
        }

        if defaults.max_tokens == 0 {
            return Err(ConfigError::Message(
                "max_tokens must be greater than 0".to_string()
            ));
        }

        match self.logging.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            _ => Err(ConfigError::Message(
                format!("Invalid logging level: {}. Must be one of: error, warn, info, debug, trace",
                    self.logging.level)
            )),
        }?;

        // Jan normally creates this on first launch; create it so a fresh install can be synced
        if !self.jan.directory.exists() {
            std::fs::create_dir_all(&self.jan.directory).map_err(|e| {
                ConfigError::Message(format!(
                    "Failed to create Jan models directory at {}: {}",
                    self.jan.directory.display(), e
                ))
            })?;
        }

        Ok(())
    }
}
