use std::time::Duration;

use config::{Config, ConfigError, File};
use config::Environment as EnvironmentSource;
use serde::{Deserialize, Serialize};

use crate::application::services::{
    DEFAULT_CONTEXT_SEPARATOR, DEFAULT_MAX_CONTEXT_CHARS, DEFAULT_PROMPT_TEMPLATE,
    PromptAugmenter,
};

use super::Environment;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub backend: BackendSettings,
    pub rag: RagSettings,
    pub extraction: ExtractionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_request_body_mb: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    pub base_url: String,
    pub generate_timeout_secs: u64,
    pub tags_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RagSettings {
    pub max_context_chars: usize,
    pub context_separator: String,
    pub prompt_template: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub pdf: PdfExtractionSettings,
    pub images: ImageSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfExtractionSettings {
    pub enabled: bool,
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_request_body_mb: 50,
        }
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            generate_timeout_secs: 120,
            tags_timeout_secs: 30,
        }
    }
}

impl Default for RagSettings {
    fn default() -> Self {
        Self {
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
            context_separator: DEFAULT_CONTEXT_SEPARATOR.to_string(),
            prompt_template: DEFAULT_PROMPT_TEMPLATE.to_string(),
        }
    }
}

impl Default for PdfExtractionSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_file_size_mb: 25,
        }
    }
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}

impl Settings {
    /// Built-in defaults, then `appsettings.<env>.*` if present, then
    /// `APP_`-prefixed variables (`APP_BACKEND__BASE_URL=...`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn prompt_augmenter(&self) -> PromptAugmenter {
        PromptAugmenter::new(
            self.rag.max_context_chars,
            self.rag.context_separator.clone(),
            self.rag.prompt_template.clone(),
            self.extraction.images.enabled,
        )
    }
}

impl ServerSettings {
    pub fn max_request_body_bytes(&self) -> usize {
        self.max_request_body_mb * 1024 * 1024
    }
}

impl BackendSettings {
    pub fn generate_timeout(&self) -> Duration {
        Duration::from_secs(self.generate_timeout_secs)
    }

    pub fn tags_timeout(&self) -> Duration {
        Duration::from_secs(self.tags_timeout_secs)
    }
}

impl PdfExtractionSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}
