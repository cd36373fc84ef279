use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub default_directive: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn new(environment: Environment, logging: &LoggingSettings) -> Self {
        Self {
            environment,
            default_directive: format!(
                "{level},ollama_relay={level},tower_http=debug",
                level = logging.level
            ),
            json_format: logging.enable_json,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::new(Environment::Local, &LoggingSettings::default())
    }
}
