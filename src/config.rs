//! Configuration for promptgen.
//!
//! Config lives in a YAML file (default `promptgen.yaml` in the working
//! directory). Unknown fields are ignored for forward compatibility and
//! every field has a default, so an absent file means default behavior.

use crate::enhance::EnhanceError;
use crate::error::{PromptgenError, Result};
use crate::prompt::TemplateLabels;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "promptgen.yaml";

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_tone() -> String {
    "professional".to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_max_retries() -> u32 {
    3
}

/// Settings for the hosted-model enhancement call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceConfig {
    /// Model name sent to the completion endpoint.
    pub model: String,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Name of the environment variable holding the API key. The key itself
    /// never appears in config files.
    pub api_key_env: String,
    /// Tone requested from the prompt engineer persona.
    pub tone: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Maximum retries for transient HTTP failures.
    pub max_retries: u32,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            tone: default_tone(),
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
        }
    }
}

impl EnhanceConfig {
    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> std::result::Result<String, EnhanceError> {
        std::env::var(&self.api_key_env).map_err(|_| EnhanceError::MissingApiKey {
            var: self.api_key_env.clone(),
        })
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Section labels used by the prompt template.
    pub labels: TemplateLabels,
    /// Enhancement settings.
    pub enhance: EnhanceConfig,
}

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptgenError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from an explicit path, or from the default location.
    ///
    /// An explicit path must exist and parse. The default location is
    /// optional: when `promptgen.yaml` is absent, defaults apply.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string. Unknown fields are ignored.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PromptgenError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Rules:
    /// - template labels must be non-empty
    /// - `enhance.timeout_ms` must be positive
    /// - `enhance.base_url` and `enhance.api_key_env` must be non-empty
    pub fn validate(&self) -> Result<()> {
        let labels = [
            ("labels.purpose", &self.labels.purpose),
            ("labels.context", &self.labels.context),
            ("labels.constraints", &self.labels.constraints),
            ("labels.goals", &self.labels.goals),
        ];
        for (name, value) in labels {
            if value.is_empty() {
                return Err(PromptgenError::UserError(format!(
                    "config validation failed: {} must be non-empty",
                    name
                )));
            }
        }

        if self.enhance.timeout_ms == 0 {
            return Err(PromptgenError::UserError(
                "config validation failed: enhance.timeout_ms must be greater than 0".to_string(),
            ));
        }

        if self.enhance.base_url.is_empty() {
            return Err(PromptgenError::UserError(
                "config validation failed: enhance.base_url must be non-empty".to_string(),
            ));
        }

        if self.enhance.api_key_env.is_empty() {
            return Err(PromptgenError::UserError(
                "config validation failed: enhance.api_key_env must be non-empty".to_string(),
            ));
        }

        Ok(())
    }
}
