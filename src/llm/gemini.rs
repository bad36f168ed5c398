//! Google Gemini client handle.
//!
//! Binds the configured credential to a model and endpoint. The console does
//! not call the API; the handle exists so AI-backed features have a configured
//! client to pick up.

use secrecy::SecretString;

use crate::config::{CREDENTIAL_VAR, GeminiConfig};
use crate::error::ConfigError;

/// Gemini client bound to an API key.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    #[allow(dead_code)]
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client handle. Fails only when the credential is absent.
    pub fn new(config: &GeminiConfig) -> Result<Self, ConfigError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| ConfigError::MissingCredential {
                var: CREDENTIAL_VAR.to_string(),
            })?;

        Ok(Self {
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// API root the handle targets, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
