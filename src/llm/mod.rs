//! AI client configuration.
//!
//! The credential guard runs once at startup and produces an [`AiClient`]
//! that is passed by value to whoever needs it. A missing credential is a
//! normal outcome: the client is left unconfigured and carries the error so
//! the page can show it.

mod gemini;

pub use gemini::GeminiClient;

use crate::config::GeminiConfig;
use crate::error::ConfigError;

/// Outcome of the credential guard.
#[derive(Debug, Clone)]
pub enum AiClient {
    Configured(GeminiClient),
    Unconfigured(ConfigError),
}

impl AiClient {
    /// Resolve the AI client from configuration.
    pub fn resolve(config: &GeminiConfig) -> Self {
        Self::resolve_with(config, GeminiClient::new)
    }

    /// Resolve using a custom initializer. `init` runs at most once, and only
    /// when a credential is present.
    pub fn resolve_with<F>(config: &GeminiConfig, init: F) -> Self
    where
        F: FnOnce(&GeminiConfig) -> Result<GeminiClient, ConfigError>,
    {
        if config.api_key.is_none() {
            let err = ConfigError::MissingCredential {
                var: crate::config::CREDENTIAL_VAR.to_string(),
            };
            tracing::warn!("{}", err);
            return AiClient::Unconfigured(err);
        }

        match init(config) {
            Ok(client) => {
                tracing::info!(model = %client.model_name(), "Gemini client configured");
                AiClient::Configured(client)
            }
            Err(err) => {
                tracing::warn!("{}", err);
                AiClient::Unconfigured(err)
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, AiClient::Configured(_))
    }

    pub fn client(&self) -> Option<&GeminiClient> {
        match self {
            AiClient::Configured(client) => Some(client),
            AiClient::Unconfigured(_) => None,
        }
    }

    /// The guard error, if the client is unconfigured.
    pub fn error(&self) -> Option<&ConfigError> {
        match self {
            AiClient::Configured(_) => None,
            AiClient::Unconfigured(err) => Some(err),
        }
    }

    /// Short status label used by the status endpoint and CLI.
    pub fn status_label(&self) -> &'static str {
        if self.is_configured() {
            "configured"
        } else {
            "unconfigured"
        }
    }
}
