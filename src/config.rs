//! Runtime configuration.
//!
//! Everything is read from the process environment (after `.env` has been
//! loaded by the binary). Parsing goes through a lookup function so tests can
//! supply values without touching the real environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use secrecy::SecretString;

use crate::error::ConfigError;

/// Environment variable holding the Gemini credential.
pub const CREDENTIAL_VAR: &str = "GEMINI_KEY";

const MODEL_VAR: &str = "GEMINI_MODEL";
const BASE_URL_VAR: &str = "GEMINI_BASE_URL";

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8501;

/// Full console configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub gateway: GatewayConfig,
}

/// Gemini client settings. `api_key` is `None` when the credential is unset
/// or empty.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<SecretString>,
    pub model: String,
    pub base_url: String,
}

/// Web gateway bind settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl GatewayConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Resolve the bind address. Accepts IP literals and `localhost`.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host
                .parse::<IpAddr>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "DASHBOARD_HOST".to_string(),
                    message: format!("'{}' is not an IP address: {}", self.host, e),
                })?
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl GeminiConfig {
    /// Read Gemini settings through `lookup`. A missing credential is not an
    /// error here; the guard in [`crate::llm`] decides what it means.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(CREDENTIAL_VAR)
            .filter(|key| !key.is_empty())
            .map(SecretString::from);

        let model = lookup(MODEL_VAR)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = lookup(BASE_URL_VAR)
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            api_key,
            model,
            base_url,
        }
    }

    /// Config with the given credential and default model/endpoint.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        Self::from_lookup(|name| (name == CREDENTIAL_VAR).then(|| key.clone()))
    }

    /// Config with no credential.
    pub fn unconfigured() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env(gateway: GatewayConfig) -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), gateway)
    }

    /// Load configuration through an arbitrary key lookup. The bind address
    /// is checked only when serving; see [`GatewayConfig::socket_addr`].
    pub fn from_lookup<F>(lookup: F, gateway: GatewayConfig) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            gemini: GeminiConfig::from_lookup(lookup),
            gateway,
        }
    }
}
