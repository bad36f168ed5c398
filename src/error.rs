//! Error types for the console.

use std::net::SocketAddr;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The AI credential is unset or empty. Surfaced on the page, never fatal.
    #[error("Missing {var} environment variable. Please set it in your deployment settings.")]
    MissingCredential { var: String },

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Web gateway errors.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Gateway failed to start on {addr}: {reason}")]
    StartupFailed { addr: SocketAddr, reason: String },
}

/// Page rendering errors.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("Chart serialization failed: {0}")]
    Chart(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_message_names_variable() {
        let err = ConfigError::MissingCredential {
            var: "GEMINI_KEY".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing GEMINI_KEY environment variable. Please set it in your deployment settings."
        );
    }

    #[test]
    fn test_invalid_value_names_key() {
        let err = ConfigError::InvalidValue {
            key: "DASHBOARD_HOST".to_string(),
            message: "'dashboard.internal' is not an IP address".to_string(),
        };
        assert!(err.to_string().starts_with("Invalid value for DASHBOARD_HOST:"));
    }
}
