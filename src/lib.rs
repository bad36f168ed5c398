//! Neighbor-Share admin console.
//!
//! Serves a single dashboard page: headline metrics, weekly activity and
//! category charts, the inventory table and an AI trace excerpt. The only
//! runtime decision is whether the Gemini credential is configured.

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod gateway;
pub mod llm;

pub use config::Config;
pub use dashboard::Dashboard;
pub use error::{ConfigError, GatewayError, RenderError};
pub use llm::{AiClient, GeminiClient};
