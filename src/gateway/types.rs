//! Response DTOs for the gateway API.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::dashboard::Dashboard;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub ai_client: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub version: &'static str,
}

/// Dashboard contents plus the time the response was produced.
#[derive(Debug, Serialize)]
pub struct DashboardSnapshot<'a> {
    #[serde(flatten)]
    pub dashboard: &'a Dashboard,
    pub generated_at: DateTime<Utc>,
}
