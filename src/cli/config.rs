//! `check` command: show resolved configuration and the credential guard
//! outcome.

use crate::config::{CREDENTIAL_VAR, Config};
use crate::llm::AiClient;

/// Resolved settings as `(key, display value)` pairs. The credential is never
/// shown, only whether it is set.
pub fn settings_list(config: &Config) -> Vec<(&'static str, String)> {
    let credential = if config.gemini.api_key.is_some() {
        "(set)".to_string()
    } else {
        "(not set)".to_string()
    };

    vec![
        (CREDENTIAL_VAR, credential),
        ("GEMINI_MODEL", config.gemini.model.clone()),
        ("GEMINI_BASE_URL", config.gemini.base_url.clone()),
        ("DASHBOARD_HOST", config.gateway.host.clone()),
        ("DASHBOARD_PORT", config.gateway.port.to_string()),
    ]
}

/// Format the settings table and the guard outcome.
pub fn format_check(config: &Config, ai: &AiClient) -> String {
    let all = settings_list(config);
    let max_key_len = all.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

    let mut out = String::from("Settings:\n\n");
    for (key, value) in all {
        let display_value = if value.chars().count() > 60 {
            format!("{}...", value.chars().take(57).collect::<String>())
        } else {
            value
        };
        out.push_str(&format!("  {:width$}  {}\n", key, display_value, width = max_key_len));
    }

    out.push('\n');
    match ai.error() {
        None => out.push_str(&format!("AI client: {}\n", ai.status_label())),
        Some(err) => out.push_str(&format!("AI client: {} ({})\n", ai.status_label(), err)),
    }
    out
}

/// Run the check command. A missing credential is reported, not an error.
pub fn run_check(config: &Config, ai: &AiClient) -> anyhow::Result<()> {
    print!("{}", format_check(config, ai));
    Ok(())
}
