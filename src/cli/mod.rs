//! Command-line interface.

mod config;

pub use config::{format_check, run_check, settings_list};

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::config::{Config, DEFAULT_HOST, DEFAULT_PORT, GatewayConfig};
use crate::error::RenderError;
use crate::gateway::{self, DashboardServer, GatewayState};
use crate::llm::AiClient;

#[derive(Parser, Debug)]
#[command(name = "neighbor-share-console", version, about = "Neighbor-Share admin console")]
pub struct Cli {
    /// Address to bind the dashboard to
    #[arg(long, env = "DASHBOARD_HOST", default_value = DEFAULT_HOST, global = true)]
    pub host: String,

    /// Port to bind the dashboard to
    #[arg(long, env = "DASHBOARD_PORT", default_value_t = DEFAULT_PORT, global = true)]
    pub port: u16,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_JSON", global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the dashboard over HTTP (default)
    Serve,

    /// Render the dashboard page to a file or stdout
    Render {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show configuration and whether the AI client is configured
    Check,
}

impl Cli {
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig::new(self.host.clone(), self.port)
    }
}

/// Run the parsed command line.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env(cli.gateway_config());
    let ai = AiClient::resolve(&config.gemini);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config, ai).await,
        Command::Render { output } => {
            let state = GatewayState::new(ai)?;
            write_page(state.page(), output.as_deref())?;
            Ok(())
        }
        Command::Check => run_check(&config, &ai),
    }
}

async fn serve(config: &Config, ai: AiClient) -> anyhow::Result<()> {
    let addr = config.gateway.socket_addr()?;
    let state = Arc::new(GatewayState::new(ai)?);

    let mut server = DashboardServer::new(addr, gateway::routes(state));
    let bound = server.start().await?;
    println!("Dashboard: http://{}", bound);
    println!("Press Ctrl+C to stop");

    tokio::signal::ctrl_c().await?;
    server.shutdown().await;
    Ok(())
}

/// Write the rendered page to `output`, or stdout when `None`.
pub fn write_page(page: &str, output: Option<&Path>) -> Result<(), RenderError> {
    match output {
        Some(path) => {
            std::fs::write(path, page)?;
            tracing::info!("Dashboard written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(page.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
