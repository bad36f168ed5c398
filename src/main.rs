use clap::Parser;
use tracing_subscriber::EnvFilter;

use neighbor_share_console::cli::{self, Cli};

const DEFAULT_LOG_FILTER: &str = "neighbor_share_console=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    init_tracing(cli.log_json);

    cli::run(cli).await
}

/// Logs go to stderr so `render` output on stdout stays clean.
fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
