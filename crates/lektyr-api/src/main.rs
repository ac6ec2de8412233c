//! Lektyr API server binary.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lektyr_api::ApiConfig;

#[derive(Debug, Parser)]
#[command(name = "lektyr-api", version, about = "HTTP backend for the Lektyr book catalog")]
struct Cli {
    /// Path to the server configuration file.
    #[arg(short, long, env = "LEKTYR_API_CONFIG", default_value = "lektyr-api.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ApiConfig::load(&cli.config)?;
    lektyr_api::server::serve(config).await
}
