use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use climate_api::{db, tracing_setup, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "climate-api", about = "Read-only HTTP API over a climate observations dataset")]
struct Args {
    /// Path to the SQLite dataset
    #[arg(long, default_value = "resources/hawaii.sqlite")]
    db_path: PathBuf,

    /// Host to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Allow any CORS origin instead of localhost only
    #[arg(long)]
    cors_permissive: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    tracing_setup::init_tracing(args.debug)?;

    let pool = db::open_read_only(&args.db_path)
        .await
        .with_context(|| format!("could not open dataset at {}", args.db_path.display()))?;

    db::validate(&pool)
        .await
        .context("dataset schema validation failed")?;
    tracing::info!(path = %args.db_path.display(), "dataset opened read-only");

    let bind_addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("invalid host/port")?;

    let config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive,
    };
    climate_api::run_server(pool, config).await?;
    Ok(())
}
