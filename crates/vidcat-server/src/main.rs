//! Vidcat Server - category-driven YouTube search backend.

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vidcat_core::VidcatApi;

#[derive(Parser, Debug)]
#[command(name = "vidcat-server")]
#[command(about = "REST server for category-driven YouTube search")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// YouTube Data API v3 key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    youtube_api_key: Option<String>,

    /// Override the YouTube API base URL
    #[arg(long, env = "YOUTUBE_API_BASE_URL")]
    youtube_api_base: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let dotenv = dotenvy::dotenv();

    let args = Args::parse();

    // Set up logging; RUST_LOG takes precedence over --debug
    let default_level = if args.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("Starting Vidcat Server");
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    let mut builder = VidcatApi::builder().api_key(args.youtube_api_key);
    if let Some(base_url) = args.youtube_api_base {
        builder = builder.base_url(base_url);
    }
    let api = builder.build()?;

    if api.has_credentials() {
        info!("YouTube API key configured: Yes");
    } else {
        warn!("YouTube API key configured: No");
    }

    let addr = vidcat_server::start_server(api, &args.host, args.port).await?;
    info!("API server is running on http://{}", addr);

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}

