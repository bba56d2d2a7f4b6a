//! Hours engine HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use hours_engine::api::{AppState, create_router};
use hours_engine::config::ConfigLoader;

/// Attendance hour categorization service.
#[derive(Parser)]
#[command(name = "hours-engine")]
struct Cli {
    /// Directory containing rules.yaml and holidays.yaml
    #[arg(long, default_value = "./config/argentina")]
    config: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Config path: {:?}", cli.config);
    let loader = ConfigLoader::load(&cli.config)?;
    let config = loader.into_config();
    tracing::info!(
        timezone = %config.timezone(),
        test_mode = config.test_mode(),
        rounding = config.rounding_enabled(),
        "Config loaded successfully"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    tracing::info!("Listening on {}", cli.bind);

    axum::serve(listener, router).await?;
    Ok(())
}
