mod config;
mod db;
mod error;
mod handlers;
mod models;
mod repository;
mod server;
mod service;

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "user_api=info,tower_http=info";

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if let Err(err) = try_main().await {
        tracing::error!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn try_main() -> anyhow::Result<()> {
    let config = config::Config::from_env()?;
    server::run(config).await
}
