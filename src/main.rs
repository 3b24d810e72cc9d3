use anyhow::Result;
use menbre_skill::{config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("menbre_skill=info".parse()?),
        )
        .init();

    info!("Starting Menbre skill server");

    // Load configuration from environment
    let config = config::Config::from_env()?;

    server::run(&config).await
}
