use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use users_api::api;
use users_api::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "users_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(bind_address = %config.bind_address, "Starting users-api");

    api::server::start_server(config).await?;
    Ok(())
}
