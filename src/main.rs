use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use guildkeeper::{
    bot,
    config::Config,
    error::AppError,
    service::{ConfigLoader, HttpConfigSource},
    startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let loader = ConfigLoader::new(Arc::new(HttpConfigSource::new(http_client)));

    tracing::info!("Starting guildkeeper");

    bot::start::start_bot(&config, db, loader).await
}
