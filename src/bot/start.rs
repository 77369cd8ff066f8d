use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::Handler, config::Config, error::AppError, service::config_loader::ConfigLoader,
};

/// Starts the Discord bot and runs it until shutdown.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `db` - Database connection handed to the event handler
/// - `loader` - Config loader used when guild records need their config reloaded
///
/// # Returns
/// - `Ok(())` - Bot shut down cleanly
/// - `Err(AppError::DiscordErr)` - Client construction or gateway connection failed
pub async fn start_bot(
    config: &Config,
    db: DatabaseConnection,
    loader: ConfigLoader,
) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MODERATION
        | GatewayIntents::GUILD_EMOJIS_AND_STICKERS;

    let handler = Handler::new(db, loader);

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
