//! Guild event handlers.
//!
//! `guild_create` fires on startup for every guild the bot is in, when the bot joins
//! a guild and when a guild becomes available again after an outage. Each time, a
//! set-up guild gets its mirror fields, ban list and emoji cache brought up to date.
//! `guild_update` only carries the guild's own attributes, so it only syncs the
//! mirror fields.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild, PartialGuild};

use crate::{
    bot::handler::emoji::sync_emojis,
    model::live::{LiveEmoji, LiveGuild},
    service::{config_loader::ConfigLoader, guild::GuildService},
};

/// Handles the guild_create event.
///
/// Guilds without a record are skipped. For a set-up guild:
/// 1. Mirror fields are synced from the live guild
/// 2. The ban list is fetched over HTTP and mirrored into the ban cache
/// 3. The emoji cache is brought in line with the guild's emoji list
///
/// A failing step is logged and does not stop later steps, except when the record
/// itself cannot be loaded.
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    loader: &ConfigLoader,
    ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    let guild_id = guild.id;
    let live = LiveGuild::from(&guild);

    tracing::debug!("Guild create event: {} ({})", guild.name, guild_id);

    let service = GuildService::new(db, loader);

    let mut record = match service.find(guild_id.get()).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            tracing::debug!("Ignoring guild {} which has not been set up", guild_id);
            return;
        }
        Err(e) => {
            tracing::error!("Failed to load guild {}: {:?}", guild_id, e);
            return;
        }
    };

    if let Err(e) = service.sync(&mut record, &live).await {
        tracing::error!("Failed to sync guild {}: {:?}", guild_id, e);
    }

    if let Err(e) = service.sync_bans(&mut record, &*ctx.http).await {
        tracing::error!("Failed to sync bans for guild {}: {:?}", guild_id, e);
    }

    let emojis: Vec<LiveEmoji> = guild
        .emojis
        .values()
        .map(|emoji| LiveEmoji::from_emoji(guild_id, emoji))
        .collect();

    if let Err(e) = sync_emojis(db, guild_id.get(), &emojis).await {
        tracing::error!("Failed to sync emojis for guild {}: {:?}", guild_id, e);
    }
}

/// Handles the guild_update event by syncing the record's mirror fields.
pub async fn handle_guild_update(
    db: &DatabaseConnection,
    loader: &ConfigLoader,
    _ctx: Context,
    _old_data_if_available: Option<Guild>,
    new_data: PartialGuild,
) {
    let guild_id = new_data.id.get();
    let service = GuildService::new(db, loader);

    let mut record = match service.find(guild_id).await {
        Ok(Some(record)) => record,
        Ok(None) => return,
        Err(e) => {
            tracing::error!("Failed to load guild {}: {:?}", guild_id, e);
            return;
        }
    };

    match service.sync(&mut record, &LiveGuild::from(&new_data)).await {
        Ok(true) => tracing::info!("Updated guild {} from guild update event", guild_id),
        Ok(false) => {}
        Err(e) => tracing::error!("Failed to sync guild {}: {:?}", guild_id, e),
    }
}
