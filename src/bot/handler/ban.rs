use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildId, User};

use crate::{
    data::{GuildBanRepository, GuildRepository},
    model::live::LiveBan,
};

/// Handles the guild_ban_addition event.
///
/// The event does not carry the ban reason, so the cached ban is recorded without
/// one. Guilds without a record are skipped.
pub async fn handle_guild_ban_addition(
    db: &DatabaseConnection,
    _ctx: Context,
    guild_id: GuildId,
    banned_user: User,
) {
    let guild_id = guild_id.get();

    match GuildRepository::new(db).find_by_guild_id(guild_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return,
        Err(e) => {
            tracing::error!("Failed to load guild {}: {:?}", guild_id, e);
            return;
        }
    }

    let ban = LiveBan::from_user(&banned_user);

    match GuildBanRepository::new(db).ensure(guild_id, &ban).await {
        Ok(_) => tracing::info!("Cached ban of {} in guild {}", banned_user.name, guild_id),
        Err(e) => tracing::error!(
            "Failed to cache ban of {} in guild {}: {:?}",
            banned_user.id,
            guild_id,
            e
        ),
    }
}
