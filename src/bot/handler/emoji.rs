use sea_orm::{DatabaseConnection, DbErr};
use serenity::all::{Context, Emoji, EmojiId, GuildId};
use std::collections::HashMap;

use crate::{
    data::{GuildEmojiRepository, GuildRepository},
    model::live::LiveEmoji,
};

/// Handles the guild_emojis_update event.
///
/// The event carries the guild's complete emoji list, so emojis missing from it are
/// flagged as deleted. Guilds without a record are skipped.
pub async fn handle_guild_emojis_update(
    db: &DatabaseConnection,
    _ctx: Context,
    guild_id: GuildId,
    current_state: HashMap<EmojiId, Emoji>,
) {
    match GuildRepository::new(db).find_by_guild_id(guild_id.get()).await {
        Ok(Some(_)) => {}
        Ok(None) => return,
        Err(e) => {
            tracing::error!("Failed to load guild {}: {:?}", guild_id, e);
            return;
        }
    }

    let emojis: Vec<LiveEmoji> = current_state
        .values()
        .map(|emoji| LiveEmoji::from_emoji(guild_id, emoji))
        .collect();

    if let Err(e) = sync_emojis(db, guild_id.get(), &emojis).await {
        tracing::error!("Failed to sync emojis for guild {}: {:?}", guild_id, e);
    }
}

/// Upserts every live emoji under `guild_id`, then flags the guild's other cached
/// emojis as deleted.
pub async fn sync_emojis(
    db: &DatabaseConnection,
    guild_id: u64,
    emojis: &[LiveEmoji],
) -> Result<(), DbErr> {
    let emoji_repo = GuildEmojiRepository::new(db);

    for emoji in emojis {
        emoji_repo.upsert_from_live(emoji, Some(guild_id)).await?;
    }

    let keep: Vec<u64> = emojis.iter().map(|emoji| emoji.id).collect();
    let deleted = emoji_repo.mark_deleted_except(guild_id, &keep).await?;

    tracing::debug!(
        "Synced {} emojis for guild {}, {} flagged deleted",
        emojis.len(),
        guild_id,
        deleted
    );

    Ok(())
}
