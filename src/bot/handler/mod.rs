use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, Emoji, EmojiId, EventHandler, Guild, GuildId, PartialGuild, Ready, User,
};
use serenity::async_trait;
use std::collections::HashMap;

use crate::service::config_loader::ConfigLoader;

pub mod ban;
pub mod emoji;
pub mod guild;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub loader: ConfigLoader,
}

impl Handler {
    pub fn new(db: DatabaseConnection, loader: ConfigLoader) -> Self {
        Self { db, loader }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, &self.loader, ctx, guild, is_new).await;
    }

    /// Called when a guild's settings change
    async fn guild_update(
        &self,
        ctx: Context,
        old_data_if_available: Option<Guild>,
        new_data: PartialGuild,
    ) {
        guild::handle_guild_update(&self.db, &self.loader, ctx, old_data_if_available, new_data)
            .await;
    }

    /// Called when emojis are added, changed or removed in a guild
    async fn guild_emojis_update(
        &self,
        ctx: Context,
        guild_id: GuildId,
        current_state: HashMap<EmojiId, Emoji>,
    ) {
        emoji::handle_guild_emojis_update(&self.db, ctx, guild_id, current_state).await;
    }

    /// Called when a user is banned from a guild
    async fn guild_ban_addition(&self, ctx: Context, guild_id: GuildId, banned_user: User) {
        ban::handle_guild_ban_addition(&self.db, ctx, guild_id, banned_user).await;
    }
}
