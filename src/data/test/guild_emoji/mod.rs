use crate::{data::guild_emoji::GuildEmojiRepository, model::live::LiveEmoji};
use sea_orm::{DbErr, EntityTrait};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod get_by_guild_id;
mod mark_deleted_except;

fn live_emoji(emoji_id: u64, guild_id: u64, name: &str) -> LiveEmoji {
    LiveEmoji {
        id: emoji_id,
        guild_id,
        name: name.to_string(),
        require_colons: true,
        managed: false,
        roles: vec![111, 222],
    }
}
