use async_trait::async_trait;
use serenity::all::GuildId;
use serenity::http::Http;

use crate::model::live::LiveBan;

/// Provides a guild's current ban list.
///
/// Failures are reported as `serenity::Error` so that callers can tell a remote
/// fetch failure apart from their own storage errors.
#[async_trait]
pub trait BanSource: Send + Sync {
    async fn fetch_bans(&self, guild_id: u64) -> Result<Vec<LiveBan>, serenity::Error>;
}

/// Fetches the first page of bans (up to 1000) through the Discord REST API.
#[async_trait]
impl BanSource for Http {
    async fn fetch_bans(&self, guild_id: u64) -> Result<Vec<LiveBan>, serenity::Error> {
        let bans = self.get_bans(GuildId::new(guild_id), None, None).await?;

        Ok(bans.iter().map(LiveBan::from).collect())
    }
}
