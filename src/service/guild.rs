//! Guild record operations.
//!
//! `GuildService` ties the guild repository, the ban cache and the config loader
//! together. Operations that change a guild take it as `&mut Guild` and keep the
//! in-memory copy, including its parsed config cache, consistent with what they wrote.

use chrono::Utc;
use sea_orm::{DatabaseConnection, SqlErr};
use std::sync::Arc;

use crate::{
    data::{GuildBanRepository, GuildRepository},
    error::GuildError,
    model::{
        guild::{CreateGuildParam, Guild, WhitelistFlag},
        guild_config::GuildConfig,
        live::LiveGuild,
    },
    service::{ban_source::BanSource, config_loader::ConfigLoader, config_url::validate_config_url},
};

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
    loader: &'a ConfigLoader,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection, loader: &'a ConfigLoader) -> Self {
        Self { db, loader }
    }

    pub async fn find(&self, guild_id: u64) -> Result<Option<Guild>, GuildError> {
        Ok(GuildRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?)
    }

    /// Loads a guild record, failing with `NotFound` if the guild was never set up.
    pub async fn with_id(&self, guild_id: u64) -> Result<Guild, GuildError> {
        self.find(guild_id)
            .await?
            .ok_or(GuildError::NotFound(guild_id))
    }

    /// Sets up a guild from a config URL.
    ///
    /// Validates and normalizes the URL, loads the config it points to, then inserts a
    /// record with the mirror fields taken from `live` and the normalized URL stored as
    /// the config source. No fetch is made for a rejected URL. The returned guild
    /// already has the loaded config cached.
    ///
    /// # Returns
    /// - `Ok(Guild)` - Newly created record
    /// - `Err(GuildError::InvalidConfigUrl)` - URL rejected by the allow-list
    /// - `Err(GuildError::Fetch | Parse | Validation)` - Config could not be loaded
    /// - `Err(GuildError::DuplicateGuild)` - A record for this guild already exists
    /// - `Err(GuildError::DbErr)` - Database error during lookup or insert
    pub async fn create_from_url(&self, live: &LiveGuild, url: &str) -> Result<Guild, GuildError> {
        let config_url =
            validate_config_url(url).ok_or_else(|| GuildError::InvalidConfigUrl(url.to_string()))?;

        let (config, raw) = self.loader.load(&config_url).await?;

        let guild_repo = GuildRepository::new(self.db);

        if guild_repo.find_by_guild_id(live.id).await?.is_some() {
            return Err(GuildError::DuplicateGuild(live.id));
        }

        let mut guild = guild_repo
            .create(CreateGuildParam {
                live: live.clone(),
                config: raw,
                config_url,
            })
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => GuildError::DuplicateGuild(live.id),
                _ => GuildError::DbErr(e),
            })?;

        guild.cache_config(Arc::new(config));

        tracing::info!(
            "Set up guild {} ({}) from {}",
            guild.guild_id,
            guild.name.as_deref().unwrap_or("unnamed"),
            guild.config_url
        );

        Ok(guild)
    }

    /// Brings the mirrored Discord fields of a record up to date with `live`.
    ///
    /// Issues one UPDATE covering only the fields that differ, or no write at all when
    /// nothing differs. The config cache is not touched.
    ///
    /// # Returns
    /// - `Ok(true)` - Record was updated
    /// - `Ok(false)` - Record was already in sync
    /// - `Err(GuildError::DbErr)` - Database error during update
    pub async fn sync(&self, guild: &mut Guild, live: &LiveGuild) -> Result<bool, GuildError> {
        let changes = guild.mirror_changes(live);

        if changes.is_empty() {
            tracing::debug!("Guild {} already in sync", guild.guild_id);
            return Ok(false);
        }

        GuildRepository::new(self.db)
            .update_mirror_fields(guild.guild_id, &changes)
            .await?;

        guild.apply_mirror_changes(&changes);

        tracing::debug!("Synced {} fields of guild {}", changes.len(), guild.guild_id);

        Ok(true)
    }

    /// Re-fetches the config from the stored URL and persists it.
    ///
    /// On success the stored document is replaced and the cached parsed config is
    /// dropped. On failure nothing is written and the cache is kept.
    pub async fn reload(&self, guild: &mut Guild) -> Result<(), GuildError> {
        let (_, raw) = self.loader.load(&guild.config_url).await?;

        GuildRepository::new(self.db)
            .update_config(guild.guild_id, raw.clone())
            .await?;

        guild.replace_config(raw);

        tracing::info!("Reloaded config of guild {}", guild.guild_id);

        Ok(())
    }

    /// Returns the guild's parsed config, building it at most once per stored document.
    ///
    /// Returns the cached config when present. Otherwise reloads first if no document
    /// is stored, then parses the stored document and caches the result. The config is
    /// only as fresh as the last load; call [`GuildService::reload`] to refresh it.
    ///
    /// # Returns
    /// - `Ok(Arc<GuildConfig>)` - Cached or freshly parsed config
    /// - `Err(GuildError)` - Reload failed, or the stored document no longer matches the schema
    pub async fn get_config(&self, guild: &mut Guild) -> Result<Arc<GuildConfig>, GuildError> {
        if let Some(config) = guild.cached_config() {
            return Ok(Arc::clone(config));
        }

        if !guild.has_config() {
            self.reload(guild).await?;
        }

        let document = guild.config().ok_or_else(|| {
            GuildError::Validation(format!("guild {} has no stored config", guild.guild_id))
        })?;
        let config = Arc::new(GuildConfig::from_document(document)?);

        guild.cache_config(Arc::clone(&config));

        Ok(config)
    }

    /// Mirrors the guild's live ban list into the ban cache.
    ///
    /// A failure to fetch the ban list is logged and swallowed: the method returns
    /// `Ok(())` without writing anything. Otherwise every ban is ensured in the cache
    /// and `last_ban_sync` is stamped afterwards in a separate write. Database errors
    /// always propagate.
    pub async fn sync_bans<B>(&self, guild: &mut Guild, source: &B) -> Result<(), GuildError>
    where
        B: BanSource + ?Sized,
    {
        let bans = match source.fetch_bans(guild.guild_id).await {
            Ok(bans) => bans,
            Err(e) => {
                tracing::warn!("Skipping ban sync for guild {}: {}", guild.guild_id, e);
                return Ok(());
            }
        };

        let ban_repo = GuildBanRepository::new(self.db);

        for ban in &bans {
            ban_repo.ensure(guild.guild_id, ban).await?;
        }

        let synced_at = Utc::now();

        GuildRepository::new(self.db)
            .update_last_ban_sync(guild.guild_id, synced_at)
            .await?;

        guild.last_ban_sync = Some(synced_at);

        tracing::debug!("Synced {} bans for guild {}", bans.len(), guild.guild_id);

        Ok(())
    }

    pub async fn set_enabled(&self, guild: &mut Guild, enabled: bool) -> Result<(), GuildError> {
        GuildRepository::new(self.db)
            .set_enabled(guild.guild_id, enabled)
            .await?;

        guild.enabled = enabled;

        Ok(())
    }

    /// Replaces the guild's whitelist. Duplicate flags are stored once.
    pub async fn update_whitelist(
        &self,
        guild: &mut Guild,
        flags: &[WhitelistFlag],
    ) -> Result<(), GuildError> {
        let mut whitelist = Vec::with_capacity(flags.len());
        for flag in flags {
            if !whitelist.contains(flag) {
                whitelist.push(*flag);
            }
        }

        GuildRepository::new(self.db)
            .update_whitelist(guild.guild_id, &whitelist)
            .await?;

        guild.whitelist = whitelist;

        Ok(())
    }
}
