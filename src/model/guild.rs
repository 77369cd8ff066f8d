use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::model::{guild_config::GuildConfig, live::LiveGuild};

/// Features a guild has to be explicitly granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhitelistFlag {
    Music,
    ModlogCustomFormat,
}

/// One Discord-sourced column of the `guilds` table with its new value.
///
/// Produced by [`Guild::mirror_changes`] for each column whose stored value differs
/// from the live guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorField {
    OwnerId(Option<u64>),
    Name(Option<String>),
    Icon(Option<String>),
    Splash(Option<String>),
    Region(Option<String>),
}

/// Parameters for inserting a new guild record.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateGuildParam {
    /// Live guild the mirror columns are populated from.
    pub live: LiveGuild,
    /// Raw config document as fetched from `config_url`.
    pub config: Value,
    /// Normalized config URL.
    pub config_url: String,
}

/// A guild the bot has been set up in.
///
/// Holds the durable row plus an in-memory cache of the parsed config. The cache is
/// never persisted and is dropped whenever `config` changes, so each distinct stored
/// document is parsed at most once per `Guild` value.
#[derive(Debug, Clone)]
pub struct Guild {
    pub guild_id: u64,
    pub owner_id: Option<u64>,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub splash: Option<String>,
    pub region: Option<String>,
    config: Option<Value>,
    pub config_url: String,
    pub enabled: bool,
    pub whitelist: Vec<WhitelistFlag>,
    pub last_ban_sync: Option<DateTime<Utc>>,
    pub added_at: DateTime<Utc>,
    cached_config: Option<Arc<GuildConfig>>,
}

impl Guild {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Guild)` - Converted model with an empty config cache
    /// - `Err(DbErr::Custom)` - Stored whitelist is not a list of known flags
    pub fn from_entity(entity: entity::guild::Model) -> Result<Self, DbErr> {
        let whitelist = serde_json::from_value(entity.whitelist)
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild whitelist: {}", e)))?;

        Ok(Self {
            guild_id: entity.guild_id as u64,
            owner_id: entity.owner_id.map(|id| id as u64),
            name: entity.name,
            icon: entity.icon,
            splash: entity.splash,
            region: entity.region,
            config: entity.config,
            config_url: entity.config_url,
            enabled: entity.enabled,
            whitelist,
            last_ban_sync: entity.last_ban_sync,
            added_at: entity.added_at,
            cached_config: None,
        })
    }

    /// Lists the mirrored columns whose stored value differs from `live`.
    ///
    /// An empty list means the record is already in sync.
    pub fn mirror_changes(&self, live: &LiveGuild) -> Vec<MirrorField> {
        let mut changes = Vec::new();

        if self.owner_id != live.owner_id {
            changes.push(MirrorField::OwnerId(live.owner_id));
        }
        if self.name != live.name {
            changes.push(MirrorField::Name(live.name.clone()));
        }
        if self.icon != live.icon {
            changes.push(MirrorField::Icon(live.icon.clone()));
        }
        if self.splash != live.splash {
            changes.push(MirrorField::Splash(live.splash.clone()));
        }
        if self.region != live.region {
            changes.push(MirrorField::Region(live.region.clone()));
        }

        changes
    }

    /// Applies already-persisted mirror changes to this in-memory copy.
    pub fn apply_mirror_changes(&mut self, changes: &[MirrorField]) {
        for change in changes {
            match change {
                MirrorField::OwnerId(value) => self.owner_id = *value,
                MirrorField::Name(value) => self.name = value.clone(),
                MirrorField::Icon(value) => self.icon = value.clone(),
                MirrorField::Splash(value) => self.splash = value.clone(),
                MirrorField::Region(value) => self.region = value.clone(),
            }
        }
    }

    /// Whether a usable config document is stored.
    ///
    /// `null` and `{}` count as missing, the same as an unset column.
    pub fn has_config(&self) -> bool {
        match &self.config {
            None | Some(Value::Null) => false,
            Some(Value::Object(map)) => !map.is_empty(),
            Some(_) => true,
        }
    }

    /// Raw config document as last fetched from `config_url`.
    pub fn config(&self) -> Option<&Value> {
        self.config.as_ref()
    }

    pub fn cached_config(&self) -> Option<&Arc<GuildConfig>> {
        self.cached_config.as_ref()
    }

    pub(crate) fn cache_config(&mut self, config: Arc<GuildConfig>) {
        self.cached_config = Some(config);
    }

    /// Replaces the raw document and drops the parsed config built from the old one.
    pub(crate) fn replace_config(&mut self, config: Value) {
        self.config = Some(config);
        self.cached_config = None;
    }

    pub fn is_whitelisted(&self, flag: WhitelistFlag) -> bool {
        self.whitelist.contains(&flag)
    }
}
