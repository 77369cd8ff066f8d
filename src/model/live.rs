//! Snapshots of live Discord objects.
//!
//! Sync operations compare durable rows against these plain structs rather than against
//! serenity types directly, so that the same code path serves gateway events, REST
//! responses and tests.

use serenity::all::{Ban, Emoji, Guild, GuildId, PartialGuild, User};

/// The Discord-sourced attributes of a guild that the `guilds` table mirrors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveGuild {
    pub id: u64,
    pub owner_id: Option<u64>,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub splash: Option<String>,
    /// Voice region. Discord no longer reports one per guild, so serenity sources
    /// always leave this `None`.
    pub region: Option<String>,
}

impl From<&Guild> for LiveGuild {
    fn from(guild: &Guild) -> Self {
        Self {
            id: guild.id.get(),
            owner_id: Some(guild.owner_id.get()),
            name: Some(guild.name.clone()),
            icon: guild.icon.as_ref().map(|hash| hash.to_string()),
            splash: guild.splash.as_ref().map(|hash| hash.to_string()),
            region: None,
        }
    }
}

impl From<&PartialGuild> for LiveGuild {
    fn from(guild: &PartialGuild) -> Self {
        Self {
            id: guild.id.get(),
            owner_id: Some(guild.owner_id.get()),
            name: Some(guild.name.clone()),
            icon: guild.icon.as_ref().map(|hash| hash.to_string()),
            splash: guild.splash.as_ref().map(|hash| hash.to_string()),
            region: None,
        }
    }
}

/// A guild emoji together with the guild it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveEmoji {
    pub id: u64,
    pub guild_id: u64,
    pub name: String,
    pub require_colons: bool,
    pub managed: bool,
    pub roles: Vec<u64>,
}

impl LiveEmoji {
    /// Serenity emojis don't carry their guild, so the caller supplies it from the
    /// event or guild the emoji came from.
    pub fn from_emoji(guild_id: GuildId, emoji: &Emoji) -> Self {
        Self {
            id: emoji.id.get(),
            guild_id: guild_id.get(),
            name: emoji.name.clone(),
            require_colons: emoji.require_colons,
            managed: emoji.managed,
            roles: emoji.roles.iter().map(|role| role.get()).collect(),
        }
    }
}

/// The minimal user attributes needed to create a `users` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveUser {
    pub id: u64,
    pub username: String,
    pub avatar: Option<String>,
    pub bot: bool,
}

impl From<&User> for LiveUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.get(),
            username: user.name.clone(),
            avatar: user.avatar.as_ref().map(|hash| hash.to_string()),
            bot: user.bot,
        }
    }
}

/// A single entry of a guild's ban list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveBan {
    pub user: LiveUser,
    pub reason: Option<String>,
}

impl From<&Ban> for LiveBan {
    fn from(ban: &Ban) -> Self {
        Self {
            user: LiveUser::from(&ban.user),
            reason: ban.reason.clone(),
        }
    }
}

impl LiveBan {
    /// Ban gateway events only carry the user; the reason is unknown.
    pub fn from_user(user: &User) -> Self {
        Self {
            user: LiveUser::from(user),
            reason: None,
        }
    }
}
