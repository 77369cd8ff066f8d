//! Domain models for the guild layer.
//!
//! Entity models are converted into these types at the repository boundary, and live
//! serenity objects are converted into snapshot types at the bot boundary. The service
//! layer only ever works with the types in this module.

pub mod guild;
pub mod guild_config;
pub mod live;

pub use guild::{CreateGuildParam, Guild, MirrorField, WhitelistFlag};
pub use guild_config::GuildConfig;
pub use live::{LiveBan, LiveEmoji, LiveGuild, LiveUser};
