//! Discord gateway integration.
//!
//! Receives guild, emoji and ban events and drives the sync operations of the guild
//! layer with them. Only guilds that have been set up with a config URL are synced;
//! events for any other guild are ignored.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability and updates
//! - `GUILD_MODERATION` - Ban additions
//! - `GUILD_EMOJIS_AND_STICKERS` - Emoji list updates

pub mod handler;
pub mod start;
