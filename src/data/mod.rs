//! Database repository layer for the guild tables.
//!
//! This module contains repository structs that handle database operations for each
//! table. Repositories use SeaORM entity models internally. The guild repository
//! returns the `Guild` domain model; the emoji, ban and user caches are plain mirrors
//! and return their entity models directly.

pub mod guild;
pub mod guild_ban;
pub mod guild_emoji;
pub mod user;

pub use guild::GuildRepository;
pub use guild_ban::GuildBanRepository;
pub use guild_emoji::GuildEmojiRepository;
pub use user::UserRepository;
