pub use super::guild::Entity as Guild;
pub use super::guild_ban::Entity as GuildBan;
pub use super::guild_emoji::Entity as GuildEmoji;
pub use super::user::Entity as User;
