pub mod prelude;

pub mod guild;
pub mod guild_ban;
pub mod guild_emoji;
pub mod user;
