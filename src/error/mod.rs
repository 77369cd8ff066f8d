//! Error types for the guild layer and the bot binary.
//!
//! `GuildError` covers the record, config and cache operations and is what library
//! callers match on. `AppError` is the top-level error of the binary: it aggregates
//! configuration, startup and Discord client failures.

pub mod config;
pub mod guild;

use thiserror::Error;

pub use config::ConfigError;
pub use guild::GuildError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Guild record, config loading or cache error.
    #[error(transparent)]
    GuildErr(#[from] GuildError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Boxes the error to keep `AppError` small; `serenity::Error` is very large.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
