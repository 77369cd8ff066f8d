use thiserror::Error;

/// Errors raised by guild record, config loader and cache operations.
///
/// Everything except `DbErr` is expected to be reported back to whoever asked for the
/// operation (typically a guild administrator). Storage errors are opaque and passed
/// through unchanged.
#[derive(Error, Debug)]
pub enum GuildError {
    /// The config URL failed to parse or its host is not on the allow-list.
    #[error("Invalid configuration URL: {0}")]
    InvalidConfigUrl(String),

    /// The config fetch failed: connection error, timeout or non-success status.
    #[error("Failed to fetch configuration: {0}")]
    Fetch(String),

    /// The fetched body is not YAML or its top level is not a mapping.
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// The parsed document does not satisfy the guild config schema.
    #[error("Invalid configuration: {0}")]
    Validation(String),

    /// A record for this guild id already exists.
    #[error("Guild {0} is already set up")]
    DuplicateGuild(u64),

    /// No record exists for this guild id.
    #[error("Guild {0} not found")]
    NotFound(u64),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl From<reqwest::Error> for GuildError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(err.to_string())
    }
}
