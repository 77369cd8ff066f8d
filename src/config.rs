use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,
    pub discord_token: String,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a local `.env` file.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present
    /// - `Err(AppError::ConfigErr)` - A required variable is missing
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_token: std::env::var("DISCORD_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
        })
    }
}
