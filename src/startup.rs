use reqwest::redirect::Policy;

use crate::{config::Config, error::AppError, service::validate_config_url};

/// Most redirects a single config fetch follows.
const MAX_REDIRECTS: usize = 10;

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the `guilds`, `guild_emojis`, `guild_bans`
/// and `users` tables exist before the bot receives its first event.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used to fetch guild configs.
///
/// Redirects are followed only while the target stays on the config host allow-list,
/// so `github.com/<user>/<repo>/raw/...` resolves to `raw.githubusercontent.com`. A
/// redirect elsewhere is not followed and its 3xx response is reported as a fetch
/// failure by the config loader. The per-request timeout is applied by the config
/// loader itself.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(config_redirect_policy())
        .user_agent(concat!("guildkeeper/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

fn config_redirect_policy() -> Policy {
    Policy::custom(|attempt| {
        if attempt.previous().len() >= MAX_REDIRECTS {
            attempt.error("too many redirects")
        } else if validate_config_url(attempt.url().as_str()).is_none() {
            attempt.stop()
        } else {
            attempt.follow()
        }
    })
}
