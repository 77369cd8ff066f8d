use serenity::all::{Context, Ready};

/// Handles the ready event once the gateway session is established.
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guilds",
        ready.user.name,
        ready.guilds.len()
    );
}
