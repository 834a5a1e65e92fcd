use owo_colors::OwoColorize as _;
use serenity::{
    all::{GuildId, Ready, ResumedEvent},
    async_trait,
    prelude::*,
};
use tracing::{info, warn};

/// Logs connection lifecycle and checks the bot actually sits in its home guild.
pub struct BootHandler {
    pub guild_id: Option<GuildId>,
}

#[async_trait]
impl EventHandler for BootHandler {
    async fn cache_ready(&self, ctx: Context, guilds: Vec<GuildId>) {
        let Some(home) = self.guild_id else {
            info!(
                "Serving strategy guides in all {} guilds.",
                guilds.len().to_string().green()
            );
            return;
        };
        if !guilds.contains(&home) {
            warn!(
                "Configured guild {} is not among the {} guilds the bot joined, no message will be answered",
                home.red(),
                guilds.len()
            );
            return;
        }
        let name = ctx
            .cache
            .guild(home)
            .map(|g| g.name.to_owned())
            .unwrap_or("Uncached Guild".to_string());
        info!("Serving strategy guides in {} ({})", name.green(), home);
    }

    async fn resume(&self, _ctx: Context, _resumed: ResumedEvent) {
        info!("Gateway session resumed.");
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            "{} is connected to {} guilds!",
            ready.user.name.green(),
            ready.guilds.len()
        );
    }
}
