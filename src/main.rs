use abyss_guide_bot::{
    Args,
    config::BotCfg,
    dispatch::Dispatcher,
    framework::framework,
    handlers::*,
    logging,
    schedule::SystemClock,
};
use clap::Parser;
use serenity::{Client, all::GatewayIntents};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let cfg = BotCfg::read(&args.config);
    logging::init(cfg.as_ref().ok().and_then(|cfg| cfg.time_zone));
    let cfg = match cfg {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    info!("Loaded configuration from {}", cfg.path.display());

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let dispatcher = Dispatcher::new(SystemClock { tz: cfg.time_zone }, cfg.guild_id);
    // The token gets the "Bot " prefix from serenity.
    let mut client = match Client::builder(&cfg.token, intents)
        .event_handler(BootHandler {
            guild_id: cfg.guild_id,
        })
        .event_handler(StrategyHandler::new(dispatcher))
        .framework(framework())
        .await
    {
        Ok(client) => client,
        Err(why) => {
            error!("Error creating client: {why:?}");
            std::process::exit(1);
        }
    };

    // Shards reconnect on their own with exponential backoff.
    if let Err(why) = client.start().await {
        error!("Client error: {why:?}");
        std::process::exit(1);
    }
}
