mod help;
mod ping;

use poise::PrefixFrameworkOptions;
use tracing::{error, info};

use crate::error::BotError;
use help::help;
use ping::ping;

pub type Context<'a> = poise::Context<'a, Data, BotError>;

#[derive(Debug, Default)]
pub struct Data {}

async fn on_error(error: poise::FrameworkError<'_, Data, BotError>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => panic!("Failed to start bot: {}", error),
        // `!strategy`, `!57en` and friends share the prefix, StrategyHandler answers those
        poise::FrameworkError::UnknownCommand { .. } => {}
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {}", ctx.command().name, error);
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e)
            }
        }
    }
}

fn option() -> poise::FrameworkOptions<Data, BotError> {
    poise::FrameworkOptions {
        commands: vec![help(), ping()],
        prefix_options: PrefixFrameworkOptions {
            prefix: Some("!".into()),
            ..Default::default()
        },
        on_error: |error| {
            Box::pin(async {
                on_error(error).await;
            })
        },
        pre_command: |ctx| Box::pin(async move { info!("Invoke Command: {}", ctx.command().name) }),
        ..Default::default()
    }
}

pub fn framework() -> poise::Framework<Data, BotError> {
    poise::Framework::builder()
        .setup(|_, _, _| {
            Box::pin(async move {
                info!("Framework has been set up!");
                Ok(Default::default())
            })
        })
        .options(option())
        .build()
}
