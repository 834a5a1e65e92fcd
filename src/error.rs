use snafu::Snafu;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)))]
pub enum BotError {
    #[snafu(display("Bot token is missing, set `token` in the config file or DISCORD_TOKEN"))]
    MissingToken,
    #[snafu(display("Failed to read bot configuration: {source}"))]
    Config { source: figment::Error },
    #[snafu(transparent)]
    SerenityError { source: serenity::Error },
}
