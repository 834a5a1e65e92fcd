use const_format::formatcp;
use poise::{CreateReply, command};
use serenity::all::CreateEmbed;

use super::Context;
use crate::{
    error::BotError,
    strategy::{FIRST_FLOOR, LAST_FLOOR, Lang},
};

const USAGE: &str = formatcp!(
    "`!strategy` English guide\n\
`!攻略` 中文攻略指南\n\
`!戦略` 日本語の攻略ガイド\n\
`!<floor>` / `!<floor>en` / `!<floor>cn` / `!<floor>jp` weekly floor strategy, e.g. `!{FIRST_FLOOR}cn`\n\
Floors {FIRST_FLOOR} to {LAST_FLOOR}, refreshed every Friday\n\
`!ping` latency check"
);

#[command(prefix_command)]
/// Lists the strategy commands
pub async fn help(ctx: Context<'_>) -> Result<(), BotError> {
    let embed = CreateEmbed::new()
        .title("📘 Abyss Strategy Bot")
        .description(USAGE)
        .color(Lang::En.color());

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}
