use chrono::Utc;
use poise::{CreateReply, command};
use serenity::all::CreateEmbed;

use super::Context;
use crate::{error::BotError, strategy::Lang};

#[command(prefix_command)]
/// Reports gateway heartbeat and message delivery latency
pub async fn ping(ctx: Context<'_>) -> Result<(), BotError> {
    let heartbeat = ctx.ping().await;
    let delivery = Utc::now() - ctx.created_at().to_utc();

    let embed = CreateEmbed::new()
        .title("Abyss Strategy Bot is online")
        .description(format!(
            "Heartbeat: {} ms\nDelivery: {} ms",
            heartbeat.as_millis(),
            delivery.num_milliseconds()
        ))
        .color(Lang::En.color());
    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}
