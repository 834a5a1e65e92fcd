use serenity::{async_trait, model::channel::Message, prelude::*};
use tracing::warn;

use crate::dispatch::{ChannelSink, Dispatcher, Incoming};

pub struct StrategyHandler {
    dispatcher: Dispatcher,
}

impl StrategyHandler {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl EventHandler for StrategyHandler {
    // Event handlers are dispatched through a threadpool, and so multiple events can be
    // dispatched simultaneously.
    async fn message(&self, ctx: Context, msg: Message) {
        let incoming = Incoming {
            content: &msg.content,
            from_bot: msg.author.bot,
            guild_id: msg.guild_id,
        };
        let sink = ChannelSink {
            http: &ctx.http,
            channel_id: msg.channel_id,
        };
        if let Err(why) = self.dispatcher.handle(&sink, incoming).await {
            warn!(
                "Error sending strategy embed to channel {}: {why:?}",
                msg.channel_id
            );
        }
    }
}
