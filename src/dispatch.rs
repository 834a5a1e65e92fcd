use std::sync::Arc;

use serenity::all::{ChannelId, CreateEmbed, CreateMessage, GuildId, Http};
use tracing::debug;

use crate::{
    command::Command,
    error::BotError,
    schedule::{Clock, next_friday, short_date},
    strategy::{self, Guide},
};

/// Rendered reply, kept apart from serenity's builder so it can be inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideEmbed {
    pub title: String,
    pub description: String,
    pub color: u32,
}

impl From<GuideEmbed> for CreateEmbed {
    fn from(embed: GuideEmbed) -> Self {
        CreateEmbed::new()
            .title(embed.title)
            .description(embed.description)
            .color(embed.color)
    }
}

/// The parts of an inbound message the dispatcher looks at.
#[derive(Debug, Clone, Copy)]
pub struct Incoming<'a> {
    pub content: &'a str,
    pub from_bot: bool,
    pub guild_id: Option<GuildId>,
}

pub(crate) trait ReplySink {
    async fn send_embed(&self, embed: CreateEmbed) -> Result<(), BotError>;
}

/// Replies into the channel a message came from.
pub struct ChannelSink<'a> {
    pub http: &'a Arc<Http>,
    pub channel_id: ChannelId,
}

impl ReplySink for ChannelSink<'_> {
    async fn send_embed(&self, embed: CreateEmbed) -> Result<(), BotError> {
        self.channel_id
            .send_message(self.http, CreateMessage::new().embed(embed))
            .await?;
        Ok(())
    }
}

pub struct Dispatcher {
    clock: Box<dyn Clock>,
    guild_id: Option<GuildId>,
}

impl Dispatcher {
    pub fn new(clock: impl Clock + 'static, guild_id: Option<GuildId>) -> Self {
        Self {
            clock: Box::new(clock),
            guild_id,
        }
    }

    /// Decides the reply for a message, if any.
    pub fn dispatch(&self, msg: Incoming<'_>) -> Option<GuideEmbed> {
        if msg.from_bot {
            return None;
        }
        if self.guild_id.is_some() && msg.guild_id != self.guild_id {
            return None;
        }
        let command = Command::parse(msg.content)?;
        debug!("Matched strategy command {command:?}");
        self.render(command)
    }

    pub fn render(&self, command: Command) -> Option<GuideEmbed> {
        match command {
            Command::Guide(lang) => {
                let guide = Guide::for_lang(lang);
                Some(GuideEmbed {
                    title: guide.title.to_owned(),
                    description: guide.description(),
                    color: lang.color(),
                })
            }
            Command::Floor { floor, lang } => {
                let entry = strategy::lookup(floor, lang)?;
                let friday = next_friday(self.clock.today());
                Some(GuideEmbed {
                    title: format!("{} {}", short_date(friday), entry.title_suffix),
                    description: lang.floor_description(entry.goal, entry.link),
                    color: lang.color(),
                })
            }
        }
    }

    /// Dispatches and sends at most one embed. Returns whether a reply went out.
    pub(crate) async fn handle(
        &self,
        sink: &impl ReplySink,
        msg: Incoming<'_>,
    ) -> Result<bool, BotError> {
        let Some(embed) = self.dispatch(msg) else {
            return Ok(false);
        };
        sink.send_embed(embed.into()).await?;
        Ok(true)
    }
}
