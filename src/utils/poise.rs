use crate::{errors::CommandError, framework::PoiseData};

use poise::{serenity_prelude as serenity, CreateReply};

pub type Context<'a> = poise::Context<'a, PoiseData, CommandError>;

pub type Command = poise::Command<PoiseData, CommandError>;
pub type CommandResult = Result<(), CommandError>;

pub trait ContextExt {
    /// Replies so only the invoking user can see it.
    async fn reply_ephemeral(
        &self,
        text: impl Into<String>,
    ) -> Result<poise::ReplyHandle<'_>, serenity::Error>;

    /// Posts to the channel the command was used in, outside the interaction.
    async fn say_in_channel(
        &self,
        text: impl Into<String>,
    ) -> Result<serenity::Message, serenity::Error>;
}

impl ContextExt for Context<'_> {
    async fn reply_ephemeral(
        &self,
        text: impl Into<String>,
    ) -> Result<poise::ReplyHandle<'_>, serenity::Error> {
        let builder = CreateReply::default()
            .reply(true)
            .ephemeral(true)
            .content(text);
        self.send(builder).await
    }

    async fn say_in_channel(
        &self,
        text: impl Into<String>,
    ) -> Result<serenity::Message, serenity::Error> {
        self.channel_id().say(self.serenity_context(), text).await
    }
}
