use poise::serenity_prelude as serenity;
use tracing::{info, trace};

use crate::{
    commands,
    errors::{self, CommandError},
};

use super::{data::PoiseData, event_handler};

pub fn build(data: PoiseData) -> poise::Framework<PoiseData, CommandError> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::list(),
            on_error: errors::handle_framework_error,
            event_handler: event_handler::poise,
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                let guild = data.config().bot.guild();
                let commands = &framework.options().commands;

                poise::builtins::register_in_guild(ctx, commands, guild).await?;
                info!(count = commands.len(), %guild, "synced commands to guild");

                ctx.set_activity(data.config().bot.activity());

                info!(user = %ready.user.name, "bot is ready");
                trace!("finished setup, accepting commands");

                Ok(data)
            })
        })
        .build()
}

/// Gateway intents needed for slash commands and reading guesses from chat.
pub fn intents() -> serenity::GatewayIntents {
    serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT
}
