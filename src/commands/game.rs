use tracing::instrument;

use crate::{
    commands::LogCommands,
    games::guess::{message, GameOptions},
    utils::poise::{CommandResult, Context, ContextExt},
};

/// start a guess-the-idol game in this channel
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    guild_only,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn start(
    ctx: Context<'_>,
    #[description = "the idol name to guess"] name: String,
    #[description = "wrong guess limit per user"] limit: i64,
    #[description = "the name of the idol's group"] group: Option<String>,
    #[description = "an image url revealed when the game is over"] image: Option<String>,
) -> CommandResult {
    ctx.log_command().await;

    let options = GameOptions::new(name, limit)
        .group(group)
        .image(image)
        .started_by(ctx.author().id);
    let has_group = options.has_group();

    let limit = ctx.data().games().start(ctx.channel_id(), options).await?;

    ctx.reply_ephemeral(message::started(limit)).await?;

    let config = &ctx.data().config().game;
    ctx.say_in_channel(message::announcement(
        ctx.author().id,
        limit,
        config.prefix(),
        has_group,
        config.ping_role(),
    ))
    .await?;

    Ok(())
}

/// make a guess in this channel's game
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    guild_only,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn guess(
    ctx: Context<'_>,
    #[description = "your guess"] name: String,
) -> CommandResult {
    ctx.log_command().await;

    let outcome = ctx
        .data()
        .games()
        .guess(ctx.channel_id(), ctx.author().id, &name)
        .await?;

    ctx.say(message::guess_reply(ctx.author().id, name.trim(), &outcome))
        .await?;

    Ok(())
}

/// end the game in this channel
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    guild_only,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn end(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;

    let ended = ctx.data().games().end(ctx.channel_id()).await?;
    ctx.say(message::ended(&ended)).await?;

    Ok(())
}
