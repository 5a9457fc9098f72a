use poise::serenity_prelude::Message;
use tracing::debug;

use crate::{errors::CommandError, utils::serenity::message::MessageExt};

use super::{MessageWatcher, WatcherContext};

const LEFT: &str = "⬅️";
const RIGHT: &str = "➡️";

/// Whether an attachment's content type is something worth voting on.
fn is_media(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|kind| kind.starts_with("image") || kind.starts_with("video"))
}

/// Adds ⬅️ and ➡️ to images and videos posted in the reactions channel.
pub struct ArrowsWatcher;

impl MessageWatcher for ArrowsWatcher {
    type FilterOutput = ();

    fn filter(ctx: WatcherContext<'_>, msg: &Message) -> Option<()> {
        (msg.channel_id == ctx.data().config().reactions.channel()
            && msg
                .attachments
                .iter()
                .any(|attachment| is_media(attachment.content_type.as_deref())))
        .then_some(())
    }

    async fn action(ctx: WatcherContext<'_>, _: (), msg: &Message) -> Result<(), CommandError> {
        debug!(message = %msg.id, "adding arrow reactions");

        for emoji in [LEFT, RIGHT] {
            msg.react_ext(ctx.cache_http(), emoji).await?;
        }

        Ok(())
    }
}
