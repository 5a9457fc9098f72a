use poise::serenity_prelude::{CacheHttp, Message, ReactionType};
use tracing::trace;

use crate::errors::SendMessageError;

pub trait MessageExt {
    /// Reacts with a unicode emoji. Missing permissions are logged and
    /// treated as success.
    async fn react_ext(
        &self,
        cache_http: impl CacheHttp,
        emoji: &str,
    ) -> Result<(), SendMessageError>;
}

impl MessageExt for Message {
    async fn react_ext(
        &self,
        cache_http: impl CacheHttp,
        emoji: &str,
    ) -> Result<(), SendMessageError> {
        trace!(message = %self.id, emoji, "reacting");

        match self
            .react(cache_http, ReactionType::Unicode(emoji.to_owned()))
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => SendMessageError::from(err).ignore_permissions(),
        }
    }
}
