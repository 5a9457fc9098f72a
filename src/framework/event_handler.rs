use std::fmt;

use poise::{
    serenity_prelude::{self as serenity, FullEvent},
    BoxFuture, FrameworkContext,
};
use thiserror::Error;
use tracing::trace;

use crate::{
    errors::CommandError,
    watchers::{self, WatcherContext},
};

use super::PoiseData;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    MessageWatchers(#[from] MessageWatchersErrors),
}

#[derive(Debug)]
pub struct MessageWatchersErrors {
    failures: Vec<CommandError>,
}

impl MessageWatchersErrors {
    /// Collects the failed watchers, or `None` if every one succeeded.
    pub fn collect(results: impl IntoIterator<Item = Result<(), CommandError>>) -> Option<Self> {
        let failures: Vec<_> = results.into_iter().filter_map(Result::err).collect();
        (!failures.is_empty()).then_some(Self { failures })
    }
}

impl fmt::Display for MessageWatchersErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut failures = self.failures.iter();

        if let Some(first) = failures.next() {
            write!(f, "{first}")?;
        }

        for err in failures {
            write!(f, "; {err}")?;
        }

        Ok(())
    }
}

impl std::error::Error for MessageWatchersErrors {}

async fn event_handler(
    serenity_ctx: &serenity::Context,
    event: &FullEvent,
    framework_ctx: FrameworkContext<'_, PoiseData, CommandError>,
    data: &PoiseData,
) -> Result<(), HandlerError> {
    match event {
        FullEvent::Message { new_message: msg }
            if !msg.author.bot && msg.author.id != framework_ctx.bot_id =>
        {
            trace!(message = %msg.id, channel = %msg.channel_id, "message captured");

            let ctx = WatcherContext::new(serenity_ctx, data);
            if let Some(errors) = watchers::run_all(ctx, msg).await {
                return Err(errors.into());
            }
        }
        _ => (),
    }

    Ok(())
}

pub fn poise<'a>(
    serenity_ctx: &'a serenity::Context,
    event: &'a FullEvent,
    framework_ctx: FrameworkContext<'a, PoiseData, CommandError>,
    data: &'a PoiseData,
) -> BoxFuture<'a, Result<(), CommandError>> {
    Box::pin(async move {
        event_handler(serenity_ctx, event, framework_ctx, data)
            .await
            .map_err(CommandError::from)
    })
}
