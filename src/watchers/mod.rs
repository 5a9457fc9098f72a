//! Things the bot does on its own when it sees a message.

use poise::serenity_prelude::{self as serenity, Message};

use crate::{
    errors::CommandError,
    framework::{event_handler::MessageWatchersErrors, PoiseData},
};

mod arrows;
pub use arrows::ArrowsWatcher;

mod guesses;
pub use guesses::GuessWatcher;

pub trait MessageWatcher {
    type FilterOutput;

    fn filter(ctx: WatcherContext<'_>, msg: &Message) -> Option<Self::FilterOutput>;

    async fn action(
        ctx: WatcherContext<'_>,
        filter: Self::FilterOutput,
        msg: &Message,
    ) -> Result<(), CommandError>;

    async fn run(ctx: WatcherContext<'_>, msg: &Message) -> Result<(), CommandError> {
        if let Some(filter) = Self::filter(ctx, msg) {
            Self::action(ctx, filter, msg).await
        } else {
            Ok(())
        }
    }
}

/// Runs every watcher on a message, returning the failures if there were any.
pub async fn run_all(ctx: WatcherContext<'_>, msg: &Message) -> Option<MessageWatchersErrors> {
    let (arrows, guesses) = tokio::join!(
        ArrowsWatcher::run(ctx, msg),
        GuessWatcher::run(ctx, msg)
    );

    MessageWatchersErrors::collect([arrows, guesses])
}

#[derive(Copy, Clone)]
pub struct WatcherContext<'a> {
    serenity_ctx: &'a serenity::Context,
    data: &'a PoiseData,
}

impl<'a> WatcherContext<'a> {
    pub fn new(serenity_ctx: &'a serenity::Context, data: &'a PoiseData) -> Self {
        Self { serenity_ctx, data }
    }

    fn data(self) -> &'a PoiseData {
        self.data
    }

    fn cache_http(self) -> &'a serenity::Context {
        self.serenity_ctx
    }
}
