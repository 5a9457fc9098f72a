use poise::serenity_prelude::Message;
use tracing::{debug, trace};

use crate::{
    errors::CommandError,
    games::guess::{self, message, GuessOutcome},
    utils::serenity::message::MessageExt,
};

use super::{MessageWatcher, WatcherContext};

/// The guess in a message like `!lisa`, if it is one.
fn parse_guess<'a>(prefix: &str, content: &'a str) -> Option<&'a str> {
    if prefix.is_empty() {
        return None;
    }

    let guess = content.strip_prefix(prefix)?.trim();
    (!guess.is_empty()).then_some(guess)
}

/// Treats prefixed chat messages as guesses and answers with reactions.
pub struct GuessWatcher;

impl MessageWatcher for GuessWatcher {
    type FilterOutput = String;

    fn filter(ctx: WatcherContext<'_>, msg: &Message) -> Option<String> {
        msg.guild_id?;
        parse_guess(ctx.data().config().game.prefix(), &msg.content).map(str::to_owned)
    }

    async fn action(
        ctx: WatcherContext<'_>,
        guess: String,
        msg: &Message,
    ) -> Result<(), CommandError> {
        let result = ctx
            .data()
            .games()
            .guess(msg.channel_id, msg.author.id, &guess)
            .await;

        let reactions = match result {
            Ok(GuessOutcome::Won { answer, image }) => {
                msg.channel_id
                    .say(
                        ctx.cache_http(),
                        message::won(msg.author.id, &answer, image.as_deref()),
                    )
                    .await?;

                return Ok(());
            }
            Ok(outcome) => message::reactions(&outcome),
            Err(guess::Error::UserEliminated) => vec![message::ELIMINATED],
            Err(err) => {
                trace!(%err, "ignoring prefixed message");
                return Ok(());
            }
        };

        debug!(message = %msg.id, ?reactions, "reacting to guess");

        for emoji in reactions {
            msg.react_ext(ctx.cache_http(), emoji).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::parse_guess;
    use pretty_assertions::assert_eq;

    #[test]
    fn prefixed() {
        assert_eq!(parse_guess("!", "!Lisa"), Some("Lisa"));
        assert_eq!(parse_guess("!", "!  Kim Jisoo "), Some("Kim Jisoo"));
        assert_eq!(parse_guess("?g ", "?g Jennie"), Some("Jennie"));
    }

    #[test]
    fn not_a_guess() {
        assert_eq!(parse_guess("!", "Lisa"), None);
        assert_eq!(parse_guess("!", "!"), None);
        assert_eq!(parse_guess("!", "!   "), None);
        assert_eq!(parse_guess("", "Lisa"), None);
    }
}
