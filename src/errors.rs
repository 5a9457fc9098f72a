use poise::{
    serenity_prelude::{self as serenity, Permissions},
    BoxFuture, FrameworkError,
};

use thiserror::Error as ThisError;
use tracing::{debug, error, error_span, warn, Instrument};

use crate::{
    framework::{event_handler::HandlerError, PoiseData},
    games::guess,
    utils::poise::{Context, ContextExt},
};

pub fn handle_framework_error(err: FrameworkError<'_, PoiseData, CommandError>) -> BoxFuture<()> {
    Box::pin(async move {
        match err {
            FrameworkError::Command { error, ctx, .. } => {
                let command = ctx.invoked_command_name();
                let span = error_span!("", command);

                handle_error(error, ctx).instrument(span).await;
            }
            FrameworkError::MissingBotPermissions {
                missing_permissions,
                ctx,
                ..
            } => {
                let command = ctx.invoked_command_name();
                let _enter = error_span!("", command).entered();

                error!(%missing_permissions, "bot is missing permissions");
            }
            FrameworkError::EventHandler { error, event, .. } => {
                error!(event = event.snake_case_name(), %error, "event handler failed");
            }
            _ => {
                if let Err(err) = poise::builtins::on_error(err).await {
                    error!(%err, "failed to handle framework error");
                }
            }
        };
    })
}

async fn handle_error(err: CommandError, ctx: Context<'_>) {
    if let CommandError::Game(ref err) = err {
        debug!(%err, "game rejected command");
    } else {
        error!(%err);
    }

    if let Err(err) = ctx.reply_ephemeral(err.to_string()).await {
        warn!(%err, "sending error message failed");
    }
}

#[derive(Debug, ThisError)]
pub enum CommandError {
    #[error("{0}")]
    Game(#[from] guess::Error),

    #[error("error sending message: {0}")]
    SendMessage(#[from] SendMessageError),

    #[error("other serenity error: {0}")]
    Serenity(#[from] serenity::Error),

    #[error("error from event handler: {0}")]
    EventHandler(#[from] HandlerError),
}

#[derive(Debug, ThisError)]
pub enum SendMessageError {
    #[error(transparent)]
    Permissions(#[from] MissingPermissionsError),

    #[error(transparent)]
    Other(serenity::Error),
}

impl From<serenity::Error> for SendMessageError {
    fn from(value: serenity::Error) -> Self {
        match value {
            serenity::Error::Model(serenity::ModelError::InvalidPermissions {
                required,
                present,
            }) => Self::Permissions(MissingPermissionsError {
                required: Some((required, present)),
            }),
            serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(ref response))
                if response.status_code.as_u16() == 403 =>
            {
                Self::Permissions(MissingPermissionsError { required: None })
            }
            _ => Self::Other(value),
        }
    }
}

impl SendMessageError {
    /// Logs and drops permission errors, passing anything else through.
    pub fn ignore_permissions(self) -> Result<(), Self> {
        match self {
            Self::Permissions(err) => {
                warn!(%err, "missing permissions, skipping");
                Ok(())
            }
            other => Err(other),
        }
    }
}

/// Either the permissions the bot noticed it lacked before sending, or a
/// bare 403 from discord.
#[derive(Debug, ThisError)]
#[error("missing permissions: {}", self.missing())]
pub struct MissingPermissionsError {
    required: Option<(Permissions, Permissions)>,
}

impl MissingPermissionsError {
    fn missing(&self) -> String {
        self.required.map_or_else(
            || "forbidden by discord".to_owned(),
            |(required, present)| required.difference(present).to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_permissions_are_detected() {
        let err = serenity::Error::Model(serenity::ModelError::InvalidPermissions {
            required: Permissions::ADD_REACTIONS | Permissions::SEND_MESSAGES,
            present: Permissions::SEND_MESSAGES,
        });

        let err = SendMessageError::from(err);
        assert!(matches!(err, SendMessageError::Permissions(_)));
        assert!(err.ignore_permissions().is_ok());
    }

    #[test]
    fn other_errors_pass_through() {
        let err = SendMessageError::from(serenity::Error::Other("boop"));
        assert!(err.ignore_permissions().is_err());
    }

    #[test]
    fn game_errors_read_plainly() {
        assert_eq!(
            CommandError::from(guess::Error::AlreadyActive).to_string(),
            "a game is already active in this channel!"
        );
    }
}
