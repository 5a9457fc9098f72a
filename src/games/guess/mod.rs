//! Guess-the-idol: one game per channel, a shared answer, and a per-user
//! limit on wrong guesses.

use poise::serenity_prelude::UserId;

mod error;
pub use error::Error;

mod session;
pub use session::GameSession;

mod manager;
pub use manager::GameManager;

pub mod message;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Case-folds a name so guesses compare case-insensitively.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Everything needed to start a game. `limit` is taken as the platform hands
/// it over and validated when the session is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameOptions {
    pub answer: String,
    pub limit: i64,
    pub group: Option<String>,
    pub image: Option<String>,
    pub starter: Option<UserId>,
}

impl GameOptions {
    pub fn new(answer: impl Into<String>, limit: i64) -> Self {
        Self {
            answer: answer.into(),
            limit,
            ..Self::default()
        }
    }

    pub fn group(mut self, group: Option<String>) -> Self {
        self.group = group.filter(|group| !group.trim().is_empty());
        self
    }

    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image.filter(|image| !image.trim().is_empty());
        self
    }

    pub fn started_by(mut self, user: UserId) -> Self {
        self.starter = Some(user);
        self
    }

    pub fn has_group(&self) -> bool {
        self.group.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The answer was guessed; the game is over for everyone.
    Won {
        answer: String,
        image: Option<String>,
    },

    /// The guess named the idol's group. Costs nothing.
    GroupMatched,

    Wrong {
        attempts: u32,
        limit: u32,
        /// Set only on the guess that brings `attempts` up to `limit`.
        eliminated: bool,
    },
}

impl GuessOutcome {
    pub fn remaining(&self) -> Option<u32> {
        match self {
            Self::Wrong {
                attempts, limit, ..
            } => Some(limit.saturating_sub(*attempts)),
            _ => None,
        }
    }
}

/// A game closed with `/end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ended {
    pub answer: String,
    pub image: Option<String>,
    pub starter: Option<UserId>,
}
