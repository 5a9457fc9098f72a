use std::collections::HashMap;

use poise::serenity_prelude::UserId;
use tracing::{debug, trace};

use super::{normalize, Ended, Error, GameOptions, GuessOutcome, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    target: String,
    answer: String,
    group: Option<String>,
    image: Option<String>,
    starter: Option<UserId>,
    limit: u32,
    active: bool,
    attempts: HashMap<UserId, u32>,
}

impl GameSession {
    pub fn new(options: GameOptions) -> Result<Self> {
        let limit = u32::try_from(options.limit)
            .ok()
            .filter(|limit| *limit >= 1)
            .ok_or(Error::InvalidConfig)?;

        let answer = options.answer.trim().to_owned();
        if answer.is_empty() {
            return Err(Error::InvalidConfig);
        }

        Ok(Self {
            target: normalize(&answer),
            answer,
            group: options.group.as_deref().map(normalize),
            image: options.image,
            starter: options.starter,
            limit,
            active: true,
            attempts: HashMap::new(),
        })
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }

    pub fn attempts(&self, user: UserId) -> u32 {
        self.attempts.get(&user).copied().unwrap_or_default()
    }

    pub fn guess(&mut self, user: UserId, guess: &str) -> Result<GuessOutcome> {
        if !self.active {
            return Err(Error::NoActiveGame);
        }

        let attempts = self.attempts(user);
        if attempts >= self.limit {
            trace!(%user, attempts, "guess from eliminated user");
            return Err(Error::UserEliminated);
        }

        let guess = normalize(guess);

        if guess == self.target {
            self.active = false;
            debug!(%user, "answer guessed");

            return Ok(GuessOutcome::Won {
                answer: self.answer.clone(),
                image: self.image.clone(),
            });
        }

        if self.group.as_ref().is_some_and(|group| *group == guess) {
            return Ok(GuessOutcome::GroupMatched);
        }

        let attempts = attempts + 1;
        self.attempts.insert(user, attempts);

        Ok(GuessOutcome::Wrong {
            attempts,
            limit: self.limit,
            eliminated: attempts == self.limit,
        })
    }

    pub fn end(&mut self) -> Result<Ended> {
        if !self.active {
            return Err(Error::NoActiveGame);
        }

        self.active = false;

        Ok(Ended {
            answer: self.answer.clone(),
            image: self.image.clone(),
            starter: self.starter,
        })
    }
}
