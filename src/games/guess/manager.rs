use std::{collections::HashMap, sync::Arc};

use poise::serenity_prelude::{ChannelId, UserId};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use super::{Ended, Error, GameOptions, GameSession, GuessOutcome, Result};

type Session = Arc<Mutex<GameSession>>;

/// Games by channel. Only `start` write-locks the map; guesses and ends lock
/// just their own channel's session.
#[derive(Clone, Debug, Default)]
pub struct GameManager(Arc<RwLock<HashMap<ChannelId, Session>>>);

impl GameManager {
    pub fn new() -> Self {
        Self::default()
    }

    async fn get(&self, channel: ChannelId) -> Option<Session> {
        let guard = self.0.read().await;
        guard.get(&channel).cloned()
    }

    /// Starts a game, returning the per-user guess limit.
    pub async fn start(&self, channel: ChannelId, options: GameOptions) -> Result<u32> {
        let new = GameSession::new(options)?;
        let limit = new.limit();

        let mut guard = self.0.write().await;
        if let Some(session) = guard.get(&channel) {
            let mut session = session.lock().await;

            if session.is_active() {
                return Err(Error::AlreadyActive);
            }

            *session = new;
        } else {
            guard.insert(channel, Arc::new(Mutex::new(new)));
        }

        info!(%channel, limit, "game started");
        Ok(limit)
    }

    pub async fn guess(
        &self,
        channel: ChannelId,
        user: UserId,
        guess: &str,
    ) -> Result<GuessOutcome> {
        let session = self.get(channel).await.ok_or(Error::NoActiveGame)?;
        let outcome = session.lock().await.guess(user, guess);

        debug!(%channel, %user, ?outcome);
        outcome
    }

    pub async fn end(&self, channel: ChannelId) -> Result<Ended> {
        let session = self.get(channel).await.ok_or(Error::NoActiveGame)?;
        let ended = session.lock().await.end()?;

        info!(%channel, "game ended");
        Ok(ended)
    }

    #[cfg(test)]
    async fn session(&self, channel: ChannelId) -> Option<GameSession> {
        let session = self.get(channel).await?;
        let session = session.lock().await;
        Some(session.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    const ALICE: UserId = UserId::new(10);
    const BOB: UserId = UserId::new(11);

    #[tokio::test]
    #[traced_test]
    async fn rose_scenario() {
        let games = GameManager::new();
        let channel = ChannelId::new(1);

        assert_eq!(
            games.start(channel, GameOptions::new("Rosé", 2)).await,
            Ok(2)
        );

        assert_eq!(
            games.guess(channel, ALICE, "Jisoo").await,
            Ok(GuessOutcome::Wrong {
                attempts: 1,
                limit: 2,
                eliminated: false
            })
        );
        assert_eq!(
            games.guess(channel, ALICE, "Jisoo").await,
            Ok(GuessOutcome::Wrong {
                attempts: 2,
                limit: 2,
                eliminated: true
            })
        );
        assert_eq!(
            games.guess(channel, ALICE, "Rosé").await,
            Err(Error::UserEliminated)
        );
        assert_eq!(
            games.guess(channel, BOB, "rosé").await,
            Ok(GuessOutcome::Won {
                answer: "Rosé".to_owned(),
                image: None
            })
        );

        let session = games.session(channel).await.expect("session exists");
        assert!(!session.is_active());
    }

    #[tokio::test]
    async fn end_without_game() {
        let games = GameManager::new();

        assert_eq!(games.end(ChannelId::new(2)).await, Err(Error::NoActiveGame));
    }

    #[tokio::test]
    async fn start_while_active_changes_nothing() {
        let games = GameManager::new();
        let channel = ChannelId::new(3);

        games
            .start(channel, GameOptions::new("Yeji", 3))
            .await
            .expect("channel is free");
        games
            .guess(channel, ALICE, "Lia")
            .await
            .expect("game is active");

        let before = games.session(channel).await;

        assert_eq!(
            games.start(channel, GameOptions::new("Ryujin", 5)).await,
            Err(Error::AlreadyActive)
        );
        assert_eq!(games.session(channel).await, before);
    }

    #[tokio::test]
    async fn invalid_limit_leaves_channel_free() {
        let games = GameManager::new();
        let channel = ChannelId::new(4);

        assert_eq!(
            games.start(channel, GameOptions::new("Yuna", 0)).await,
            Err(Error::InvalidConfig)
        );
        assert_eq!(
            games.guess(channel, ALICE, "Yuna").await,
            Err(Error::NoActiveGame)
        );
    }

    #[tokio::test]
    async fn restart_after_win_is_fresh() {
        let games = GameManager::new();
        let channel = ChannelId::new(5);

        games
            .start(channel, GameOptions::new("Wonyoung", 1))
            .await
            .expect("channel is free");
        games
            .guess(channel, ALICE, "Yujin")
            .await
            .expect("game is active");
        games
            .guess(channel, BOB, "wonyoung")
            .await
            .expect("game is active");

        assert_eq!(
            games.guess(channel, BOB, "wonyoung").await,
            Err(Error::NoActiveGame)
        );

        assert_eq!(
            games.start(channel, GameOptions::new("Yujin", 1)).await,
            Ok(1)
        );

        let session = games.session(channel).await.expect("session exists");
        assert_eq!(session.attempts(ALICE), 0);

        let ended = games.end(channel).await.expect("game is active");
        assert_eq!(ended.answer, "Yujin");
    }

    #[tokio::test]
    async fn end_then_restart() {
        let games = GameManager::new();
        let channel = ChannelId::new(6);

        games
            .start(channel, GameOptions::new("Chaewon", 2))
            .await
            .expect("channel is free");

        assert_eq!(
            games.end(channel).await,
            Ok(Ended {
                answer: "Chaewon".to_owned(),
                image: None,
                starter: None,
            })
        );
        assert_eq!(games.end(channel).await, Err(Error::NoActiveGame));
        assert_eq!(
            games.start(channel, GameOptions::new("Sakura", 2)).await,
            Ok(2)
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn channels_are_independent() {
        let games = GameManager::new();

        let tasks = (1..=16u64).map(|id| {
            let games = games.clone();
            tokio::spawn(async move {
                let channel = ChannelId::new(100 + id);
                games
                    .start(channel, GameOptions::new(format!("idol {id}"), 1))
                    .await
            })
        });

        for task in tasks.collect::<Vec<_>>() {
            assert_eq!(task.await.expect("task should not panic"), Ok(1));
        }

        for id in 1..=16u64 {
            let channel = ChannelId::new(100 + id);
            let ended = games.end(channel).await.expect("game is active");
            assert_eq!(ended.answer, format!("idol {id}"));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_starts_on_one_channel() {
        let games = GameManager::new();
        let channel = ChannelId::new(200);

        let tasks = (0..8).map(|n| {
            let games = games.clone();
            tokio::spawn(async move {
                games
                    .start(channel, GameOptions::new(format!("idol {n}"), 3))
                    .await
            })
        });

        let mut started = 0;
        for task in tasks.collect::<Vec<_>>() {
            match task.await.expect("task should not panic") {
                Ok(_) => started += 1,
                Err(err) => assert_eq!(err, Error::AlreadyActive),
            }
        }

        assert_eq!(started, 1);
    }
}
