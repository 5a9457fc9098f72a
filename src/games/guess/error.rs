use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("a game needs an idol name and at least 1 try")]
    InvalidConfig,
    #[error("a game is already active in this channel!")]
    AlreadyActive,
    #[error("no active game. start one with `/start`")]
    NoActiveGame,
    #[error("you're eliminated! ❌")]
    UserEliminated,
}
