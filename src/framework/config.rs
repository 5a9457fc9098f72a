use poise::serenity_prelude::{ActivityData, ChannelId, GuildId, RoleId};
use serde::Deserialize;
use tracing::{debug, info, warn};

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub bot: BotConfig,
    pub reactions: ReactionsConfig,
    #[serde(default)]
    pub game: GameConfig,
}

impl Config {
    /// Reads `.env`, then the TOML file named by `IDOLBOT_TOML` (or
    /// `./idolbot.toml`), then `IDOLBOT_*` environment overrides.
    pub fn load() -> Result<Self, Error> {
        dotenvy::dotenv().ok();

        let path = if let Ok(path) = std::env::var("IDOLBOT_TOML") {
            info!(path, "looking for config file with IDOLBOT_TOML...");
            path
        } else {
            let path = "./idolbot.toml".to_owned();
            warn!(path, "IDOLBOT_TOML env unset, using default path");
            path
        };

        let config = Self::from_sources(
            ::config::Config::builder()
                .add_source(::config::File::new(&path, ::config::FileFormat::Toml))
                .add_source(::config::Environment::with_prefix("IDOLBOT").separator("__")),
        )?;

        info!("config loaded");
        Ok(config)
    }

    fn from_sources(
        builder: ::config::ConfigBuilder<::config::builder::DefaultState>,
    ) -> Result<Self, Error> {
        builder
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config could not be read: {0}")]
    Read(::config::ConfigError),

    #[error("config could not be parsed: {0}")]
    Parse(::config::ConfigError),
}

#[derive(Deserialize, Clone)]
pub struct BotConfig {
    token: String,
    guild: GuildId,
    activity: Option<String>,
}

// keeps the token out of logs
impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"<redacted>")
            .field("guild", &self.guild)
            .field("activity", &self.activity)
            .finish()
    }
}

impl BotConfig {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub const fn guild(&self) -> GuildId {
        self.guild
    }

    pub fn activity(&self) -> Option<ActivityData> {
        let Some(activity) = &self.activity else {
            debug!("no bot.activity provided in config, defaulting to none");
            return None;
        };

        if activity.is_empty() {
            warn!("bot.activity provided in config as empty string, defaulting to none");
            return None;
        }

        let parsed = if let Some(name) = activity.strip_prefix("playing ") {
            ActivityData::playing(name)
        } else if let Some(name) = activity.strip_prefix("listening to ") {
            ActivityData::listening(name)
        } else if let Some(name) = activity.strip_prefix("watching ") {
            ActivityData::watching(name)
        } else if let Some(name) = activity.strip_prefix("competing in ") {
            ActivityData::competing(name)
        } else {
            warn!("bot.activity in config could not be parsed - must start with `playing`, `listening to`, `watching` or `competing in`");
            return None;
        };

        debug!(kind = ?parsed.kind, name = %parsed.name, "parsed bot activity");
        Some(parsed)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ReactionsConfig {
    channel: ChannelId,
}

impl ReactionsConfig {
    pub const fn channel(&self) -> ChannelId {
        self.channel
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GameConfig {
    prefix: String,
    ping_role: Option<RoleId>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_owned(),
            ping_role: None,
        }
    }
}

impl GameConfig {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub const fn ping_role(&self) -> Option<RoleId> {
        self.ping_role
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(toml: &str) -> Result<Config, Error> {
        Config::from_sources(
            ::config::Config::builder()
                .add_source(::config::File::from_str(toml, ::config::FileFormat::Toml)),
        )
    }

    #[test]
    fn minimal() {
        let config = parse(
            r#"
            [bot]
            token = "abc"
            guild = 1234

            [reactions]
            channel = 5678
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.bot.token(), "abc");
        assert_eq!(config.bot.guild(), GuildId::new(1234));
        assert_eq!(config.reactions.channel(), ChannelId::new(5678));
        assert_eq!(config.game.prefix(), "!");
        assert_eq!(config.game.ping_role(), None);
        assert!(config.bot.activity().is_none());
    }

    #[test]
    fn game_section() {
        let config = parse(
            r#"
            [bot]
            token = "abc"
            guild = 1
            activity = "watching idols"

            [reactions]
            channel = 2

            [game]
            prefix = "?"
            ping_role = 3
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.game.prefix(), "?");
        assert_eq!(config.game.ping_role(), Some(RoleId::new(3)));
        assert_eq!(
            config.bot.activity().map(|activity| activity.name),
            Some("idols".to_owned())
        );
    }

    #[test]
    fn missing_reactions_channel() {
        let result = parse(
            r#"
            [bot]
            token = "abc"
            guild = 1
            "#,
        );

        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn token_is_redacted() {
        let config = parse(
            r#"
            [bot]
            token = "secret"
            guild = 1

            [reactions]
            channel = 2
            "#,
        )
        .expect("config should parse");

        assert!(!format!("{config:?}").contains("secret"));
    }
}
