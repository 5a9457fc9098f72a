use crate::games::guess::GameManager;

use super::Config;

#[derive(Debug, Clone)]
pub struct PoiseData {
    pub(crate) config: Config,
    pub(crate) games: GameManager,
}

impl PoiseData {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            config,
            games: GameManager::new(),
        }
    }

    pub(crate) const fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) const fn games(&self) -> &GameManager {
        &self.games
    }
}
