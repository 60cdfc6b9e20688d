//! Game config registry.
//!
//! Process-wide, read-mostly: populated once at startup, then only
//! read. Overwriting an id is allowed (custom games may shadow the
//! built-ins) and logs a warning rather than failing.

use rustc_hash::FxHashMap;

use crate::error::CubeError;

use super::game::{GameConfig, GameId};

/// Registry of game configurations.
///
/// Enumeration order is registration order, so game pickers render
/// the built-ins in a stable sequence.
#[derive(Clone, Debug, Default)]
pub struct GameConfigRegistry {
    configs: FxHashMap<GameId, GameConfig>,
    order: Vec<GameId>,
}

impl GameConfigRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a config, overwriting any existing one with the same
    /// id. Overwrites log a warning.
    pub fn register(&mut self, config: GameConfig) {
        let id = config.id.clone();
        if self.configs.insert(id.clone(), config).is_some() {
            log::warn!("game config '{}' overwritten", id);
        } else {
            self.order.push(id);
        }
    }

    /// Get a config by id, failing with `GameNotFound`.
    pub fn get(&self, id: &GameId) -> Result<&GameConfig, CubeError> {
        self.configs
            .get(id)
            .ok_or_else(|| CubeError::GameNotFound(id.as_str().to_string()))
    }

    /// Get a config by id, or `None`.
    #[must_use]
    pub fn get_opt(&self, id: &GameId) -> Option<&GameConfig> {
        self.configs.get(id)
    }

    /// Check if a game id is registered.
    #[must_use]
    pub fn contains(&self, id: &GameId) -> bool {
        self.configs.contains_key(id)
    }

    /// Number of registered games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate configs in registration order.
    pub fn list(&self) -> impl Iterator<Item = &GameConfig> {
        self.order.iter().filter_map(|id| self.configs.get(id))
    }
}
