//! Built-in game configurations.
//!
//! Each submodule assembles one game's `GameConfig` out of plain
//! predicate functions. Custom games register their own configs the
//! same way and may shadow these by id.

pub mod mtg;
pub mod yugioh;

use crate::config::GameConfigRegistry;

/// Register every built-in game, in picker order.
pub fn register_builtins(registry: &mut GameConfigRegistry) {
    registry.register(mtg::config());
    registry.register(yugioh::config());
}
