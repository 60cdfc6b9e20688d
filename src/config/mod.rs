//! Game configuration - the per-game behavior/data contract.
//!
//! Structurally different games (creatures vs monsters, mana vs energy)
//! sit behind one uniform `GameConfig` record: pure data plus pure
//! functions, looked up from a process-wide registry populated once at
//! startup. The engine never hardcodes a game - classifiers, filter
//! dimensions, sort orders, deck zones and export formats all come from
//! the config.

mod classify;
mod export;
mod filters;
mod game;
mod registry;
mod zones;

pub use classify::CardClassifiers;
pub use export::{count_list, first_accepting_zone, ExportEntry, ExportFormat, ExportGenerator};
pub use filters::{
    CardComparator, CardExtractor, CardPredicate, FilterGroup, FilterOptionSpec, GroupKind,
    LegacyFilter, SortOption,
};
pub use game::{GameConfig, GameId, ImageResolver, Theme};
pub use registry::GameConfigRegistry;
pub use zones::DeckZone;
