//! # cube-core
//!
//! Data engine for a multi-game trading-card cube builder: assemble a
//! curated pool of cards from any configured game, score each card,
//! enforce per-game construction rules, and filter/sort the pool.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: No hardcoded card classes, zones or filter
//!    dimensions. Games configure these at startup through one uniform
//!    `GameConfig` record - pure data plus pure functions.
//!
//! 2. **Transactional Edits**: Every mutation either fully applies and
//!    pushes an undo entry, or fails and leaves the cube untouched.
//!
//! 3. **Persistent Snapshots**: Undo/redo history holds `im`-backed
//!    snapshots with O(1) structural clones, so no later edit can
//!    corrupt an earlier history entry.
//!
//! ## Modules
//!
//! - `catalog`: Immutable card data, attributes, catalog access
//! - `config`: Per-game configuration records and the registry
//! - `tier`: Score-to-letter-grade bucketing
//! - `filter`: The pure filter/sort query pipeline
//! - `cube`: The mutable cube state engine with undo/redo
//! - `persist`: Opaque save/load gateway
//! - `games`: Built-in game configurations
//! - `error`: The error taxonomy

pub mod catalog;
pub mod config;
pub mod cube;
pub mod error;
pub mod filter;
pub mod games;
pub mod persist;
pub mod tier;

// Re-export commonly used types
pub use crate::catalog::{
    AttributeKey, AttributeValue, Attributes, Card, CardId, CatalogProvider, MemoryCatalog,
};

pub use crate::config::{
    CardClassifiers, DeckZone, ExportEntry, ExportFormat, FilterGroup, FilterOptionSpec,
    GameConfig, GameConfigRegistry, GameId, GroupKind, LegacyFilter, SortOption, Theme,
};

pub use crate::cube::{
    CubeCard, CubeDoc, CubeEngine, History, InstanceId, LoadOutcome, LoadToken, MetadataPatch,
    SaveToken, HISTORY_CAP,
};

pub use crate::error::CubeError;

pub use crate::filter::{apply, FilterRequest, SortDirection};

pub use crate::persist::{
    is_bundled, MemoryGateway, PersistenceGateway, SaveReceipt, BUNDLED_PREFIX,
};

pub use crate::tier::{Tier, TierScheme};
