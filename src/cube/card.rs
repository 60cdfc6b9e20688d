//! Cube cards - one physical copy of a catalog card inside a cube.

use serde::{Deserialize, Serialize};

use crate::catalog::CardId;

/// Unique identifier of one physical copy in a cube.
///
/// Instance ids are allocated monotonically by the engine and never
/// reused, even after deletion - undo/redo must never resurrect a
/// stale reference under a recycled id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// One physical copy of a catalog card in a cube.
///
/// Score is semantically a property of the printing (all copies of a
/// card share one evaluation); it is stored per copy but only ever
/// mutated class-level through the engine, which writes every copy of
/// the same `card_id` at once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeCard {
    /// Unique per-copy id, stable across reorders.
    pub instance_id: InstanceId,

    /// The catalog printing this copy references.
    pub card_id: CardId,

    /// Current score in [0, 100]; `None` means unscored.
    pub score: Option<i64>,

    /// Deck-zone hint (a `DeckZone` id), if the curator pinned one.
    pub zone_hint: Option<String>,
}

impl CubeCard {
    /// Create a copy at the catalog card's default score.
    #[must_use]
    pub fn new(instance_id: InstanceId, card_id: CardId, score: Option<i64>) -> Self {
        Self {
            instance_id,
            card_id,
            score,
            zone_hint: None,
        }
    }

    /// Set the zone hint (builder pattern).
    #[must_use]
    pub fn with_zone_hint(mut self, zone_id: impl Into<String>) -> Self {
        self.zone_hint = Some(zone_id.into());
        self
    }
}
