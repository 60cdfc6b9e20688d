//! The cube document - the snapshotted, persisted portion of a cube.
//!
//! `CubeDoc` holds everything undo/redo rolls back and everything the
//! persistence gateway stores: game id, metadata, duplicate limit and
//! the card map. Editor-session state (dirty flag, history, pending
//! load bookkeeping) lives on `CubeEngine` instead.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::catalog::CardId;
use crate::config::GameId;

use super::card::{CubeCard, InstanceId};

/// Snapshotted cube document.
///
/// The card map is an `im::OrdMap` keyed by `InstanceId`: clones are
/// O(1) and structurally shared, and iteration order (ascending
/// instance id, i.e. insertion order) gives views a stable card array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubeDoc {
    /// Game this cube is built for.
    pub game_id: GameId,

    /// Cube name (required before saving).
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Whether the cube is publicly visible.
    pub public: bool,

    /// Max identical-card copies allowed on add. `None` for unlimited.
    pub duplicate_limit: Option<u32>,

    /// The card copies, keyed by instance id.
    pub cards: OrdMap<InstanceId, CubeCard>,
}

impl CubeDoc {
    /// Create an empty cube for a game.
    #[must_use]
    pub fn new(game_id: GameId, duplicate_limit: Option<u32>) -> Self {
        Self {
            game_id,
            name: String::new(),
            description: String::new(),
            public: false,
            duplicate_limit,
            cards: OrdMap::new(),
        }
    }

    /// Total number of card copies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the cube holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Copies of one printing currently in the cube.
    #[must_use]
    pub fn copy_count(&self, card_id: CardId) -> u32 {
        self.cards.values().filter(|c| c.card_id == card_id).count() as u32
    }

    /// Instance ids of every copy of a printing, in insertion order.
    #[must_use]
    pub fn instances_of(&self, card_id: CardId) -> Vec<InstanceId> {
        self.cards
            .values()
            .filter(|c| c.card_id == card_id)
            .map(|c| c.instance_id)
            .collect()
    }

    /// Stable array view of the card set, ordered by instance id.
    #[must_use]
    pub fn cards_array(&self) -> Vec<&CubeCard> {
        self.cards.values().collect()
    }

    /// Highest instance id present, if any. Used to re-seed the
    /// engine's allocator after a load.
    #[must_use]
    pub fn max_instance_id(&self) -> Option<InstanceId> {
        self.cards.keys().next_back().copied()
    }
}

/// Partial metadata update, shallow-merged onto the document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MetadataPatch {
    /// New name, if changing.
    pub name: Option<String>,

    /// New description, if changing.
    pub description: Option<String>,

    /// New visibility, if changing.
    pub public: Option<bool>,
}

impl MetadataPatch {
    /// Create an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the visibility (builder pattern).
    #[must_use]
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }

    /// Whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.public.is_none()
    }

    /// Shallow-merge into a document.
    pub fn apply_to(&self, doc: &mut CubeDoc) {
        if let Some(name) = &self.name {
            doc.name = name.clone();
        }
        if let Some(description) = &self.description {
            doc.description = description.clone();
        }
        if let Some(public) = self.public {
            doc.public = public;
        }
    }
}
