//! The cube state engine.
//!
//! Owns the cube being edited and exposes every mutation as a
//! transaction: validate first, then apply to a fresh snapshot and
//! record the previous one for undo. Failures leave the document
//! byte-for-byte untouched.
//!
//! ## Instance id allocation
//!
//! The allocator lives on the engine, outside the snapshotted
//! document, and is never rewound - undoing past an add and re-adding
//! must not recycle an id a stale view might still hold.
//!
//! ## Load/save completions
//!
//! The only asynchronous work is gateway I/O. Completions are applied
//! under a generation check: a load superseded by a later one for the
//! same session, or arriving after the view closed, is discarded
//! rather than applied. Saves snapshot the document at begin time;
//! their completion stamps `last_saved` but only clears the dirty flag
//! if no edit happened in between.

use std::time::{SystemTime, UNIX_EPOCH};

use rustc_hash::FxHashMap;

use crate::catalog::{Card, CardId, CatalogProvider};
use crate::config::{ExportEntry, GameConfig};
use crate::error::CubeError;
use crate::persist::{PersistenceGateway, SaveReceipt};

use super::card::{CubeCard, InstanceId};
use super::doc::{CubeDoc, MetadataPatch};
use super::history::History;

/// Token for an in-flight load. Valid while no later load has begun
/// and the session is still open.
#[derive(Clone, Debug)]
pub struct LoadToken {
    generation: u64,
    cube_id: String,
}

/// Token for an in-flight save, pinned to the document state it
/// snapshotted.
#[derive(Clone, Debug)]
pub struct SaveToken {
    generation: u64,
    edit_serial: u64,
}

/// What happened to a completion: applied, or discarded as stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The completion was current and took effect.
    Applied,
    /// A later request superseded this one, or the session closed;
    /// the result was thrown away.
    Discarded,
}

/// The mutable cube editing session.
pub struct CubeEngine {
    doc: CubeDoc,
    history: History,
    cube_id: Option<String>,
    dirty: bool,
    last_saved: Option<u64>,
    last_error: Option<CubeError>,
    next_instance: u64,
    edit_serial: u64,
    load_generation: u64,
    save_generation: u64,
    closed: bool,
}

impl CubeEngine {
    /// Start an empty cube for a game, taking the game's default
    /// duplicate limit.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            doc: CubeDoc::new(config.id.clone(), config.default_duplicate_limit),
            history: History::new(),
            cube_id: None,
            dirty: false,
            last_saved: None,
            last_error: None,
            next_instance: 0,
            edit_serial: 0,
            load_generation: 0,
            save_generation: 0,
            closed: false,
        }
    }

    // === Read projections ===

    /// The current document.
    #[must_use]
    pub fn doc(&self) -> &CubeDoc {
        &self.doc
    }

    /// Stable array view of the card set, ordered by instance id.
    #[must_use]
    pub fn cards_array(&self) -> Vec<&CubeCard> {
        self.doc.cards_array()
    }

    /// Copies of one printing currently in the cube.
    #[must_use]
    pub fn copy_count(&self, card_id: CardId) -> u32 {
        self.doc.copy_count(card_id)
    }

    /// Whether there are unsaved edits.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Unix timestamp of the last successful save.
    #[must_use]
    pub fn last_saved(&self) -> Option<u64> {
        self.last_saved
    }

    /// The most recent surfaced error, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&CubeError> {
        self.last_error.as_ref()
    }

    /// The cube's persistent id, once saved or loaded.
    #[must_use]
    pub fn cube_id(&self) -> Option<&str> {
        self.cube_id.as_deref()
    }

    // === Mutations ===

    /// Add `count` fresh copies of a catalog card. First copies start
    /// at the card's default score; further copies join the printing's
    /// current class-level score, which may have been overridden.
    ///
    /// All-or-nothing: if adding would exceed the duplicate limit,
    /// nothing is added and the limit error is returned.
    pub fn add_card(&mut self, card: &Card, count: u32) -> Result<(), CubeError> {
        if count == 0 {
            return Ok(());
        }
        let existing = self.doc.copy_count(card.id);
        if let Some(limit) = self.doc.duplicate_limit {
            if existing.saturating_add(count) > limit {
                return Err(CubeError::DuplicateLimitExceeded {
                    card_id: card.id.raw(),
                    limit,
                    existing,
                    requested: count,
                });
            }
        }
        let score = self
            .doc
            .cards
            .values()
            .find(|c| c.card_id == card.id)
            .map_or(card.score, |c| c.score);

        let before = self.doc.clone();
        for _ in 0..count {
            let instance_id = self.alloc_instance()?;
            self.doc
                .cards
                .insert(instance_id, CubeCard::new(instance_id, card.id, score));
        }
        self.commit(before);
        Ok(())
    }

    /// Resolve a card through the catalog under the cube's current
    /// game, then add copies.
    pub fn add_from_catalog(
        &mut self,
        catalog: &dyn CatalogProvider,
        card_id: CardId,
        count: u32,
    ) -> Result<(), CubeError> {
        let card = catalog.get_card(&self.doc.game_id, card_id)?.clone();
        self.add_card(&card, count)
    }

    /// Remove one copy. Idempotent: removing an absent instance is a
    /// no-op that records no history.
    pub fn remove_card(&mut self, instance_id: InstanceId) -> Result<(), CubeError> {
        if !self.doc.cards.contains_key(&instance_id) {
            return Ok(());
        }
        let before = self.doc.clone();
        self.doc.cards.remove(&instance_id);
        self.commit(before);
        Ok(())
    }

    /// Remove every copy of a printing. Idempotent no-op if absent.
    pub fn remove_all_copies(&mut self, card_id: CardId) -> Result<(), CubeError> {
        let instances = self.doc.instances_of(card_id);
        if instances.is_empty() {
            return Ok(());
        }
        let before = self.doc.clone();
        for instance_id in instances {
            self.doc.cards.remove(&instance_id);
        }
        self.commit(before);
        Ok(())
    }

    /// Set the score of every copy of a printing (the canonical score
    /// mutation - all copies of a card share one evaluation). The
    /// score is clamped into [0, 100].
    pub fn update_all_copies_score(&mut self, card_id: CardId, score: i64) -> Result<(), CubeError> {
        let score = score.clamp(0, 100);
        let instances = self.doc.instances_of(card_id);
        if instances.is_empty() {
            return Ok(());
        }
        let before = self.doc.clone();
        for instance_id in instances {
            if let Some(copy) = self.doc.cards.get_mut(&instance_id) {
                copy.score = Some(score);
            }
        }
        self.commit(before);
        Ok(())
    }

    /// Set a copy's score - resolves the printing and delegates to
    /// `update_all_copies_score`, so sibling copies stay in sync.
    pub fn update_card_score(&mut self, instance_id: InstanceId, score: i64) -> Result<(), CubeError> {
        let Some(copy) = self.doc.cards.get(&instance_id) else {
            return Ok(());
        };
        let card_id = copy.card_id;
        self.update_all_copies_score(card_id, score)
    }

    /// Bulk-set every copy's score, clamped into [0, 100].
    pub fn set_all_scores(&mut self, score: i64) -> Result<(), CubeError> {
        if self.doc.is_empty() {
            return Ok(());
        }
        let score = score.clamp(0, 100);
        let before = self.doc.clone();
        let instances: Vec<InstanceId> = self.doc.cards.keys().copied().collect();
        for instance_id in instances {
            if let Some(copy) = self.doc.cards.get_mut(&instance_id) {
                copy.score = Some(score);
            }
        }
        self.commit(before);
        Ok(())
    }

    /// Pin or clear a copy's deck-zone hint. No-op for absent copies.
    pub fn set_zone_hint(
        &mut self,
        instance_id: InstanceId,
        zone_id: Option<String>,
    ) -> Result<(), CubeError> {
        match self.doc.cards.get(&instance_id) {
            Some(copy) if copy.zone_hint != zone_id => {}
            _ => return Ok(()),
        }
        let before = self.doc.clone();
        if let Some(copy) = self.doc.cards.get_mut(&instance_id) {
            copy.zone_hint = zone_id;
        }
        self.commit(before);
        Ok(())
    }

    /// Shallow-merge metadata and mark the cube dirty.
    pub fn set_metadata(&mut self, patch: &MetadataPatch) -> Result<(), CubeError> {
        if patch.is_empty() {
            return Ok(());
        }
        let before = self.doc.clone();
        patch.apply_to(&mut self.doc);
        self.commit(before);
        Ok(())
    }

    /// Change the duplicate limit for future adds.
    ///
    /// Deliberately lenient: tightening the limit never trims
    /// pre-existing excess copies; only subsequent adds see the cap.
    pub fn set_duplicate_limit(&mut self, limit: Option<u32>) -> Result<(), CubeError> {
        if self.doc.duplicate_limit == limit {
            return Ok(());
        }
        let before = self.doc.clone();
        self.doc.duplicate_limit = limit;
        self.commit(before);
        Ok(())
    }

    /// Switch the cube to another game: unconditionally clears every
    /// card and resets the duplicate limit to the new game's default.
    /// Asking the user to confirm the destruction is the caller's job.
    ///
    /// Pending load and save completions are invalidated.
    pub fn set_game(&mut self, config: &GameConfig) -> Result<(), CubeError> {
        let before = self.doc.clone();
        self.doc.game_id = config.id.clone();
        self.doc.cards.clear();
        self.doc.duplicate_limit = config.default_duplicate_limit;
        self.commit(before);
        self.load_generation += 1;
        self.save_generation += 1;
        Ok(())
    }

    // === History ===

    /// Step back one mutation. Returns false (and changes nothing) at
    /// history start. Never recorded as a history entry itself.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.doc) {
            Some(previous) => {
                self.doc = previous;
                self.dirty = true;
                self.edit_serial += 1;
                true
            }
            None => false,
        }
    }

    /// Step forward one undone mutation. Returns false at history end.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.doc) {
            Some(next) => {
                self.doc = next;
                self.dirty = true;
                self.edit_serial += 1;
                true
            }
            None => false,
        }
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // === Export ===

    /// Generate deck text via one of the game's export formats,
    /// resolving each printing through the catalog.
    pub fn export(
        &self,
        config: &GameConfig,
        catalog: &dyn CatalogProvider,
        format_id: &str,
    ) -> Result<String, CubeError> {
        let format = config
            .get_export(format_id)
            .ok_or_else(|| CubeError::FormatNotFound(format_id.to_string()))?;

        // One entry per printing, in first-added order.
        let mut seen: Vec<CardId> = Vec::new();
        for copy in self.doc.cards.values() {
            if !seen.contains(&copy.card_id) {
                seen.push(copy.card_id);
            }
        }
        let mut cards = Vec::with_capacity(seen.len());
        for card_id in &seen {
            cards.push(catalog.get_card(&self.doc.game_id, *card_id)?);
        }
        let entries: Vec<ExportEntry<'_>> = seen
            .iter()
            .zip(&cards)
            .map(|(&card_id, &card)| ExportEntry {
                card,
                count: self.doc.copy_count(card_id),
            })
            .collect();

        Ok((format.generate)(&entries, &config.deck_zones))
    }

    // === Persistence ===

    /// Save synchronously through a gateway.
    pub fn save(&mut self, gateway: &mut dyn PersistenceGateway) -> Result<(), CubeError> {
        let (token, snapshot) = self.begin_save()?;
        let result = gateway.save(self.cube_id.as_deref(), &snapshot);
        self.complete_save(&token, result).map(|_| ())
    }

    /// Load a cube synchronously through a gateway.
    pub fn load(
        &mut self,
        gateway: &mut dyn PersistenceGateway,
        cube_id: &str,
    ) -> Result<(), CubeError> {
        let token = self.begin_load(cube_id);
        let result = gateway.load(cube_id);
        self.complete_load(&token, result).map(|_| ())
    }

    /// Start a save: validates, snapshots the document and issues a
    /// token for the eventual completion.
    pub fn begin_save(&mut self) -> Result<(SaveToken, CubeDoc), CubeError> {
        if self.doc.name.trim().is_empty() {
            return Err(CubeError::MissingName);
        }
        self.save_generation += 1;
        let token = SaveToken {
            generation: self.save_generation,
            edit_serial: self.edit_serial,
        };
        Ok((token, self.doc.clone()))
    }

    /// Apply a save completion. Stale tokens (a later save began, a
    /// load was applied, or the session closed) are discarded. On success the receipt's id
    /// is adopted and `last_saved` stamped; the dirty flag clears only
    /// if the document hasn't changed since the save began. On failure
    /// the error is surfaced and state - pending edits included -
    /// stays untouched.
    pub fn complete_save(
        &mut self,
        token: &SaveToken,
        result: Result<SaveReceipt, CubeError>,
    ) -> Result<LoadOutcome, CubeError> {
        if self.closed || token.generation != self.save_generation {
            log::debug!("discarding stale save completion");
            return Ok(LoadOutcome::Discarded);
        }
        match result {
            Ok(receipt) => {
                self.cube_id = Some(receipt.id);
                self.last_saved = Some(now_secs());
                if token.edit_serial == self.edit_serial {
                    self.dirty = false;
                }
                self.last_error = None;
                Ok(LoadOutcome::Applied)
            }
            Err(err) => {
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Start a load, superseding any load still in flight.
    pub fn begin_load(&mut self, cube_id: &str) -> LoadToken {
        self.load_generation += 1;
        LoadToken {
            generation: self.load_generation,
            cube_id: cube_id.to_string(),
        }
    }

    /// Apply a load completion under the last-requestor-wins rule:
    /// only the newest load's result is applied; anything older, or
    /// anything arriving after `close`, is discarded.
    pub fn complete_load(
        &mut self,
        token: &LoadToken,
        result: Result<CubeDoc, CubeError>,
    ) -> Result<LoadOutcome, CubeError> {
        if self.closed || token.generation != self.load_generation {
            log::debug!("discarding stale load completion for '{}'", token.cube_id);
            return Ok(LoadOutcome::Discarded);
        }
        match result {
            Ok(doc) => {
                validate_loaded(&doc)?;
                // Re-seed the allocator above every loaded id so fresh
                // copies can never collide with loaded ones.
                if let Some(max) = doc.max_instance_id() {
                    self.next_instance = self.next_instance.max(max.raw());
                }
                self.doc = doc;
                self.history.clear();
                self.cube_id = Some(token.cube_id.clone());
                self.dirty = false;
                self.last_error = None;
                self.edit_serial += 1;
                // A save still in flight snapshotted the pre-load
                // document; its completion must not adopt a receipt id
                // over the loaded cube's.
                self.save_generation += 1;
                Ok(LoadOutcome::Applied)
            }
            Err(err) => {
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Close the session: every still-pending load or save completion
    /// will be discarded. The underlying I/O is not interrupted, only
    /// its effect.
    pub fn close(&mut self) {
        self.closed = true;
    }

    // === Internals ===

    fn alloc_instance(&mut self) -> Result<InstanceId, CubeError> {
        self.next_instance += 1;
        let instance_id = InstanceId::new(self.next_instance);
        if self.doc.cards.contains_key(&instance_id) {
            return Err(CubeError::Invariant(format!(
                "instance id {} already in use",
                instance_id
            )));
        }
        Ok(instance_id)
    }

    fn commit(&mut self, before: CubeDoc) {
        self.history.record(before);
        self.dirty = true;
        self.edit_serial += 1;
    }
}

/// Defensive checks on gateway-loaded documents: map keys must agree
/// with each copy's own instance id, scores must be in range, and all
/// copies of a printing must share one score.
fn validate_loaded(doc: &CubeDoc) -> Result<(), CubeError> {
    let mut class_scores: FxHashMap<CardId, Option<i64>> = FxHashMap::default();
    for (instance_id, copy) in &doc.cards {
        if *instance_id != copy.instance_id {
            return Err(CubeError::Invariant(format!(
                "card map key {} disagrees with copy id {}",
                instance_id, copy.instance_id
            )));
        }
        if let Some(score) = copy.score {
            if !(0..=100).contains(&score) {
                return Err(CubeError::ScoreOutOfRange(score));
            }
        }
        if let Some(previous) = class_scores.insert(copy.card_id, copy.score) {
            if previous != copy.score {
                return Err(CubeError::Invariant(format!(
                    "copies of {} disagree on score",
                    copy.card_id
                )));
            }
        }
    }
    Ok(())
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
