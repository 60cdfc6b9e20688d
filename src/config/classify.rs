//! Card classifiers - the per-game capability table.
//!
//! Games vary in what card classes exist (MTG has lands, Yu-Gi-Oh has
//! an extra deck, Pokemon has energy). Rather than a trait hierarchy,
//! each config carries optional predicate fields; an absent predicate
//! means "always false", never a dispatch error.

use super::filters::CardPredicate;
use crate::catalog::Card;

/// Optional per-game classification predicates.
#[derive(Clone, Copy, Debug, Default)]
pub struct CardClassifiers {
    /// Creature / monster test.
    pub is_creature: Option<CardPredicate>,

    /// Spell (non-permanent / backrow) test.
    pub is_spell: Option<CardPredicate>,

    /// Land / resource test.
    pub is_land: Option<CardPredicate>,

    /// Extra-deck membership test (fusion/synchro/xyz/link style).
    pub is_extra_deck: Option<CardPredicate>,

    /// Energy / basic resource test.
    pub is_energy: Option<CardPredicate>,
}

impl CardClassifiers {
    /// Create an empty table (every test answers false).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the creature test (builder pattern).
    #[must_use]
    pub fn with_creature(mut self, p: CardPredicate) -> Self {
        self.is_creature = Some(p);
        self
    }

    /// Set the spell test (builder pattern).
    #[must_use]
    pub fn with_spell(mut self, p: CardPredicate) -> Self {
        self.is_spell = Some(p);
        self
    }

    /// Set the land test (builder pattern).
    #[must_use]
    pub fn with_land(mut self, p: CardPredicate) -> Self {
        self.is_land = Some(p);
        self
    }

    /// Set the extra-deck test (builder pattern).
    #[must_use]
    pub fn with_extra_deck(mut self, p: CardPredicate) -> Self {
        self.is_extra_deck = Some(p);
        self
    }

    /// Set the energy test (builder pattern).
    #[must_use]
    pub fn with_energy(mut self, p: CardPredicate) -> Self {
        self.is_energy = Some(p);
        self
    }

    /// Creature test; false when the game has no such class.
    #[must_use]
    pub fn creature(&self, card: &Card) -> bool {
        self.is_creature.map_or(false, |p| p(card))
    }

    /// Spell test; false when the game has no such class.
    #[must_use]
    pub fn spell(&self, card: &Card) -> bool {
        self.is_spell.map_or(false, |p| p(card))
    }

    /// Land test; false when the game has no such class.
    #[must_use]
    pub fn land(&self, card: &Card) -> bool {
        self.is_land.map_or(false, |p| p(card))
    }

    /// Extra-deck test; false when the game has no such class.
    #[must_use]
    pub fn extra_deck(&self, card: &Card) -> bool {
        self.is_extra_deck.map_or(false, |p| p(card))
    }

    /// Energy test; false when the game has no such class.
    #[must_use]
    pub fn energy(&self, card: &Card) -> bool {
        self.is_energy.map_or(false, |p| p(card))
    }
}
