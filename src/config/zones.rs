//! Deck zones - named buckets of a constructed deck.
//!
//! Zones are ordered per game (Main before Extra before Side) and may
//! carry size bounds and a membership predicate. The cube engine only
//! uses zones as hints and for export; it never enforces deck legality.

use super::filters::CardPredicate;
use crate::catalog::Card;

/// Configuration for a single deck zone.
#[derive(Clone, Debug)]
pub struct DeckZone {
    /// Stable zone id (e.g. "main", "extra", "side").
    pub id: String,

    /// Display name.
    pub name: String,

    /// Minimum card count, if the game specifies one.
    pub min_cards: Option<u32>,

    /// Maximum card count. `None` for unlimited.
    pub max_cards: Option<u32>,

    /// Membership test. Absent means every card belongs.
    pub member: Option<CardPredicate>,
}

impl DeckZone {
    /// Create a new zone with no bounds and open membership.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            min_cards: None,
            max_cards: None,
            member: None,
        }
    }

    /// Set the minimum card count.
    #[must_use]
    pub fn with_min(mut self, min: u32) -> Self {
        self.min_cards = Some(min);
        self
    }

    /// Set the maximum card count.
    #[must_use]
    pub fn with_max(mut self, max: u32) -> Self {
        self.max_cards = Some(max);
        self
    }

    /// Set the membership predicate.
    #[must_use]
    pub fn with_member(mut self, member: CardPredicate) -> Self {
        self.member = Some(member);
        self
    }

    /// Whether a card belongs in this zone. Open membership when no
    /// predicate is configured.
    #[must_use]
    pub fn accepts(&self, card: &Card) -> bool {
        self.member.map_or(true, |p| p(card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CardId;

    fn is_extra_deck(card: &Card) -> bool {
        card.get_bool("extra_deck", false)
    }

    #[test]
    fn test_zone_builder() {
        let zone = DeckZone::new("extra", "Extra Deck")
            .with_max(15)
            .with_member(is_extra_deck);

        assert_eq!(zone.id, "extra");
        assert_eq!(zone.max_cards, Some(15));
        assert_eq!(zone.min_cards, None);
    }

    #[test]
    fn test_zone_membership() {
        let zone = DeckZone::new("extra", "Extra Deck").with_member(is_extra_deck);

        let fusion = Card::new(CardId::new(1), "Fusion Dragon", "Monster")
            .with_attr("extra_deck", true);
        let normal = Card::new(CardId::new(2), "Dark Magician", "Monster");

        assert!(zone.accepts(&fusion));
        assert!(!zone.accepts(&normal));
    }

    #[test]
    fn test_zone_open_membership() {
        let zone = DeckZone::new("main", "Main Deck").with_min(40).with_max(60);
        let any = Card::new(CardId::new(1), "Anything", "Spell");
        assert!(zone.accepts(&any));
    }
}
