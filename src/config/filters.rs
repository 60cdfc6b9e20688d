//! Filter and sort specifications.
//!
//! Games declare their filtering dimensions as data: legacy
//! single-select filters, multi-select groups, and numeric range
//! groups. Predicates and extractors are plain function pointers -
//! configs are pure data plus pure functions, so they stay `Clone`,
//! `Copy`-friendly and need no teardown.

use std::cmp::Ordering;

use crate::catalog::Card;

/// Predicate over a catalog card.
pub type CardPredicate = fn(&Card) -> bool;

/// Extracts a numeric value from a card for range filtering.
/// `None` means the card has no such value and fails the range.
pub type CardExtractor = fn(&Card) -> Option<i64>;

/// Comparator for sorting cards.
pub type CardComparator = fn(&Card, &Card) -> Ordering;

/// One selectable option inside a filter dimension.
#[derive(Clone, Debug)]
pub struct FilterOptionSpec {
    /// Stable option id referenced by filter requests.
    pub id: String,

    /// Display label.
    pub label: String,

    /// Membership test.
    pub matches: CardPredicate,
}

impl FilterOptionSpec {
    /// Create a new option spec.
    pub fn new(id: impl Into<String>, label: impl Into<String>, matches: CardPredicate) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            matches,
        }
    }
}

/// Legacy single-select filter dimension.
///
/// Requests select exactly one option id, or the sentinel `"all"`
/// which imposes no constraint.
#[derive(Clone, Debug)]
pub struct LegacyFilter {
    /// Stable filter id referenced by requests.
    pub id: String,

    /// Display label.
    pub label: String,

    /// Selectable options ("all" is implicit, never listed here).
    pub options: Vec<FilterOptionSpec>,
}

impl LegacyFilter {
    /// Create a new single-select filter.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            options: Vec::new(),
        }
    }

    /// Add an option (builder pattern).
    #[must_use]
    pub fn with_option(mut self, option: FilterOptionSpec) -> Self {
        self.options.push(option);
        self
    }

    /// Find an option by id.
    #[must_use]
    pub fn get_option(&self, id: &str) -> Option<&FilterOptionSpec> {
        self.options.iter().find(|o| o.id == id)
    }
}

/// The shape of a filter group.
#[derive(Clone, Debug)]
pub enum GroupKind {
    /// Multi-select: a card passes if it matches ANY selected option.
    MultiSelect {
        /// Selectable options.
        options: Vec<FilterOptionSpec>,
    },
    /// Range: a card passes if its extracted value lies within the
    /// selected inclusive [min, max]. Cards with no extracted value
    /// are excluded.
    Range {
        /// Smallest selectable bound.
        min: i64,
        /// Largest selectable bound.
        max: i64,
        /// Value extractor.
        extract: CardExtractor,
    },
}

/// A named, game-specific filtering dimension.
///
/// Within a group, selections are ORed; across groups with active
/// selections, constraints are ANDed. Groups with no active selection
/// impose no constraint.
#[derive(Clone, Debug)]
pub struct FilterGroup {
    /// Stable group id referenced by requests.
    pub id: String,

    /// Display label.
    pub label: String,

    /// Multi-select or range behavior.
    pub kind: GroupKind,
}

impl FilterGroup {
    /// Create a multi-select group.
    pub fn multi_select(
        id: impl Into<String>,
        label: impl Into<String>,
        options: Vec<FilterOptionSpec>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: GroupKind::MultiSelect { options },
        }
    }

    /// Create a range group.
    pub fn range(
        id: impl Into<String>,
        label: impl Into<String>,
        min: i64,
        max: i64,
        extract: CardExtractor,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: GroupKind::Range { min, max, extract },
        }
    }

    /// Find a multi-select option by id. Always `None` for range groups.
    #[must_use]
    pub fn get_option(&self, id: &str) -> Option<&FilterOptionSpec> {
        match &self.kind {
            GroupKind::MultiSelect { options } => options.iter().find(|o| o.id == id),
            GroupKind::Range { .. } => None,
        }
    }
}

/// A named sort order.
#[derive(Clone, Debug)]
pub struct SortOption {
    /// Stable sort id referenced by requests.
    pub id: String,

    /// Display label.
    pub label: String,

    /// Comparator (ascending orientation; the engine reverses it for
    /// descending requests).
    pub compare: CardComparator,
}

impl SortOption {
    /// Create a new sort option.
    pub fn new(id: impl Into<String>, label: impl Into<String>, compare: CardComparator) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            compare,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CardId;

    fn is_instant(card: &Card) -> bool {
        card.type_line.contains("Instant")
    }

    fn mana_value(card: &Card) -> Option<i64> {
        card.get_attr("mana_value").and_then(|v| v.as_int())
    }

    #[test]
    fn test_legacy_filter_lookup() {
        let filter = LegacyFilter::new("type", "Type")
            .with_option(FilterOptionSpec::new("instant", "Instant", is_instant));

        assert!(filter.get_option("instant").is_some());
        assert!(filter.get_option("sorcery").is_none());
    }

    #[test]
    fn test_multi_select_option_lookup() {
        let group = FilterGroup::multi_select(
            "type",
            "Type",
            vec![FilterOptionSpec::new("instant", "Instant", is_instant)],
        );

        let option = group.get_option("instant").unwrap();
        let bolt = Card::new(CardId::new(1), "Lightning Bolt", "Instant");
        assert!((option.matches)(&bolt));
    }

    #[test]
    fn test_range_group_has_no_options() {
        let group = FilterGroup::range("mv", "Mana Value", 0, 16, mana_value);
        assert!(group.get_option("anything").is_none());
    }
}
