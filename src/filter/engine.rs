//! The filter/sort pipeline.
//!
//! `apply` is a pure function: cards in, filtered and sorted cards out.
//! Pipeline order: text search, legacy single-selects, multi-select
//! groups (OR within, AND across), range groups, tier group, stable
//! sort. Unknown group or option ids in the request are skipped - a
//! request can outlive a game switch without erroring.

use crate::catalog::Card;
use crate::config::{FilterGroup, GameConfig, GroupKind};

use super::request::{FilterRequest, SortDirection, ALL_OPTION};

/// Apply a filter/sort request to a card list.
#[must_use]
pub fn apply<'a>(cards: &[&'a Card], request: &FilterRequest, config: &GameConfig) -> Vec<&'a Card> {
    let mut result: Vec<&Card> = cards
        .iter()
        .copied()
        .filter(|card| passes(card, request, config))
        .collect();

    sort(&mut result, request, config);
    result
}

fn passes(card: &Card, request: &FilterRequest, config: &GameConfig) -> bool {
    passes_search(card, &request.search)
        && passes_single_selects(card, request, config)
        && passes_groups(card, request, config)
        && passes_ranges(card, request, config)
        && passes_tiers(card, request, config)
}

/// Case-insensitive substring over name, description and type line.
/// An empty query short-circuits to true.
fn passes_search(card: &Card, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    card.name.to_lowercase().contains(&needle)
        || card.description.to_lowercase().contains(&needle)
        || card.type_line.to_lowercase().contains(&needle)
}

fn passes_single_selects(card: &Card, request: &FilterRequest, config: &GameConfig) -> bool {
    request.single_selects.iter().all(|(filter_id, option_id)| {
        if option_id == ALL_OPTION {
            return true;
        }
        // Unknown filter or option ids impose no constraint.
        let Some(filter) = config.get_filter_option(filter_id) else {
            return true;
        };
        match filter.get_option(option_id) {
            Some(option) => (option.matches)(card),
            None => true,
        }
    })
}

/// AND across groups with an active selection; OR within a group.
fn passes_groups(card: &Card, request: &FilterRequest, config: &GameConfig) -> bool {
    request.group_selections.iter().all(|(group_id, selected)| {
        if selected.is_empty() {
            return true;
        }
        let Some(group) = config.get_filter_group(group_id) else {
            return true;
        };
        let known: Vec<_> = selected
            .iter()
            .filter_map(|id| group.get_option(id))
            .collect();
        // A selection of only-stale option ids imposes no constraint.
        if known.is_empty() {
            return true;
        }
        known.iter().any(|option| (option.matches)(card))
    })
}

/// Inclusive [min, max]; a card with no extracted value is excluded.
fn passes_ranges(card: &Card, request: &FilterRequest, config: &GameConfig) -> bool {
    request.range_selections.iter().all(|(group_id, &(lo, hi))| {
        let Some(FilterGroup {
            kind: GroupKind::Range { extract, .. },
            ..
        }) = config.get_filter_group(group_id)
        else {
            return true;
        };
        match extract(card) {
            Some(value) => lo <= value && value <= hi,
            None => false,
        }
    })
}

/// The tier filter is one more group under the same AND/OR rule.
fn passes_tiers(card: &Card, request: &FilterRequest, config: &GameConfig) -> bool {
    if request.tier_selection.is_empty() {
        return true;
    }
    let tier = config.tier_scheme.tier_of(card.score);
    request.tier_selection.contains(&tier)
}

/// Stable sort so ties keep their pre-sort relative order - re-renders
/// must not visibly reshuffle equal cards between interactions.
fn sort(cards: &mut [&Card], request: &FilterRequest, config: &GameConfig) {
    let named = request
        .sort
        .as_deref()
        .and_then(|id| config.get_sort(id))
        .map(|s| s.compare);

    match (named, request.direction) {
        (Some(cmp), SortDirection::Ascending) => cards.sort_by(|a, b| cmp(a, b)),
        // Reversing the comparator (not the list) keeps tie order stable.
        (Some(cmp), SortDirection::Descending) => cards.sort_by(|a, b| cmp(a, b).reverse()),
        (None, SortDirection::Ascending) => cards.sort_by(|a, b| a.name.cmp(&b.name)),
        (None, SortDirection::Descending) => cards.sort_by(|a, b| a.name.cmp(&b.name).reverse()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CardId;
    use crate::config::{FilterOptionSpec, SortOption};
    use crate::tier::Tier;

    fn is_creature(card: &Card) -> bool {
        card.type_line.contains("Creature")
    }

    fn is_instant(card: &Card) -> bool {
        card.type_line.contains("Instant")
    }

    fn is_red(card: &Card) -> bool {
        card.has_in_list("colors", "R")
    }

    fn is_green(card: &Card) -> bool {
        card.has_in_list("colors", "G")
    }

    fn mana_value(card: &Card) -> Option<i64> {
        card.get_attr("mana_value").and_then(|v| v.as_int())
    }

    fn by_score(a: &Card, b: &Card) -> std::cmp::Ordering {
        a.score.unwrap_or(-1).cmp(&b.score.unwrap_or(-1))
    }

    fn test_config() -> GameConfig {
        GameConfig::new("mtg", "Magic")
            .with_filter_group(FilterGroup::multi_select(
                "type",
                "Type",
                vec![
                    FilterOptionSpec::new("creature", "Creature", is_creature),
                    FilterOptionSpec::new("instant", "Instant", is_instant),
                ],
            ))
            .with_filter_group(FilterGroup::multi_select(
                "color",
                "Color",
                vec![
                    FilterOptionSpec::new("R", "Red", is_red),
                    FilterOptionSpec::new("G", "Green", is_green),
                ],
            ))
            .with_filter_group(FilterGroup::range("mv", "Mana Value", 0, 16, mana_value))
            .with_sort(SortOption::new("score", "Score", by_score))
    }

    fn test_cards() -> Vec<Card> {
        vec![
            Card::new(CardId::new(1), "Lightning Bolt", "Instant")
                .with_description("Deal 3 damage to any target.")
                .with_attr("colors", vec!["R".to_string()])
                .with_attr("mana_value", 1i64)
                .with_score(95),
            Card::new(CardId::new(2), "Grizzly Bears", "Creature - Bear")
                .with_attr("colors", vec!["G".to_string()])
                .with_attr("mana_value", 2i64)
                .with_score(40),
            Card::new(CardId::new(3), "Ghor-Clan Rampager", "Creature - Beast")
                .with_attr("colors", vec!["R".to_string(), "G".to_string()])
                .with_attr("mana_value", 4i64)
                .with_score(75),
            Card::new(CardId::new(4), "Ancestral Vision", "Sorcery"),
        ]
    }

    fn refs(cards: &[Card]) -> Vec<&Card> {
        cards.iter().collect()
    }

    #[test]
    fn test_empty_request_returns_all_sorted_by_name() {
        let cards = test_cards();
        let result = apply(&refs(&cards), &FilterRequest::new(), &test_config());

        let names: Vec<_> = result.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Ancestral Vision",
                "Ghor-Clan Rampager",
                "Grizzly Bears",
                "Lightning Bolt"
            ]
        );
    }

    #[test]
    fn test_text_search_over_all_fields() {
        let cards = test_cards();
        let config = test_config();

        let mut req = FilterRequest::new();
        req.set_search("DAMAGE"); // matches description, case-insensitive
        assert_eq!(apply(&refs(&cards), &req, &config).len(), 1);

        req.set_search("bear"); // matches type line
        assert_eq!(apply(&refs(&cards), &req, &config).len(), 1);

        req.set_search("zzz");
        assert!(apply(&refs(&cards), &req, &config).is_empty());
    }

    #[test]
    fn test_or_within_group() {
        let cards = test_cards();
        let mut req = FilterRequest::new();
        req.select("color", "R");
        req.select("color", "G");

        let result = apply(&refs(&cards), &req, &test_config());
        assert_eq!(result.len(), 3); // everything with a color
    }

    #[test]
    fn test_and_across_groups() {
        let cards = test_cards();
        let mut req = FilterRequest::new();
        req.select("type", "creature");
        req.select("color", "R");

        let result = apply(&refs(&cards), &req, &test_config());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Ghor-Clan Rampager");

        // Clearing the type constraint leaves only the color one.
        req.deselect("type", "creature");
        let result = apply(&refs(&cards), &req, &test_config());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_range_inclusive_and_undefined_excluded() {
        let cards = test_cards();
        let mut req = FilterRequest::new();
        req.set_range("mv", 1, 2);

        let result = apply(&refs(&cards), &req, &test_config());
        let names: Vec<_> = result.iter().map(|c| c.name.as_str()).collect();
        // Ancestral Vision has no mana_value attribute and is excluded.
        assert_eq!(names, ["Grizzly Bears", "Lightning Bolt"]);
    }

    #[test]
    fn test_tier_filter_composes_with_groups() {
        let cards = test_cards();
        let mut req = FilterRequest::new();
        req.select("color", "R");
        req.toggle_tier(Tier::S); // six-band: only score 95 qualifies

        let result = apply(&refs(&cards), &req, &test_config());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Lightning Bolt");
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let cards = test_cards();
        let mut req = FilterRequest::new();
        req.select("format", "commander"); // no such group
        req.select("type", "trap"); // no such option
        req.set_range("atk", 0, 3000); // no such range group
        req.set_single("rarity", "mythic"); // no such legacy filter

        let result = apply(&refs(&cards), &req, &test_config());
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_named_sort_descending() {
        let cards = test_cards();
        let mut req = FilterRequest::new();
        req.set_sort("score", SortDirection::Descending);

        let result = apply(&refs(&cards), &req, &test_config());
        let names: Vec<_> = result.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Lightning Bolt",
                "Ghor-Clan Rampager",
                "Grizzly Bears",
                "Ancestral Vision"
            ]
        );
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let tied = vec![
            Card::new(CardId::new(1), "Alpha", "Spell").with_score(50),
            Card::new(CardId::new(2), "Beta", "Spell").with_score(50),
            Card::new(CardId::new(3), "Gamma", "Spell").with_score(50),
        ];
        let mut req = FilterRequest::new();
        req.set_sort("score", SortDirection::Descending);

        let result = apply(&refs(&tied), &req, &test_config());
        let names: Vec<_> = result.iter().map(|c| c.name.as_str()).collect();
        // All scores tie; input order must survive, even descending.
        assert_eq!(names, ["Alpha", "Beta", "Gamma"]);
    }
}
