//! Magic: The Gathering configuration.
//!
//! Cards are expected to carry:
//! - `colors`: TextList of "W"/"U"/"B"/"R"/"G" (absent or empty means
//!   colorless)
//! - `mana_value`: Int
//! - `rarity`: Text ("common"/"uncommon"/"rare"/"mythic")

use std::cmp::Ordering;

use crate::catalog::Card;
use crate::config::{
    count_list, CardClassifiers, DeckZone, ExportFormat, FilterGroup, FilterOptionSpec,
    GameConfig, LegacyFilter, SortOption, Theme,
};
use crate::tier::TierScheme;

/// Build the MTG config. Singleton cubes by tradition: duplicate
/// limit defaults to 1.
pub fn config() -> GameConfig {
    GameConfig::new("mtg", "Magic: The Gathering")
        .with_theme(Theme::new("#1a1714", "#e89b3c"))
        .with_zone(DeckZone::new("main", "Main Deck").with_min(40))
        .with_zone(DeckZone::new("side", "Sideboard").with_max(15))
        .with_classifiers(
            CardClassifiers::new()
                .with_creature(is_creature)
                .with_spell(is_spell)
                .with_land(is_land),
        )
        .with_filter_option(
            LegacyFilter::new("rarity", "Rarity")
                .with_option(FilterOptionSpec::new("common", "Common", is_common))
                .with_option(FilterOptionSpec::new("uncommon", "Uncommon", is_uncommon))
                .with_option(FilterOptionSpec::new("rare", "Rare", is_rare))
                .with_option(FilterOptionSpec::new("mythic", "Mythic", is_mythic)),
        )
        .with_filter_group(FilterGroup::multi_select(
            "color",
            "Color",
            vec![
                FilterOptionSpec::new("W", "White", is_white),
                FilterOptionSpec::new("U", "Blue", is_blue),
                FilterOptionSpec::new("B", "Black", is_black),
                FilterOptionSpec::new("R", "Red", is_red),
                FilterOptionSpec::new("G", "Green", is_green),
                FilterOptionSpec::new("C", "Colorless", is_colorless),
            ],
        ))
        .with_filter_group(FilterGroup::multi_select(
            "type",
            "Type",
            vec![
                FilterOptionSpec::new("creature", "Creature", is_creature),
                FilterOptionSpec::new("instant", "Instant", is_instant),
                FilterOptionSpec::new("sorcery", "Sorcery", is_sorcery),
                FilterOptionSpec::new("artifact", "Artifact", is_artifact),
                FilterOptionSpec::new("enchantment", "Enchantment", is_enchantment),
                FilterOptionSpec::new("planeswalker", "Planeswalker", is_planeswalker),
                FilterOptionSpec::new("land", "Land", is_land),
            ],
        ))
        .with_filter_group(FilterGroup::range("mv", "Mana Value", 0, 16, mana_value))
        .with_sort(SortOption::new("name", "Name", by_name))
        .with_sort(SortOption::new("mv", "Mana Value", by_mana_value))
        .with_sort(SortOption::new("score", "Score", by_score))
        .with_tier_scheme(TierScheme::SixBand)
        .with_export(ExportFormat::new("txt", "Card list", count_list))
        .with_duplicate_limit(1)
}

fn has_type(card: &Card, word: &str) -> bool {
    card.type_line.to_lowercase().contains(word)
}

fn is_creature(card: &Card) -> bool {
    has_type(card, "creature")
}

fn is_instant(card: &Card) -> bool {
    has_type(card, "instant")
}

fn is_sorcery(card: &Card) -> bool {
    has_type(card, "sorcery")
}

fn is_artifact(card: &Card) -> bool {
    has_type(card, "artifact")
}

fn is_enchantment(card: &Card) -> bool {
    has_type(card, "enchantment")
}

fn is_planeswalker(card: &Card) -> bool {
    has_type(card, "planeswalker")
}

fn is_land(card: &Card) -> bool {
    has_type(card, "land")
}

/// Anything castable that isn't a permanent-on-board creature or land.
fn is_spell(card: &Card) -> bool {
    !is_creature(card) && !is_land(card)
}

fn is_white(card: &Card) -> bool {
    card.has_in_list("colors", "W")
}

fn is_blue(card: &Card) -> bool {
    card.has_in_list("colors", "U")
}

fn is_black(card: &Card) -> bool {
    card.has_in_list("colors", "B")
}

fn is_red(card: &Card) -> bool {
    card.has_in_list("colors", "R")
}

fn is_green(card: &Card) -> bool {
    card.has_in_list("colors", "G")
}

fn is_colorless(card: &Card) -> bool {
    card.get_attr("colors")
        .and_then(|v| v.as_text_list())
        .map_or(true, |list| list.is_empty())
}

fn rarity_is(card: &Card, rarity: &str) -> bool {
    card.get_text("rarity").map_or(false, |r| r == rarity)
}

fn is_common(card: &Card) -> bool {
    rarity_is(card, "common")
}

fn is_uncommon(card: &Card) -> bool {
    rarity_is(card, "uncommon")
}

fn is_rare(card: &Card) -> bool {
    rarity_is(card, "rare")
}

fn is_mythic(card: &Card) -> bool {
    rarity_is(card, "mythic")
}

fn mana_value(card: &Card) -> Option<i64> {
    card.get_attr("mana_value").and_then(|v| v.as_int())
}

fn by_name(a: &Card, b: &Card) -> Ordering {
    a.name.cmp(&b.name)
}

fn by_mana_value(a: &Card, b: &Card) -> Ordering {
    mana_value(a).unwrap_or(0).cmp(&mana_value(b).unwrap_or(0))
}

fn by_score(a: &Card, b: &Card) -> Ordering {
    a.score.unwrap_or(-1).cmp(&b.score.unwrap_or(-1))
}
