//! Yu-Gi-Oh! configuration.
//!
//! Cards are expected to carry:
//! - `frame`: Text ("monster"/"spell"/"trap")
//! - `extra_deck`: Bool (fusion/synchro/xyz/link)
//! - `atk`, `def`, `level`: Int (monsters only)
//! - `attribute`: Text ("DARK"/"LIGHT"/...)

use std::cmp::Ordering;

use crate::catalog::Card;
use crate::config::{
    count_list, CardClassifiers, DeckZone, ExportEntry, ExportFormat, FilterGroup,
    FilterOptionSpec, GameConfig, SortOption, Theme,
};
use crate::tier::TierScheme;

/// Build the Yu-Gi-Oh! config. Duplicate limit defaults to the game's
/// three-copy rule.
pub fn config() -> GameConfig {
    GameConfig::new("yugioh", "Yu-Gi-Oh!")
        .with_theme(Theme::new("#1d1333", "#c5a04a"))
        .with_zone(
            DeckZone::new("main", "Main Deck")
                .with_min(40)
                .with_max(60)
                .with_member(is_main_deck),
        )
        .with_zone(
            DeckZone::new("extra", "Extra Deck")
                .with_max(15)
                .with_member(is_extra_deck),
        )
        .with_zone(DeckZone::new("side", "Side Deck").with_max(15))
        .with_classifiers(
            CardClassifiers::new()
                .with_creature(is_monster)
                .with_spell(is_backrow)
                .with_extra_deck(is_extra_deck),
        )
        .with_filter_group(FilterGroup::multi_select(
            "frame",
            "Card Frame",
            vec![
                FilterOptionSpec::new("monster", "Monster", is_monster),
                FilterOptionSpec::new("spell", "Spell", is_spell),
                FilterOptionSpec::new("trap", "Trap", is_trap),
            ],
        ))
        .with_filter_group(FilterGroup::multi_select(
            "deck",
            "Deck",
            vec![
                FilterOptionSpec::new("main", "Main Deck", is_main_deck),
                FilterOptionSpec::new("extra", "Extra Deck", is_extra_deck),
            ],
        ))
        .with_filter_group(FilterGroup::range("atk", "ATK", 0, 5000, atk))
        .with_filter_group(FilterGroup::range("def", "DEF", 0, 5000, def))
        .with_filter_group(FilterGroup::range("level", "Level", 1, 12, level))
        .with_sort(SortOption::new("name", "Name", by_name))
        .with_sort(SortOption::new("atk", "ATK", by_atk))
        .with_sort(SortOption::new("score", "Score", by_score))
        .with_tier_scheme(TierScheme::SevenBand)
        .with_image_resolver(card_image)
        .with_export(ExportFormat::new("txt", "Card list", count_list))
        .with_export(ExportFormat::new("ydk", "YDK deck file", ydk))
        .with_duplicate_limit(3)
}

fn frame_is(card: &Card, frame: &str) -> bool {
    card.get_text("frame").map_or(false, |f| f == frame)
}

fn is_monster(card: &Card) -> bool {
    frame_is(card, "monster")
}

fn is_spell(card: &Card) -> bool {
    frame_is(card, "spell")
}

fn is_trap(card: &Card) -> bool {
    frame_is(card, "trap")
}

/// Spells and traps together - the "not a monster" class.
fn is_backrow(card: &Card) -> bool {
    is_spell(card) || is_trap(card)
}

fn is_extra_deck(card: &Card) -> bool {
    card.get_bool("extra_deck", false)
}

fn is_main_deck(card: &Card) -> bool {
    !is_extra_deck(card)
}

fn atk(card: &Card) -> Option<i64> {
    card.get_attr("atk").and_then(|v| v.as_int())
}

fn def(card: &Card) -> Option<i64> {
    card.get_attr("def").and_then(|v| v.as_int())
}

fn level(card: &Card) -> Option<i64> {
    card.get_attr("level").and_then(|v| v.as_int())
}

fn by_name(a: &Card, b: &Card) -> Ordering {
    a.name.cmp(&b.name)
}

fn by_atk(a: &Card, b: &Card) -> Ordering {
    atk(a).unwrap_or(-1).cmp(&atk(b).unwrap_or(-1))
}

fn by_score(a: &Card, b: &Card) -> Ordering {
    a.score.unwrap_or(-1).cmp(&b.score.unwrap_or(-1))
}

/// Card images are addressed by passcode on the public image CDN.
fn card_image(card: &Card) -> String {
    format!("https://images.ygoprodeck.com/images/cards/{}.jpg", card.id.raw())
}

/// YDK deck file: passcodes, one copy per line, under `#main` and
/// `#extra` section markers.
fn ydk(entries: &[ExportEntry<'_>], _zones: &[crate::config::DeckZone]) -> String {
    let mut out = String::from("#main\n");
    for entry in entries.iter().filter(|e| is_main_deck(e.card)) {
        for _ in 0..entry.count {
            out.push_str(&format!("{}\n", entry.card.id.raw()));
        }
    }
    out.push_str("#extra\n");
    for entry in entries.iter().filter(|e| is_extra_deck(e.card)) {
        for _ in 0..entry.count {
            out.push_str(&format!("{}\n", entry.card.id.raw()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CardId;

    fn magician() -> Card {
        Card::new(CardId::new(46986414), "Dark Magician", "Spellcaster/Normal")
            .with_attr("frame", "monster")
            .with_attr("atk", 2500i64)
            .with_attr("def", 2100i64)
            .with_attr("level", 7i64)
    }

    fn paladin() -> Card {
        Card::new(CardId::new(98502113), "Dark Paladin", "Spellcaster/Fusion")
            .with_attr("frame", "monster")
            .with_attr("extra_deck", true)
            .with_attr("atk", 2900i64)
    }

    fn pot() -> Card {
        Card::new(CardId::new(55144522), "Pot of Greed", "Spell").with_attr("frame", "spell")
    }

    #[test]
    fn test_classifiers() {
        let config = config();
        assert!(config.classifiers.creature(&magician()));
        assert!(config.classifiers.spell(&pot()));
        assert!(config.classifiers.extra_deck(&paladin()));
        assert!(!config.classifiers.extra_deck(&magician()));
        // Yu-Gi-Oh! has no lands; the capability is absent.
        assert!(!config.classifiers.land(&magician()));
    }

    #[test]
    fn test_zone_membership() {
        let config = config();
        let main = config.get_zone("main").unwrap();
        let extra = config.get_zone("extra").unwrap();

        assert!(main.accepts(&magician()));
        assert!(!main.accepts(&paladin()));
        assert!(extra.accepts(&paladin()));
    }

    #[test]
    fn test_image_resolver() {
        let config = config();
        assert_eq!(
            config.resolve_image(&magician()),
            "https://images.ygoprodeck.com/images/cards/46986414.jpg"
        );
    }

    #[test]
    fn test_ydk_export() {
        let magician = magician();
        let paladin = paladin();
        let entries = [
            ExportEntry { card: &magician, count: 2 },
            ExportEntry { card: &paladin, count: 1 },
        ];

        let text = ydk(&entries, &[]);
        assert_eq!(text, "#main\n46986414\n46986414\n#extra\n98502113\n");
    }

    #[test]
    fn test_defaults() {
        let config = config();
        assert_eq!(config.default_duplicate_limit, Some(3));
        assert_eq!(config.tier_scheme, TierScheme::SevenBand);
        assert!(config.get_export("ydk").is_some());
    }
}
