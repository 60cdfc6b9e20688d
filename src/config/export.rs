//! Export formats - pure deck-text generators.
//!
//! Each game declares the formats it can emit (count-lists, encoded
//! deck codes). Generators are pure functions; the engine never
//! validates their output.

use super::zones::DeckZone;
use crate::catalog::Card;

/// One card line handed to an export generator: the catalog card and
/// how many copies the cube holds.
#[derive(Clone, Copy, Debug)]
pub struct ExportEntry<'a> {
    /// Catalog card.
    pub card: &'a Card,

    /// Copy count in the cube.
    pub count: u32,
}

/// Generator function: cards plus the game's zones in, deck text out.
pub type ExportGenerator = fn(&[ExportEntry<'_>], &[DeckZone]) -> String;

/// A named export format.
#[derive(Clone, Debug)]
pub struct ExportFormat {
    /// Stable format id (e.g. "txt", "ydk").
    pub id: String,

    /// Display label.
    pub label: String,

    /// The pure generator.
    pub generate: ExportGenerator,
}

impl ExportFormat {
    /// Create a new export format.
    pub fn new(id: impl Into<String>, label: impl Into<String>, generate: ExportGenerator) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            generate,
        }
    }
}

/// Plain count-list generator: one `<count>x <name>` line per printing,
/// grouped under zone headers when zones carry membership predicates.
/// Each card goes under the first zone that accepts it.
///
/// Games without zone predicates get a flat list. Usable directly as an
/// `ExportGenerator` or as a building block for game formats.
pub fn count_list(entries: &[ExportEntry<'_>], zones: &[DeckZone]) -> String {
    let mut out = String::new();

    let zoned = zones.iter().any(|z| z.member.is_some());
    if !zoned {
        for entry in entries {
            push_line(&mut out, entry);
        }
        return out;
    }

    for (zone_index, zone) in zones.iter().enumerate() {
        let members: Vec<_> = entries
            .iter()
            .filter(|e| first_accepting_zone(zones, e.card) == Some(zone_index))
            .collect();
        if members.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("// {}\n", zone.name));
        for entry in members {
            push_line(&mut out, entry);
        }
    }
    out
}

/// Index of the first zone whose membership test accepts the card.
#[must_use]
pub fn first_accepting_zone(zones: &[DeckZone], card: &Card) -> Option<usize> {
    zones.iter().position(|z| z.accepts(card))
}

fn push_line(out: &mut String, entry: &ExportEntry<'_>) {
    out.push_str(&format!("{}x {}\n", entry.count, entry.card.name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CardId;

    fn is_extra(card: &Card) -> bool {
        card.get_bool("extra_deck", false)
    }

    fn not_extra(card: &Card) -> bool {
        !card.get_bool("extra_deck", false)
    }

    #[test]
    fn test_flat_count_list() {
        let bolt = Card::new(CardId::new(1), "Lightning Bolt", "Instant");
        let bears = Card::new(CardId::new(2), "Grizzly Bears", "Creature");
        let entries = [
            ExportEntry { card: &bolt, count: 4 },
            ExportEntry { card: &bears, count: 2 },
        ];

        let text = count_list(&entries, &[DeckZone::new("main", "Main")]);
        assert_eq!(text, "4x Lightning Bolt\n2x Grizzly Bears\n");
    }

    #[test]
    fn test_zoned_count_list() {
        let magician = Card::new(CardId::new(1), "Dark Magician", "Monster");
        let fusion = Card::new(CardId::new(2), "Dark Paladin", "Monster")
            .with_attr("extra_deck", true);
        let entries = [
            ExportEntry { card: &magician, count: 3 },
            ExportEntry { card: &fusion, count: 1 },
        ];
        let zones = [
            DeckZone::new("main", "Main Deck").with_member(not_extra),
            DeckZone::new("extra", "Extra Deck").with_member(is_extra),
        ];

        let text = count_list(&entries, &zones);
        assert_eq!(
            text,
            "// Main Deck\n3x Dark Magician\n\n// Extra Deck\n1x Dark Paladin\n"
        );
    }

    #[test]
    fn test_empty_zones_skipped() {
        let magician = Card::new(CardId::new(1), "Dark Magician", "Monster");
        let entries = [ExportEntry { card: &magician, count: 1 }];
        let zones = [
            DeckZone::new("main", "Main Deck").with_member(not_extra),
            DeckZone::new("extra", "Extra Deck").with_member(is_extra),
        ];

        let text = count_list(&entries, &zones);
        assert!(!text.contains("Extra Deck"));
    }
}
