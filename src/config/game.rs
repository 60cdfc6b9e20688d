//! The `GameConfig` record and its identifier.
//!
//! A config is the whole contract for one trading-card game: display
//! data, deck zones, the classifier capability table, filter and sort
//! specifications, image resolution, export formats, and cube defaults.
//! Configs are immutable after registration and hold no external
//! resources.

use serde::{Deserialize, Serialize};

use crate::catalog::Card;
use crate::tier::TierScheme;

use super::classify::CardClassifiers;
use super::export::ExportFormat;
use super::filters::{FilterGroup, LegacyFilter, SortOption};
use super::zones::DeckZone;

/// Identifier of a trading-card game (e.g. "mtg", "yugioh").
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(String);

impl GameId {
    /// Create a new game id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Display theme colors for a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Primary color (CSS color string).
    pub primary: String,

    /// Accent color (CSS color string).
    pub accent: String,
}

impl Theme {
    /// Create a theme from two color strings.
    pub fn new(primary: impl Into<String>, accent: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            accent: accent.into(),
        }
    }
}

/// Rewrites a card's image URL for display (e.g. proxy or CDN routing).
pub type ImageResolver = fn(&Card) -> String;

/// Complete configuration for one trading-card game.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Unique game id.
    pub id: GameId,

    /// Display name.
    pub name: String,

    /// Display theme.
    pub theme: Theme,

    /// Ordered deck zones (Main before Extra before Side).
    pub deck_zones: Vec<DeckZone>,

    /// Classification capability table.
    pub classifiers: CardClassifiers,

    /// Legacy single-select filters.
    pub filter_options: Vec<LegacyFilter>,

    /// Multi-select and range filter groups.
    pub filter_groups: Vec<FilterGroup>,

    /// Named sort orders. The engine falls back to lexical name sort
    /// when a request names no (or an unknown) sort.
    pub sort_options: Vec<SortOption>,

    /// Tier scheme used by this game's tier filter and tier buckets.
    pub tier_scheme: TierScheme,

    /// Image URL resolver. Absent means use `Card::image_url` as-is.
    pub image_resolver: Option<ImageResolver>,

    /// Export formats.
    pub export_formats: Vec<ExportFormat>,

    /// Default duplicate limit for new cubes of this game.
    /// `None` for unlimited.
    pub default_duplicate_limit: Option<u32>,
}

impl GameConfig {
    /// Create a minimal config: no zones, filters, sorts or exports,
    /// an empty classifier table, six-band tiers, unlimited duplicates.
    pub fn new(id: impl Into<GameId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            theme: Theme::default(),
            deck_zones: Vec::new(),
            classifiers: CardClassifiers::new(),
            filter_options: Vec::new(),
            filter_groups: Vec::new(),
            sort_options: Vec::new(),
            tier_scheme: TierScheme::SixBand,
            image_resolver: None,
            export_formats: Vec::new(),
            default_duplicate_limit: None,
        }
    }

    /// Set the theme (builder pattern).
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Add a deck zone (builder pattern).
    #[must_use]
    pub fn with_zone(mut self, zone: DeckZone) -> Self {
        self.deck_zones.push(zone);
        self
    }

    /// Set the classifier table (builder pattern).
    #[must_use]
    pub fn with_classifiers(mut self, classifiers: CardClassifiers) -> Self {
        self.classifiers = classifiers;
        self
    }

    /// Add a legacy single-select filter (builder pattern).
    #[must_use]
    pub fn with_filter_option(mut self, filter: LegacyFilter) -> Self {
        self.filter_options.push(filter);
        self
    }

    /// Add a filter group (builder pattern).
    #[must_use]
    pub fn with_filter_group(mut self, group: FilterGroup) -> Self {
        self.filter_groups.push(group);
        self
    }

    /// Add a sort option (builder pattern).
    #[must_use]
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort_options.push(sort);
        self
    }

    /// Set the tier scheme (builder pattern).
    #[must_use]
    pub fn with_tier_scheme(mut self, scheme: TierScheme) -> Self {
        self.tier_scheme = scheme;
        self
    }

    /// Set the image resolver (builder pattern).
    #[must_use]
    pub fn with_image_resolver(mut self, resolver: ImageResolver) -> Self {
        self.image_resolver = Some(resolver);
        self
    }

    /// Add an export format (builder pattern).
    #[must_use]
    pub fn with_export(mut self, format: ExportFormat) -> Self {
        self.export_formats.push(format);
        self
    }

    /// Set the default duplicate limit (builder pattern).
    #[must_use]
    pub fn with_duplicate_limit(mut self, limit: u32) -> Self {
        self.default_duplicate_limit = Some(limit);
        self
    }

    /// Get a deck zone by id.
    #[must_use]
    pub fn get_zone(&self, id: &str) -> Option<&DeckZone> {
        self.deck_zones.iter().find(|z| z.id == id)
    }

    /// Get a legacy filter by id.
    #[must_use]
    pub fn get_filter_option(&self, id: &str) -> Option<&LegacyFilter> {
        self.filter_options.iter().find(|f| f.id == id)
    }

    /// Get a filter group by id.
    #[must_use]
    pub fn get_filter_group(&self, id: &str) -> Option<&FilterGroup> {
        self.filter_groups.iter().find(|g| g.id == id)
    }

    /// Get a sort option by id.
    #[must_use]
    pub fn get_sort(&self, id: &str) -> Option<&SortOption> {
        self.sort_options.iter().find(|s| s.id == id)
    }

    /// Get an export format by id.
    #[must_use]
    pub fn get_export(&self, id: &str) -> Option<&ExportFormat> {
        self.export_formats.iter().find(|e| e.id == id)
    }

    /// Resolve a card's display image URL.
    #[must_use]
    pub fn resolve_image(&self, card: &Card) -> String {
        match self.image_resolver {
            Some(resolver) => resolver(card),
            None => card.image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CardId;
    use crate::config::FilterOptionSpec;

    fn is_creature(card: &Card) -> bool {
        card.type_line.contains("Creature")
    }

    fn proxy_image(card: &Card) -> String {
        format!("https://proxy.example/{}", card.id.raw())
    }

    #[test]
    fn test_game_id() {
        let id = GameId::new("mtg");
        assert_eq!(id.as_str(), "mtg");
        assert_eq!(format!("{}", id), "mtg");
        assert_eq!(GameId::from("mtg"), id);
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new("mtg", "Magic: The Gathering")
            .with_theme(Theme::new("#261c0e", "#e89b3c"))
            .with_zone(DeckZone::new("main", "Main Deck").with_min(60))
            .with_filter_group(FilterGroup::multi_select(
                "type",
                "Type",
                vec![FilterOptionSpec::new("creature", "Creature", is_creature)],
            ))
            .with_duplicate_limit(1);

        assert_eq!(config.id.as_str(), "mtg");
        assert!(config.get_zone("main").is_some());
        assert!(config.get_zone("extra").is_none());
        assert!(config.get_filter_group("type").is_some());
        assert_eq!(config.default_duplicate_limit, Some(1));
        assert_eq!(config.tier_scheme, TierScheme::SixBand);
    }

    #[test]
    fn test_image_resolution_fallback() {
        let card = Card::new(CardId::new(7), "Test", "Spell").with_image("https://img/7.jpg");

        let plain = GameConfig::new("g", "Game");
        assert_eq!(plain.resolve_image(&card), "https://img/7.jpg");

        let proxied = GameConfig::new("g", "Game").with_image_resolver(proxy_image);
        assert_eq!(proxied.resolve_image(&card), "https://proxy.example/7");
    }
}
