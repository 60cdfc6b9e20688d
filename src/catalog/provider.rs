//! Catalog access - the read-only card source behind a cube.
//!
//! The engine never owns catalog data; it asks a `CatalogProvider` for
//! it. Production builds back this with whatever card database the
//! deployment ships; tests and offline tooling use `MemoryCatalog`.

use rustc_hash::FxHashMap;

use crate::config::GameId;
use crate::error::CubeError;

use super::card::{Card, CardId};

/// Read-only card catalog, keyed by game.
pub trait CatalogProvider {
    /// Look up a single card.
    fn get_card(&self, game: &GameId, card_id: CardId) -> Result<&Card, CubeError>;

    /// Case-insensitive name search within one game's catalog.
    ///
    /// An empty query returns every card of the game.
    fn search_cards(&self, game: &GameId, query: &str) -> Vec<&Card>;
}

/// In-memory catalog for tests and bundled card sets.
#[derive(Clone, Debug, Default)]
pub struct MemoryCatalog {
    games: FxHashMap<GameId, Vec<Card>>,
    index: FxHashMap<(GameId, CardId), usize>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card under a game. Later inserts with the same id shadow
    /// earlier ones in `get_card` but both remain in search results,
    /// matching how bundled catalogs layer expansion files.
    pub fn insert(&mut self, game: GameId, card: Card) {
        let cards = self.games.entry(game.clone()).or_default();
        self.index.insert((game, card.id), cards.len());
        cards.push(card);
    }

    /// Number of cards stored for a game.
    #[must_use]
    pub fn len(&self, game: &GameId) -> usize {
        self.games.get(game).map_or(0, Vec::len)
    }

    /// Whether a game has no cards.
    #[must_use]
    pub fn is_empty(&self, game: &GameId) -> bool {
        self.len(game) == 0
    }
}

impl CatalogProvider for MemoryCatalog {
    fn get_card(&self, game: &GameId, card_id: CardId) -> Result<&Card, CubeError> {
        self.index
            .get(&(game.clone(), card_id))
            .and_then(|&i| self.games.get(game).and_then(|cards| cards.get(i)))
            .ok_or(CubeError::CardNotFound(card_id.raw()))
    }

    fn search_cards(&self, game: &GameId, query: &str) -> Vec<&Card> {
        let Some(cards) = self.games.get(game) else {
            return Vec::new();
        };
        if query.is_empty() {
            return cards.iter().collect();
        }
        let needle = query.to_lowercase();
        cards
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }
}
