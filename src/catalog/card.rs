//! Catalog cards - static card data.
//!
//! `Card` holds the immutable properties of a printing as the catalog
//! ships it: name, type line, description, image URL, an optional
//! editorial score, and a game-specific attribute bag.
//!
//! Per-copy cube state (instance identity, overridden score) is stored
//! separately in `crate::cube::CubeCard`.

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue, Attributes};

/// Unique identifier for a catalog card.
///
/// This identifies the printing (e.g. "Lightning Bolt"), not a specific
/// copy inside a cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static catalog card.
///
/// Contains the unchanging data about a printing. All game-specific
/// data goes in `attributes`.
///
/// ## Example
///
/// ```
/// use cube_core::catalog::{Card, CardId};
///
/// let bolt = Card::new(CardId::new(1), "Lightning Bolt", "Instant")
///     .with_attr("mana_value", 1i64)
///     .with_score(88);
///
/// assert_eq!(bolt.get_int("mana_value", 0), 1);
/// assert_eq!(bolt.score, Some(88));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this printing.
    pub id: CardId,

    /// Card name.
    pub name: String,

    /// Type line (game-specific text, opaque to the engine).
    pub type_line: String,

    /// Rules / flavor description.
    pub description: String,

    /// Image URL as shipped by the catalog. Game configs may rewrite
    /// this through their image resolver.
    pub image_url: String,

    /// Default score in [0, 100]. `None` means unscored.
    pub score: Option<i64>,

    /// Game-specific attributes.
    pub attributes: Attributes,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, type_line: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            type_line: type_line.into(),
            description: String::new(),
            image_url: String::new(),
            score: None,
            attributes: Attributes::default(),
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Set the image URL (builder pattern).
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Set the default score (builder pattern).
    #[must_use]
    pub fn with_score(mut self, score: i64) -> Self {
        self.score = Some(score);
        self
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(&AttributeKey::new(key))
    }

    /// Get an integer attribute with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get_attr(key).and_then(|v| v.as_int()).unwrap_or(default)
    }

    /// Get a boolean attribute with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_attr(key).and_then(|v| v.as_bool()).unwrap_or(default)
    }

    /// Get a text attribute.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get_attr(key).and_then(|v| v.as_text())
    }

    /// Check whether a text-list attribute contains a value.
    #[must_use]
    pub fn has_in_list(&self, key: &str, value: &str) -> bool {
        self.get_attr(key)
            .and_then(|v| v.as_text_list())
            .map_or(false, |list| list.iter().any(|s| s == value))
    }
}
