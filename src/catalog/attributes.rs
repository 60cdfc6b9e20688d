//! Card attribute system for game-specific properties.
//!
//! Cards carry attributes like "power", "atk", "mana_value", or
//! "energy_type". These are game-specific - the engine doesn't
//! interpret them. Game configs do, through classifier predicates
//! and filter-group extractors.
//!
//! ## AttributeValue Types
//!
//! - `Int`: Numbers (power, ATK, mana value)
//! - `Bool`: Flags (legendary, pendulum)
//! - `Text`: Strings (energy type, frame)
//! - `TextList`: String lists (colors, subtypes)
//!
//! These are the shapes the filter predicates and range extractors
//! consume; catalog importers fold anything richer down to them.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Key for accessing card attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeKey(pub String);

impl AttributeKey {
    /// Create a new attribute key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl From<&str> for AttributeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Value for a card attribute.
///
/// Supports multiple types to handle different game needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Integer value (power, ATK, mana value).
    Int(i64),
    /// Boolean flag (legendary, pendulum).
    Bool(bool),
    /// Text value (energy type, monster frame).
    Text(String),
    /// List of strings (colors, subtypes).
    TextList(Vec<String>),
}

impl AttributeValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as text list reference if this is a TextList value.
    #[must_use]
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            AttributeValue::TextList(v) => Some(v),
            _ => None,
        }
    }
}

// Convenient From implementations
impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(v as i64)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(v: Vec<String>) -> Self {
        AttributeValue::TextList(v)
    }
}

/// Collection of attributes.
pub type Attributes = FxHashMap<AttributeKey, AttributeValue>;
