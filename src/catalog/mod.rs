//! Catalog types: immutable card data and catalog access.
//!
//! The catalog owns `Card` records - the engine never mutates them.
//! A cube references catalog cards by `CardId` and layers its own
//! per-copy state on top (see `crate::cube`).

mod attributes;
mod card;
mod provider;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use card::{Card, CardId};
pub use provider::{CatalogProvider, MemoryCatalog};
