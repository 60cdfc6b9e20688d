//! Cube state engine - the mutable cube being edited.
//!
//! A cube is a curated pool of card copies with per-copy identity and
//! class-level scoring. Every mutation is transactional: it either
//! fully applies and pushes an undo entry, or fails and leaves the
//! cube untouched.
//!
//! ## Snapshots
//!
//! The snapshotted document (`CubeDoc`) is built on `im` persistent
//! maps, so history entries share structure and an O(1) clone can
//! never be corrupted by later edits.

mod card;
mod doc;
mod engine;
mod history;

pub use card::{CubeCard, InstanceId};
pub use doc::{CubeDoc, MetadataPatch};
pub use engine::{CubeEngine, LoadOutcome, LoadToken, SaveToken};
pub use history::{History, HISTORY_CAP};
