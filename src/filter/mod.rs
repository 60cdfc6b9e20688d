//! Filter/sort engine.
//!
//! Given a game config and a `FilterRequest`, `apply` computes the
//! filtered, sorted card list as one pure pass. Composition semantics:
//! selections within a group are ORed, constraints across groups are
//! ANDed, and the tier filter is just one more group.

mod engine;
mod request;

pub use engine::apply;
pub use request::{FilterRequest, SortDirection, ALL_OPTION};
