//! Filter requests - the transient query state behind a browse view.
//!
//! A request is plain data assembled by the UI: search text, the
//! selected options per filter dimension, active ranges, tier
//! selection, and the sort. Stale ids (left over after a game switch)
//! are tolerated by the engine, not validated here.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::tier::Tier;

/// Sentinel option id for legacy single-select filters meaning
/// "no constraint".
pub const ALL_OPTION: &str = "all";

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// A filter/sort request over one game's cards.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FilterRequest {
    /// Case-insensitive substring search over name/description/type.
    pub search: String,

    /// Legacy single-select filters: filter id -> selected option id.
    /// The sentinel `"all"` imposes no constraint.
    pub single_selects: FxHashMap<String, String>,

    /// Multi-select groups: group id -> selected option ids.
    /// Keys with empty selections never exist; deselecting the last
    /// option removes the key.
    pub group_selections: FxHashMap<String, SmallVec<[String; 4]>>,

    /// Range groups: group id -> inclusive (min, max).
    pub range_selections: FxHashMap<String, (i64, i64)>,

    /// Selected tiers; behaves as one more multi-select group.
    pub tier_selection: SmallVec<[Tier; 4]>,

    /// Sort id; `None` (or an unknown id) falls back to lexical name.
    pub sort: Option<String>,

    /// Sort direction.
    pub direction: SortDirection,
}

impl FilterRequest {
    /// Create an empty request (matches everything, name order).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Set a legacy single-select. The `"all"` sentinel clears the
    /// constraint entirely.
    pub fn set_single(&mut self, filter_id: impl Into<String>, option_id: impl Into<String>) {
        let option_id = option_id.into();
        if option_id == ALL_OPTION {
            self.single_selects.remove(&filter_id.into());
        } else {
            self.single_selects.insert(filter_id.into(), option_id);
        }
    }

    /// Add an option to a group's selection (no-op if already selected).
    pub fn select(&mut self, group_id: impl Into<String>, option_id: impl Into<String>) {
        let selections = self.group_selections.entry(group_id.into()).or_default();
        let option_id = option_id.into();
        if !selections.contains(&option_id) {
            selections.push(option_id);
        }
    }

    /// Remove an option from a group's selection. Removing the sole
    /// selected option drops the group's key entirely.
    pub fn deselect(&mut self, group_id: &str, option_id: &str) {
        if let Some(selections) = self.group_selections.get_mut(group_id) {
            selections.retain(|id| id != option_id);
            if selections.is_empty() {
                self.group_selections.remove(group_id);
            }
        }
    }

    /// Toggle an option in a group's selection.
    pub fn toggle(&mut self, group_id: &str, option_id: &str) {
        let selected = self
            .group_selections
            .get(group_id)
            .map_or(false, |s| s.iter().any(|id| id == option_id));
        if selected {
            self.deselect(group_id, option_id);
        } else {
            self.select(group_id.to_string(), option_id.to_string());
        }
    }

    /// Set a range group's inclusive bounds.
    pub fn set_range(&mut self, group_id: impl Into<String>, min: i64, max: i64) {
        self.range_selections.insert(group_id.into(), (min, max));
    }

    /// Clear a range group.
    pub fn clear_range(&mut self, group_id: &str) {
        self.range_selections.remove(group_id);
    }

    /// Toggle a tier in the tier selection.
    pub fn toggle_tier(&mut self, tier: Tier) {
        if let Some(pos) = self.tier_selection.iter().position(|&t| t == tier) {
            self.tier_selection.remove(pos);
        } else {
            self.tier_selection.push(tier);
        }
    }

    /// Set the sort order.
    pub fn set_sort(&mut self, sort_id: impl Into<String>, direction: SortDirection) {
        self.sort = Some(sort_id.into());
        self.direction = direction;
    }

    /// Drop every constraint, keeping the sort.
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.single_selects.clear();
        self.group_selections.clear();
        self.range_selections.clear();
        self.tier_selection.clear();
    }
}
