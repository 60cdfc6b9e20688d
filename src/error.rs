//! Error taxonomy for cube operations.
//!
//! Every user-triggered operation returns `Result<_, CubeError>` and
//! leaves state untouched on failure - there is no half-applied edit.
//!
//! - `Validation`: recoverable, user-visible, operation fully aborted
//!   (duplicate limit exceeded, score out of range, missing name on save).
//! - `NotFound`: unknown game/card/cube id; retryable with corrected input.
//! - `Io`: save/load transport failure, surfaced on the engine and left
//!   for the gateway to retry - the core never retries on its own.
//! - `Invariant`: a defect signal (e.g. duplicate instance id). Not
//!   user-facing; callers should treat it as history corruption and
//!   fail loudly rather than paper over it.

use thiserror::Error;

/// Errors produced by the cube data engine.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CubeError {
    /// Adding `requested` copies would push `card_id`'s copy count past
    /// the cube's duplicate limit. Nothing was added.
    #[error("duplicate limit {limit} exceeded for card {card_id}: have {existing}, requested {requested} more")]
    DuplicateLimitExceeded {
        card_id: u32,
        limit: u32,
        existing: u32,
        requested: u32,
    },

    /// A score outside [0, 100] was rejected.
    #[error("score {0} out of range [0, 100]")]
    ScoreOutOfRange(i64),

    /// Saving requires a non-empty cube name.
    #[error("cube has no name; set a name before saving")]
    MissingName,

    /// Unknown game id.
    #[error("unknown game '{0}'")]
    GameNotFound(String),

    /// Unknown catalog card id.
    #[error("card {0} not found in catalog")]
    CardNotFound(u32),

    /// Unknown export format id for the current game.
    #[error("unknown export format '{0}'")]
    FormatNotFound(String),

    /// Unknown cube id at the persistence gateway.
    #[error("cube '{0}' not found")]
    CubeNotFound(String),

    /// Save/load transport failure. The in-memory cube remains
    /// authoritative; pending edits are never lost to a failed save.
    #[error("persistence failure: {0}")]
    Io(String),

    /// Internal invariant broken - indicates a defect, not bad input.
    #[error("invariant violation: {0}")]
    Invariant(String),
}

impl CubeError {
    /// Whether this error should be shown to the user as a recoverable
    /// condition (everything except `Invariant`).
    #[must_use]
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, CubeError::Invariant(_))
    }
}
