//! Error types for the orchestration layer.
//!
//! The pure engine (layouts, shuffle, sequencer primitives, viewport fitting)
//! never fails: unknown card ids are no-ops, bad geometry degrades to a zero
//! box, out-of-range scales are clamped. The `DeckController` keeps the same
//! no-op behaviour for unknown ids; errors only appear where it must refuse
//! a draw past the limit, or where an external animation driver reports a
//! failure.

use thiserror::Error;

/// Failure reported by an animation driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    #[error("playback cancelled")]
    Cancelled,

    #[error("driver unavailable: {0}")]
    Unavailable(String),
}

/// Errors returned by `DeckController` actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("draw limit of {limit} cards reached")]
    DrawLimitReached { limit: usize },

    #[error("playback failed: {0}")]
    Playback(#[from] DriverError),
}

pub type Result<T> = std::result::Result<T, DeckError>;
