//! # deck-motion
//!
//! A deterministic 2D layout and animation-sequencing engine for an ordered
//! deck of cards.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: Every layout, shuffle and sequencer function takes
//!    a `DeckState` snapshot and returns a new one. Nothing is mutated in
//!    place and nothing reads the clock.
//!
//! 2. **Reproducible**: Layouts are bit-identical for identical input, and
//!    shuffles are driven by a fixed Park-Miller generator so a seed always
//!    yields the same order.
//!
//! 3. **State before motion**: A primitive returns the new deck and a
//!    declarative `AnimationSequence` side by side. The deck is authoritative
//!    the moment it is returned; the sequence only describes how a renderer
//!    may animate towards it.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) snapshot cloning via `im-rs`.
//!
//! - **Never throws**: Unknown card ids degrade to no-ops, non-finite
//!   geometry degrades to an empty box, out-of-range scales are clamped.
//!   Only `DeckController` reports errors.
//!
//! ## Modules
//!
//! - `core`: Cards, layouts, configuration, deck state, RNG, errors
//! - `layout`: Fan, stack, line and ring arrangements
//! - `shuffle`: Seeded multi-pass Fisher-Yates
//! - `animation`: Sequences and the sequencer primitives
//! - `events`: Deck events and the listener registry
//! - `viewport`: Bounds, fit scale and centering
//! - `controller`: Orchestration around an animation driver

pub mod core;
pub mod layout;
pub mod shuffle;
pub mod animation;
pub mod events;
pub mod viewport;
pub mod controller;

// Re-export commonly used types
pub use crate::core::{
    AttributeKey, AttributeValue, Attributes,
    CardData, CardId, CardState, CardStatePatch,
    CardDimensions, CardLayout, CardLayoutPatch, LayoutMode,
    ClockSeed, DeckConfigPatch, DeckStateConfig, FixedSeed, RngSeed, SeedSource,
    CardLocation, DeckState, hand_origin,
    DeckRng,
    DeckError, DriverError,
};

pub use crate::layout::{
    compute_fan_layout, compute_line_layout, compute_ring_layout, compute_stack_layout,
    FanOptions, LayoutMap, Point, RingOptions,
};

pub use crate::shuffle::{shuffle_cards, DEFAULT_SHUFFLE_ITERATIONS};

pub use crate::animation::{
    AnimationSequence, AnimationStep, AnimationTarget, Easing, SequenceTag,
    DeckTransition, FlipOptions, MoveOptions, ShuffleOptions,
};

pub use crate::events::{DeckEvent, DeckEventKind, EventBus, ListenerId};

pub use crate::viewport::{
    calculate_deck_bounds, fit_deck_to_viewport,
    DeckBounds, DeckTransform, ViewportFit, ViewportPadding, ViewportSize,
};

pub use crate::controller::{AnimationDriver, DeckController, ImmediateDriver, RecordingDriver};
