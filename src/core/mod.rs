//! Core engine types: cards, layouts, configuration, deck state, RNG, errors.
//!
//! Everything here is a plain value. `DeckState` transitions return new
//! snapshots; nothing in this module mutates shared state or reads the clock
//! except `ClockSeed`, which callers opt into.

pub mod attributes;
pub mod card;
pub mod config;
pub mod error;
pub mod layout;
pub mod rng;
pub mod state;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use card::{CardData, CardId, CardState, CardStatePatch};
pub use config::{ClockSeed, DeckConfigPatch, DeckStateConfig, FixedSeed, RngSeed, SeedSource};
pub use error::{DeckError, DriverError};
pub use layout::{CardDimensions, CardLayout, CardLayoutPatch, LayoutMode};
pub use rng::DeckRng;
pub use state::{hand_origin, CardLocation, DeckState};
