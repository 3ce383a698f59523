//! Orchestration: applying transitions, driving playback, emitting events.
//!
//! ## Key Types
//!
//! - `DeckController`: owns a deck, its event bus and its driver
//! - `AnimationDriver`: playback capability implemented by a renderer
//! - `ImmediateDriver` / `RecordingDriver`: headless drivers

pub mod deck;
pub mod driver;

pub use deck::DeckController;
pub use driver::{AnimationDriver, ImmediateDriver, RecordingDriver};
