//! Deck events and the event bus.
//!
//! ## Key Types
//!
//! - `DeckEvent`: what happened, with a fixed payload per kind
//! - `DeckEventKind`: subscription key
//! - `EventBus`: synchronous listener registry, one per controller

pub mod bus;
pub mod event;

pub use bus::{EventBus, ListenerId};
pub use event::{DeckEvent, DeckEventKind};
