//! Layout engine: pure functions from a deck snapshot to target layouts.
//!
//! Each function looks only at the in-deck cards (`DeckState::cards`) and
//! returns one `CardLayout` per card, keyed by id, with stacking indices
//! `0..N` in deck order. Drawn cards are left to the caller.
//!
//! ## Arrangements
//!
//! - `compute_fan_layout`: circular arc, symmetric about the middle card
//! - `compute_stack_layout`: everything piled at the origin
//! - `compute_line_layout`: horizontal row centered on the origin
//! - `compute_ring_layout`: full circle sized so neighbours don't overlap
//!
//! Results depend only on deck order, config and options, and are
//! bit-identical across runs.

pub mod fan;
pub mod linear;
pub mod ring;

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::core::{CardId, CardLayout};

pub use fan::{compute_fan_layout, FanOptions};
pub use linear::{compute_line_layout, compute_stack_layout};
pub use ring::{compute_ring_layout, ring_radius, RingOptions};

/// Layout for a set of cards, keyed by id.
pub type LayoutMap = OrdMap<CardId, CardLayout>;

/// A point in logical coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Degrees from radians, computed the same way everywhere layouts are
/// compared bit for bit.
#[inline]
pub(crate) fn degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}
