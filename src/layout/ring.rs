//! Ring layout: cards evenly spaced on a full circle.
//!
//! The first card sits at 12 o'clock and the rest follow clockwise, each
//! rotated to its polar angle so faces point outward. Unless a radius is
//! given, the circle is the smallest one on which neighbouring cards don't
//! overlap: the chord between adjacent slots, `2r * sin(pi / N)`, must be at
//! least `card_width + gap`.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::{CardLayout, DeckState};

use super::{degrees, LayoutMap, Point};

/// Default card width used for ring sizing.
pub const DEFAULT_RING_CARD_WIDTH: f64 = 120.0;

/// Default gap between neighbouring cards on the ring.
pub const DEFAULT_RING_GAP: f64 = 12.0;

/// Ring sizing and placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RingOptions {
    /// Explicit radius. Skips the overlap sizing.
    pub radius: Option<f64>,

    /// Width of one card, for overlap sizing.
    pub card_width: f64,

    /// Minimum clear space between neighbours.
    pub gap: f64,

    /// Lower bound on the computed radius.
    pub min_radius: f64,

    /// Upper bound on the computed radius, typically the available space.
    /// Cards may overlap when the cap bites.
    pub max_radius: Option<f64>,

    pub origin: Point,
}

impl RingOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_card_width(mut self, width: f64) -> Self {
        self.card_width = width;
        self
    }

    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    #[must_use]
    pub fn with_min_radius(mut self, radius: f64) -> Self {
        self.min_radius = radius;
        self
    }

    #[must_use]
    pub fn with_max_radius(mut self, radius: f64) -> Self {
        self.max_radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }
}

impl Default for RingOptions {
    fn default() -> Self {
        Self {
            radius: None,
            card_width: DEFAULT_RING_CARD_WIDTH,
            gap: DEFAULT_RING_GAP,
            min_radius: 0.0,
            max_radius: None,
            origin: Point::default(),
        }
    }
}

/// Radius of the ring for `count` cards.
#[must_use]
pub fn ring_radius(count: usize, options: &RingOptions) -> f64 {
    if let Some(radius) = options.radius {
        return radius;
    }
    if count < 2 {
        return 0.0;
    }

    let chord = options.card_width + options.gap;
    let needed = chord / (2.0 * (PI / count as f64).sin());
    let radius = needed.max(options.min_radius);
    match options.max_radius {
        Some(cap) => radius.min(cap),
        None => radius,
    }
}

/// Arrange the in-deck cards on a circle.
#[must_use]
pub fn compute_ring_layout(deck: &DeckState, options: &RingOptions) -> LayoutMap {
    let count = deck.cards.len();
    let radius = ring_radius(count, options);
    let step = 2.0 * PI / count.max(1) as f64;

    deck.cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let angle = i as f64 * step;
            let placed = CardLayout {
                x: options.origin.x + radius * angle.sin(),
                y: options.origin.y - radius * angle.cos(),
                rotation: degrees(angle),
                scale: 1.0,
                z_index: i,
            };
            (card.id.clone(), placed)
        })
        .collect()
}
