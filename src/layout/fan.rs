//! Fan layout: cards spread along a circular arc.
//!
//! The arc hangs from the origin like a hand of cards: the middle card sits
//! exactly on the origin, upright, and cards further out rotate away from it
//! and curve towards negative y.
//!
//! For N cards and `middle = (N - 1) / 2`:
//!
//! ```text
//! angle(i) = (i - middle) * spread / max(N - 1, 1)
//! x(i)     = origin.x + radius * sin(angle)
//! y(i)     = origin.y - radius * (1 - cos(angle))
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{CardLayout, DeckState};

use super::{degrees, LayoutMap, Point};

/// Per-call overrides for the fan. `None` falls back to the deck config
/// (`fan_angle`, `fan_radius`) or the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FanOptions {
    /// Total arc sweep in radians.
    pub spread_angle: Option<f64>,
    pub radius: Option<f64>,
    pub origin: Option<Point>,
}

impl FanOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_spread_angle(mut self, radians: f64) -> Self {
        self.spread_angle = Some(radians);
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = Some(origin);
        self
    }
}

/// Arrange the in-deck cards along an arc.
#[must_use]
pub fn compute_fan_layout(deck: &DeckState, options: &FanOptions) -> LayoutMap {
    let spread = options.spread_angle.unwrap_or(deck.config.fan_angle);
    let radius = options.radius.unwrap_or(deck.config.fan_radius);
    let origin = options.origin.unwrap_or_default();

    let count = deck.cards.len();
    let middle = (count as f64 - 1.0) / 2.0;
    let step = spread / count.saturating_sub(1).max(1) as f64;

    let mut layout = LayoutMap::new();
    for (i, card) in deck.cards.iter().enumerate() {
        let angle = (i as f64 - middle) * step;
        let placed = CardLayout {
            x: origin.x + radius * angle.sin(),
            y: origin.y - radius * (1.0 - angle.cos()),
            rotation: degrees(angle),
            scale: 1.0,
            z_index: i,
        };
        trace!(card = %card.id, x = placed.x, y = placed.y, rotation = placed.rotation, "fan");
        layout.insert(card.id.clone(), placed);
    }
    layout
}
