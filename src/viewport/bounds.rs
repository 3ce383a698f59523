//! Axis-aligned bounds of a laid-out deck.
//!
//! Each card is a `width x height` rectangle (times its own scale) rotated
//! by its layout rotation. Its axis-aligned half extents are
//!
//! ```text
//! half_w = |cos t| * w / 2 + |sin t| * h / 2
//! half_h = |sin t| * w / 2 + |cos t| * h / 2
//! ```
//!
//! and the deck bounds are the union of those boxes. Anything non-finite
//! collapses the result to the zero box at the origin.

use serde::{Deserialize, Serialize};

use crate::core::{CardDimensions, CardLayout, CardState};
use crate::layout::LayoutMap;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl DeckBounds {
    /// Zero-sized box at the origin.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    fn from_corners(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        let bounds = Self {
            min_x,
            min_y,
            max_x,
            max_y,
            width: max_x - min_x,
            height: max_y - min_y,
            center_x: (min_x + max_x) / 2.0,
            center_y: (min_y + max_y) / 2.0,
        };
        if bounds.is_finite() {
            bounds
        } else {
            Self::zero()
        }
    }

    fn is_finite(&self) -> bool {
        [self.min_x, self.min_y, self.max_x, self.max_y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
    }

    /// True for the degenerate box (no extent on either axis).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 && self.height <= 0.0
    }
}

/// Half extents of one rotated card.
#[must_use]
pub fn rotated_half_extents(layout: &CardLayout, card: CardDimensions) -> (f64, f64) {
    let theta = layout.rotation.to_radians();
    let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
    let w = card.width * layout.scale;
    let h = card.height * layout.scale;
    (cos * w / 2.0 + sin * h / 2.0, sin * w / 2.0 + cos * h / 2.0)
}

/// Bounds of `cards` as placed by `positions`. Cards without a position
/// are skipped.
#[must_use]
pub fn calculate_deck_bounds<'a>(
    cards: impl IntoIterator<Item = &'a CardState>,
    positions: &LayoutMap,
    card: CardDimensions,
) -> DeckBounds {
    let mut corners: Option<(f64, f64, f64, f64)> = None;

    for layout in cards.into_iter().filter_map(|c| positions.get(&c.id)) {
        let (half_w, half_h) = rotated_half_extents(layout, card);
        let (left, top) = (layout.x - half_w, layout.y - half_h);
        let (right, bottom) = (layout.x + half_w, layout.y + half_h);
        if ![left, top, right, bottom].iter().all(|v| v.is_finite()) {
            return DeckBounds::zero();
        }

        corners = Some(match corners {
            None => (left, top, right, bottom),
            Some((min_x, min_y, max_x, max_y)) => (
                min_x.min(left),
                min_y.min(top),
                max_x.max(right),
                max_y.max(bottom),
            ),
        });
    }

    match corners {
        Some((min_x, min_y, max_x, max_y)) => DeckBounds::from_corners(min_x, min_y, max_x, max_y),
        None => DeckBounds::zero(),
    }
}
