//! Fitting and centering a deck inside a render area.
//!
//! ## Pipeline
//!
//! 1. Bounds of the in-deck cards in logical units (`calculate_deck_bounds`)
//! 2. Fit scale: largest uniform scale (at most 1) that fits the bounds in
//!    the inner area, floored at 0.1
//! 3. Scaled positions: x/y and card scale multiplied by the fit scale
//! 4. Deck transform: translation moving the scaled bounds' center to the
//!    center of the render area
//!
//! Re-run whenever the container size, card count or layout mode changes.
//! Feeding the scaled positions back through the bounds computation gives
//! the scaled bounds again, within rounding.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{CardDimensions, DeckState};
use crate::layout::LayoutMap;

use super::bounds::{calculate_deck_bounds, DeckBounds};

/// Smallest fit scale ever returned.
pub const MIN_FIT_SCALE: f64 = 0.1;

/// Largest scale returned for bounds that overflow the inner area.
const MAX_SHRINK_SCALE: f64 = 0.9999;

/// Default padding between the container edge and the render area.
pub const DEFAULT_OUTER_PADDING: f64 = 16.0;

/// Default extra margin kept clear inside the render area.
pub const DEFAULT_SAFETY_MARGIN: f64 = 8.0;

/// Size of a container or render area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn has_extent(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Per-side padding subtracted from the container before fitting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportPadding {
    pub outer: f64,
    pub safety: f64,
}

impl ViewportPadding {
    /// No padding at all.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            outer: 0.0,
            safety: 0.0,
        }
    }

    /// Space available to the deck inside `container`.
    #[must_use]
    pub fn inner(&self, container: ViewportSize) -> ViewportSize {
        let inset = 2.0 * (self.outer + self.safety);
        ViewportSize::new(container.width - inset, container.height - inset)
    }
}

impl Default for ViewportPadding {
    fn default() -> Self {
        Self {
            outer: DEFAULT_OUTER_PADDING,
            safety: DEFAULT_SAFETY_MARGIN,
        }
    }
}

/// Translation applied to the whole deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckTransform {
    pub translate_x: f64,
    pub translate_y: f64,
}

/// Everything a renderer needs to draw the deck inside a container.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportFit {
    /// Bounds before scaling.
    pub bounds: DeckBounds,
    pub scale: f64,
    pub positions: LayoutMap,
    /// Bounds of `positions`.
    pub scaled_bounds: DeckBounds,
    pub transform: DeckTransform,
}

fn round_to(value: f64, steps: f64) -> f64 {
    (value * steps).round() / steps
}

/// Uniform scale fitting `bounds` inside `inner`, never above 1.
///
/// Degenerate bounds or a non-positive inner area give 1. The result is
/// clamped to `MIN_FIT_SCALE` and rounded to 1/10000. Bounds that overflow
/// `inner` always shrink, even when the exact ratio would round up to 1.
#[must_use]
pub fn compute_fit_scale(bounds: &DeckBounds, inner: ViewportSize) -> f64 {
    if bounds.width <= 0.0 || bounds.height <= 0.0 || !inner.has_extent() {
        return 1.0;
    }
    let scale = (inner.width / bounds.width)
        .min(inner.height / bounds.height)
        .min(1.0)
        .max(MIN_FIT_SCALE);
    if !scale.is_finite() {
        return 1.0;
    }
    let rounded = round_to(scale, 10_000.0);
    if scale < 1.0 {
        rounded.min(MAX_SHRINK_SCALE)
    } else {
        rounded
    }
}

/// Multiply every position and card scale by `scale`.
///
/// Coordinates are rounded to 1/1000 and scales to 1/10000; rotation and
/// stacking index are untouched.
#[must_use]
pub fn scale_positions(positions: &LayoutMap, scale: f64) -> LayoutMap {
    positions
        .iter()
        .map(|(id, layout)| {
            let mut scaled = *layout;
            scaled.x = round_to(layout.x * scale, 1_000.0);
            scaled.y = round_to(layout.y * scale, 1_000.0);
            scaled.scale = round_to(layout.scale * scale, 10_000.0);
            (id.clone(), scaled)
        })
        .collect()
}

/// Translation centering `bounds` in `area`. Zero when the area has no
/// extent.
#[must_use]
pub fn compute_deck_transform(bounds: &DeckBounds, area: ViewportSize) -> DeckTransform {
    if !area.has_extent() {
        return DeckTransform::default();
    }
    DeckTransform {
        translate_x: area.width / 2.0 - bounds.center_x,
        translate_y: area.height / 2.0 - bounds.center_y,
    }
}

/// Fit the in-deck cards of `deck` into `container`.
#[must_use]
pub fn fit_deck_to_viewport(
    deck: &DeckState,
    container: ViewportSize,
    card: CardDimensions,
    padding: ViewportPadding,
) -> ViewportFit {
    let bounds = calculate_deck_bounds(&deck.cards, &deck.positions, card);
    let scale = compute_fit_scale(&bounds, padding.inner(container));
    let positions = scale_positions(&deck.positions, scale);
    let scaled_bounds = calculate_deck_bounds(&deck.cards, &positions, card);
    let transform = compute_deck_transform(&scaled_bounds, container);

    trace!(
        cards = deck.cards.len(),
        mode = %deck.layout_mode,
        width = bounds.width,
        height = bounds.height,
        scale,
        "fit deck to viewport"
    );

    ViewportFit {
        bounds,
        scale,
        positions,
        scaled_bounds,
        transform,
    }
}
