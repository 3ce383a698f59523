//! Viewport fitting and centering.
//!
//! Maps the layout engine's logical coordinates into a concrete render
//! area: bounds of the rotated cards, a uniform fit scale, scaled positions
//! and a centering translation.

pub mod bounds;
pub mod fit;

pub use bounds::{calculate_deck_bounds, rotated_half_extents, DeckBounds};
pub use fit::{
    compute_deck_transform, compute_fit_scale, fit_deck_to_viewport, scale_positions, DeckTransform,
    ViewportFit, ViewportPadding, ViewportSize, MIN_FIT_SCALE,
};
