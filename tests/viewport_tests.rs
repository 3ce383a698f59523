//! Viewport fitting integration tests.

use deck_motion::animation;
use deck_motion::core::{
    CardData, CardDimensions, CardId, CardLayout, DeckConfigPatch, DeckState, FixedSeed,
};
use deck_motion::layout::LayoutMap;
use deck_motion::viewport::{
    calculate_deck_bounds, compute_deck_transform, compute_fit_scale, fit_deck_to_viewport,
    scale_positions, DeckBounds, ViewportPadding, ViewportSize,
};
use proptest::prelude::*;

fn deck(n: usize) -> DeckState {
    let cards = (0..n).map(|i| CardData::new(format!("c{}", i), format!("Card {}", i)));
    DeckState::with_seed_source(cards, &DeckConfigPatch::new(), &mut FixedSeed(42))
}

/// Deck of two unrotated cards whose union is exactly `width x height`,
/// centered on the origin.
fn two_card_deck(width: f64, height: f64, card: CardDimensions) -> DeckState {
    let base = deck(2);
    let dx = (width - card.width) / 2.0;
    let dy = (height - card.height) / 2.0;
    let positions: LayoutMap = [
        (CardId::new("c0"), CardLayout::at(-dx, -dy, 0)),
        (CardId::new("c1"), CardLayout::at(dx, dy, 1)),
    ]
    .into_iter()
    .collect();
    base.with_positions(positions)
}

// =============================================================================
// Bounds
// =============================================================================

/// An empty deck has the zero box.
#[test]
fn test_empty_deck_bounds() {
    let deck = deck(0);
    let bounds = calculate_deck_bounds(&deck.cards, &deck.positions, CardDimensions::default());
    assert_eq!(bounds, DeckBounds::zero());
}

/// NaN anywhere collapses the bounds instead of propagating.
#[test]
fn test_non_finite_layout_bounds() {
    let deck = deck(3);
    let mut positions = deck.positions.clone();
    positions.insert(CardId::new("c1"), CardLayout::at(f64::NAN, 0.0, 1));

    let bounds = calculate_deck_bounds(&deck.cards, &positions, CardDimensions::default());
    assert_eq!(bounds, DeckBounds::zero());
    assert!(bounds.width.is_finite());
}

/// A stacked deck is exactly one card big.
#[test]
fn test_stacked_deck_bounds() {
    let deck = deck(5);
    let card = CardDimensions::new(100.0, 140.0);
    let bounds = calculate_deck_bounds(&deck.cards, &deck.positions, card);

    assert_eq!((bounds.width, bounds.height), (100.0, 140.0));
    assert_eq!((bounds.center_x, bounds.center_y), (0.0, 0.0));
}

/// A fan is wider than its radius and accounts for rotated cards.
#[test]
fn test_fanned_deck_bounds() {
    let fanned = animation::fan(&deck(5)).deck;
    let card = CardDimensions::default();
    let bounds = calculate_deck_bounds(&fanned.cards, &fanned.positions, card);

    // Outer cards lie on their side at x = +-240
    assert!((bounds.max_x - (240.0 + card.height / 2.0)).abs() < 1e-6);
    assert!((bounds.min_x + (240.0 + card.height / 2.0)).abs() < 1e-6);
    // Outer cards sit 240 up, lying on their side
    assert!((bounds.min_y + (240.0 + card.width / 2.0)).abs() < 1e-6);
    // Middle card's far edge
    assert!((bounds.max_y - card.height / 2.0).abs() < 1e-6);
}

// =============================================================================
// Fit Scale
// =============================================================================

/// 600x400 bounds in a 300x300 area fit at half scale and end up centered.
#[test]
fn test_fit_scenario_half_scale_centered() {
    let card = CardDimensions::new(100.0, 100.0);
    let deck = two_card_deck(600.0, 400.0, card);
    let area = ViewportSize::new(300.0, 300.0);

    let fit = fit_deck_to_viewport(&deck, area, card, ViewportPadding::none());

    assert_eq!((fit.bounds.width, fit.bounds.height), (600.0, 400.0));
    assert_eq!(fit.scale, 0.5);
    assert_eq!((fit.scaled_bounds.width, fit.scaled_bounds.height), (300.0, 200.0));

    let center_x = fit.scaled_bounds.center_x + fit.transform.translate_x;
    let center_y = fit.scaled_bounds.center_y + fit.transform.translate_y;
    assert_eq!((center_x, center_y), (150.0, 150.0));
}

/// Default padding shrinks the inner area by 2 * (16 + 8) per axis.
#[test]
fn test_fit_with_default_padding() {
    let inner = ViewportPadding::default().inner(ViewportSize::new(300.0, 300.0));
    assert_eq!(inner, ViewportSize::new(252.0, 252.0));

    let card = CardDimensions::new(100.0, 100.0);
    let deck = two_card_deck(600.0, 400.0, card);
    let fit = fit_deck_to_viewport(&deck, ViewportSize::new(300.0, 300.0), card, ViewportPadding::default());
    assert_eq!(fit.scale, 0.42);
}

/// Decks that already fit are never enlarged.
#[test]
fn test_fit_never_upscales() {
    let deck = deck(3);
    let fit = fit_deck_to_viewport(
        &deck,
        ViewportSize::new(2000.0, 2000.0),
        CardDimensions::default(),
        ViewportPadding::default(),
    );
    assert_eq!(fit.scale, 1.0);
    assert_eq!(fit.positions, deck.positions);
}

/// Huge decks stop shrinking at the floor.
#[test]
fn test_fit_scale_floor() {
    let bounds = DeckBounds {
        width: 100_000.0,
        height: 100.0,
        ..DeckBounds::zero()
    };
    assert_eq!(compute_fit_scale(&bounds, ViewportSize::new(100.0, 100.0)), 0.1);
}

/// No extent anywhere means scale 1 and no translation.
#[test]
fn test_degenerate_inputs() {
    let deck = deck(0);
    let fit = fit_deck_to_viewport(
        &deck,
        ViewportSize::new(0.0, 0.0),
        CardDimensions::default(),
        ViewportPadding::default(),
    );
    assert_eq!(fit.scale, 1.0);
    assert_eq!(fit.transform.translate_x, 0.0);
    assert_eq!(fit.transform.translate_y, 0.0);

    let transform = compute_deck_transform(&DeckBounds::zero(), ViewportSize::new(-5.0, 10.0));
    assert_eq!((transform.translate_x, transform.translate_y), (0.0, 0.0));
}

/// Scaling keeps rotation and stacking.
#[test]
fn test_scale_positions_keeps_rotation() {
    let fanned = animation::fan(&deck(4)).deck;
    let scaled = scale_positions(&fanned.positions, 0.5);

    for (id, layout) in &fanned.positions {
        let s = scaled[id];
        assert_eq!(s.rotation, layout.rotation);
        assert_eq!(s.z_index, layout.z_index);
        assert_eq!(s.scale, 0.5);
    }
}

proptest! {
    /// Rescaled bounds fit inside the inner area, give or take rounding.
    #[test]
    fn prop_fit_is_idempotent(
        n in 1usize..24,
        radius in 100.0f64..1500.0,
        width in 150.0f64..1200.0,
        height in 150.0f64..1200.0,
    ) {
        let fanned = animation::fan(&DeckState::with_seed_source(
            (0..n).map(|i| CardData::new(format!("c{}", i), format!("Card {}", i))),
            &DeckConfigPatch::new().with_fan_radius(radius),
            &mut FixedSeed(1),
        ))
        .deck;
        let card = CardDimensions::default();
        let padding = ViewportPadding::default();
        let container = ViewportSize::new(width, height);
        let inner = padding.inner(container);

        let fit = fit_deck_to_viewport(&fanned, container, card, padding);

        // Only meaningful when the floor doesn't bite
        if fit.scale > 0.1 {
            prop_assert!(fit.scaled_bounds.width <= inner.width + 1.0);
            prop_assert!(fit.scaled_bounds.height <= inner.height + 1.0);
        }

        // Overflowing decks always shrink
        if fit.bounds.width > inner.width || fit.bounds.height > inner.height {
            prop_assert!(fit.scale < 1.0);
        }

        let again = calculate_deck_bounds(&fanned.cards, &fit.positions, card);
        prop_assert!((again.width - fit.scaled_bounds.width).abs() < 1e-9);
        prop_assert!((again.height - fit.scaled_bounds.height).abs() < 1e-9);

        if fit.scaled_bounds.width <= inner.width && fit.scaled_bounds.height <= inner.height {
            let refit = fit_deck_to_viewport(&fanned.with_positions(fit.positions.clone()), container, card, padding);
            prop_assert_eq!(refit.scale, 1.0);
        }
    }
}
