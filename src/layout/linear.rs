//! Stack and line layouts.

use crate::core::{hand_origin, CardLayout, DeckState};

use super::LayoutMap;

/// Pile every in-deck card at the origin, upright, in deck order.
///
/// Prior positions are ignored entirely.
#[must_use]
pub fn compute_stack_layout(deck: &DeckState) -> LayoutMap {
    deck.cards
        .iter()
        .enumerate()
        .map(|(i, card)| (card.id.clone(), CardLayout::origin(i)))
        .collect()
}

/// Lay the in-deck cards out in a horizontal row centered on the origin.
///
/// `spacing` defaults to the deck's configured spacing.
#[must_use]
pub fn compute_line_layout(deck: &DeckState, spacing: Option<f64>) -> LayoutMap {
    let spacing = spacing.unwrap_or(deck.config.spacing);
    let count = deck.cards.len();

    deck.cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let x = hand_origin(count, i, spacing, 0.0);
            (card.id.clone(), CardLayout::at(x, 0.0, i))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardData, CardId, CardLayoutPatch, DeckConfigPatch, FixedSeed};

    fn deck(n: usize) -> DeckState {
        let cards = (0..n).map(|i| CardData::new(format!("c{}", i), format!("Card {}", i)));
        DeckState::with_seed_source(cards, &DeckConfigPatch::new(), &mut FixedSeed(1))
    }

    #[test]
    fn test_stack_ignores_prior_layout() {
        let moved = deck(3)
            .update_card_layout(&CardId::new("c1"), &CardLayoutPatch::new().position(50.0, 60.0).rotation(12.0).scale(2.0));
        let layout = compute_stack_layout(&moved);

        for i in 0..3 {
            assert_eq!(layout[&CardId::new(format!("c{}", i))], CardLayout::origin(i));
        }
    }

    #[test]
    fn test_line_uses_config_spacing() {
        let layout = compute_line_layout(&deck(3), None);

        assert_eq!(layout[&CardId::new("c0")], CardLayout::at(-24.0, 0.0, 0));
        assert_eq!(layout[&CardId::new("c1")], CardLayout::at(0.0, 0.0, 1));
        assert_eq!(layout[&CardId::new("c2")], CardLayout::at(24.0, 0.0, 2));
    }

    #[test]
    fn test_line_spacing_override() {
        let layout = compute_line_layout(&deck(2), Some(100.0));

        assert_eq!(layout[&CardId::new("c0")].x, -50.0);
        assert_eq!(layout[&CardId::new("c1")].x, 50.0);
    }

    #[test]
    fn test_drawn_cards_excluded() {
        let drawn = deck(3).draw_card(&CardId::new("c0"));

        let layout = compute_stack_layout(&drawn);
        assert_eq!(layout.len(), 2);
        assert_eq!(layout[&CardId::new("c1")].z_index, 0);
        assert!(!layout.contains_key(&CardId::new("c0")));
    }
}
