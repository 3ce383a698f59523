//! Deck state snapshots and their pure transitions.
//!
//! ## DeckState
//!
//! A complete, immutable snapshot of a deck:
//! - Cards still in the deck, in order
//! - Drawn cards, in draw order
//! - One `CardLayout` per card across both lists
//! - Resolved configuration
//! - The current layout mode
//!
//! Every transition takes `&self` and returns a new `DeckState`. The
//! collections are `im` persistent structures, so a transition costs
//! O(log n) and older snapshots remain valid and unchanged.
//!
//! Transitions never fail. An unknown card id returns an identical snapshot.
//!
//! ## Invariants
//!
//! - Every card id is in exactly one of `cards` / `drawn_cards`
//! - `positions` has exactly one entry per card across both lists
//! - `drawn_cards.len() <= config.draw_limit` is upheld by `DeckController`,
//!   not by these functions

use std::sync::Arc;

use im::{OrdMap, Vector};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::card::{CardData, CardId, CardState, CardStatePatch};
use super::config::{ClockSeed, DeckConfigPatch, DeckStateConfig, SeedSource};
use super::layout::{CardLayout, CardLayoutPatch, LayoutMode};

/// Which list a card currently lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardLocation {
    Deck,
    Drawn,
}

/// Immutable deck snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckState {
    /// Cards in the deck, bottom first.
    pub cards: Vector<CardState>,

    /// Drawn cards, oldest first.
    pub drawn_cards: Vector<CardState>,

    /// Layout for every card in either list.
    pub positions: OrdMap<CardId, CardLayout>,

    pub config: DeckStateConfig,

    pub layout_mode: LayoutMode,
}

impl DeckState {
    /// Build a deck from catalog entries.
    ///
    /// Uses the wall clock for the seed unless `patch` sets one; see
    /// `with_seed_source` for a reproducible alternative.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = CardData>, patch: &DeckConfigPatch) -> Self {
        Self::with_seed_source(cards, patch, &mut ClockSeed)
    }

    /// Build a deck, drawing the default seed from `seeds`.
    ///
    /// ## Initial state
    ///
    /// - Every card face down, unselected, draggable
    /// - Every layout at the origin with stacking index = input order
    /// - Layout mode `Stack`
    ///
    /// Ids must be unique; a repeated id is dropped after its first
    /// occurrence.
    #[must_use]
    pub fn with_seed_source(
        cards: impl IntoIterator<Item = CardData>,
        patch: &DeckConfigPatch,
        seeds: &mut impl SeedSource,
    ) -> Self {
        let mut seen = FxHashSet::default();
        let mut states = Vector::new();
        let mut positions = OrdMap::new();

        for data in cards {
            if !seen.insert(data.id.clone()) {
                trace!(card = %data.id, "dropping duplicate card id");
                continue;
            }
            let state = CardState::new(Arc::new(data));
            positions.insert(state.id.clone(), CardLayout::origin(states.len()));
            states.push_back(state);
        }

        Self {
            cards: states,
            drawn_cards: Vector::new(),
            positions,
            config: DeckStateConfig::resolve(patch, seeds),
            layout_mode: LayoutMode::Stack,
        }
    }

    // === Queries ===

    /// Total number of cards across both lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len() + self.drawn_cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find a card in either list.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&CardState> {
        self.cards
            .iter()
            .chain(self.drawn_cards.iter())
            .find(|c| &c.id == id)
    }

    /// Which list holds `id`, if any.
    #[must_use]
    pub fn location(&self, id: &CardId) -> Option<CardLocation> {
        if self.cards.iter().any(|c| &c.id == id) {
            Some(CardLocation::Deck)
        } else if self.drawn_cards.iter().any(|c| &c.id == id) {
            Some(CardLocation::Drawn)
        } else {
            None
        }
    }

    #[must_use]
    pub fn layout(&self, id: &CardId) -> Option<&CardLayout> {
        self.positions.get(id)
    }

    /// Ids of in-deck cards, in order.
    #[must_use]
    pub fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id.clone()).collect()
    }

    /// Ids of drawn cards, in draw order.
    #[must_use]
    pub fn drawn_ids(&self) -> Vec<CardId> {
        self.drawn_cards.iter().map(|c| c.id.clone()).collect()
    }

    // === Card transitions ===

    /// Replace one card's runtime state with `patch` merged over it.
    #[must_use]
    pub fn update_card_state(&self, id: &CardId, patch: &CardStatePatch) -> Self {
        let mut next = self.clone();
        if let Some(index) = self.cards.iter().position(|c| &c.id == id) {
            next.cards.set(index, self.cards[index].patched(patch));
        } else if let Some(index) = self.drawn_cards.iter().position(|c| &c.id == id) {
            next.drawn_cards
                .set(index, self.drawn_cards[index].patched(patch));
        } else {
            trace!(card = %id, "update_card_state: unknown card");
        }
        next
    }

    /// Replace one card's layout with `patch` merged over it.
    #[must_use]
    pub fn update_card_layout(&self, id: &CardId, patch: &CardLayoutPatch) -> Self {
        match self.positions.get(id) {
            Some(layout) => {
                let mut next = self.clone();
                next.positions.insert(id.clone(), layout.patched(patch));
                next
            }
            None => {
                trace!(card = %id, "update_card_layout: unknown card");
                self.clone()
            }
        }
    }

    /// Mark a card selected or unselected.
    #[must_use]
    pub fn select_card(&self, id: &CardId, selected: bool) -> Self {
        self.update_card_state(id, &CardStatePatch::new().selected(selected))
    }

    /// Move a card from the deck to the end of the drawn list.
    ///
    /// The card keeps its layout. Does not check `draw_limit`.
    #[must_use]
    pub fn draw_card(&self, id: &CardId) -> Self {
        let Some(index) = self.cards.iter().position(|c| &c.id == id) else {
            trace!(card = %id, "draw_card: card not in deck");
            return self.clone();
        };
        let mut next = self.clone();
        let card = next.cards.remove(index);
        next.drawn_cards.push_back(card);
        next
    }

    /// Move a drawn card back to the end (top) of the deck.
    #[must_use]
    pub fn return_card(&self, id: &CardId) -> Self {
        let Some(index) = self.drawn_cards.iter().position(|c| &c.id == id) else {
            trace!(card = %id, "return_card: card not drawn");
            return self.clone();
        };
        let mut next = self.clone();
        let card = next.drawn_cards.remove(index);
        next.cards.push_back(card);
        next
    }

    // === Whole-field setters ===

    /// Replace the positions map.
    #[must_use]
    pub fn with_positions(&self, positions: OrdMap<CardId, CardLayout>) -> Self {
        Self {
            positions,
            ..self.clone()
        }
    }

    /// Merge a partial configuration over the current one.
    #[must_use]
    pub fn with_config(&self, patch: &DeckConfigPatch) -> Self {
        Self {
            config: self.config.merge(patch),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_layout_mode(&self, layout_mode: LayoutMode) -> Self {
        Self {
            layout_mode,
            ..self.clone()
        }
    }

    /// Replace the in-deck order. Used by shuffle; `cards` must be a
    /// permutation of the current in-deck cards.
    #[must_use]
    pub(crate) fn with_cards(&self, cards: Vector<CardState>) -> Self {
        Self {
            cards,
            ..self.clone()
        }
    }
}

/// Horizontal offset of slot `index` in a row of `size` slots spaced
/// `spacing` apart and centered on `origin`.
///
/// ```
/// use deck_motion::core::hand_origin;
///
/// assert_eq!(hand_origin(3, 0, 10.0, 0.0), -10.0);
/// assert_eq!(hand_origin(3, 1, 10.0, 0.0), 0.0);
/// assert_eq!(hand_origin(4, 3, 10.0, 100.0), 115.0);
/// ```
#[must_use]
pub fn hand_origin(size: usize, index: usize, spacing: f64, origin: f64) -> f64 {
    let middle = (size as f64 - 1.0) / 2.0;
    origin + (index as f64 - middle) * spacing
}
