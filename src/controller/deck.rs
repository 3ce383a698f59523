//! Deck orchestration.
//!
//! `DeckController` owns one deck: its current `DeckState`, its `EventBus`
//! and the driver that plays its animations. Every action follows the same
//! order:
//!
//! 1. Run the pure primitive against the current snapshot
//! 2. Store the returned deck (it is authoritative from here on)
//! 3. Hand the sequence to the driver and wait for playback
//! 4. Emit the matching event
//!
//! Actions take `&mut self`, so two actions can never run against the same
//! snapshot at once. If playback fails the new state stays applied, the
//! error is returned and no event is emitted.
//!
//! Actions naming a card the deck doesn't hold do nothing: the deck is left
//! as it was, nothing is played or emitted, and the action returns `Ok`.

use tracing::{debug, trace, warn};

use crate::animation::{
    self, AnimationSequence, AnimationTarget, DeckTransition, FlipOptions, MoveOptions,
    ShuffleOptions,
};
use crate::core::error::Result;
use crate::core::{CardData, CardId, CardLocation, DeckConfigPatch, DeckError, DeckState, LayoutMode, SeedSource};
use crate::events::{DeckEvent, DeckEventKind, EventBus, ListenerId};
use crate::layout::RingOptions;

use super::driver::AnimationDriver;

/// Owns a deck, its listeners and its animation driver.
#[derive(Debug)]
pub struct DeckController<D> {
    deck: DeckState,
    events: EventBus,
    driver: D,
}

impl<D: AnimationDriver> DeckController<D> {
    /// Wrap an existing deck.
    pub fn new(deck: DeckState, driver: D) -> Self {
        Self {
            deck,
            events: EventBus::new(),
            driver,
        }
    }

    /// Current deck snapshot.
    #[must_use]
    pub fn deck(&self) -> &DeckState {
        &self.deck
    }

    #[must_use]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    // === Events ===

    /// Subscribe to deck events.
    pub fn on(&mut self, kind: DeckEventKind, listener: impl FnMut(&DeckEvent) + 'static) -> ListenerId {
        self.events.on(kind, listener)
    }

    /// Unsubscribe.
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.events.off(id)
    }

    // === Actions ===

    /// Apply a transition, play it, then emit `event`.
    fn commit(&mut self, transition: DeckTransition, event: Option<DeckEvent>) -> Result<AnimationSequence> {
        let DeckTransition { deck, sequence } = transition;
        self.deck = deck;

        if !sequence.is_empty() {
            if let Err(err) = self.driver.play(&sequence) {
                warn!(error = %err, steps = sequence.len(), "animation playback failed");
                return Err(DeckError::Playback(err));
            }
        }

        if let Some(event) = event {
            self.events.emit(&event);
        }
        Ok(sequence)
    }

    /// True if the deck holds `id`; unknown ids are traced and skipped.
    fn holds(&self, id: &CardId, action: &str) -> bool {
        let known = self.deck.card(id).is_some();
        if !known {
            trace!(card = %id, action, "unknown card, nothing to do");
        }
        known
    }

    /// Fan the deck out.
    pub fn fan(&mut self) -> Result<AnimationSequence> {
        let transition = animation::fan(&self.deck);
        let event = DeckEvent::Fan {
            card_ids: transition.deck.card_ids(),
        };
        self.commit(transition, Some(event))
    }

    /// Gather the deck into a pile.
    pub fn stack(&mut self) -> Result<AnimationSequence> {
        let transition = animation::stack(&self.deck);
        self.commit(transition, Some(DeckEvent::Layout { mode: LayoutMode::Stack }))
    }

    /// Lay the deck out in a row.
    pub fn line(&mut self) -> Result<AnimationSequence> {
        let transition = animation::line(&self.deck);
        self.commit(transition, Some(DeckEvent::Layout { mode: LayoutMode::Line }))
    }

    /// Arrange the deck on a circle.
    pub fn ring(&mut self, options: &RingOptions) -> Result<AnimationSequence> {
        let transition = animation::ring(&self.deck, options);
        self.commit(transition, Some(DeckEvent::Layout { mode: LayoutMode::Ring }))
    }

    /// Shuffle the deck.
    pub fn shuffle(&mut self, options: &ShuffleOptions) -> Result<AnimationSequence> {
        let seed = options.seed.unwrap_or(self.deck.config.seed);
        let transition = animation::shuffle(&self.deck, options);
        let event = DeckEvent::Shuffle {
            order: transition.deck.card_ids(),
            seed,
        };
        self.commit(transition, Some(event))
    }

    /// Shuffle with a seed drawn from `seeds`, for callers that want a
    /// different order on every shuffle without touching the clock inside
    /// the engine.
    pub fn shuffle_from(&mut self, seeds: &mut impl SeedSource) -> Result<AnimationSequence> {
        self.shuffle(&ShuffleOptions::new().with_seed(seeds.next_seed()))
    }

    /// Turn a card over.
    pub fn flip(&mut self, id: &CardId, options: &FlipOptions) -> Result<AnimationSequence> {
        if !self.holds(id, "flip") {
            return Ok(AnimationSequence::empty());
        }
        let transition = animation::flip(&self.deck, id, options);
        let face_up = transition.deck.card(id).is_some_and(|c| c.face_up);
        let event = DeckEvent::Flip {
            card_id: id.clone(),
            face_up,
        };
        self.commit(transition, Some(event))
    }

    /// Move one card.
    pub fn animate_to(
        &mut self,
        id: &CardId,
        target: &AnimationTarget,
        options: &MoveOptions,
    ) -> Result<AnimationSequence> {
        if !self.holds(id, "animate_to") {
            return Ok(AnimationSequence::empty());
        }
        let transition = animation::animate_to(&self.deck, id, target, options);
        let event = DeckEvent::Move {
            card_id: id.clone(),
            layout: target.layout,
        };
        self.commit(transition, Some(event))
    }

    /// Select or deselect a card. Nothing is animated.
    pub fn select(&mut self, id: &CardId, selected: bool) -> Result<()> {
        if !self.holds(id, "select") {
            return Ok(());
        }
        debug!(card = %id, selected, "select");
        let transition = DeckTransition {
            deck: self.deck.select_card(id, selected),
            sequence: AnimationSequence::empty(),
        };
        let event = DeckEvent::Select {
            card_id: id.clone(),
            selected,
        };
        self.commit(transition, Some(event)).map(drop)
    }

    /// Draw a card from the deck, respecting `draw_limit`.
    pub fn draw(&mut self, id: &CardId) -> Result<()> {
        match self.deck.location(id) {
            Some(CardLocation::Deck) => {}
            Some(CardLocation::Drawn) => return Ok(()),
            None => {
                trace!(card = %id, action = "draw", "unknown card, nothing to do");
                return Ok(());
            }
        }
        let limit = self.deck.config.draw_limit;
        if self.deck.drawn_cards.len() >= limit {
            warn!(card = %id, limit, "draw refused: limit reached");
            return Err(DeckError::DrawLimitReached { limit });
        }

        let deck = self.deck.draw_card(id);
        debug!(card = %id, drawn = deck.drawn_cards.len(), "draw");
        let event = DeckEvent::Draw {
            card_id: id.clone(),
            drawn: deck.drawn_ids(),
        };
        self.commit(DeckTransition::unchanged(&deck), Some(event)).map(drop)
    }

    /// Put a drawn card back on top of the deck.
    pub fn return_card(&mut self, id: &CardId) -> Result<()> {
        if !self.holds(id, "return_card") || self.deck.location(id) != Some(CardLocation::Drawn) {
            return Ok(());
        }
        let deck = self.deck.return_card(id);
        debug!(card = %id, "return");
        let event = DeckEvent::Return { card_id: id.clone() };
        self.commit(DeckTransition::unchanged(&deck), Some(event)).map(drop)
    }

    /// Ask the driver to stop animating `cards` (or everything).
    ///
    /// The deck state is unaffected; it already reflects the last action.
    pub fn cancel(&mut self, cards: Option<&[CardId]>) {
        self.driver.cancel(cards);
    }

    /// Replace the whole card set. Listeners and configuration are kept
    /// (with `patch` merged over it); the old deck's layouts and drawn
    /// cards are discarded.
    pub fn replace_cards(&mut self, cards: impl IntoIterator<Item = CardData>, patch: &DeckConfigPatch) {
        let config = self.deck.config.merge(patch);
        self.deck = DeckState::new(cards, &DeckConfigPatch::from(&config));
        debug!(cards = self.deck.cards.len(), "replaced card set");
    }
}
