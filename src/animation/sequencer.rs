//! Animation primitives.
//!
//! Each primitive is a pure function of one deck snapshot. It returns a
//! `DeckTransition`: the new, already-authoritative deck plus a sequence
//! describing how a driver should animate towards it. The input deck is
//! never modified, and nothing here depends on the sequence being played.
//!
//! | Primitive | Deck effect | Steps |
//! |---|---|---|
//! | `fan` | fan layout, mode `Fan` | 400ms easeOut, delay i*15, stagger 15 |
//! | `stack` | stack layout, mode `Stack` | 300ms easeInOut |
//! | `line` | line layout, mode `Line` | 350ms easeOut, delay i*10, stagger 10 |
//! | `ring` | ring layout, mode `Ring` | 450ms easeInOut, delay i*15, stagger 15 |
//! | `shuffle` | cards reordered, stack layout, mode `Stack` | 500ms spring, delay i*20, stagger 20 |
//! | `flip` | toggles `face_up` | one step in place, tagged `Flip` |
//! | `animate_to` | one card's layout replaced, mode `Custom` | one step |
//!
//! Primitives that name a card degrade to a no-op (unchanged deck, empty
//! sequence) when the id is unknown.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{CardId, CardLayout, CardStatePatch, DeckState, LayoutMode};
use crate::layout::{
    compute_fan_layout, compute_line_layout, compute_ring_layout, compute_stack_layout, FanOptions,
    LayoutMap, RingOptions,
};
use crate::shuffle::{shuffle_cards, DEFAULT_SHUFFLE_ITERATIONS};

use super::sequence::{AnimationSequence, AnimationStep, AnimationTarget, Easing, SequenceTag};

pub const FAN_DURATION_MS: u32 = 400;
pub const FAN_STAGGER_MS: u32 = 15;
pub const STACK_DURATION_MS: u32 = 300;
pub const LINE_DURATION_MS: u32 = 350;
pub const LINE_STAGGER_MS: u32 = 10;
pub const RING_DURATION_MS: u32 = 450;
pub const RING_STAGGER_MS: u32 = 15;
pub const SHUFFLE_DURATION_MS: u32 = 500;
pub const SHUFFLE_STAGGER_MS: u32 = 20;
pub const FLIP_DURATION_MS: u32 = 400;

/// Result of a primitive: the new deck and how to animate to it.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckTransition {
    pub deck: DeckState,
    pub sequence: AnimationSequence,
}

impl DeckTransition {
    /// Unchanged deck, nothing to animate.
    #[must_use]
    pub fn unchanged(deck: &DeckState) -> Self {
        Self {
            deck: deck.clone(),
            sequence: AnimationSequence::empty(),
        }
    }
}

/// Options for `shuffle`. Unset fields use the deck's seed and
/// `DEFAULT_SHUFFLE_ITERATIONS`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleOptions {
    pub seed: Option<i64>,
    pub iterations: Option<usize>,
}

impl ShuffleOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }
}

/// Options for `flip`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipOptions {
    pub duration_ms: Option<u32>,
    pub easing: Option<Easing>,
}

/// Overrides for `animate_to`. Set fields replace the target's own values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOptions {
    pub duration_ms: Option<u32>,
    pub easing: Option<Easing>,
    pub delay_ms: Option<u32>,
}

/// Timing shared by every step of a whole-deck primitive.
#[derive(Clone, Copy)]
struct Timing {
    duration_ms: u32,
    easing: Easing,
    stagger_ms: Option<u32>,
}

/// Apply a whole-deck layout and build one step per in-deck card, in order.
fn arrange(
    deck: &DeckState,
    layout: LayoutMap,
    mode: LayoutMode,
    tag: SequenceTag,
    timing: Timing,
) -> DeckTransition {
    let steps = deck
        .cards
        .iter()
        .enumerate()
        .filter_map(|(i, card)| {
            let placed = *layout.get(&card.id)?;
            let mut target = AnimationTarget::new(placed, timing.duration_ms).with_easing(timing.easing);
            if let Some(stagger) = timing.stagger_ms {
                target = target.with_delay(stagger.saturating_mul(i as u32));
            }
            Some(AnimationStep {
                card_id: card.id.clone(),
                target,
            })
        })
        .collect();

    // Drawn cards keep their layouts
    let positions = layout.union(deck.positions.clone());

    let mut sequence = AnimationSequence::new(steps, tag);
    sequence.stagger_ms = timing.stagger_ms;

    DeckTransition {
        deck: deck.with_positions(positions).with_layout_mode(mode),
        sequence,
    }
}

/// Spread the deck along an arc using the configured fan angle and radius.
#[must_use]
pub fn fan(deck: &DeckState) -> DeckTransition {
    fan_with(deck, &FanOptions::default())
}

/// `fan` with per-call arc overrides.
#[must_use]
pub fn fan_with(deck: &DeckState, options: &FanOptions) -> DeckTransition {
    debug!(cards = deck.cards.len(), "fan");
    arrange(
        deck,
        compute_fan_layout(deck, options),
        LayoutMode::Fan,
        SequenceTag::Fan,
        Timing {
            duration_ms: FAN_DURATION_MS,
            easing: Easing::EaseOut,
            stagger_ms: Some(FAN_STAGGER_MS),
        },
    )
}

/// Gather the deck into a pile at the origin.
#[must_use]
pub fn stack(deck: &DeckState) -> DeckTransition {
    debug!(cards = deck.cards.len(), "stack");
    arrange(
        deck,
        compute_stack_layout(deck),
        LayoutMode::Stack,
        SequenceTag::Stack,
        Timing {
            duration_ms: STACK_DURATION_MS,
            easing: Easing::EaseInOut,
            stagger_ms: None,
        },
    )
}

/// Lay the deck out in a row using the configured spacing.
#[must_use]
pub fn line(deck: &DeckState) -> DeckTransition {
    debug!(cards = deck.cards.len(), spacing = deck.config.spacing, "line");
    arrange(
        deck,
        compute_line_layout(deck, None),
        LayoutMode::Line,
        SequenceTag::Line,
        Timing {
            duration_ms: LINE_DURATION_MS,
            easing: Easing::EaseOut,
            stagger_ms: Some(LINE_STAGGER_MS),
        },
    )
}

/// Arrange the deck on a circle.
#[must_use]
pub fn ring(deck: &DeckState, options: &RingOptions) -> DeckTransition {
    debug!(cards = deck.cards.len(), "ring");
    arrange(
        deck,
        compute_ring_layout(deck, options),
        LayoutMode::Ring,
        SequenceTag::Ring,
        Timing {
            duration_ms: RING_DURATION_MS,
            easing: Easing::EaseInOut,
            stagger_ms: Some(RING_STAGGER_MS),
        },
    )
}

/// Reorder the in-deck cards and gather them into a pile.
///
/// The only primitive that changes card order. Without an explicit seed the
/// deck's configured seed is used, so the result is a pure function of the
/// snapshot.
#[must_use]
pub fn shuffle(deck: &DeckState, options: &ShuffleOptions) -> DeckTransition {
    let seed = options.seed.unwrap_or(deck.config.seed);
    let iterations = options.iterations.unwrap_or(DEFAULT_SHUFFLE_ITERATIONS);
    debug!(cards = deck.cards.len(), seed, iterations, "shuffle");

    let current: Vec<_> = deck.cards.iter().cloned().collect();
    let shuffled = deck.with_cards(Vector::from(shuffle_cards(&current, seed, iterations)));

    arrange(
        &shuffled,
        compute_stack_layout(&shuffled),
        LayoutMode::Stack,
        SequenceTag::Shuffle,
        Timing {
            duration_ms: SHUFFLE_DURATION_MS,
            easing: Easing::Spring,
            stagger_ms: Some(SHUFFLE_STAGGER_MS),
        },
    )
}

/// Turn a card over.
///
/// The single step repeats the card's current layout; the `Flip` tag tells
/// the driver to animate the face change rather than a move.
#[must_use]
pub fn flip(deck: &DeckState, id: &CardId, options: &FlipOptions) -> DeckTransition {
    let Some(card) = deck.card(id) else {
        trace!(card = %id, "flip: unknown card");
        return DeckTransition::unchanged(deck);
    };
    let face_up = !card.face_up;
    debug!(card = %id, face_up, "flip");

    let layout = deck.layout(id).copied().unwrap_or_default();
    let target = AnimationTarget::new(layout, options.duration_ms.unwrap_or(FLIP_DURATION_MS))
        .with_easing(options.easing.unwrap_or(Easing::EaseInOut));

    DeckTransition {
        deck: deck.update_card_state(id, &CardStatePatch::new().face_up(face_up)),
        sequence: AnimationSequence::new(
            vec![AnimationStep {
                card_id: id.clone(),
                target,
            }],
            SequenceTag::Flip,
        ),
    }
}

/// Move one card to an arbitrary layout.
#[must_use]
pub fn animate_to(
    deck: &DeckState,
    id: &CardId,
    target: &AnimationTarget,
    options: &MoveOptions,
) -> DeckTransition {
    if deck.layout(id).is_none() {
        trace!(card = %id, "animate_to: unknown card");
        return DeckTransition::unchanged(deck);
    }
    debug!(card = %id, x = target.layout.x, y = target.layout.y, "animate_to");

    let target = AnimationTarget {
        layout: target.layout,
        duration_ms: options.duration_ms.unwrap_or(target.duration_ms),
        easing: options.easing.or(target.easing),
        delay_ms: options.delay_ms.or(target.delay_ms),
    };

    let mut positions = deck.positions.clone();
    positions.insert(id.clone(), target.layout);

    DeckTransition {
        deck: deck.with_positions(positions).with_layout_mode(LayoutMode::Custom),
        sequence: AnimationSequence::new(
            vec![AnimationStep {
                card_id: id.clone(),
                target,
            }],
            SequenceTag::Move,
        ),
    }
}

/// Final layout of every step, keyed by card. Handy for drivers that snap
/// to the end state when playback is skipped.
#[must_use]
pub fn final_layouts(sequence: &AnimationSequence) -> Vec<(CardId, CardLayout)> {
    sequence
        .steps
        .iter()
        .map(|s| (s.card_id.clone(), s.target.layout))
        .collect()
}
