//! Controller integration tests.
//!
//! These tests verify the action ordering (apply, play, emit), draw limit
//! enforcement and behaviour when a driver fails.

use std::cell::RefCell;
use std::rc::Rc;

use deck_motion::animation::{AnimationSequence, AnimationTarget, FlipOptions, MoveOptions, ShuffleOptions};
use deck_motion::controller::{AnimationDriver, DeckController, ImmediateDriver, RecordingDriver};
use deck_motion::core::{
    CardData, CardId, CardLayout, CardLocation, DeckConfigPatch, DeckError, DeckState, DriverError,
    FixedSeed, LayoutMode, RngSeed,
};
use deck_motion::events::{DeckEvent, DeckEventKind};
use deck_motion::layout::RingOptions;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

type Log = Rc<RefCell<Vec<String>>>;

fn cards(n: usize) -> Vec<CardData> {
    (0..n)
        .map(|i| CardData::new(format!("c{}", i), format!("Card {}", i)))
        .collect()
}

fn deck(n: usize) -> DeckState {
    DeckState::with_seed_source(cards(n), &DeckConfigPatch::new(), &mut FixedSeed(42))
}

fn id(s: &str) -> CardId {
    CardId::new(s)
}

/// Collect every event of `kind` into a shared vector.
fn capture<D: AnimationDriver>(
    controller: &mut DeckController<D>,
    kind: DeckEventKind,
) -> Rc<RefCell<Vec<DeckEvent>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    controller.on(kind, move |event| sink.borrow_mut().push(event.clone()));
    seen
}

/// Driver that writes to a shared log so ordering against listeners can be
/// checked.
struct LoggingDriver {
    log: Log,
}

impl AnimationDriver for LoggingDriver {
    fn play(&mut self, sequence: &AnimationSequence) -> Result<(), DriverError> {
        self.log.borrow_mut().push(format!("play {}", sequence.len()));
        Ok(())
    }
}

// =============================================================================
// Ordering
// =============================================================================

/// Events fire only after playback has finished.
#[test]
fn test_event_follows_playback() {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let mut controller = DeckController::new(deck(3), LoggingDriver { log: Rc::clone(&log) });

    let sink = Rc::clone(&log);
    controller.on(DeckEventKind::Fan, move |_| sink.borrow_mut().push("fan".to_string()));

    controller.fan().unwrap();

    assert_eq!(*log.borrow(), vec!["play 3".to_string(), "fan".to_string()]);
    assert_eq!(controller.deck().layout_mode, LayoutMode::Fan);
}

/// The fan event carries the fanned cards.
#[test]
fn test_fan_event_payload() {
    let mut controller = DeckController::new(deck(3), ImmediateDriver);
    let seen = capture(&mut controller, DeckEventKind::Fan);

    let sequence = controller.fan().unwrap();

    assert_eq!(sequence.len(), 3);
    assert_eq!(
        *seen.borrow(),
        vec![DeckEvent::Fan {
            card_ids: vec![id("c0"), id("c1"), id("c2")]
        }]
    );
}

/// Shuffle reports the new order and the seed used.
#[test]
fn test_shuffle_event_payload() {
    let mut controller = DeckController::new(deck(5), RecordingDriver::new());
    let seen = capture(&mut controller, DeckEventKind::Shuffle);

    controller.shuffle(&ShuffleOptions::new()).unwrap();

    let order = controller.deck().card_ids();
    assert_eq!(order, vec![id("c2"), id("c4"), id("c0"), id("c3"), id("c1")]);
    assert_eq!(*seen.borrow(), vec![DeckEvent::Shuffle { order, seed: 42 }]);
    assert_eq!(controller.driver().played.len(), 1);
}

/// Seed sources give a fresh, reproducible seed per shuffle.
#[test]
fn test_shuffle_from_seed_source() {
    let mut a = DeckController::new(deck(10), ImmediateDriver);
    let mut b = DeckController::new(deck(10), ImmediateDriver);
    let mut seeds_a = RngSeed(ChaCha8Rng::seed_from_u64(5));
    let mut seeds_b = RngSeed(ChaCha8Rng::seed_from_u64(5));

    for _ in 0..3 {
        a.shuffle_from(&mut seeds_a).unwrap();
        b.shuffle_from(&mut seeds_b).unwrap();
        assert_eq!(a.deck().card_ids(), b.deck().card_ids());
    }
}

/// Stack, line and ring all report a layout event.
#[test]
fn test_layout_events() {
    let mut controller = DeckController::new(deck(4), ImmediateDriver);
    let seen = capture(&mut controller, DeckEventKind::Layout);

    controller.line().unwrap();
    controller.ring(&RingOptions::default()).unwrap();
    controller.stack().unwrap();

    let modes: Vec<_> = seen
        .borrow()
        .iter()
        .map(|e| match e {
            DeckEvent::Layout { mode } => *mode,
            other => panic!("unexpected event {:?}", other),
        })
        .collect();
    assert_eq!(modes, vec![LayoutMode::Line, LayoutMode::Ring, LayoutMode::Stack]);
}

// =============================================================================
// Card Actions
// =============================================================================

/// Flip and select report the new card state.
#[test]
fn test_flip_and_select() {
    let mut controller = DeckController::new(deck(2), RecordingDriver::new());
    let flips = capture(&mut controller, DeckEventKind::Flip);
    let selects = capture(&mut controller, DeckEventKind::Select);

    controller.flip(&id("c1"), &FlipOptions::default()).unwrap();
    controller.select(&id("c0"), true).unwrap();

    assert_eq!(
        *flips.borrow(),
        vec![DeckEvent::Flip {
            card_id: id("c1"),
            face_up: true
        }]
    );
    assert_eq!(
        *selects.borrow(),
        vec![DeckEvent::Select {
            card_id: id("c0"),
            selected: true
        }]
    );
    assert!(controller.driver().last().is_some_and(AnimationSequence::is_flip));
    // Selection is not animated
    assert_eq!(controller.driver().played.len(), 1);
}

/// Moving a card stores its layout and reports it.
#[test]
fn test_animate_to() {
    let mut controller = DeckController::new(deck(2), ImmediateDriver);
    let moves = capture(&mut controller, DeckEventKind::Move);
    let target = AnimationTarget::new(CardLayout::at(10.0, 20.0, 3), 200);

    controller.animate_to(&id("c0"), &target, &MoveOptions::default()).unwrap();

    assert_eq!(controller.deck().positions[&id("c0")], CardLayout::at(10.0, 20.0, 3));
    assert_eq!(controller.deck().layout_mode, LayoutMode::Custom);
    assert_eq!(moves.borrow().len(), 1);
}

/// Unknown cards are silent no-ops: `Ok`, same deck, nothing played or emitted.
#[test]
fn test_unknown_card_is_noop() {
    let mut controller = DeckController::new(deck(2), RecordingDriver::new());
    let kinds = [
        DeckEventKind::Flip,
        DeckEventKind::Move,
        DeckEventKind::Select,
        DeckEventKind::Draw,
        DeckEventKind::Return,
    ];
    let seen: Vec<_> = kinds.iter().map(|&kind| capture(&mut controller, kind)).collect();
    let before = controller.deck().clone();
    let missing = id("ghost");
    let target = AnimationTarget::new(CardLayout::at(5.0, 5.0, 0), 100);

    let flipped = controller.flip(&missing, &FlipOptions::default()).unwrap();
    assert!(flipped.is_empty());
    let moved = controller.animate_to(&missing, &target, &MoveOptions::default()).unwrap();
    assert!(moved.is_empty());
    assert_eq!(controller.select(&missing, true), Ok(()));
    assert_eq!(controller.draw(&missing), Ok(()));
    assert_eq!(controller.return_card(&missing), Ok(()));

    assert_eq!(*controller.deck(), before);
    assert!(controller.driver().played.is_empty());
    assert!(seen.iter().all(|events| events.borrow().is_empty()));
}

// =============================================================================
// Draw Limit
// =============================================================================

/// The third draw is refused with the default limit of two.
#[test]
fn test_draw_limit_enforced() {
    let mut controller = DeckController::new(deck(4), ImmediateDriver);
    let draws = capture(&mut controller, DeckEventKind::Draw);

    controller.draw(&id("c0")).unwrap();
    controller.draw(&id("c1")).unwrap();
    assert_eq!(controller.draw(&id("c2")), Err(DeckError::DrawLimitReached { limit: 2 }));

    assert_eq!(controller.deck().drawn_ids(), vec![id("c0"), id("c1")]);
    assert_eq!(controller.deck().location(&id("c2")), Some(CardLocation::Deck));
    assert_eq!(draws.borrow().len(), 2);
    assert_eq!(
        draws.borrow()[1],
        DeckEvent::Draw {
            card_id: id("c1"),
            drawn: vec![id("c0"), id("c1")]
        }
    );
}

/// Drawing an already drawn card is a quiet no-op, even at the limit.
#[test]
fn test_redraw_is_noop() {
    let mut controller = DeckController::new(deck(3), ImmediateDriver);
    controller.draw(&id("c0")).unwrap();
    controller.draw(&id("c1")).unwrap();

    assert_eq!(controller.draw(&id("c0")), Ok(()));
    assert_eq!(controller.deck().drawn_cards.len(), 2);
}

/// Returning a card frees a slot.
#[test]
fn test_return_frees_slot() {
    let patch = DeckConfigPatch::new().with_draw_limit(1);
    let deck = DeckState::with_seed_source(cards(3), &patch, &mut FixedSeed(1));
    let mut controller = DeckController::new(deck, ImmediateDriver);
    let returns = capture(&mut controller, DeckEventKind::Return);

    controller.draw(&id("c0")).unwrap();
    assert!(controller.draw(&id("c1")).is_err());

    controller.return_card(&id("c0")).unwrap();
    controller.draw(&id("c1")).unwrap();

    assert_eq!(controller.deck().card_ids(), vec![id("c2"), id("c0")]);
    assert_eq!(*returns.borrow(), vec![DeckEvent::Return { card_id: id("c0") }]);
}

// =============================================================================
// Playback Failure, Cancel, Listeners
// =============================================================================

/// A failed playback keeps the new state and suppresses the event.
#[test]
fn test_playback_failure_keeps_state() {
    let driver = RecordingDriver::failing(DriverError::Unavailable("renderer gone".into()));
    let mut controller = DeckController::new(deck(3), driver);
    let seen = capture(&mut controller, DeckEventKind::Fan);

    let err = controller.fan().unwrap_err();

    assert_eq!(
        err,
        DeckError::Playback(DriverError::Unavailable("renderer gone".into()))
    );
    assert_eq!(controller.deck().layout_mode, LayoutMode::Fan);
    assert!(seen.borrow().is_empty());
}

/// Cancel is forwarded to the driver untouched.
#[test]
fn test_cancel_forwarded() {
    let mut controller = DeckController::new(deck(2), RecordingDriver::new());
    controller.fan().unwrap();
    let after_fan = controller.deck().clone();

    controller.cancel(Some(&[id("c1")]));
    controller.cancel(None);

    assert_eq!(controller.driver().cancelled, vec![Some(vec![id("c1")]), None]);
    assert_eq!(*controller.deck(), after_fan);
}

/// Removed listeners stop hearing events.
#[test]
fn test_listener_off() {
    let mut controller = DeckController::new(deck(2), ImmediateDriver);
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let listener = controller.on(DeckEventKind::Fan, move |_| *sink.borrow_mut() += 1);

    controller.fan().unwrap();
    assert!(controller.off(listener));
    controller.fan().unwrap();

    assert_eq!(*count.borrow(), 1);
    assert!(!controller.off(listener));
}

/// Replacing the card set keeps config and listeners.
#[test]
fn test_replace_cards() {
    let patch = DeckConfigPatch::new().with_spacing(50.0).with_seed(8);
    let deck = DeckState::with_seed_source(cards(2), &patch, &mut FixedSeed(0));
    let mut controller = DeckController::new(deck, ImmediateDriver);
    let seen = capture(&mut controller, DeckEventKind::Fan);
    controller.draw(&id("c0")).unwrap();

    controller.replace_cards(cards(5), &DeckConfigPatch::new().with_draw_limit(4));

    let deck = controller.deck();
    assert_eq!(deck.cards.len(), 5);
    assert!(deck.drawn_cards.is_empty());
    assert_eq!(deck.config.spacing, 50.0);
    assert_eq!(deck.config.seed, 8);
    assert_eq!(deck.config.draw_limit, 4);
    assert_eq!(deck.layout_mode, LayoutMode::Stack);

    controller.fan().unwrap();
    assert_eq!(seen.borrow().len(), 1);
}
