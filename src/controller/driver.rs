//! Animation drivers.
//!
//! A driver turns an `AnimationSequence` into motion on screen. The engine
//! never depends on what a driver does: by the time `play` is called the
//! controller has already applied the new deck state, so a driver that
//! skips, truncates or cancels playback leaves the logical state correct.
//!
//! ## Provided drivers
//!
//! - `ImmediateDriver`: completes every sequence instantly (headless use)
//! - `RecordingDriver`: keeps every sequence and cancel request for
//!   inspection

use crate::animation::AnimationSequence;
use crate::core::{CardId, DriverError};

/// Plays animation sequences.
///
/// `play` returns once playback has finished. Drivers backed by an async
/// runtime block on it inside `play`.
pub trait AnimationDriver {
    /// Play a sequence to completion.
    fn play(&mut self, sequence: &AnimationSequence) -> Result<(), DriverError>;

    /// Stop in-flight animations for `cards`, or all of them for `None`.
    fn cancel(&mut self, _cards: Option<&[CardId]>) {}
}

impl<D: AnimationDriver + ?Sized> AnimationDriver for Box<D> {
    fn play(&mut self, sequence: &AnimationSequence) -> Result<(), DriverError> {
        (**self).play(sequence)
    }

    fn cancel(&mut self, cards: Option<&[CardId]>) {
        (**self).cancel(cards);
    }
}

/// Driver with no visual output; every sequence completes immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateDriver;

impl AnimationDriver for ImmediateDriver {
    fn play(&mut self, _sequence: &AnimationSequence) -> Result<(), DriverError> {
        Ok(())
    }
}

/// Driver that records what it was asked to do.
#[derive(Clone, Debug, Default)]
pub struct RecordingDriver {
    /// Every sequence passed to `play`, in order.
    pub played: Vec<AnimationSequence>,

    /// Every cancel request; `None` means "all cards".
    pub cancelled: Vec<Option<Vec<CardId>>>,

    /// When set, `play` records the sequence and then fails with this error.
    pub fail_with: Option<DriverError>,
}

impl RecordingDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Driver whose every `play` call fails.
    #[must_use]
    pub fn failing(error: DriverError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::default()
        }
    }

    /// The most recent sequence.
    #[must_use]
    pub fn last(&self) -> Option<&AnimationSequence> {
        self.played.last()
    }
}

impl AnimationDriver for RecordingDriver {
    fn play(&mut self, sequence: &AnimationSequence) -> Result<(), DriverError> {
        self.played.push(sequence.clone());
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn cancel(&mut self, cards: Option<&[CardId]>) {
        self.cancelled.push(cards.map(<[CardId]>::to_vec));
    }
}
