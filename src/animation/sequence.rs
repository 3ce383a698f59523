//! Declarative animation sequences.
//!
//! A sequence describes where each card should end up and how to get there.
//! It carries no behaviour: drivers decide how to interpolate, and the
//! logical deck state is already final by the time a sequence is played.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, CardLayout};

/// Named easing curve.
///
/// Drivers are free to map names onto their own tween backends; `sample`
/// is a reference curve for drivers that interpolate themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Fast start with a small damped overshoot.
    Spring,
}

impl Easing {
    /// Wire name of the curve.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "easeIn",
            Easing::EaseOut => "easeOut",
            Easing::EaseInOut => "easeInOut",
            Easing::Spring => "spring",
        }
    }

    /// Progress at normalized time `t`. `t` is clamped to `[0, 1]` and the
    /// curve always starts at 0 and ends at 1.
    #[must_use]
    pub fn sample(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Spring => 1.0 - (-6.0 * t).exp() * (10.0 * t).cos(),
        }
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target transform for one card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationTarget {
    #[serde(flatten)]
    pub layout: CardLayout,

    pub duration_ms: u32,

    pub easing: Option<Easing>,

    /// Delay before this card starts moving.
    pub delay_ms: Option<u32>,
}

impl AnimationTarget {
    #[must_use]
    pub const fn new(layout: CardLayout, duration_ms: u32) -> Self {
        Self {
            layout,
            duration_ms,
            easing: None,
            delay_ms: None,
        }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    /// Time at which this target is reached, counting the delay.
    #[must_use]
    pub fn end_ms(&self) -> u32 {
        self.delay_ms.unwrap_or(0).saturating_add(self.duration_ms)
    }
}

/// One card's part of a sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationStep {
    pub card_id: CardId,
    pub target: AnimationTarget,
}

/// What kind of motion a sequence describes.
///
/// `Flip` matters to drivers: its steps keep the card in place and ask for
/// a face/back transition rather than a positional tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceTag {
    Fan,
    Stack,
    Line,
    Ring,
    Shuffle,
    Flip,
    Move,
}

/// Ordered list of steps for a driver to play.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationSequence {
    pub steps: Vec<AnimationStep>,

    /// Offset between consecutive steps, for drivers that stagger
    /// themselves instead of reading per-step delays.
    pub stagger_ms: Option<u32>,

    pub tag: Option<SequenceTag>,
}

impl AnimationSequence {
    /// Sequence with no steps.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(steps: Vec<AnimationStep>, tag: SequenceTag) -> Self {
        Self {
            steps,
            stagger_ms: None,
            tag: Some(tag),
        }
    }

    #[must_use]
    pub fn with_stagger(mut self, stagger_ms: u32) -> Self {
        self.stagger_ms = Some(stagger_ms);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_flip(&self) -> bool {
        self.tag == Some(SequenceTag::Flip)
    }

    /// Cards touched by this sequence, in step order.
    pub fn card_ids(&self) -> impl Iterator<Item = &CardId> {
        self.steps.iter().map(|s| &s.card_id)
    }

    /// Time until the last step finishes.
    #[must_use]
    pub fn total_duration_ms(&self) -> u32 {
        self.steps.iter().map(|s| s.target.end_ms()).max().unwrap_or(0)
    }
}
