//! Deck configuration and seed sources.
//!
//! Callers describe the deck with a `DeckConfigPatch` (every field optional).
//! The patch is merged over the documented defaults into a resolved
//! `DeckStateConfig`, which is what every layout and sequencer function reads.
//!
//! ## Defaults
//!
//! | Field | Default |
//! |---|---|
//! | `fan_angle` | π (half circle) |
//! | `fan_radius` | 240 |
//! | `spacing` | 24 |
//! | `seed` | taken from a `SeedSource` (wall clock by default) |
//! | `draw_limit` | 2 |
//!
//! The seed is the one nondeterministic default. Engine functions never
//! read the clock themselves: `DeckState::new` consults `ClockSeed`
//! only when the patch carries no seed, and callers who need reproducible
//! decks inject `FixedSeed` or an `RngSeed` instead.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Default total arc sweep of the fan, in radians.
pub const DEFAULT_FAN_ANGLE: f64 = std::f64::consts::PI;

/// Default fan radius in logical units.
pub const DEFAULT_FAN_RADIUS: f64 = 240.0;

/// Default distance between neighbouring cards in the line layout.
pub const DEFAULT_SPACING: f64 = 24.0;

/// Default maximum number of simultaneously drawn cards.
pub const DEFAULT_DRAW_LIMIT: usize = 2;

/// Resolved deck configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckStateConfig {
    /// Total arc sweep of the fan, in radians.
    pub fan_angle: f64,

    pub fan_radius: f64,

    /// Line layout spacing.
    pub spacing: f64,

    /// Default shuffle seed.
    pub seed: i64,

    /// Maximum cards drawn at once. Enforced by `DeckController`, not by
    /// the pure transitions.
    pub draw_limit: usize,
}

impl DeckStateConfig {
    /// Defaults with an explicit seed.
    #[must_use]
    pub fn with_seed(seed: i64) -> Self {
        Self {
            fan_angle: DEFAULT_FAN_ANGLE,
            fan_radius: DEFAULT_FAN_RADIUS,
            spacing: DEFAULT_SPACING,
            seed,
            draw_limit: DEFAULT_DRAW_LIMIT,
        }
    }

    /// Merge `patch` over the defaults, asking `seeds` for a seed only when
    /// the patch has none.
    pub fn resolve(patch: &DeckConfigPatch, seeds: &mut impl SeedSource) -> Self {
        let seed = match patch.seed {
            Some(seed) => seed,
            None => seeds.next_seed(),
        };
        Self::with_seed(seed).merge(patch)
    }

    /// Overlay the fields set in `patch`.
    #[must_use]
    pub fn merge(&self, patch: &DeckConfigPatch) -> Self {
        Self {
            fan_angle: patch.fan_angle.unwrap_or(self.fan_angle),
            fan_radius: patch.fan_radius.unwrap_or(self.fan_radius),
            spacing: patch.spacing.unwrap_or(self.spacing),
            seed: patch.seed.unwrap_or(self.seed),
            draw_limit: patch.draw_limit.unwrap_or(self.draw_limit),
        }
    }
}

/// Partial configuration. `None` fields fall back to the current value
/// (or the default, when creating a deck).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckConfigPatch {
    pub fan_angle: Option<f64>,
    pub fan_radius: Option<f64>,
    pub spacing: Option<f64>,
    pub seed: Option<i64>,
    pub draw_limit: Option<usize>,
}

impl DeckConfigPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fan_angle(mut self, radians: f64) -> Self {
        self.fan_angle = Some(radians);
        self
    }

    #[must_use]
    pub fn with_fan_radius(mut self, radius: f64) -> Self {
        self.fan_radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = Some(spacing);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_draw_limit(mut self, limit: usize) -> Self {
        self.draw_limit = Some(limit);
        self
    }
}

impl From<&DeckStateConfig> for DeckConfigPatch {
    /// Patch that reproduces `config` exactly.
    fn from(config: &DeckStateConfig) -> Self {
        Self {
            fan_angle: Some(config.fan_angle),
            fan_radius: Some(config.fan_radius),
            spacing: Some(config.spacing),
            seed: Some(config.seed),
            draw_limit: Some(config.draw_limit),
        }
    }
}

/// Capability that supplies default seeds.
pub trait SeedSource {
    /// Produce the next seed.
    fn next_seed(&mut self) -> i64;
}

/// Milliseconds since the Unix epoch. Nondeterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClockSeed;

impl SeedSource for ClockSeed {
    fn next_seed(&mut self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            // Clock before the epoch: any positive seed will do
            .unwrap_or(1)
    }
}

/// Always the same seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSeed(pub i64);

impl SeedSource for FixedSeed {
    fn next_seed(&mut self) -> i64 {
        self.0
    }
}

/// Seeds drawn from any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngSeed<R>(pub R);

impl<R: RngCore> SeedSource for RngSeed<R> {
    fn next_seed(&mut self) -> i64 {
        // Keep seeds non-negative so they read naturally in logs
        (self.0.next_u64() >> 1) as i64
    }
}
