//! Per-card placement in logical coordinates.

use serde::{Deserialize, Serialize};

/// Where a card sits: logical center, rotation in degrees, uniform scale
/// and stacking index (paint and hit-test order, 0 = bottom).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardLayout {
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees, clockwise.
    pub rotation: f64,
    pub scale: f64,
    pub z_index: usize,
}

impl CardLayout {
    /// Unrotated, unscaled layout at `(x, y)`.
    #[must_use]
    pub const fn at(x: f64, y: f64, z_index: usize) -> Self {
        Self {
            x,
            y,
            rotation: 0.0,
            scale: 1.0,
            z_index,
        }
    }

    /// Layout at the origin with the given stacking index.
    #[must_use]
    pub const fn origin(z_index: usize) -> Self {
        Self::at(0.0, 0.0, z_index)
    }

    /// Return a copy with `patch` applied.
    #[must_use]
    pub fn patched(&self, patch: &CardLayoutPatch) -> Self {
        Self {
            x: patch.x.unwrap_or(self.x),
            y: patch.y.unwrap_or(self.y),
            rotation: patch.rotation.unwrap_or(self.rotation),
            scale: patch.scale.unwrap_or(self.scale),
            z_index: patch.z_index.unwrap_or(self.z_index),
        }
    }
}

impl Default for CardLayout {
    fn default() -> Self {
        Self::origin(0)
    }
}

/// Partial update for a `CardLayout`. `None` fields keep their value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardLayoutPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotation: Option<f64>,
    pub scale: Option<f64>,
    pub z_index: Option<usize>,
}

impl CardLayoutPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both coordinates.
    #[must_use]
    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    #[must_use]
    pub fn rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    #[must_use]
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    #[must_use]
    pub fn z_index(mut self, z_index: usize) -> Self {
        self.z_index = Some(z_index);
        self
    }
}

/// Unscaled card size in logical units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDimensions {
    pub width: f64,
    pub height: f64,
}

impl CardDimensions {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for CardDimensions {
    /// Poker-card proportions (5:7).
    fn default() -> Self {
        Self::new(120.0, 168.0)
    }
}

/// Which arrangement the positions map currently reflects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Everything piled at the origin.
    #[default]
    Stack,
    /// Circular arc.
    Fan,
    /// Horizontal row.
    Line,
    /// Full circle.
    Ring,
    /// Positions set card by card (`animate_to`, direct layout updates).
    Custom,
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LayoutMode::Stack => "stack",
            LayoutMode::Fan => "fan",
            LayoutMode::Line => "line",
            LayoutMode::Ring => "ring",
            LayoutMode::Custom => "custom",
        };
        f.write_str(name)
    }
}
